use serde::{Deserialize, Deserializer, Serialize};
use time::{
    Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// An expiry value as it comes out of the document store.
///
/// Items written by the mobile client carry a store timestamp, older imports
/// carry ISO strings and a few scripts wrote epoch milliseconds. `null` and
/// missing values are represented by `Option::None` on the owning field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateLike {
    Native(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
    Timestamp(Timestamp),
    Epoch(f64),
    Text(String),
}

/// Store timestamp wrapper (`{ seconds, nanoseconds }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    #[serde(default, alias = "_nanoseconds")]
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn new(seconds: i64, nanoseconds: u32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    pub fn to_date(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.seconds)
            .ok()?
            .checked_add(Duration::nanoseconds(i64::from(self.nanoseconds)))
    }
}

impl DateLike {
    /// Converts whichever variant was supplied into a native date.
    ///
    /// Returns `None` when the value does not describe a representable instant.
    pub fn to_date(&self) -> Option<OffsetDateTime> {
        match self {
            DateLike::Native(date) => Some(*date),
            DateLike::Timestamp(timestamp) => timestamp.to_date(),
            DateLike::Epoch(millis) => from_epoch_millis(*millis),
            DateLike::Text(text) => parse_text(text),
        }
    }
}

impl From<OffsetDateTime> for DateLike {
    fn from(value: OffsetDateTime) -> Self {
        DateLike::Native(value)
    }
}

impl From<Timestamp> for DateLike {
    fn from(value: Timestamp) -> Self {
        DateLike::Timestamp(value)
    }
}

impl From<&str> for DateLike {
    fn from(value: &str) -> Self {
        DateLike::Text(value.to_owned())
    }
}

fn from_epoch_millis(millis: f64) -> Option<OffsetDateTime> {
    if !millis.is_finite() {
        return None;
    }

    let nanos = (millis.trunc() as i128).checked_mul(1_000_000)?;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

fn parse_text(text: &str) -> Option<OffsetDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(date);
    }

    // Offset-less values are read as UTC.
    if let Ok(date) = Date::parse(text, format_description!("[year]-[month]-[day]")) {
        return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc());
    }

    if let Ok(datetime) = PrimitiveDateTime::parse(
        text,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Some(datetime.assume_utc());
    }

    PrimitiveDateTime::parse(
        text,
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    )
    .ok()
    .map(PrimitiveDateTime::assume_utc)
}

/// Field deserializer for expiry dates: values of an unknown shape become `None`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateLike>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Date(DateLike),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Date(date)) => Some(date),
        _ => None,
    })
}
