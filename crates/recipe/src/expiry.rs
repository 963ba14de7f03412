use eatsoon_shared::DateLike;
use time::OffsetDateTime;

/// Day count reported for items without a usable expiry date.
///
/// Large enough that such items never look urgent or expired.
pub const FAR_FUTURE_DAYS: i64 = 9999;

const MILLIS_PER_DAY: i128 = 24 * 60 * 60 * 1000;

/// Signed number of days until `expiry`, relative to now.
pub fn days_until(expiry: Option<&DateLike>) -> i64 {
    days_until_at(expiry, OffsetDateTime::now_utc())
}

/// Signed number of days from `now` until `expiry`, rounded up.
///
/// Negative when already expired, `0` when it expires within the current
/// 24h window ending now, [`FAR_FUTURE_DAYS`] when the date is missing or
/// cannot be converted.
pub fn days_until_at(expiry: Option<&DateLike>, now: OffsetDateTime) -> i64 {
    let Some(date) = expiry.and_then(DateLike::to_date) else {
        return FAR_FUTURE_DAYS;
    };

    let millis = (date - now).whole_milliseconds();
    let days = millis / MILLIS_PER_DAY + i128::from(millis % MILLIS_PER_DAY > 0);

    i64::try_from(days).unwrap_or(FAR_FUTURE_DAYS)
}
