use std::fmt;

use fraction::Fraction;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An amount as it appears in a store document.
///
/// Catalog quantities mix numbers, fractions ("1/2", "1 1/2") and free
/// text ("200g", "조금"). The written form is kept for display and
/// [`Quantity::amount`] gives the exact value when there is one.
#[derive(Debug, Clone)]
pub enum Quantity {
    Number(f64),
    Text(String),
    /// Exact result of adding amounts together.
    Amount(Fraction),
}

impl Quantity {
    pub fn one() -> Self {
        Quantity::Number(1.0)
    }

    /// Exact value, `None` for free text and negative or non-finite numbers.
    pub fn amount(&self) -> Option<Fraction> {
        match self {
            Quantity::Number(value) => number_to_fraction(*value),
            Quantity::Text(text) => parse_quantity(text),
            Quantity::Amount(amount) => Some(amount.clone()),
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        let amount = self.amount()?;
        Some(*amount.numer()? as f64 / *amount.denom()? as f64)
    }

    pub fn is_zero(&self) -> bool {
        self.amount()
            .is_some_and(|amount| amount == Fraction::new(0u64, 1u64))
    }

    /// Exact sum, `None` unless both sides are amounts.
    pub fn checked_add(&self, other: &Quantity) -> Option<Quantity> {
        Some(Quantity::Amount(self.amount()? + other.amount()?))
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (self.amount(), other.amount()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.to_string() == other.to_string(),
            _ => false,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(value) => write!(f, "{value}"),
            Quantity::Text(text) => f.write_str(text),
            Quantity::Amount(amount) => f.write_str(&format_fraction(amount)),
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Number(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_owned())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Quantity::Text(value)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Quantity::Number(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => {
                serializer.serialize_i64(*value as i64)
            }
            Quantity::Number(value) => serializer.serialize_f64(*value),
            Quantity::Text(text) => serializer.serialize_str(text),
            Quantity::Amount(amount) => match (amount.numer(), amount.denom()) {
                (Some(numer), Some(1)) => serializer.serialize_u64(*numer),
                _ => serializer.serialize_str(&format_fraction(amount)),
            },
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Quantity::Number(value),
            Raw::Text(text) => Quantity::Text(text),
        })
    }
}

fn number_to_fraction(value: f64) -> Option<Fraction> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let amount = Fraction::from(value);
    (amount.numer().is_some() && amount.denom().is_some()).then_some(amount)
}

fn parse_ratio(numerator: &str, denominator: &str) -> Option<Fraction> {
    let numerator: u64 = numerator.parse().ok()?;
    let denominator: u64 = denominator.parse().ok()?;
    if denominator == 0 {
        return None;
    }

    Some(Fraction::new(numerator, denominator))
}

/// Parse a quantity string into a Fraction
///
/// Supports formats:
/// - Whole numbers: "2" → 2/1
/// - Pure fractions: "1/2" → 1/2
/// - Mixed fractions: "1 1/2" → 3/2
/// - Decimals: "0.5" → 1/2
///
/// Free text ("약간", "200g") and negative values yield `None`.
pub fn parse_quantity(quantity: &str) -> Option<Fraction> {
    let trimmed = quantity.trim();

    if let Some((whole, fraction)) = trimmed.split_once(' ') {
        let whole: u64 = whole.parse().ok()?;
        let (numerator, denominator) = fraction.trim().split_once('/')?;
        return Some(Fraction::new(whole, 1u64) + parse_ratio(numerator, denominator)?);
    }

    if let Some((numerator, denominator)) = trimmed.split_once('/') {
        return parse_ratio(numerator, denominator);
    }

    number_to_fraction(trimmed.parse().ok()?)
}

/// Format a Fraction as a human-readable string
///
/// - Whole numbers: 2/1 → "2"
/// - Mixed fractions: 3/2 → "1 1/2"
/// - Pure fractions: 1/2 → "1/2"
pub fn format_fraction(amount: &Fraction) -> String {
    let (Some(&numer), Some(&denom)) = (amount.numer(), amount.denom()) else {
        return String::new();
    };

    let whole = numer / denom;
    let remainder = numer % denom;

    match (whole, remainder) {
        (whole, 0) => whole.to_string(),
        (0, remainder) => format!("{remainder}/{denom}"),
        (whole, remainder) => format!("{whole} {remainder}/{denom}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), Some(Fraction::new(2u64, 1u64)));
        assert_eq!(parse_quantity(" 0.5 "), Some(Fraction::new(1u64, 2u64)));
        assert_eq!(parse_quantity("1/2"), Some(Fraction::new(1u64, 2u64)));
        assert_eq!(parse_quantity("1 1/2"), Some(Fraction::new(3u64, 2u64)));
        assert_eq!(parse_quantity("1/0"), None);
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("약간"), None);
        assert_eq!(parse_quantity("200g"), None);
        assert_eq!(parse_quantity("1/2포기"), None);
        assert_eq!(parse_quantity("NaN"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_written_form_is_displayed() {
        assert_eq!(Quantity::from("200g").to_string(), "200g");
        assert_eq!(Quantity::from("1/2포기").to_string(), "1/2포기");
        assert_eq!(Quantity::from(2.0).to_string(), "2");
        assert_eq!(Quantity::from(0.5).to_string(), "0.5");
        assert_eq!(Quantity::from("200g").to_f64(), None);
        assert_eq!(Quantity::from("1 1/2").to_f64(), Some(1.5));
    }

    #[test]
    fn test_thirds_add_up_exactly() {
        let third = Quantity::from("1/3");
        let sum = third
            .checked_add(&third)
            .and_then(|sum| sum.checked_add(&third))
            .unwrap();

        assert_eq!(sum, Quantity::from(1.0));
        assert_eq!(sum.to_string(), "1");
        assert_eq!(sum.to_f64(), Some(1.0));
        assert_eq!(Quantity::from("조금").checked_add(&third), None);
    }

    #[test]
    fn test_equality_by_amount() {
        assert_eq!(Quantity::from("1/2"), Quantity::from(0.5));
        assert_eq!(Quantity::from("2"), Quantity::from(2.0));
        assert_ne!(Quantity::from("조금"), Quantity::from(1.0));
        assert_eq!(Quantity::from("조금"), Quantity::from("조금"));
    }

    #[test]
    fn test_serialized_form() {
        let values = vec![
            Quantity::from(2.0),
            Quantity::from(0.5),
            Quantity::from("200g"),
            Quantity::from("1/3")
                .checked_add(&Quantity::from(1.0))
                .unwrap(),
        ];

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json, serde_json::json!([2, 0.5, "200g", "1 1/3"]));

        let back: Vec<Quantity> = serde_json::from_value(json).unwrap();
        assert_eq!(back, values);
    }
}
