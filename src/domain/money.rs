use std::fmt;

use serde::{Deserialize, Deserializer, Serializer};

/// Money is represented as integer cents to avoid floating-point precision issues.
/// On the wire amounts are plain numbers in currency units, so 12.5 = 1250 cents.
pub type Cents = i64;

/// Format cents as a human-readable currency string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, input) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units, decimals) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };
    if units.is_empty() && decimals.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units.chars().all(|c| c.is_ascii_digit()) || !decimals.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units.is_empty() {
        0
    } else {
        units.parse().map_err(|_| ParseCentsError::InvalidFormat)?
    };

    // More than 2 decimal places are truncated
    let decimal_cents: i64 = match decimals.len() {
        0 => 0,
        1 => decimals.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => decimals[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::OutOfRange)?;
    Ok(if negative { -cents } else { cents })
}

/// Convert a unit amount such as `12.5` into cents, rounding to the nearest cent.
pub fn cents_from_units(units: f64) -> Result<Cents, ParseCentsError> {
    if !units.is_finite() {
        return Err(ParseCentsError::InvalidFormat);
    }
    let cents = (units * 100.0).round();
    if cents.abs() >= i64::MAX as f64 {
        return Err(ParseCentsError::OutOfRange);
    }
    Ok(cents as i64)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::OutOfRange => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

/// Serialize cents as a JSON number in currency units.
/// Whole amounts become integers (`100`), the rest decimals (`12.5`).
pub fn serialize_units<S>(cents: &Cents, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if cents % 100 == 0 {
        serializer.serialize_i64(cents / 100)
    } else {
        serializer.serialize_f64(*cents as f64 / 100.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Deserialize a unit amount given either as a JSON number or a decimal string.
pub fn deserialize_units<'de, D>(deserializer: D) -> Result<Cents, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(units) => cents_from_units(units),
        RawAmount::Text(text) => parse_cents(&text),
    };
    parsed.map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Wire {
        #[serde(
            serialize_with = "serialize_units",
            deserialize_with = "deserialize_units"
        )]
        amount: Cents,
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // Truncates
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("").is_err());
        assert!(parse_cents("1e3").is_err());
        assert_eq!(parse_cents("--5"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("-"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(
            parse_cents("99999999999999999999"),
            Err(ParseCentsError::InvalidFormat)
        );
    }

    #[test]
    fn test_cents_from_units() {
        assert_eq!(cents_from_units(100.0), Ok(10000));
        assert_eq!(cents_from_units(0.1 + 0.2), Ok(30));
        assert_eq!(cents_from_units(-1.5), Ok(-150));
        assert!(cents_from_units(f64::NAN).is_err());
        assert!(cents_from_units(f64::INFINITY).is_err());
        assert_eq!(cents_from_units(1e300), Err(ParseCentsError::OutOfRange));
    }

    #[test]
    fn test_wire_amount_accepts_numbers_and_strings() {
        let whole: Wire = serde_json::from_str(r#"{"amount": 100}"#).unwrap();
        assert_eq!(whole.amount, 10000);

        let fractional: Wire = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(fractional.amount, 1250);

        let text: Wire = serde_json::from_str(r#"{"amount": "7.25"}"#).unwrap();
        assert_eq!(text.amount, 725);

        assert!(serde_json::from_str::<Wire>(r#"{"amount": "seven"}"#).is_err());
        assert!(serde_json::from_str::<Wire>(r#"{"amount": true}"#).is_err());
    }

    #[test]
    fn test_wire_amount_serializes_units() {
        let whole = serde_json::to_string(&Wire { amount: 5000 }).unwrap();
        assert_eq!(whole, r#"{"amount":50}"#);

        let fractional = serde_json::to_string(&Wire { amount: 1250 }).unwrap();
        assert_eq!(fractional, r#"{"amount":12.5}"#);
    }
}
