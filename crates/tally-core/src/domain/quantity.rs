//! Quantity Value
//!
//! Numeric amount attached to an entry. Text from the quantity field is
//! coerced rather than validated: the leading integer is taken and anything
//! else becomes the non-numeric sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coerced quantity. `None` is the non-numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Option<i64>);

impl Quantity {
    /// The non-numeric sentinel
    pub const NAN: Quantity = Quantity(None);

    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// Coerce user text into a quantity.
    ///
    /// Leading whitespace is skipped, an optional sign is accepted, then the
    /// longest run of ASCII digits is read. Trailing text is ignored
    /// (`"12abc"` is 12, `"3.7"` is 3). No digits yields [`Quantity::NAN`].
    /// Values past the `i64` range saturate.
    pub fn parse(text: &str) -> Self {
        let rest = text.trim_start();
        let (negative, digits) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };

        let run = digits.bytes().take_while(u8::is_ascii_digit).count();
        if run == 0 {
            return Self::NAN;
        }

        let mut value: i64 = 0;
        for b in digits[..run].bytes() {
            let digit = i64::from(b - b'0');
            value = value.saturating_mul(10);
            value = if negative {
                value.saturating_sub(digit)
            } else {
                value.saturating_add(digit)
            };
        }
        Self(Some(value))
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }

    /// Contribution to the aggregate total; the sentinel counts as zero.
    pub fn as_total(&self) -> i64 {
        self.0.unwrap_or(0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Quantity::parse("300"), Quantity::new(300));
        assert_eq!(Quantity::parse("  42"), Quantity::new(42));
        assert_eq!(Quantity::parse("-15"), Quantity::new(-15));
        assert_eq!(Quantity::parse("+8"), Quantity::new(8));
    }

    #[test]
    fn test_parse_takes_leading_integer() {
        assert_eq!(Quantity::parse("12abc"), Quantity::new(12));
        assert_eq!(Quantity::parse("3.7"), Quantity::new(3));
        assert_eq!(Quantity::parse("007"), Quantity::new(7));
    }

    #[test]
    fn test_parse_non_numeric_is_sentinel() {
        assert!(Quantity::parse("abc").is_nan());
        assert!(Quantity::parse("").is_nan());
        assert!(Quantity::parse("-").is_nan());
        assert!(Quantity::parse(".5").is_nan());
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(Quantity::parse("99999999999999999999999"), Quantity::new(i64::MAX));
        assert_eq!(Quantity::parse("-99999999999999999999999"), Quantity::new(i64::MIN));
    }

    #[test]
    fn test_sentinel_counts_as_zero() {
        assert_eq!(Quantity::NAN.as_total(), 0);
        assert_eq!(Quantity::new(120).as_total(), 120);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(400).to_string(), "400");
        assert_eq!(Quantity::NAN.to_string(), "NaN");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Quantity::new(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Quantity::NAN).unwrap(), "null");
        let q: Quantity = serde_json::from_str("null").unwrap();
        assert!(q.is_nan());
    }
}
