//! Fixed-point token amounts at scale 18.
//!
//! Supplies travel on the wire as unscaled `u128` values: the decimal string
//! `"1.5"` becomes `1_500_000_000_000_000_000`. Parsing and rendering are
//! pure digit-string manipulation. No floating point is involved at any
//! step, so every representable amount survives a parse/render round trip
//! exactly.

use std::fmt;
use std::str::FromStr;

use crate::codec::primitives::encode_u128_le;
use crate::error::ValidationError;

/// Number of fractional decimal digits carried by every amount.
pub const AMOUNT_SCALE: u32 = 18;

/// An unscaled token amount: the integer value of a decimal quantity
/// multiplied by `10^18`.
///
/// Always non-negative; the parser rejects any input carrying a sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Wrap an already-unscaled raw value.
    pub const fn from_raw(raw: u128) -> Self {
        Amount(raw)
    }

    /// The unscaled `u128` value.
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Encode as exactly 16 bytes, least-significant byte first.
    pub fn to_le_bytes(&self) -> [u8; 16] {
        encode_u128_le(self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    /// Parse a decimal string into an unscaled amount.
    ///
    /// Accepts surrounding whitespace, `_` digit separators, and a single
    /// leading `+`. An empty input parses as zero. Rejects negative values,
    /// more than 18 fractional digits, and anything that is not a plain
    /// decimal numeral (including values past the `u128` range).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidAmountFormat(s.trim().to_string());

        // 1. Normalize: trim, drop separators, tolerate one leading '+'
        let cleaned: String = s.trim().replace('_', "");
        let cleaned: &str = cleaned.strip_prefix('+').unwrap_or(&cleaned);
        if cleaned.is_empty() {
            return Ok(Amount::ZERO);
        }
        if cleaned.starts_with('-') {
            return Err(ValidationError::NegativeAmount);
        }

        // 2. Split on the decimal point; either side may be absent
        let (int_part, frac_part) = match cleaned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (cleaned, ""),
        };
        let int_part = if int_part.is_empty() { "0" } else { int_part };

        // 3. Fractional precision is checked on the raw digit count,
        //    before any padding
        if frac_part.len() > AMOUNT_SCALE as usize {
            return Err(ValidationError::TooManyDecimals { max: AMOUNT_SCALE });
        }

        // 4. Concatenate and right-pad the fraction to exactly 18 digits
        let mut digits = String::with_capacity(int_part.len() + AMOUNT_SCALE as usize);
        digits.push_str(int_part);
        digits.push_str(frac_part);
        for _ in frac_part.len()..AMOUNT_SCALE as usize {
            digits.push('0');
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // 5. Canonicalize and parse; overflow past u128 is a format error
        let canonical = digits.trim_start_matches('0');
        let canonical = if canonical.is_empty() { "0" } else { canonical };
        canonical.parse::<u128>().map(Amount).map_err(|_| invalid())
    }
}

impl fmt::Display for Amount {
    /// Render the canonical decimal form: the unscaled digits with the
    /// point inserted 18 places from the end, trailing zeros (and a bare
    /// trailing point) stripped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = AMOUNT_SCALE as usize;
        let raw = self.0.to_string();

        // Left-pad so there is at least one integer digit
        let padded = if raw.len() <= scale {
            let mut p = String::with_capacity(scale + 1);
            for _ in raw.len()..=scale {
                p.push('0');
            }
            p.push_str(&raw);
            p
        } else {
            raw
        };

        let split = padded.len() - scale;
        let int_part = &padded[..split];
        let frac_part = padded[split..].trim_end_matches('0');
        if frac_part.is_empty() {
            write!(f, "{}", int_part)
        } else {
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Amount, ValidationError> {
        s.parse::<Amount>()
    }

    #[test]
    fn test_integer_scales_up() {
        assert_eq!(
            parse("800000000").unwrap().raw(),
            800_000_000u128 * 10u128.pow(18)
        );
        assert_eq!(parse("1").unwrap().raw(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_fractional_parsing() {
        assert_eq!(parse("1.5").unwrap().raw(), 1_500_000_000_000_000_000);
        assert_eq!(parse(".5").unwrap().raw(), 500_000_000_000_000_000);
        assert_eq!(parse("0.000000000000000001").unwrap().raw(), 1);
        assert_eq!(parse("2.").unwrap().raw(), 2_000_000_000_000_000_000);
    }

    #[test]
    fn test_zero_forms() {
        assert_eq!(parse("0").unwrap(), Amount::ZERO);
        assert_eq!(parse("").unwrap(), Amount::ZERO);
        assert_eq!(parse("   ").unwrap(), Amount::ZERO);
        assert_eq!(parse("0.000").unwrap(), Amount::ZERO);
        assert_eq!(parse("0").unwrap().to_le_bytes(), [0u8; 16]);
        assert_eq!(parse("").unwrap().to_le_bytes(), [0u8; 16]);
    }

    #[test]
    fn test_separators_and_sign() {
        assert_eq!(parse("1_000_000").unwrap(), parse("1000000").unwrap());
        assert_eq!(parse("+7").unwrap().raw(), 7_000_000_000_000_000_000);
        assert_eq!(parse(" 42 ").unwrap(), parse("42").unwrap());
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(parse("-1").unwrap_err(), ValidationError::NegativeAmount);
        assert_eq!(parse("-0.5").unwrap_err(), ValidationError::NegativeAmount);
    }

    #[test]
    fn test_too_many_decimals() {
        // 19 fractional digits, one past the scale
        assert_eq!(
            parse("0.0000000000000000001").unwrap_err(),
            ValidationError::TooManyDecimals { max: 18 }
        );
        // exactly 18 is fine
        assert!(parse("0.000000000000000001").is_ok());
    }

    #[test]
    fn test_malformed_rejected() {
        for bad in ["abc", "1.2.3", "1x", "++1", "1 000", "0x10"] {
            assert!(
                matches!(parse(bad), Err(ValidationError::InvalidAmountFormat(_))),
                "expected InvalidAmountFormat for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_overflow_rejected() {
        // u128::MAX has 39 digits; this has 40 before scaling even starts
        let huge = "1".repeat(40);
        assert!(matches!(
            parse(&huge),
            Err(ValidationError::InvalidAmountFormat(_))
        ));
        // largest representable integer part: floor(u128::MAX / 10^18)
        assert!(parse("340282366920938463463").is_ok());
        assert!(matches!(
            parse("340282366920938463464"),
            Err(ValidationError::InvalidAmountFormat(_))
        ));
    }

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(parse("1.5").unwrap().to_string(), "1.5");
        assert_eq!(parse("1.50").unwrap().to_string(), "1.5");
        assert_eq!(parse("800000000").unwrap().to_string(), "800000000");
        assert_eq!(Amount::from_raw(1).to_string(), "0.000000000000000001");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn test_roundtrip() {
        for s in ["0", "1", "1.5", "0.000000000000000001", "800000000", "123.456789"] {
            let amount = parse(s).unwrap();
            let back = parse(&amount.to_string()).unwrap();
            assert_eq!(amount, back, "round trip failed for {:?}", s);
        }
    }

    #[test]
    fn test_encoding_is_little_endian() {
        let bytes = parse("1").unwrap().to_le_bytes();
        // 10^18 = 0x0DE0_B6B3_A764_0000
        assert_eq!(&bytes[..8], &[0x00, 0x00, 0x64, 0xa7, 0xb3, 0xb6, 0xe0, 0x0d]);
        assert_eq!(&bytes[8..], &[0u8; 8]);
    }
}
