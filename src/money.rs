//! Money Conversion Module
//!
//! Conversion between client-facing representations (strings, floats) and
//! the internal `rust_decimal::Decimal` amount. All conversions MUST go
//! through this module.
//!
//! ## Design Principles
//! 1. Exact arithmetic: amounts are `Decimal`, never binary floats
//! 2. Explicit Error Handling: No silent truncation or rounding on input
//! 3. Sign is not judged here: the engine decides whether an amount is valid
//!
//! ## Usage
//! ```rust
//! use account_transfer::money::{format_amount, parse_amount};
//!
//! let amount = parse_amount("1.5", 8).unwrap();
//! assert_eq!(format_amount(amount, 4), "1.5000");
//! ```

use rust_decimal::prelude::*;
use thiserror::Error;

/// Largest scale `Decimal` can represent.
pub const MAX_SCALE: u32 = 28;

// ============================================================================
// Error Types
// ============================================================================

/// Money conversion errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount must be a finite number")]
    NotFinite,

    #[error("Amount too large, would overflow")]
    Overflow,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

// ============================================================================
// Parse: Client → Internal
// ============================================================================

/// Convert client string amount to `Decimal`
///
/// # Arguments
/// * `amount_str` - Client-provided amount string (e.g., "1.5", "100", "-3")
/// * `max_scale` - Maximum number of fractional digits accepted
///
/// # Errors
/// * `PrecisionOverflow` - More fractional digits than `max_scale`
/// * `Overflow` - Value outside the `Decimal` range
/// * `InvalidFormat` - Anything that is not `[-]digits[.digits]`
///   (this rejects `NaN`, `inf`, exponents, `.5` and `5.`)
///
/// A leading `-` is accepted: zero and negative values are returned as-is so
/// the transfer engine can reject them with its own error.
pub fn parse_amount(amount_str: &str, max_scale: u32) -> Result<Decimal, MoneyError> {
    let amount_str = amount_str.trim();
    if amount_str.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }

    let (negative, unsigned) = match amount_str.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount_str),
    };

    let parts: Vec<&str> = unsigned.split('.').collect();
    let (whole, frac) = match parts.len() {
        1 => (parts[0], ""),
        2 => {
            // Require both sides of the dot to be non-empty
            if parts[0].is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing leading zero (e.g., use 0.5 instead of .5)".into(),
                ));
            }
            if parts[1].is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing fractional part (e.g., use 5.0 instead of 5.)".into(),
                ));
            }
            (parts[0], parts[1])
        }
        _ => return Err(MoneyError::InvalidFormat("multiple decimal points".into())),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(format!(
            "invalid character in whole part: {}",
            whole
        )));
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(format!(
            "invalid character in fractional part: {}",
            frac
        )));
    }

    // REJECT if too many decimals (no silent truncation!)
    let max = max_scale.min(MAX_SCALE);
    if frac.len() > max as usize {
        return Err(MoneyError::PrecisionOverflow {
            provided: frac.len() as u32,
            max,
        });
    }

    let magnitude = Decimal::from_str_exact(unsigned).map_err(|_| {
        // In-range whole part: too many significant digits, not too large
        match Decimal::from_str_exact(whole) {
            Ok(_) => MoneyError::PrecisionOverflow {
                provided: frac.len() as u32,
                max: MAX_SCALE.saturating_sub(whole.trim_start_matches('0').len() as u32),
            },
            Err(_) => MoneyError::Overflow,
        }
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Convert a binary float to `Decimal`
///
/// # Errors
/// * `NotFinite` - NaN or ±infinity
/// * `Overflow` - Finite but outside the `Decimal` range
pub fn amount_from_f64(value: f64) -> Result<Decimal, MoneyError> {
    if !value.is_finite() {
        return Err(MoneyError::NotFinite);
    }
    Decimal::from_f64(value).ok_or(MoneyError::Overflow)
}

// ============================================================================
// Format: Internal → Client
// ============================================================================

/// Render an amount with exactly `display_scale` fractional digits
pub fn format_amount(value: Decimal, display_scale: u32) -> String {
    format!("{:.prec$}", value, prec = display_scale as usize)
}

/// Render an amount with at least `min_scale` fractional digits.
///
/// Never rounds: significant digits beyond `min_scale` are kept, so the
/// output parses back to exactly `value`. Used for every file the batch
/// runner writes.
pub fn format_amount_exact(value: Decimal, min_scale: u32) -> String {
    let value = value.normalize();
    format_amount(value, value.scale().max(min_scale))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_variations() {
        assert_eq!(parse_amount("1.23", 2).unwrap(), Decimal::new(123, 2));
        assert_eq!(parse_amount("1.23", 8).unwrap(), Decimal::new(123, 2));
        assert_eq!(parse_amount("001.23", 2).unwrap(), Decimal::new(123, 2));
        assert_eq!(parse_amount("100", 0).unwrap(), Decimal::from(100));
        assert_eq!(parse_amount("  30 ", 8).unwrap(), Decimal::from(30));
    }

    #[test]
    fn test_parse_amount_keeps_sign_and_zero() {
        assert_eq!(parse_amount("0", 2).unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("-5.5", 2).unwrap(), Decimal::new(-55, 1));
    }

    #[test]
    fn test_parse_amount_invalid_formats() {
        let cases = [
            "",         // Empty
            "-",        // Bare sign
            "1,000.00", // Commas not allowed
            "1.2.3",    // Multiple dots
            "1. 23",    // Spaces inside
            "+1.23",    // Explicit plus rejected
            "1e2",      // Scientific notation rejected
            "0x12",     // Hex rejected
            "NaN",      // Not a number
            "inf",      // Infinity
            "-inf",     // Negative infinity
            ".",        // Just a dot
            ".5",       // Missing leading zero
            "5.",       // Missing fractional part
        ];

        for case in cases {
            assert!(
                matches!(parse_amount(case, 8), Err(MoneyError::InvalidFormat(_))),
                "Should reject invalid format: {:?}",
                case
            );
        }
    }

    #[test]
    fn test_parse_amount_precision_limits() {
        assert!(parse_amount("1.234", 3).is_ok());

        assert_eq!(
            parse_amount("1.2345", 3),
            Err(MoneyError::PrecisionOverflow {
                provided: 4,
                max: 3
            })
        );

        // Scale 0 with a dot is a precision error, not a silent truncation
        assert!(matches!(
            parse_amount("100.0", 0),
            Err(MoneyError::PrecisionOverflow { .. })
        ));
    }

    #[test]
    fn test_parse_amount_overflow() {
        // Decimal::MAX is 79,228,162,514,264,337,593,543,950,335
        let too_big = "79228162514264337593543950336";
        assert_eq!(parse_amount(too_big, 8), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_parse_amount_too_many_significant_digits() {
        // 28 whole digits fit; one more fractional digit does not
        let too_precise = "9999999999999999999999999999.5";
        assert_eq!(
            parse_amount(too_precise, 8),
            Err(MoneyError::PrecisionOverflow {
                provided: 1,
                max: 0
            })
        );
    }

    #[test]
    fn test_amount_from_f64() {
        assert_eq!(amount_from_f64(30.0).unwrap(), Decimal::from(30));
        assert_eq!(amount_from_f64(f64::NAN), Err(MoneyError::NotFinite));
        assert_eq!(amount_from_f64(f64::INFINITY), Err(MoneyError::NotFinite));
        assert_eq!(
            amount_from_f64(f64::NEG_INFINITY),
            Err(MoneyError::NotFinite)
        );
        assert_eq!(amount_from_f64(f64::MAX), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::from(70), 2), "70.00");
        assert_eq!(format_amount(Decimal::new(15, 1), 4), "1.5000");
        assert_eq!(format_amount(Decimal::new(-5, 0), 0), "-5");
    }

    #[test]
    fn test_format_amount_exact_never_rounds() {
        assert_eq!(format_amount_exact(Decimal::from(70), 2), "70.00");
        assert_eq!(format_amount_exact(Decimal::new(4, 3), 2), "0.004");
        assert_eq!(format_amount_exact(Decimal::new(99996, 3), 2), "99.996");
        // Trailing zeros beyond the minimum are dropped
        assert_eq!(format_amount_exact(Decimal::new(1500, 3), 0), "1.5");

        let value = Decimal::new(12345678, 8);
        assert_eq!(parse_amount(&format_amount_exact(value, 2), 8), Ok(value));
    }
}
