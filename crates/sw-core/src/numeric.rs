//! Locale-strict numeric field validation.
//!
//! Every numeric form input arrives as the raw string the user typed and is
//! checked against a [`NumericSpec`]. Parsing is deliberately stricter than
//! `str::parse::<f64>`: only an optional leading sign, ASCII digits and a
//! single dot are accepted, so locale spellings like `"20,5"` are rejected
//! instead of being truncated to `20`.

use thiserror::Error;

/// Magnitude ceiling of the backing numeric column. Values at or beyond this
/// cannot be stored and are reported as an overflow, distinct from both
/// "not a number" and an ordinary range violation.
pub const MAX_STORED_MAGNITUDE: f64 = 1e16;

/// Constraints for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSpec {
    pub min: f64,
    pub max: f64,
    /// 0 means the field is integer-only.
    pub max_fraction_digits: u32,
    pub allow_negative: bool,
}

/// Why a raw input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("value is mandatory")]
    Mandatory,

    #[error("a number is expected")]
    NotANumber,

    /// Integer-only field received a fractional value. Never truncated.
    #[error("value is not integer")]
    NotInteger,

    #[error("a number has too many fractional digits")]
    TooManyFractionalDigits,

    /// Magnitude exceeds the storable ceiling, independent of `max`.
    #[error("a number is too large")]
    NumberTooLarge,

    /// Carries the raw string and the bound pair for message formatting.
    #[error("value {raw:?} must be between {min} and {max}")]
    OutOfRange {
        raw: String,
        min: f64,
        max: f64,
        fraction_digits: u32,
    },
}

/// Validate a raw input against `spec`, returning the parsed value.
///
/// Integer-only fields (`max_fraction_digits == 0`) follow the console's
/// legacy coercion: any non-numeric input other than a comma spelling is
/// treated as `0` and bounds-checked, so `"test"` reports an out-of-range
/// `"0"` rather than a parse failure. Fraction-capable fields report a blank
/// input as mandatory-unfilled.
pub fn validate(raw: &str, spec: &NumericSpec) -> Result<f64, NumericError> {
    let trimmed = raw.trim();
    if spec.max_fraction_digits == 0 {
        return validate_integer(trimmed, spec);
    }

    if trimmed.is_empty() {
        return Err(NumericError::Mandatory);
    }
    if trimmed.contains(',') {
        return Err(NumericError::NotANumber);
    }
    let Some(parts) = split_number(trimmed, spec.allow_negative) else {
        return Err(NumericError::NotANumber);
    };
    if parts.fraction.len() as u32 > spec.max_fraction_digits {
        return Err(NumericError::TooManyFractionalDigits);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| NumericError::NotANumber)?;
    if !value.is_finite() || value.abs() >= MAX_STORED_MAGNITUDE {
        return Err(NumericError::NumberTooLarge);
    }
    if value < spec.min || value > spec.max {
        return Err(NumericError::OutOfRange {
            raw: trimmed.to_string(),
            min: spec.min,
            max: spec.max,
            fraction_digits: spec.max_fraction_digits,
        });
    }
    Ok(value)
}

fn validate_integer(trimmed: &str, spec: &NumericSpec) -> Result<f64, NumericError> {
    if trimmed.contains(',') {
        return Err(NumericError::NotANumber);
    }

    match split_number(trimmed, spec.allow_negative) {
        Some(parts) if parts.has_dot => Err(NumericError::NotInteger),
        Some(_) => {
            let value: i64 = trimmed
                .parse()
                .map_err(|_| NumericError::NumberTooLarge)?;
            let value = value as f64;
            if value < spec.min || value > spec.max {
                return Err(NumericError::OutOfRange {
                    raw: trimmed.to_string(),
                    min: spec.min,
                    max: spec.max,
                    fraction_digits: 0,
                });
            }
            Ok(value)
        }
        // Legacy coercion: unparseable input counts as zero.
        None => {
            if spec.min <= 0.0 && 0.0 <= spec.max {
                Ok(0.0)
            } else {
                Err(NumericError::OutOfRange {
                    raw: "0".to_string(),
                    min: spec.min,
                    max: spec.max,
                    fraction_digits: 0,
                })
            }
        }
    }
}

struct NumberParts<'a> {
    fraction: &'a str,
    has_dot: bool,
}

/// Strict syntax check: optional leading sign, ASCII digits, at most one dot,
/// at least one digit. Returns the fractional part for digit counting.
fn split_number(raw: &str, allow_negative: bool) -> Option<NumberParts<'_>> {
    let body = match raw.strip_prefix('-') {
        Some(rest) if allow_negative => rest,
        Some(_) => return None,
        None => raw.strip_prefix('+').unwrap_or(raw),
    };
    if body.is_empty() {
        return None;
    }

    let mut pieces = body.split('.');
    let int_part = pieces.next().unwrap_or("");
    let fraction = pieces.next().unwrap_or("");
    // More than one dot, or no digits at all.
    if pieces.next().is_some() {
        return None;
    }
    if int_part.is_empty() && fraction.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    Some(NumberParts {
        fraction,
        has_dot: body.contains('.'),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DIMENSION: NumericSpec = NumericSpec {
        min: 20.0,
        max: 65535.0,
        max_fraction_digits: 0,
        allow_negative: true,
    };

    const PERCENTILE: NumericSpec = NumericSpec {
        min: 0.0,
        max: 100.0,
        max_fraction_digits: 4,
        allow_negative: true,
    };

    const AXIS_VALUE: NumericSpec = NumericSpec {
        min: -MAX_STORED_MAGNITUDE,
        max: MAX_STORED_MAGNITUDE,
        max_fraction_digits: 4,
        allow_negative: true,
    };

    fn out_of_range(raw: &str, spec: &NumericSpec) -> NumericError {
        NumericError::OutOfRange {
            raw: raw.to_string(),
            min: spec.min,
            max: spec.max,
            fraction_digits: spec.max_fraction_digits,
        }
    }

    #[test]
    fn dimension_bounds_table() {
        for raw in ["-100", "-1", "0", "65536"] {
            assert_eq!(validate(raw, &DIMENSION), Err(out_of_range(raw, &DIMENSION)));
        }
        assert_eq!(validate("900", &DIMENSION), Ok(900.0));
        assert_eq!(validate("20", &DIMENSION), Ok(20.0));
        assert_eq!(validate("65535", &DIMENSION), Ok(65535.0));
    }

    #[test]
    fn dimension_fractional_is_not_integer() {
        assert_eq!(validate("1.2", &DIMENSION), Err(NumericError::NotInteger));
        assert_eq!(validate("15.5", &DIMENSION), Err(NumericError::NotInteger));
        // Even a zero fraction is rejected, never truncated.
        assert_eq!(validate("900.0", &DIMENSION), Err(NumericError::NotInteger));
    }

    #[test]
    fn dimension_text_coerces_to_zero() {
        assert_eq!(validate("test", &DIMENSION), Err(out_of_range("0", &DIMENSION)));
        assert_eq!(validate("", &DIMENSION), Err(out_of_range("0", &DIMENSION)));
        assert_eq!(validate("--5", &DIMENSION), Err(out_of_range("0", &DIMENSION)));
    }

    #[test]
    fn comma_is_never_a_truncated_parse() {
        assert_eq!(validate("20,5", &DIMENSION), Err(NumericError::NotANumber));
        assert_eq!(validate("1,3", &PERCENTILE), Err(NumericError::NotANumber));
        assert_eq!(validate("88,9", &AXIS_VALUE), Err(NumericError::NotANumber));
    }

    #[test]
    fn percentile_range_keeps_raw() {
        assert_eq!(validate("-2", &PERCENTILE), Err(out_of_range("-2", &PERCENTILE)));
        assert_eq!(validate("101", &PERCENTILE), Err(out_of_range("101", &PERCENTILE)));
        // Far out of range but well under the storable ceiling: still a
        // range violation, not an overflow.
        assert_eq!(
            validate("-900000", &PERCENTILE),
            Err(out_of_range("-900000", &PERCENTILE))
        );
    }

    #[test]
    fn fraction_digit_limit() {
        assert_eq!(validate("1.9999", &PERCENTILE), Ok(1.9999));
        assert_eq!(
            validate("1.99999", &PERCENTILE),
            Err(NumericError::TooManyFractionalDigits)
        );
        assert_eq!(
            validate("1.999999999", &AXIS_VALUE),
            Err(NumericError::TooManyFractionalDigits)
        );
    }

    #[test]
    fn fraction_digits_checked_before_magnitude() {
        // 5 fraction digits on an enormous value: the digit rule wins.
        assert_eq!(
            validate("99999999999999999.12345", &AXIS_VALUE),
            Err(NumericError::TooManyFractionalDigits)
        );
    }

    #[test]
    fn storable_ceiling() {
        assert_eq!(
            validate("12345678999999998", &AXIS_VALUE),
            Err(NumericError::NumberTooLarge)
        );
        assert_eq!(
            validate("-90000000000000000", &AXIS_VALUE),
            Err(NumericError::NumberTooLarge)
        );
        assert_eq!(validate("9999999999999998", &AXIS_VALUE), Ok(9999999999999998.0));
    }

    #[test]
    fn blank_fraction_field_is_mandatory() {
        assert_eq!(validate("", &AXIS_VALUE), Err(NumericError::Mandatory));
        assert_eq!(validate("   ", &PERCENTILE), Err(NumericError::Mandatory));
    }

    #[test]
    fn non_numeric_fraction_field() {
        for raw in ["text", "1e5", "1.2.3", ".", "-", "+", "1 2"] {
            assert_eq!(validate(raw, &AXIS_VALUE), Err(NumericError::NotANumber), "{raw}");
        }
        assert_eq!(validate("+5", &AXIS_VALUE), Ok(5.0));
        assert_eq!(validate(".5", &PERCENTILE), Ok(0.5));
        assert_eq!(validate("5.", &PERCENTILE), Ok(5.0));
    }

    #[test]
    fn negative_sign_rejected_when_disallowed() {
        let unsigned = NumericSpec {
            allow_negative: false,
            ..PERCENTILE
        };
        assert_eq!(validate("-2", &unsigned), Err(NumericError::NotANumber));
        assert_eq!(validate("2", &unsigned), Ok(2.0));
    }

    #[test]
    fn integer_overflow_is_too_large() {
        assert_eq!(
            validate("99999999999999999999", &DIMENSION),
            Err(NumericError::NumberTooLarge)
        );
    }

    proptest! {
        #[test]
        fn in_range_integers_accepted(v in 20u32..=65535) {
            prop_assert_eq!(validate(&v.to_string(), &DIMENSION), Ok(v as f64));
        }

        #[test]
        fn comma_inputs_always_rejected(a in 0u32..1000, b in 0u32..1000) {
            let raw = format!("{a},{b}");
            prop_assert_eq!(validate(&raw, &PERCENTILE), Err(NumericError::NotANumber));
            prop_assert_eq!(validate(&raw, &DIMENSION), Err(NumericError::NotANumber));
        }

        #[test]
        fn validation_is_deterministic(raw in ".*") {
            prop_assert_eq!(validate(&raw, &PERCENTILE), validate(&raw, &PERCENTILE));
        }
    }
}
