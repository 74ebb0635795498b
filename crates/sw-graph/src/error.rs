//! User-facing validation messages.
//!
//! The message grammar is load-bearing: an automated conformance harness
//! compares these strings byte for byte, so formatting lives here in one
//! place and nothing else in the workspace builds message text by hand.

use sw_core::NumericError;

/// Header shown above field-level detail messages.
pub const FIELD_ERRORS_HEADER: &str = "Page received incorrect data";

/// Entity label used in headers and entity-level messages.
pub fn entity_label(prototype: bool) -> &'static str {
    if prototype { "graph prototype" } else { "graph" }
}

/// Header shown above entity-level rejection messages.
pub fn cannot_add_header(prototype: bool) -> String {
    format!("Cannot add {}", entity_label(prototype))
}

/// A single field-level violation, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The name field was left empty.
    EmptyName,
    /// A numeric field was rejected; `label` is the user-facing field label.
    Value {
        label: &'static str,
        error: NumericError,
    },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::EmptyName => {
                write!(f, "Incorrect value for field \"Name\": cannot be empty.")
            }
            FieldError::Value { label, error } => match error {
                NumericError::Mandatory => write!(f, "Field \"{label}\" is mandatory."),
                NumericError::NotANumber => {
                    write!(f, "Field \"{label}\" is not correct: a number is expected")
                }
                NumericError::NotInteger => write!(f, "Field \"{label}\" is not integer."),
                NumericError::TooManyFractionalDigits => write!(
                    f,
                    "Field \"{label}\" is not correct: a number has too many fractional digits"
                ),
                NumericError::NumberTooLarge => {
                    write!(f, "Field \"{label}\" is not correct: a number is too large")
                }
                NumericError::OutOfRange {
                    raw,
                    min,
                    max,
                    fraction_digits,
                } => {
                    write!(
                        f,
                        "Incorrect value \"{raw}\" for \"{label}\" field: must be between {} and {}",
                        Bound(*min),
                        Bound(*max)
                    )?;
                    if *fraction_digits > 0 {
                        write!(
                            f,
                            ", and have no more than {fraction_digits} digits after the decimal point"
                        )?;
                    }
                    write!(f, ".")
                }
            },
        }
    }
}

impl std::error::Error for FieldError {}

/// An entity-level violation (cross-field state, checked after field validity).
#[derive(Debug, Clone, PartialEq)]
pub enum EntityError {
    /// The configuration has no items.
    NoItems { prototype: bool, name: String },
    /// A referenced metric could not be resolved.
    UnknownMetric { metric: String },
}

impl std::fmt::Display for EntityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityError::NoItems { prototype, name } => {
                write!(f, "Missing items for {} \"{name}\".", entity_label(*prototype))
            }
            EntityError::UnknownMetric { metric } => {
                write!(f, "Item \"{metric}\" does not exist.")
            }
        }
    }
}

impl std::error::Error for EntityError {}

/// The rejected outcome of a submission: a category header plus the ordered
/// detail list.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub header: String,
    pub details: Vec<String>,
}

impl Rejection {
    pub fn from_field_errors(errors: &[FieldError]) -> Self {
        Self {
            header: FIELD_ERRORS_HEADER.to_string(),
            details: errors.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn from_entity_error(prototype: bool, error: &EntityError) -> Self {
        Self {
            header: cannot_add_header(prototype),
            details: vec![error.to_string()],
        }
    }
}

/// Bound values print without a trailing `.0`.
struct Bound(f64);

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
