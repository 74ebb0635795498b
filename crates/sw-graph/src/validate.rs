//! Graph configuration validation.
//!
//! Field checks run as a fold over the declared field order, collecting
//! every violation instead of stopping at the first one. The entity-level
//! items gate only runs once the field pass is clean; it produces its own
//! header and never joins the field-error list.

use sw_core::{MAX_STORED_MAGNITUDE, NumericError, NumericSpec, validate as validate_numeric};

use crate::axis::{AxisBound, AxisBoundMode};
use crate::config::{GraphConfig, GraphKind};
use crate::error::{EntityError, FieldError, Rejection};

pub const WIDTH_SPEC: NumericSpec = NumericSpec {
    min: 20.0,
    max: 65535.0,
    max_fraction_digits: 0,
    allow_negative: true,
};

pub const HEIGHT_SPEC: NumericSpec = WIDTH_SPEC;

pub const PERCENTILE_SPEC: NumericSpec = NumericSpec {
    min: 0.0,
    max: 100.0,
    max_fraction_digits: 4,
    allow_negative: true,
};

pub const AXIS_VALUE_SPEC: NumericSpec = NumericSpec {
    min: -MAX_STORED_MAGNITUDE,
    max: MAX_STORED_MAGNITUDE,
    max_fraction_digits: 4,
    allow_negative: true,
};

/// A fully validated axis bound, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedAxis {
    Calculated,
    Fixed(f64),
    /// Metric name; resolved to an id at the persistence boundary.
    Item(String),
}

/// Parsed field values of an accepted configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedGraph {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub percent_left: Option<f64>,
    pub percent_right: Option<f64>,
    pub ymin: ValidatedAxis,
    pub ymax: ValidatedAxis,
}

/// Validate the whole entity.
///
/// Returns the parsed values on acceptance, or a [`Rejection`] carrying the
/// category header and the ordered detail messages.
pub fn validate(config: &GraphConfig, prototype: bool) -> Result<ValidatedGraph, Rejection> {
    let mut errors = Vec::new();

    if config.name.trim().is_empty() {
        errors.push(FieldError::EmptyName);
    }
    let width = check_numeric(&config.width, &WIDTH_SPEC, "Width", &mut errors);
    let height = check_numeric(&config.height, &HEIGHT_SPEC, "Height", &mut errors);

    let mut percent_left = None;
    let mut percent_right = None;
    let mut ymin = ValidatedAxis::Calculated;
    let mut ymax = ValidatedAxis::Calculated;

    // Percentile and axis fields exist only on Normal charts; anything the
    // form does not render is skipped outright.
    if config.kind == GraphKind::Normal {
        if config.percent_left.toggle.checked {
            percent_left = check_numeric(
                &config.percent_left.value,
                &PERCENTILE_SPEC,
                "Percentile line (left)",
                &mut errors,
            );
        }
        if config.percent_right.toggle.checked {
            percent_right = check_numeric(
                &config.percent_right.value,
                &PERCENTILE_SPEC,
                "Percentile line (right)",
                &mut errors,
            );
        }
        ymin = check_axis(&config.ymin, "yaxismin", "ymin_name", &mut errors);
        ymax = check_axis(&config.ymax, "yaxismax", "ymax_name", &mut errors);
    }

    if prototype && config.discover.is_none() {
        errors.push(FieldError::Value {
            label: "Discover",
            error: NumericError::Mandatory,
        });
    }

    if !errors.is_empty() {
        return Err(Rejection::from_field_errors(&errors));
    }

    // Entity-level gate, evaluated only on a clean field pass.
    if config.items.is_empty() {
        let error = EntityError::NoItems {
            prototype,
            name: config.name.clone(),
        };
        return Err(Rejection::from_entity_error(prototype, &error));
    }

    Ok(ValidatedGraph {
        name: config.name.clone(),
        // Bounds guarantee these fit; the fold only reaches here error-free.
        width: width.unwrap_or_default() as u32,
        height: height.unwrap_or_default() as u32,
        percent_left,
        percent_right,
        ymin,
        ymax,
    })
}

fn check_numeric(
    raw: &str,
    spec: &NumericSpec,
    label: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match validate_numeric(raw, spec) {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(FieldError::Value { label, error });
            None
        }
    }
}

fn check_axis(
    bound: &AxisBound,
    fixed_label: &'static str,
    item_label: &'static str,
    errors: &mut Vec<FieldError>,
) -> ValidatedAxis {
    match bound.mode() {
        AxisBoundMode::Calculated => ValidatedAxis::Calculated,
        AxisBoundMode::Fixed => {
            match check_numeric(bound.fixed_value(), &AXIS_VALUE_SPEC, fixed_label, errors) {
                Some(value) => ValidatedAxis::Fixed(value),
                None => ValidatedAxis::Calculated,
            }
        }
        AxisBoundMode::Item => {
            if bound.item().trim().is_empty() {
                errors.push(FieldError::Value {
                    label: item_label,
                    error: NumericError::Mandatory,
                });
                ValidatedAxis::Calculated
            } else {
                ValidatedAxis::Item(bound.item().to_string())
            }
        }
    }
}
