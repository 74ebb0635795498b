//! sw-graph: graph configuration entity and its validation engine.
//!
//! Provides:
//! - The form-scoped configuration entity with its chart-type discriminant
//! - Conditional field groups (percentile toggles, axis-bound state machine)
//! - A pure render-state projection for UI bindings and conformance checks
//! - The orchestrated validator with its exact user-facing message grammar
//!
//! # Example
//!
//! ```
//! use sw_graph::{GraphConfig, GraphItem, validate};
//!
//! let mut config = GraphConfig::default();
//! config.name = "CPU usage".to_string();
//! config.items.push(GraphItem::new("cpu load"));
//!
//! let validated = validate(&config, false).unwrap();
//! assert_eq!(validated.width, 900);
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod render;
pub mod validate;

// Re-exports for ergonomics
pub use axis::{AxisBound, AxisBoundMode};
pub use config::{
    DrawFunction, DrawStyle, GraphConfig, GraphItem, GraphKind, ItemRole, PercentileLine,
    YAxisSide,
};
pub use error::{EntityError, FieldError, Rejection};
pub use render::{GraphField, field_max_length, item_columns, render};
pub use validate::{ValidatedAxis, ValidatedGraph, validate};
