//! Persisted row types.

use core::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sw_graph::{DrawFunction, DrawStyle, GraphKind, ItemRole, YAxisSide};

/// Identifier of a metric in the registry.
pub type MetricId = Uuid;

/// 1-based identifier of a committed graph row.
///
/// NonZero keeps `Option<GraphId>` the same size as `GraphId`.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GraphId(NonZeroU64);

impl GraphId {
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for GraphId {
    fn from(raw: NonZeroU64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Debug for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GraphId({})", self.0)
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed graph definition with every reference resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub name: String,
    pub kind: GraphKind,
    pub width: u32,
    pub height: u32,
    pub show_legend: bool,
    pub show_work_period: bool,
    pub show_triggers: bool,
    pub show_3d: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_right: Option<f64>,
    pub ymin: StoredAxis,
    pub ymax: StoredAxis,
    pub items: Vec<StoredItem>,
}

/// Resolved axis bound as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoredAxis {
    Calculated,
    Fixed { value: f64 },
    Item { metric: MetricId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub metric: MetricId,
    pub function: DrawFunction,
    pub style: DrawStyle,
    pub side: YAxisSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub role: ItemRole,
}
