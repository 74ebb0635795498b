//! Graph configuration entity.
//!
//! The entity is form-scoped and transient: numeric fields keep the raw
//! string exactly as typed so validation can echo it back verbatim, and
//! switching the chart type resets dependent state that no longer exists in
//! the rendered form.

use serde::{Deserialize, Serialize};
use sw_core::Toggle;

use crate::axis::AxisBound;

/// Chart type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    Normal,
    Stacked,
    Pie,
    Exploded,
}

impl GraphKind {
    pub const ALL: [GraphKind; 4] = [
        GraphKind::Normal,
        GraphKind::Stacked,
        GraphKind::Pie,
        GraphKind::Exploded,
    ];

    /// Pie-family charts share item semantics (no axis, per-item role).
    pub fn is_pie_family(self) -> bool {
        matches!(self, GraphKind::Pie | GraphKind::Exploded)
    }
}

impl std::str::FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(GraphKind::Normal),
            "Stacked" => Ok(GraphKind::Stacked),
            "Pie" => Ok(GraphKind::Pie),
            "Exploded" => Ok(GraphKind::Exploded),
            other => Err(format!("unknown graph type '{other}'")),
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GraphKind::Normal => "Normal",
            GraphKind::Stacked => "Stacked",
            GraphKind::Pie => "Pie",
            GraphKind::Exploded => "Exploded",
        };
        f.write_str(name)
    }
}

/// Aggregation applied to the referenced metric when drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawFunction {
    All,
    Min,
    #[default]
    Avg,
    Max,
}

/// Line styling for normal charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawStyle {
    #[default]
    Line,
    FilledRegion,
    BoldLine,
    Dot,
    DashedLine,
    Gradient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YAxisSide {
    #[default]
    Left,
    Right,
}

/// Pie-family item role: a plain slice or the "graph sum" reference slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemRole {
    #[default]
    Simple,
    GraphSum,
}

/// One drawn series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphItem {
    /// Metric name, resolved through the registry at submit time.
    pub metric: String,
    #[serde(default)]
    pub function: DrawFunction,
    #[serde(default)]
    pub style: DrawStyle,
    #[serde(default)]
    pub side: YAxisSide,
    /// Hex color; pie-family charts color slices automatically.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub role: ItemRole,
}

impl GraphItem {
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            function: DrawFunction::default(),
            style: DrawStyle::default(),
            side: YAxisSide::default(),
            color: None,
            role: ItemRole::default(),
        }
    }
}

/// Checkbox-gated percentile line.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileLine {
    pub toggle: Toggle,
    /// Raw value as typed; only consulted while the checkbox is checked.
    pub value: String,
}

impl Default for PercentileLine {
    fn default() -> Self {
        Self {
            toggle: Toggle::default(),
            value: "0".to_string(),
        }
    }
}

/// The graph configuration under edit.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub name: String,
    pub width: String,
    pub height: String,
    pub kind: GraphKind,
    pub show_legend: bool,
    pub show_work_period: bool,
    pub show_triggers: bool,
    pub show_3d: bool,
    pub percent_left: PercentileLine,
    pub percent_right: PercentileLine,
    pub ymin: AxisBound,
    pub ymax: AxisBound,
    pub items: Vec<GraphItem>,
    /// Prototype-only flag; `None` until the form supplies it.
    pub discover: Option<bool>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: "900".to_string(),
            height: "200".to_string(),
            kind: GraphKind::Normal,
            show_legend: true,
            show_work_period: true,
            show_triggers: true,
            show_3d: false,
            percent_left: PercentileLine::default(),
            percent_right: PercentileLine::default(),
            ymin: AxisBound::lower_default(),
            ymax: AxisBound::upper_default(),
            items: Vec::new(),
            discover: None,
        }
    }
}

impl GraphConfig {
    pub fn with_kind(kind: GraphKind) -> Self {
        let mut config = Self::default();
        config.set_kind(kind);
        config
    }

    /// Change the chart type.
    ///
    /// Percentile and axis groups only exist on Normal charts; on any other
    /// type their state is reset to defaults so a vanished field can never
    /// contribute a stale value to submission.
    pub fn set_kind(&mut self, kind: GraphKind) {
        self.kind = kind;
        if kind != GraphKind::Normal {
            self.percent_left = PercentileLine::default();
            self.percent_right = PercentileLine::default();
            self.ymin = AxisBound::lower_default();
            self.ymax = AxisBound::upper_default();
        }
    }
}
