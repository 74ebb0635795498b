//! Raw submit requests and entity assembly.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sw_graph::{AxisBoundMode, GraphConfig, GraphItem, GraphKind};

use crate::error::{ConsoleError, ConsoleResult};

/// A raw form value as posted: text inputs arrive as strings, checkboxes as
/// booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Text(String),
}

impl RawValue {
    fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(text) => Some(text),
            RawValue::Flag(_) => None,
        }
    }

    fn as_flag(&self) -> Option<bool> {
        match self {
            RawValue::Flag(flag) => Some(*flag),
            RawValue::Text(_) => None,
        }
    }
}

/// One full submission as the frontend posts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub graph_type: GraphKind,
    #[serde(default)]
    pub prototype: bool,
    #[serde(default)]
    pub fields: BTreeMap<String, RawValue>,
    #[serde(default)]
    pub items: Vec<GraphItem>,
}

/// Load a submit request from a YAML file.
pub fn load_request(path: &Path) -> ConsoleResult<SubmitRequest> {
    let content = std::fs::read_to_string(path).map_err(|e| ConsoleError::RequestFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let request = serde_yaml::from_str(&content)?;
    Ok(request)
}

/// Assemble the entity from the raw field map.
///
/// Discriminant fields (percentile checkboxes, axis modes, the prototype
/// discover flag) are applied first; dependent values are then admitted only
/// when the resulting form actually renders their input. A raw value posted
/// for a hidden or non-existent field never reaches the entity.
pub fn build_config(request: &SubmitRequest) -> GraphConfig {
    let mut config = GraphConfig::with_kind(request.graph_type);
    let fields = &request.fields;
    let text = |key: &str| fields.get(key).and_then(RawValue::as_text);
    let flag = |key: &str| fields.get(key).and_then(RawValue::as_flag);

    if let Some(name) = text("name") {
        config.name = name.to_string();
    }
    if let Some(width) = text("width") {
        config.width = width.to_string();
    }
    if let Some(height) = text("height") {
        config.height = height.to_string();
    }
    if let Some(show) = flag("show_legend") {
        config.show_legend = show;
    }
    if matches!(config.kind, GraphKind::Normal | GraphKind::Stacked) {
        if let Some(show) = flag("show_work_period") {
            config.show_work_period = show;
        }
        if let Some(show) = flag("show_triggers") {
            config.show_triggers = show;
        }
    }
    if config.kind.is_pie_family()
        && let Some(show) = flag("show_3d")
    {
        config.show_3d = show;
    }

    if config.kind == GraphKind::Normal {
        if let Some(checked) = flag("visible_percent_left") {
            config.percent_left.toggle.checked = checked;
        }
        if let Some(checked) = flag("visible_percent_right") {
            config.percent_right.toggle.checked = checked;
        }
        apply_axis_mode(&mut config.ymin, text("ymin_type"));
        apply_axis_mode(&mut config.ymax, text("ymax_type"));

        if config.percent_left.toggle.checked
            && let Some(value) = text("percent_left")
        {
            config.percent_left.value = value.to_string();
        }
        if config.percent_right.toggle.checked
            && let Some(value) = text("percent_right")
        {
            config.percent_right.value = value.to_string();
        }
        apply_axis_value(&mut config.ymin, text("yaxismin"), text("ymin_name"));
        apply_axis_value(&mut config.ymax, text("yaxismax"), text("ymax_name"));
    }

    if request.prototype {
        config.discover = flag("discover");
    }

    config.items = request.items.clone();
    config
}

fn apply_axis_mode(bound: &mut sw_graph::AxisBound, raw: Option<&str>) {
    let Some(raw) = raw else { return };
    match raw.parse::<AxisBoundMode>() {
        Ok(mode) => bound.set_mode(mode),
        Err(reason) => tracing::warn!(%reason, "ignoring axis mode"),
    }
}

fn apply_axis_value(bound: &mut sw_graph::AxisBound, fixed: Option<&str>, item: Option<&str>) {
    match bound.mode() {
        AxisBoundMode::Fixed => {
            if let Some(value) = fixed {
                bound.set_fixed_value(value);
            }
        }
        AxisBoundMode::Item => {
            if let Some(metric) = item {
                bound.set_item(metric);
            }
        }
        AxisBoundMode::Calculated => {}
    }
}
