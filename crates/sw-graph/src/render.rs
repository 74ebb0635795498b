//! Form render-state projection.
//!
//! `render` is a pure function from the current configuration to the full
//! set of field flags. It carries no state of its own and is safe to call on
//! every change event; both the UI binding and the conformance harness read
//! its output.

use std::collections::BTreeMap;

use sw_core::FieldState;

use crate::axis::AxisBound;
use crate::config::{GraphConfig, GraphKind};

/// Every field of the graph form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GraphField {
    Name,
    Width,
    Height,
    GraphType,
    ShowLegend,
    ShowWorkPeriod,
    ShowTriggers,
    Show3d,
    PercentLeftToggle,
    PercentRightToggle,
    PercentLeft,
    PercentRight,
    YMinMode,
    YMaxMode,
    YMinFixed,
    YMaxFixed,
    YMinItem,
    YMaxItem,
    Discover,
    ItemsTable,
}

impl GraphField {
    pub const ALL: [GraphField; 20] = [
        GraphField::Name,
        GraphField::Width,
        GraphField::Height,
        GraphField::GraphType,
        GraphField::ShowLegend,
        GraphField::ShowWorkPeriod,
        GraphField::ShowTriggers,
        GraphField::Show3d,
        GraphField::PercentLeftToggle,
        GraphField::PercentRightToggle,
        GraphField::PercentLeft,
        GraphField::PercentRight,
        GraphField::YMinMode,
        GraphField::YMaxMode,
        GraphField::YMinFixed,
        GraphField::YMaxFixed,
        GraphField::YMinItem,
        GraphField::YMaxItem,
        GraphField::Discover,
        GraphField::ItemsTable,
    ];
}

/// Compute render flags for every field of the form.
pub fn render(config: &GraphConfig, prototype: bool) -> BTreeMap<GraphField, FieldState> {
    let normal = config.kind == GraphKind::Normal;
    let time_based = matches!(config.kind, GraphKind::Normal | GraphKind::Stacked);

    let mut states = BTreeMap::new();
    let mut set = |field: GraphField, state: FieldState| {
        states.insert(field, state);
    };

    set(GraphField::Name, FieldState::shown(true));
    set(GraphField::Width, FieldState::shown(true));
    set(GraphField::Height, FieldState::shown(true));
    set(GraphField::GraphType, FieldState::shown(true));
    set(GraphField::ShowLegend, FieldState::shown(false));
    set(GraphField::ItemsTable, FieldState::shown(false));

    set(GraphField::ShowWorkPeriod, exists_if(time_based));
    set(GraphField::ShowTriggers, exists_if(time_based));
    set(GraphField::Show3d, exists_if(config.kind.is_pie_family()));

    // Percentile and axis groups only exist on Normal charts.
    if normal {
        set(GraphField::PercentLeftToggle, FieldState::shown(false));
        set(GraphField::PercentRightToggle, FieldState::shown(false));
        set(
            GraphField::PercentLeft,
            FieldState::from_group(config.percent_left.toggle.state()),
        );
        set(
            GraphField::PercentRight,
            FieldState::from_group(config.percent_right.toggle.state()),
        );
        set(GraphField::YMinMode, FieldState::shown(false));
        set(GraphField::YMaxMode, FieldState::shown(false));
        set_axis_inputs(&mut set, &config.ymin, GraphField::YMinFixed, GraphField::YMinItem);
        set_axis_inputs(&mut set, &config.ymax, GraphField::YMaxFixed, GraphField::YMaxItem);
    } else {
        for field in [
            GraphField::PercentLeftToggle,
            GraphField::PercentRightToggle,
            GraphField::PercentLeft,
            GraphField::PercentRight,
            GraphField::YMinMode,
            GraphField::YMaxMode,
            GraphField::YMinFixed,
            GraphField::YMaxFixed,
            GraphField::YMinItem,
            GraphField::YMaxItem,
        ] {
            set(field, FieldState::ABSENT);
        }
    }

    set(
        GraphField::Discover,
        if prototype {
            FieldState::shown(true)
        } else {
            FieldState::ABSENT
        },
    );

    states
}

fn exists_if(exists: bool) -> FieldState {
    if exists {
        FieldState::shown(false)
    } else {
        FieldState::ABSENT
    }
}

fn set_axis_inputs(
    set: &mut impl FnMut(GraphField, FieldState),
    bound: &AxisBound,
    fixed: GraphField,
    item: GraphField,
) {
    set(fixed, FieldState::from_group(bound.fixed_input_state()));
    set(item, FieldState::from_group(bound.item_input_state()));
}

/// Input length limits surfaced as form metadata (no validation message).
pub fn field_max_length(field: GraphField) -> Option<u32> {
    match field {
        GraphField::Name => Some(255),
        GraphField::Width | GraphField::Height => Some(5),
        _ => None,
    }
}

/// Item-table column headers per chart type.
pub fn item_columns(kind: GraphKind) -> &'static [&'static str] {
    match kind {
        GraphKind::Normal => &[
            "", "", "Name", "Function", "Draw style", "Y axis side", "Color", "Action",
        ],
        GraphKind::Stacked => &["", "", "Name", "Function", "Y axis side", "Color", "Action"],
        GraphKind::Pie | GraphKind::Exploded => {
            &["", "", "Name", "Type", "Function", "Color", "Action"]
        }
    }
}
