//! Y-axis bound state machine.

use serde::{Deserialize, Serialize};
use sw_core::GroupState;

/// How one end of the Y axis is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisBoundMode {
    #[default]
    Calculated,
    Fixed,
    Item,
}

impl std::str::FromStr for AxisBoundMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Calculated" => Ok(AxisBoundMode::Calculated),
            "Fixed" => Ok(AxisBoundMode::Fixed),
            "Item" => Ok(AxisBoundMode::Item),
            other => Err(format!("unknown axis mode '{other}'")),
        }
    }
}

/// One axis bound: a three-branch state machine over [`AxisBoundMode`].
///
/// Exactly one dependent input is live per mode: none for Calculated, the
/// fixed numeric input for Fixed, the metric picker for Item. Leaving a
/// branch clears that branch's input as an entry action of the transition,
/// so switching Fixed -> Item -> Fixed presents an empty mandatory input
/// rather than resurrecting the earlier value.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBound {
    mode: AxisBoundMode,
    fixed_value: String,
    item: String,
}

impl AxisBound {
    /// Lower-bound default as the blank form seeds it.
    pub fn lower_default() -> Self {
        Self {
            mode: AxisBoundMode::Calculated,
            fixed_value: "0".to_string(),
            item: String::new(),
        }
    }

    /// Upper-bound default as the blank form seeds it.
    pub fn upper_default() -> Self {
        Self {
            mode: AxisBoundMode::Calculated,
            fixed_value: "100".to_string(),
            item: String::new(),
        }
    }

    pub fn mode(&self) -> AxisBoundMode {
        self.mode
    }

    pub fn fixed_value(&self) -> &str {
        &self.fixed_value
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    /// Transition to another mode, clearing the input of the branch being
    /// left. Re-selecting the current mode is a no-op.
    pub fn set_mode(&mut self, mode: AxisBoundMode) {
        if mode == self.mode {
            return;
        }
        match self.mode {
            AxisBoundMode::Fixed => self.fixed_value.clear(),
            AxisBoundMode::Item => self.item.clear(),
            AxisBoundMode::Calculated => {}
        }
        self.mode = mode;
    }

    pub fn set_fixed_value(&mut self, raw: impl Into<String>) {
        self.fixed_value = raw.into();
    }

    pub fn set_item(&mut self, metric: impl Into<String>) {
        self.item = metric.into();
    }

    /// Render flags for the fixed numeric input.
    pub fn fixed_input_state(&self) -> GroupState {
        match self.mode {
            AxisBoundMode::Fixed => GroupState::SHOWN,
            _ => GroupState::HIDDEN,
        }
    }

    /// Render flags for the metric picker input.
    pub fn item_input_state(&self) -> GroupState {
        match self.mode {
            AxisBoundMode::Item => GroupState::SHOWN,
            _ => GroupState::HIDDEN,
        }
    }
}
