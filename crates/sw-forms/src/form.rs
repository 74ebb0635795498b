//! Channel form session state.

use std::collections::BTreeMap;

use sw_core::FieldState;

use crate::channel::{ChannelField, ChannelKind, VisibilityPlan, resolve, shows_signup_link};

/// One edit session of the notification-channel form.
///
/// The visibility rule set is applied eagerly at construction and again on
/// every discriminant change. Changing the channel type clears the values of
/// fields that just became hidden, so a later submission cannot pick up
/// leftovers from a previously selected type.
#[derive(Debug, Clone)]
pub struct ChannelForm {
    kind: ChannelKind,
    plan: VisibilityPlan,
    values: BTreeMap<ChannelField, String>,
}

impl ChannelForm {
    pub fn new(kind: ChannelKind) -> Self {
        Self {
            kind,
            plan: resolve(kind),
            values: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn plan(&self) -> &VisibilityPlan {
        &self.plan
    }

    /// Switch the discriminant, recomputing visibility and dropping values
    /// of groups that are hidden under the new type.
    pub fn set_kind(&mut self, kind: ChannelKind) {
        self.kind = kind;
        self.plan = resolve(kind);
        let plan = &self.plan;
        self.values.retain(|field, _| plan.shows(field.group()));
    }

    pub fn set_value(&mut self, field: ChannelField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn value(&self, field: ChannelField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Render flags for one field under the current plan.
    pub fn field_state(&self, field: ChannelField) -> FieldState {
        self.plan.group_state(field.group())
    }

    pub fn signup_link_visible(&self) -> bool {
        shows_signup_link(self.kind)
    }

    /// Values that take part in submission: visible fields only.
    pub fn submission_values(&self) -> BTreeMap<ChannelField, &str> {
        self.values
            .iter()
            .filter(|(field, _)| self.plan.shows(field.group()))
            .map(|(field, value)| (*field, value.as_str()))
            .collect()
    }
}
