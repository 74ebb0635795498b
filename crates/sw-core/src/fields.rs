//! Visibility and mandatoriness projection types.
//!
//! Forms are projected into per-field [`FieldState`] flags that a UI binding
//! (or a conformance harness) consumes directly. The projection is pure:
//! recomputing it for the same inputs yields the same flags.

/// Render flags for one dependent field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupState {
    pub visible: bool,
    pub mandatory: bool,
}

impl GroupState {
    pub const HIDDEN: GroupState = GroupState {
        visible: false,
        mandatory: false,
    };

    pub const SHOWN: GroupState = GroupState {
        visible: true,
        mandatory: true,
    };
}

/// Full render flags for one form field.
///
/// `exists == false` means the field is absent from the rendered form
/// altogether (not merely hidden); the remaining flags are then false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub exists: bool,
    pub visible: bool,
    pub enabled: bool,
    pub mandatory: bool,
}

impl FieldState {
    pub const ABSENT: FieldState = FieldState {
        exists: false,
        visible: false,
        enabled: false,
        mandatory: false,
    };

    /// A plain always-on field.
    pub fn shown(mandatory: bool) -> FieldState {
        FieldState {
            exists: true,
            visible: true,
            enabled: true,
            mandatory,
        }
    }

    /// Hidden fields are also disabled so they cannot submit a value.
    pub const HIDDEN: FieldState = FieldState {
        exists: true,
        visible: false,
        enabled: false,
        mandatory: false,
    };

    pub fn from_group(group: GroupState) -> FieldState {
        if group.visible {
            FieldState::shown(group.mandatory)
        } else {
            FieldState::HIDDEN
        }
    }
}

/// Checkbox-gated dependent input.
///
/// The input is visible and mandatory exactly while the checkbox is checked.
/// Unchecking hides it and excludes its value from validation and submission,
/// but does not erase what was typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    pub checked: bool,
}

impl Toggle {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn state(&self) -> GroupState {
        if self.checked {
            GroupState::SHOWN
        } else {
            GroupState::HIDDEN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_tracks_checkbox() {
        assert_eq!(Toggle::new(true).state(), GroupState::SHOWN);
        assert_eq!(Toggle::new(false).state(), GroupState::HIDDEN);
        assert_eq!(Toggle::default().state(), GroupState::HIDDEN);
    }

    #[test]
    fn hidden_field_is_disabled() {
        let state = FieldState::from_group(GroupState::HIDDEN);
        assert!(state.exists);
        assert!(!state.visible);
        assert!(!state.enabled);
        assert!(!state.mandatory);
    }

    #[test]
    fn absent_field_has_no_flags() {
        assert!(!FieldState::ABSENT.exists);
        assert!(!FieldState::ABSENT.visible);
    }
}
