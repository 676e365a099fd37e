//! Read-only affordance projection for selection menu items.
//!
//! Each flag is a pure function of the selection state; the host uses them
//! to enable/disable menu entries and to label the extend entries as
//! "extend" or "shrink".

use crate::state::{ExtendSide, SelectionState};

/// Whether a directional extend key press would currently grow or shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendOrShrink {
    Extend,
    Shrink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionActionState {
    pub can_select: bool,
    pub can_deselect: bool,
    pub can_select_only_current: bool,
    pub extend_or_shrink_right: ExtendOrShrink,
    pub can_extend_right: bool,
    pub extend_or_shrink_left: ExtendOrShrink,
    pub can_extend_left: bool,
    pub can_change_current_right: bool,
    pub can_change_current_left: bool,
}

impl SelectionState {
    #[must_use]
    pub fn action_state(&self) -> SelectionActionState {
        let extend_or_shrink_right = match self.extend_side {
            None | Some(ExtendSide::Right) => ExtendOrShrink::Extend,
            Some(ExtendSide::Left) => ExtendOrShrink::Shrink,
        };
        let extend_or_shrink_left = match self.extend_side {
            None | Some(ExtendSide::Left) => ExtendOrShrink::Extend,
            Some(ExtendSide::Right) => ExtendOrShrink::Shrink,
        };
        let first_available = self.available.first();
        let last_available = self.available.last();
        let has_selection = !self.selected.is_empty();

        SelectionActionState {
            can_select: !self.available.is_empty(),
            can_deselect: has_selection,
            can_select_only_current: self.current.is_some() && self.selected.len() > 1,
            extend_or_shrink_right,
            can_extend_right: has_selection
                && (extend_or_shrink_right == ExtendOrShrink::Shrink
                    || !last_available.is_some_and(|key| self.selected.contains(key))),
            extend_or_shrink_left,
            can_extend_left: has_selection
                && (extend_or_shrink_left == ExtendOrShrink::Shrink
                    || !first_available.is_some_and(|key| self.selected.contains(key))),
            can_change_current_right: !self.available.is_empty()
                && last_available.map(String::as_str) != self.current(),
            can_change_current_left: !self.available.is_empty()
                && first_available.map(String::as_str) != self.current(),
        }
    }
}
