//! Click resolution for the run list.
//!
//! One entry point, [`SelectionState::resolve_click`], dispatches on the
//! modifier keys: shift-click range-selects, ctrl-click toggles, and a plain
//! click focuses. Compare mode rewires the plain and ctrl branches so two
//! runs can be paired for comparison with ordinary clicks.

use crate::state::SelectionState;

/// Modifier keys held during a click on a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl ClickModifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

impl SelectionState {
    /// Applies one user click on `key`. Shift wins over ctrl; compare mode
    /// only alters the unshifted branches.
    pub fn resolve_click(&mut self, key: &str, modifiers: ClickModifiers) {
        if modifiers.shift {
            self.range_select(key);
        } else if modifiers.ctrl {
            if self.compare_mode {
                self.ctrl_click_compare(key);
            } else {
                self.ctrl_click(key);
            }
        } else if self.compare_mode {
            self.plain_click_compare(key);
        } else {
            self.plain_click(key);
        }
        self.apply_implicit_compare();
    }

    /// Replaces the selection with the contiguous `available` range between
    /// the focused run and `key`, inclusive of both endpoints.
    pub fn select_to(&mut self, key: &str) {
        self.range_select(key);
        self.apply_implicit_compare();
    }

    fn range_select(&mut self, key: &str) {
        let range = self.select_to_keys(key);
        self.set_all_selected(range);
        if self.current().is_none() {
            self.set_current(Some(key.to_owned()));
        }
    }

    /// Single scan over `available`, flipping an in-range flag at the first
    /// endpoint and back off after the second; both endpoints are included.
    /// Degenerates to the clicked key alone when there is no focused run,
    /// when the clicked key is the focused run, or when either endpoint is
    /// missing from `available`.
    fn select_to_keys(&self, key: &str) -> Vec<String> {
        let Some(current) = self.current() else {
            return vec![key.to_owned()];
        };
        let present = |wanted: &str| self.available.iter().any(|id| id == wanted);
        if key == current || !present(key) || !present(current) {
            return vec![key.to_owned()];
        }
        let mut in_range = false;
        let mut range = Vec::new();
        for avail in &self.available {
            let endpoint = avail == key || avail == current;
            if in_range || endpoint {
                range.push(avail.clone());
            }
            in_range = (in_range && !endpoint) || (!in_range && endpoint);
        }
        range
    }

    /// Plain click: make sure the run is selected and focus it. Clicking the
    /// already focused, already selected run is a no-op.
    fn plain_click(&mut self, key: &str) {
        if !self.is_selected(key) {
            self.set_key_selected(key, true);
        }
        if self.current() != Some(key) {
            self.set_current(Some(key.to_owned()));
        }
    }

    fn ctrl_click(&mut self, key: &str) {
        let selected = self.is_selected(key);
        self.set_key_selected(key, !selected);
        if self.current() == Some(key) {
            self.set_current(None);
        }
    }

    /// Compare mode lets the user click a second run to pick the compare or
    /// the focused run without a modifier.
    fn plain_click_compare(&mut self, key: &str) {
        let current = self.current.clone();
        let compare = self.compare.clone();
        match (current, compare) {
            // Focused run already picked: this click picks the compare run.
            (Some(current), None) if key != current => {
                self.set_all_selected(vec![key.to_owned(), current]);
                self.set_compare(Some(key.to_owned()));
            }
            // Compare picked but focus was cleared: this click picks focus.
            (None, Some(compare)) if key != compare => {
                self.set_all_selected(vec![key.to_owned(), compare]);
                self.set_current(Some(key.to_owned()));
            }
            // Clicked the compare run: swap the two roles.
            (Some(current), Some(compare)) if key == compare => {
                self.set_compare(Some(current));
                self.set_current(Some(compare));
            }
            _ => self.plain_click(key),
        }
    }

    /// Compare mode changes ctrl+click to manage the compare run directly.
    fn ctrl_click_compare(&mut self, key: &str) {
        if self.compare() == Some(key) {
            // Ctrl+click on the compare run deselects it.
            self.set_compare(None);
            self.set_key_selected(key, false);
        } else if self.current() != Some(key) && self.is_selected(key) {
            // Selected run that is neither focused nor compare: promote it.
            self.set_compare(Some(key.to_owned()));
        } else if self.current() == Some(key) && self.compare.is_some() {
            // Ctrl+click on the focused run while compare is set: swap.
            let current = self.current.clone();
            let compare = self.compare.clone();
            self.set_compare(current);
            self.set_current(compare);
        } else {
            self.ctrl_click(key);
        }
    }
}
