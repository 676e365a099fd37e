//! Selection state over the ordered run list.
//!
//! Pure data plus the wholesale selection transitions. Directional
//! navigation and extend/shrink live in `nav`, click resolution in `click`,
//! and the compare-pairing fix-up in `compare`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Direction the active range-extension gesture last grew or shrank in.
///
/// Stored as `Option<ExtendSide>`; `None` means no extension gesture is in
/// progress, which makes the first directional extend establish the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendSide {
    Left,
    Right,
}

/// Selection, focus, and compare-pairing state for the run list.
///
/// `available` is an externally supplied ordered snapshot of run ids
/// (post-filter/sort) and is replaced wholesale on every update; the engine
/// never computes it. `selected` may briefly reference ids missing from
/// `available` between a filter change and the host's deselection sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub(crate) available: Vec<String>,
    pub(crate) selected: BTreeSet<String>,
    pub(crate) current: Option<String>,
    pub(crate) extend_side: Option<ExtendSide>,
    pub(crate) compare_mode: bool,
    pub(crate) compare: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn available(&self) -> &[String] {
        &self.available
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn extend_side(&self) -> Option<ExtendSide> {
        self.extend_side
    }

    #[must_use]
    pub fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    #[must_use]
    pub fn compare(&self) -> Option<&str> {
        self.compare.as_deref()
    }

    /// Selected ids projected through `available` order.
    ///
    /// Views must never rely on the selected set's own iteration order; the
    /// visible order is always the order of the run list.
    #[must_use]
    pub fn ordered_selected(&self) -> Vec<String> {
        self.available
            .iter()
            .filter(|key| self.selected.contains(*key))
            .cloned()
            .collect()
    }

    /// Replaces the ordered run-id snapshot.
    ///
    /// Does not touch `selected`: removing ids that vanished from the list
    /// is the host's reconciliation step (a follow-up [`Self::deselect`]),
    /// because the run list and the selection are independently observable.
    pub fn set_available(&mut self, keys: Vec<String>) {
        self.available = keys;
    }

    /// Removes `keys` from the selection; clears focus if it was removed.
    /// No-op on empty input.
    pub fn deselect(&mut self, keys: &[String]) {
        if keys.is_empty() {
            return;
        }
        self.remove_selected(keys);
        self.apply_implicit_compare();
    }

    /// Selects every available run; seeds focus at the first run if unset.
    pub fn select_all(&mut self) {
        let keys = self.available.clone();
        self.set_all_selected(keys);
        if self.current.is_none() {
            if let Some(first) = self.available.first().cloned() {
                self.set_current(Some(first));
            }
        }
        self.apply_implicit_compare();
    }

    /// Clears the selection and the focused run.
    pub fn deselect_all(&mut self) {
        self.set_all_selected(Vec::new());
        self.set_current(None);
        self.apply_implicit_compare();
    }

    /// Collapses the selection to the focused run, if any.
    pub fn select_current(&mut self) {
        if let Some(current) = self.current.clone() {
            self.set_all_selected(vec![current]);
            self.apply_implicit_compare();
        }
    }

    /// Toggles compare mode. Does not re-validate the pairing: the pairing
    /// reacts to selection/focus changes, not to the mode flag itself.
    pub fn set_compare_mode(&mut self, val: bool) {
        self.compare_mode = val;
    }

    pub(crate) fn set_current(&mut self, key: Option<String>) {
        if key != self.current {
            self.extend_side = None;
        }
        self.current = key;
    }

    pub(crate) fn set_all_selected(&mut self, keys: Vec<String>) {
        self.selected = keys.into_iter().collect();
        self.extend_side = None;
    }

    pub(crate) fn set_key_selected(&mut self, key: &str, selected: bool) {
        if selected {
            self.selected.insert(key.to_owned());
        } else {
            self.selected.remove(key);
        }
        self.extend_side = None;
    }

    pub(crate) fn remove_selected(&mut self, keys: &[String]) {
        let to_remove: BTreeSet<&str> = keys.iter().map(String::as_str).collect();
        let kept: Vec<String> = self
            .selected
            .iter()
            .filter(|key| !to_remove.contains(key.as_str()))
            .cloned()
            .collect();
        self.set_all_selected(kept);
        if self
            .current
            .as_deref()
            .is_some_and(|current| to_remove.contains(current))
        {
            self.set_current(None);
        }
    }

    pub(crate) fn set_compare(&mut self, val: Option<String>) {
        self.compare = val;
    }
}

#[cfg(test)]
pub(crate) fn keys(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}
