//! Compare-pairing fix-up.
//!
//! The compare run is the "B" side of the two-way comparison view. Rather
//! than having every transition reason about it, each mutation that touches
//! the selected set or the focused run ends by running this resolver, which
//! repairs the pairing whenever it has become invalid.

use crate::state::SelectionState;

impl SelectionState {
    /// Re-validates the compare run against the current selection.
    ///
    /// An empty selection clears the pairing. A compare that is unset, equal
    /// to the focused run, or no longer selected is recomputed as the first
    /// available run that is selected and differs from the focused run, or
    /// cleared when no such run exists. A still-valid compare is left
    /// untouched. Idempotent.
    pub fn apply_implicit_compare(&mut self) {
        if self.selected.is_empty() {
            self.set_compare(None);
            return;
        }
        let invalid = match self.compare.as_deref() {
            None => true,
            Some(compare) => {
                self.current.as_deref() == Some(compare) || !self.selected.contains(compare)
            }
        };
        if invalid {
            let fallback = self.default_compare();
            self.set_compare(fallback);
        }
    }

    fn default_compare(&self) -> Option<String> {
        self.available
            .iter()
            .find(|key| {
                self.selected.contains(*key) && self.current.as_deref() != Some(key.as_str())
            })
            .cloned()
    }
}
