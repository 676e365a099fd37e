//! Reconciliation between the ordered run list and the selection engine.
//!
//! The run list and the selection are independently observable, so the
//! engine never drops stale selections on its own. The host pushes every
//! new ordered snapshot with [`sync_available`] and immediately follows a
//! filter change with [`sync_filtered_selection`]; `selected` is only
//! guaranteed to be a subset of the list once both have run.

use std::collections::BTreeSet;

use runboard_select::SelectionState;

use crate::run::Run;

/// Pushes the ordered run ids into the engine.
pub fn sync_available(state: &mut SelectionState, ordered: &[Run]) {
    state.set_available(ordered.iter().map(|run| run.id.clone()).collect());
}

/// Deselects every selected run missing from the filtered list.
pub fn sync_filtered_selection(state: &mut SelectionState, filtered: &[Run]) {
    let kept: BTreeSet<&str> = filtered.iter().map(|run| run.id.as_str()).collect();
    let stale: Vec<String> = state
        .selected()
        .iter()
        .filter(|id| !kept.contains(id.as_str()))
        .cloned()
        .collect();
    state.deselect(&stale);
}

/// Selected runs in list order, never in selected-set order.
#[must_use]
pub fn selected_runs<'a>(ordered: &'a [Run], state: &SelectionState) -> Vec<&'a Run> {
    ordered.iter().filter(|run| state.is_selected(&run.id)).collect()
}

/// Resolves the focused run id to its record.
#[must_use]
pub fn current_run<'a>(ordered: &'a [Run], state: &SelectionState) -> Option<&'a Run> {
    let current = state.current()?;
    ordered.iter().find(|run| run.id == current)
}
