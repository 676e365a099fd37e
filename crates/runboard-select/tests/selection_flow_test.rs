//! End-to-end selection flows: click, keyboard, and compare-pairing
//! sequences as a host would drive them, with invariant checks between
//! steps.

#![allow(clippy::unwrap_used)]

use runboard_select::{ClickModifiers, Keymap, SelectionCommand, SelectionState};

fn keys(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

fn state_with(available: &[&str]) -> SelectionState {
    let mut state = SelectionState::new();
    state.set_available(keys(available));
    state
}

/// Every selected id is available, current is available, and in compare
/// mode the pairing is a selected run distinct from current whenever an
/// alternative exists.
fn assert_invariants(state: &SelectionState) {
    for id in state.selected() {
        assert!(
            state.available().contains(id),
            "selected id {id} not available"
        );
    }
    if let Some(current) = state.current() {
        assert!(
            state.available().iter().any(|id| id == current),
            "current {current} not available"
        );
    }
    if state.compare_mode() && !state.selected().is_empty() {
        let alternative = state
            .ordered_selected()
            .into_iter()
            .any(|id| state.current() != Some(id.as_str()));
        match state.compare() {
            Some(compare) => {
                assert!(state.is_selected(compare));
                assert_ne!(state.current(), Some(compare));
            }
            None => assert!(!alternative, "an alternative pairing exists but compare is unset"),
        }
    }
}

#[test]
fn click_navigate_extend_session() {
    let mut state = state_with(&["a", "b", "c", "d", "e"]);

    state.resolve_click("b", ClickModifiers::NONE);
    assert_eq!(state.current(), Some("b"));
    assert_invariants(&state);

    state.resolve_click("d", ClickModifiers::SHIFT);
    assert_eq!(state.ordered_selected(), keys(&["b", "c", "d"]));
    assert_eq!(state.current(), Some("b"));
    assert_invariants(&state);

    // Navigation inside a multi-selection cycles current without
    // disturbing the selected set.
    state.nav_right();
    assert_eq!(state.current(), Some("c"));
    assert_eq!(state.ordered_selected(), keys(&["b", "c", "d"]));

    state.select_current();
    assert_eq!(state.ordered_selected(), keys(&["c"]));

    state.extend_right();
    state.extend_right();
    assert_eq!(state.ordered_selected(), keys(&["c", "d", "e"]));
    state.extend_left();
    assert_eq!(state.ordered_selected(), keys(&["c", "d"]));
    assert_invariants(&state);
}

#[test]
fn compare_pairing_survives_selection_churn() {
    let mut state = state_with(&["a", "b", "c", "d"]);
    state.set_compare_mode(true);

    state.resolve_click("a", ClickModifiers::NONE);
    state.resolve_click("c", ClickModifiers::NONE);
    assert_eq!(state.current(), Some("a"));
    assert_eq!(state.compare(), Some("c"));
    assert_invariants(&state);

    // Swap roles by clicking the compare run.
    state.resolve_click("c", ClickModifiers::NONE);
    assert_eq!(state.current(), Some("c"));
    assert_eq!(state.compare(), Some("a"));
    assert_invariants(&state);

    // Widen the selection and cycle the pairing with the keyboard.
    state.resolve_click("b", ClickModifiers::CTRL);
    state.resolve_click("d", ClickModifiers::CTRL);
    assert_eq!(state.selected().len(), 4);
    state.nav_right();
    assert_invariants(&state);
    assert_eq!(state.current(), Some("c"));

    // Deselecting the compare run forces an implicit re-pairing.
    let compare = state.compare().unwrap().to_owned();
    state.deselect(&[compare.clone()]);
    assert_invariants(&state);
    assert_ne!(state.compare(), Some(compare.as_str()));
}

#[test]
fn filter_change_reconciliation_drops_stale_selection() {
    let mut state = state_with(&["a", "b", "c", "d"]);
    state.select_all();
    state.resolve_click("b", ClickModifiers::NONE);
    assert_eq!(state.current(), Some("b"));

    // The run list narrows; the host pushes the new snapshot and then
    // deselects whatever vanished.
    state.set_available(keys(&["a", "c"]));
    let stale: Vec<String> = state
        .selected()
        .iter()
        .filter(|id| !state.available().contains(*id))
        .cloned()
        .collect();
    state.deselect(&stale);

    assert_eq!(state.ordered_selected(), keys(&["a", "c"]));
    assert_eq!(state.current(), None);
    assert_invariants(&state);
}

#[test]
fn keyboard_only_session_via_keymap() {
    let map = Keymap::default_bindings();
    let mut state = state_with(&["a", "b", "c", "d"]);

    let press = |state: &mut SelectionState, command: SelectionCommand| {
        state.dispatch(command);
    };

    press(&mut state, SelectionCommand::NavRight);
    press(&mut state, SelectionCommand::NavRight);
    assert_eq!(state.current(), Some("b"));

    press(&mut state, SelectionCommand::ExtendRight);
    press(&mut state, SelectionCommand::ExtendRight);
    assert_eq!(state.ordered_selected(), keys(&["b", "c", "d"]));

    press(&mut state, SelectionCommand::ExtendLeft);
    assert_eq!(state.ordered_selected(), keys(&["b", "c"]));

    press(&mut state, SelectionCommand::SelectAll);
    assert_eq!(state.selected().len(), 4);

    press(&mut state, SelectionCommand::DeselectAll);
    assert!(state.selected().is_empty());
    assert_eq!(state.current(), None);
    assert_invariants(&state);

    // The default layout is collision-free, so every press above is
    // reachable from a single chord.
    assert!(map.conflicts().is_empty());
}

#[test]
fn navigation_boundaries_never_wrap() {
    let mut state = state_with(&["a", "b", "c"]);
    state.resolve_click("a", ClickModifiers::NONE);
    state.nav_left();
    assert_eq!(state.current(), Some("a"));
    state.nav_right();
    state.nav_right();
    state.nav_right();
    assert_eq!(state.current(), Some("c"));
    assert_invariants(&state);
}
