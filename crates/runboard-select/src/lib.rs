//! Selection and navigation engine for the runboard run list.
//!
//! UI-agnostic: the engine operates on opaque run id strings and holds no
//! run data. The ordered `available` list is pushed in by the run model
//! after filtering/sorting; clicks and key commands mutate the selected
//! set, the focused ("current") run, and the A/B compare pairing. Every
//! mutation that touches `selected` or `current` finishes by re-validating
//! the compare pairing, so callers always observe a consistent pairing.
//!
//! This crate intentionally has no rendering, I/O, or async surface. It
//! depends on `crossterm` only for converting terminal key events into
//! [`KeyChord`]s at the binding layer.

mod actions;
mod click;
mod compare;
mod keymap;
mod nav;
mod state;

pub use actions::{ExtendOrShrink, SelectionActionState};
pub use click::ClickModifiers;
pub use keymap::{KeyBinding, KeyChord, KeyConflict, KeyToken, Keymap, SelectionCommand};
pub use state::{ExtendSide, SelectionState};
