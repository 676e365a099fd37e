//! Keybinding registry for the selection engine.
//!
//! Maps terminal key chords onto engine operations. The bindings are data,
//! so hosts can replace them; [`Keymap::default_bindings`] carries the
//! stock layout (arrows navigate, shifted arrows extend, Ctrl+A/Ctrl+D/
//! Ctrl+Shift+D select-all/deselect-all/select-only-current, Shift+R asks
//! the host to refresh the run list).

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Up,
    Down,
    Left,
    Right,
}

/// A key plus its exact modifier set. Matching is exact on all three
/// modifiers, so Ctrl+D and Ctrl+Shift+D are distinct chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub token: KeyToken,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyChord {
    #[must_use]
    pub const fn plain(token: KeyToken) -> Self {
        Self {
            token,
            shift: false,
            ctrl: false,
            alt: false,
        }
    }

    #[must_use]
    pub const fn shifted(token: KeyToken) -> Self {
        Self {
            token,
            shift: true,
            ctrl: false,
            alt: false,
        }
    }

    #[must_use]
    pub const fn ctrl_char(ch: char) -> Self {
        Self {
            token: KeyToken::Char(ch),
            shift: false,
            ctrl: true,
            alt: false,
        }
    }

    #[must_use]
    pub const fn ctrl_shift_char(ch: char) -> Self {
        Self {
            token: KeyToken::Char(ch),
            shift: true,
            ctrl: true,
            alt: false,
        }
    }

    /// Converts a terminal key event. Character tokens are folded to ascii
    /// lowercase, with the shift state carried by the modifier flag, so
    /// shifted letters resolve the same way regardless of how the terminal
    /// reports them. Keys the engine has no use for return `None`.
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        let mut shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let token = match event.code {
            KeyCode::Char(ch) => {
                if ch.is_ascii_uppercase() {
                    shift = true;
                }
                KeyToken::Char(ch.to_ascii_lowercase())
            }
            KeyCode::Up => KeyToken::Up,
            KeyCode::Down => KeyToken::Down,
            KeyCode::Left => KeyToken::Left,
            KeyCode::Right => KeyToken::Right,
            _ => return None,
        };
        Some(Self {
            token,
            shift,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        })
    }

    #[must_use]
    pub fn display(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_owned());
        }
        if self.alt {
            parts.push("Alt".to_owned());
        }
        if self.shift {
            parts.push("Shift".to_owned());
        }
        parts.push(match self.token {
            KeyToken::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyToken::Up => "Up".to_owned(),
            KeyToken::Down => "Down".to_owned(),
            KeyToken::Left => "Left".to_owned(),
            KeyToken::Right => "Right".to_owned(),
        });
        parts.join("+")
    }
}

/// Engine operations reachable from the keyboard. `Refresh` is host-owned:
/// the engine has no I/O, so [`SelectionState::dispatch`] ignores it and the
/// host is expected to re-fetch the run list when it sees it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionCommand {
    NavRight,
    NavLeft,
    ExtendRight,
    ExtendLeft,
    SelectAll,
    DeselectAll,
    SelectCurrent,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub chord: KeyChord,
    pub command: SelectionCommand,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConflict {
    pub chord: KeyChord,
    pub commands: Vec<SelectionCommand>,
}

#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    #[must_use]
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    #[must_use]
    pub fn default_bindings() -> Self {
        use KeyToken as Tok;
        use SelectionCommand as Cmd;
        let bindings = vec![
            bind(KeyChord::shifted(Tok::Right), Cmd::ExtendRight, "extend right"),
            bind(KeyChord::shifted(Tok::Down), Cmd::ExtendRight, "extend right"),
            bind(KeyChord::plain(Tok::Right), Cmd::NavRight, "next run"),
            bind(KeyChord::plain(Tok::Down), Cmd::NavRight, "next run"),
            bind(KeyChord::shifted(Tok::Left), Cmd::ExtendLeft, "extend left"),
            bind(KeyChord::shifted(Tok::Up), Cmd::ExtendLeft, "extend left"),
            bind(KeyChord::plain(Tok::Left), Cmd::NavLeft, "previous run"),
            bind(KeyChord::plain(Tok::Up), Cmd::NavLeft, "previous run"),
            bind(
                KeyChord::ctrl_shift_char('d'),
                Cmd::SelectCurrent,
                "select only current run",
            ),
            bind(KeyChord::ctrl_char('d'), Cmd::DeselectAll, "deselect all"),
            bind(KeyChord::ctrl_char('a'), Cmd::SelectAll, "select all"),
            bind(
                KeyChord::shifted(Tok::Char('r')),
                Cmd::Refresh,
                "refresh run list",
            ),
        ];
        Self { bindings }
    }

    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn resolve(&self, chord: KeyChord) -> Option<SelectionCommand> {
        self.bindings
            .iter()
            .find(|binding| binding.chord == chord)
            .map(|binding| binding.command)
    }

    #[must_use]
    pub fn resolve_event(&self, event: &KeyEvent) -> Option<SelectionCommand> {
        KeyChord::from_event(event).and_then(|chord| self.resolve(chord))
    }

    /// Chords bound to more than one command. The default layout has none;
    /// hosts that splice in their own bindings can surface these in a
    /// diagnostics view.
    #[must_use]
    pub fn conflicts(&self) -> Vec<KeyConflict> {
        let mut by_chord: HashMap<KeyChord, Vec<SelectionCommand>> = HashMap::new();
        for binding in &self.bindings {
            by_chord
                .entry(binding.chord)
                .or_default()
                .push(binding.command);
        }
        let mut conflicts: Vec<KeyConflict> = by_chord
            .into_iter()
            .filter_map(|(chord, mut commands)| {
                commands.dedup();
                if commands.len() > 1 {
                    Some(KeyConflict { chord, commands })
                } else {
                    None
                }
            })
            .collect();
        conflicts.sort_by(|a, b| a.chord.display().cmp(&b.chord.display()));
        conflicts
    }
}

fn bind(chord: KeyChord, command: SelectionCommand, description: &'static str) -> KeyBinding {
    KeyBinding {
        chord,
        command,
        description,
    }
}

impl SelectionState {
    /// Runs one keyboard command against the engine. `Refresh` is a no-op
    /// here; it belongs to the host.
    pub fn dispatch(&mut self, command: SelectionCommand) {
        match command {
            SelectionCommand::NavRight => self.nav_right(),
            SelectionCommand::NavLeft => self.nav_left(),
            SelectionCommand::ExtendRight => self.extend_right(),
            SelectionCommand::ExtendLeft => self.extend_left(),
            SelectionCommand::SelectAll => self.select_all(),
            SelectionCommand::DeselectAll => self.deselect_all(),
            SelectionCommand::SelectCurrent => self.select_current(),
            SelectionCommand::Refresh => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{KeyChord, KeyToken, Keymap, SelectionCommand};
    use crate::state::{keys, SelectionState};

    #[test]
    fn default_layout_matches_the_documented_contract() {
        let map = Keymap::default_bindings();
        let cases = [
            (KeyChord::plain(KeyToken::Right), SelectionCommand::NavRight),
            (KeyChord::plain(KeyToken::Down), SelectionCommand::NavRight),
            (KeyChord::plain(KeyToken::Left), SelectionCommand::NavLeft),
            (KeyChord::plain(KeyToken::Up), SelectionCommand::NavLeft),
            (
                KeyChord::shifted(KeyToken::Right),
                SelectionCommand::ExtendRight,
            ),
            (
                KeyChord::shifted(KeyToken::Up),
                SelectionCommand::ExtendLeft,
            ),
            (KeyChord::ctrl_char('a'), SelectionCommand::SelectAll),
            (KeyChord::ctrl_char('d'), SelectionCommand::DeselectAll),
            (
                KeyChord::ctrl_shift_char('d'),
                SelectionCommand::SelectCurrent,
            ),
            (
                KeyChord::shifted(KeyToken::Char('r')),
                SelectionCommand::Refresh,
            ),
        ];
        for (chord, command) in cases {
            assert_eq!(map.resolve(chord), Some(command), "{}", chord.display());
        }
    }

    #[test]
    fn default_layout_has_no_conflicts() {
        assert!(Keymap::default_bindings().conflicts().is_empty());
    }

    #[test]
    fn ctrl_d_and_ctrl_shift_d_are_distinct() {
        let map = Keymap::default_bindings();
        assert_ne!(
            map.resolve(KeyChord::ctrl_char('d')),
            map.resolve(KeyChord::ctrl_shift_char('d'))
        );
    }

    #[test]
    fn uppercase_char_events_fold_to_shifted_lowercase() {
        let event = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        let chord = KeyChord::from_event(&event).unwrap();
        assert_eq!(chord, KeyChord::shifted(KeyToken::Char('r')));
        assert_eq!(
            Keymap::default_bindings().resolve_event(&event),
            Some(SelectionCommand::Refresh)
        );
    }

    #[test]
    fn unmapped_keys_resolve_to_nothing() {
        let map = Keymap::default_bindings();
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map.resolve_event(&event), None);
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map.resolve_event(&event), None);
    }

    #[test]
    fn dispatch_drives_the_engine() {
        let mut state = SelectionState::new();
        state.set_available(keys(&["a", "b", "c"]));
        state.dispatch(SelectionCommand::NavRight);
        assert_eq!(state.current(), Some("a"));
        state.dispatch(SelectionCommand::ExtendRight);
        assert_eq!(state.ordered_selected(), keys(&["a", "b"]));
        state.dispatch(SelectionCommand::SelectCurrent);
        assert_eq!(state.ordered_selected(), keys(&["a"]));
        state.dispatch(SelectionCommand::SelectAll);
        assert_eq!(state.ordered_selected(), keys(&["a", "b", "c"]));
        state.dispatch(SelectionCommand::DeselectAll);
        assert!(state.selected().is_empty());
        // Refresh is host-owned and leaves the engine untouched.
        let before = state.clone();
        state.dispatch(SelectionCommand::Refresh);
        assert_eq!(state, before);
    }

    #[test]
    fn conflict_detector_reports_duplicates() {
        let mut bindings = Keymap::default_bindings().bindings().to_vec();
        bindings.push(super::bind(
            KeyChord::ctrl_char('a'),
            SelectionCommand::DeselectAll,
            "duplicate for test",
        ));
        let map = Keymap::new(bindings);
        let conflicts = map.conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].chord, KeyChord::ctrl_char('a'));
    }
}
