//! TUI mode system (vim-like mode switching)
//!
//! - Normal mode: single-key shortcuts (pick, timer, presets)
//! - Insert mode: type a name and press Enter to add it to the roster
//! - Command mode: `:` commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Shortcut keys
    #[default]
    Normal,
    /// Adding names
    Insert,
    /// `:` command line
    Command,
}

impl InputMode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    /// Get the mode color for status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
            Self::Command => Color::Yellow,
        }
    }
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Mode transitions
    EnterInsert,
    EnterCommand,
    ExitToNormal,

    // Text editing
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Submit
    SubmitInput,
    SubmitCommand,

    // Picker shortcuts
    Pick,
    ResetRoster,
    ToggleTimer,
    ResetTimer,
    /// Apply the n-th timer preset (1-based)
    Preset(usize),

    // Application
    ShowHelp,
    Quit,
    None,
}

/// Map a key event to an action for the given mode
pub fn handle_key_event(mode: InputMode, key: KeyEvent) -> KeyAction {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match mode {
        InputMode::Normal => handle_normal(key),
        InputMode::Insert => handle_editing(key, KeyAction::SubmitInput),
        InputMode::Command => handle_editing(key, KeyAction::SubmitCommand),
    }
}

fn handle_normal(key: KeyEvent) -> KeyAction {
    if !(key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('i') | KeyCode::Char('a') => KeyAction::EnterInsert,
        KeyCode::Char(':') => KeyAction::EnterCommand,
        KeyCode::Char('p') | KeyCode::Enter => KeyAction::Pick,
        KeyCode::Char('r') => KeyAction::ResetRoster,
        KeyCode::Char(' ') => KeyAction::ToggleTimer,
        KeyCode::Char('t') => KeyAction::ResetTimer,
        KeyCode::Char(c @ '1'..='9') => KeyAction::Preset(c as usize - '0' as usize),
        KeyCode::Char('?') => KeyAction::ShowHelp,
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn handle_editing(key: KeyEvent, submit: KeyAction) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::ExitToNormal,
        KeyCode::Enter => submit,
        KeyCode::Char(c) => KeyAction::InsertChar(c),
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
        assert_eq!(InputMode::Command.indicator(), "COMMAND");
    }

    #[test]
    fn test_normal_mode_shortcuts() {
        let normal = |code| handle_key_event(InputMode::Normal, key(code));
        assert_eq!(normal(KeyCode::Char('p')), KeyAction::Pick);
        assert_eq!(normal(KeyCode::Char('r')), KeyAction::ResetRoster);
        assert_eq!(normal(KeyCode::Char(' ')), KeyAction::ToggleTimer);
        assert_eq!(normal(KeyCode::Char('t')), KeyAction::ResetTimer);
        assert_eq!(normal(KeyCode::Char('1')), KeyAction::Preset(1));
        assert_eq!(normal(KeyCode::Char('9')), KeyAction::Preset(9));
        assert_eq!(normal(KeyCode::Char('0')), KeyAction::None);
        assert_eq!(normal(KeyCode::Char('?')), KeyAction::ShowHelp);
        assert_eq!(normal(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(normal(KeyCode::Char(':')), KeyAction::EnterCommand);
        assert_eq!(normal(KeyCode::Char('i')), KeyAction::EnterInsert);
    }

    #[test]
    fn test_shifted_punctuation_still_works() {
        let colon = KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT);
        assert_eq!(
            handle_key_event(InputMode::Normal, colon),
            KeyAction::EnterCommand
        );
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Normal, InputMode::Insert, InputMode::Command] {
            assert_eq!(handle_key_event(mode, ctrl_c), KeyAction::Quit);
        }
    }

    #[test]
    fn test_editing_modes_type_shortcut_letters() {
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Char('p'))),
            KeyAction::InsertChar('p')
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Enter)),
            KeyAction::SubmitInput
        );
        assert_eq!(
            handle_key_event(InputMode::Command, key(KeyCode::Enter)),
            KeyAction::SubmitCommand
        );
        assert_eq!(
            handle_key_event(InputMode::Command, key(KeyCode::Esc)),
            KeyAction::ExitToNormal
        );
    }
}
