//! TUI view state
//!
//! Everything the widgets render. Updated by [`TuiPresenter`](super::presenter::TuiPresenter)
//! from controller events and by the app for input editing.

use super::mode::InputMode;
use podium_application::TimerSnapshot;
use podium_domain::{GroupSuggestion, PresentationType};
use std::time::{Duration, Instant};

/// How long a flash message stays in the status bar
pub const FLASH_DURATION: Duration = Duration::from_secs(5);

/// Shown in the presenter box before anyone is drawn
pub const IDLE_PRESENTER: &str = "- - -";

#[derive(Debug, Clone)]
pub struct TuiState {
    pub mode: InputMode,

    // -- Input buffers --
    /// Insert mode buffer (a name to add)
    pub input: String,
    pub cursor_pos: usize,
    /// Command mode buffer (without the leading `:`)
    pub command_input: String,
    pub command_cursor: usize,

    // -- Roster & draws --
    pub roster: Vec<String>,
    pub available: usize,
    pub chosen: usize,
    pub can_draw: bool,
    /// Name shown in the presenter box
    pub presenter: String,
    /// Names drawn so far, in draw order
    pub drawn: Vec<String>,
    /// "Name - HH:MM:SS", newest first
    pub history: Vec<String>,
    pub exhausted: bool,

    // -- Timer --
    pub timer: TimerSnapshot,
    pub timer_expired: bool,

    // -- Saved lists & types --
    pub lists: Vec<String>,
    pub selected_list: Option<String>,
    pub types: Vec<String>,
    pub selected_type: Option<PresentationType>,

    // -- Groups --
    pub suggestions: Option<(usize, Vec<GroupSuggestion>)>,
    pub groups: Vec<Vec<String>>,
    pub excluded: usize,

    // -- UI --
    pub flash_message: Option<(String, Instant)>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            input: String::new(),
            cursor_pos: 0,
            command_input: String::new(),
            command_cursor: 0,
            roster: Vec::new(),
            available: 0,
            chosen: 0,
            can_draw: false,
            presenter: IDLE_PRESENTER.to_string(),
            drawn: Vec::new(),
            history: Vec::new(),
            exhausted: false,
            timer: TimerSnapshot {
                remaining_seconds: 0,
                default_seconds: 0,
                running: false,
                active_preset: None,
            },
            timer_expired: false,
            lists: Vec::new(),
            selected_list: None,
            types: Vec::new(),
            selected_type: None,
            suggestions: None,
            groups: Vec::new(),
            excluded: 0,
            flash_message: None,
            show_help: false,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.active_cursor();
        self.active_input_mut().insert(cursor, c);
        *self.active_cursor_mut() += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input_mut();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            input.remove(cursor - prev_char_len);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let prev_char_len = self.active_input()[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.active_cursor();
        let next_char_len = self.active_input()[cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        *self.active_cursor_mut() += next_char_len;
    }

    pub fn cursor_home(&mut self) {
        *self.active_cursor_mut() = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.active_input().len();
        *self.active_cursor_mut() = len;
    }

    /// Take the insert buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Take the command buffer contents and clear it
    pub fn take_command(&mut self) -> String {
        self.command_cursor = 0;
        std::mem::take(&mut self.command_input)
    }

    // -- Active buffer helpers (routes to input or command based on mode) --

    fn active_input(&self) -> &str {
        match self.mode {
            InputMode::Command => &self.command_input,
            _ => &self.input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            InputMode::Command => &mut self.command_input,
            _ => &mut self.input,
        }
    }

    fn active_cursor(&self) -> usize {
        match self.mode {
            InputMode::Command => self.command_cursor,
            _ => self.cursor_pos,
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            InputMode::Command => &mut self.command_cursor,
            _ => &mut self.cursor_pos,
        }
    }

    /// Roster names paired with whether that entry has presented.
    ///
    /// Duplicates are matched by count, first occurrences first.
    pub fn roster_marks(&self) -> Vec<(&str, bool)> {
        let mut pending: Vec<&str> = self.drawn.iter().map(String::as_str).collect();
        self.roster
            .iter()
            .map(|name| {
                let done = match pending.iter().position(|d| *d == name.as_str()) {
                    Some(i) => {
                        pending.swap_remove(i);
                        true
                    }
                    None => false,
                };
                (name.as_str(), done)
            })
            .collect()
    }

    // -- Flash --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing() {
        let mut state = TuiState::new();
        state.mode = InputMode::Insert;

        state.insert_char('Z');
        state.insert_char('o');
        state.insert_char('ë');
        assert_eq!(state.input, "Zoë");
        assert_eq!(state.cursor_pos, 4);

        state.delete_char();
        assert_eq!(state.input, "Zo");
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn test_command_buffer_separate() {
        let mut state = TuiState::new();

        state.mode = InputMode::Insert;
        state.insert_char('a');

        state.mode = InputMode::Command;
        state.insert_char('q');
        assert_eq!(state.command_input, "q");
        assert_eq!(state.input, "a");
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TuiState::new();
        state.mode = InputMode::Command;
        for c in "pck".chars() {
            state.insert_char(c);
        }
        state.cursor_left();
        state.cursor_left();
        state.insert_char('i');
        assert_eq!(state.command_input, "pick");
        assert_eq!(state.command_cursor, 2);

        state.cursor_home();
        state.cursor_left();
        assert_eq!(state.command_cursor, 0);
        state.cursor_end();
        state.cursor_right();
        assert_eq!(state.command_cursor, 4);
    }

    #[test]
    fn test_take_clears_buffers() {
        let mut state = TuiState::new();
        state.input = "Ann".into();
        state.cursor_pos = 3;
        assert_eq!(state.take_input(), "Ann");
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);

        state.command_input = "pick".into();
        state.command_cursor = 4;
        assert_eq!(state.take_command(), "pick");
        assert_eq!(state.command_cursor, 0);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("saved");
        state.expire_flash(FLASH_DURATION);
        assert!(state.flash_message.is_some());
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_roster_marks_handle_duplicates() {
        let mut state = TuiState::new();
        state.roster = vec!["Ann".into(), "Ben".into(), "Ann".into()];
        state.drawn = vec!["Ann".into()];
        assert_eq!(
            state.roster_marks(),
            vec![("Ann", true), ("Ben", false), ("Ann", false)]
        );
    }

    #[test]
    fn test_idle_presenter() {
        assert_eq!(TuiState::new().presenter, "- - -");
    }
}
