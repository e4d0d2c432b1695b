//! Input widget: name entry and the `:` command line

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// Terminal cursor position while an editing mode is active.
    pub fn cursor_position(state: &TuiState, area: Rect) -> Option<Position> {
        let (prompt, text, cursor) = match state.mode {
            InputMode::Insert => (INSERT_PROMPT, &state.input, state.cursor_pos),
            InputMode::Command => (COMMAND_PROMPT, &state.command_input, state.command_cursor),
            InputMode::Normal => return None,
        };
        let column = prompt.chars().count() + text[..cursor].chars().count();
        let x = area.x + 1 + column as u16;
        Some(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1))
    }
}

const INSERT_PROMPT: &str = "add> ";
const COMMAND_PROMPT: &str = ":";

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (prompt, text, color, active) = match self.state.mode {
            InputMode::Insert => (INSERT_PROMPT, self.state.input.as_str(), Color::Green, true),
            InputMode::Command => (
                COMMAND_PROMPT,
                self.state.command_input.as_str(),
                Color::Yellow,
                true,
            ),
            InputMode::Normal => (
                "",
                "i: add a name   :: command   ?: help",
                Color::DarkGray,
                false,
            ),
        };

        let line = Line::from(vec![
            Span::styled(
                prompt,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                text,
                if active {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .style(Style::default().fg(if active { color } else { Color::DarkGray }));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_mode() {
        let area = Rect::new(0, 20, 80, 3);
        let mut state = TuiState::new();
        assert!(InputWidget::cursor_position(&state, area).is_none());

        state.mode = InputMode::Command;
        state.command_input = "pick".into();
        state.command_cursor = 4;
        assert_eq!(
            InputWidget::cursor_position(&state, area),
            Some(Position::new(6, 21))
        );

        state.mode = InputMode::Insert;
        state.input = "Zoë".into();
        state.cursor_pos = state.input.len();
        assert_eq!(
            InputWidget::cursor_position(&state, area),
            Some(Position::new(9, 21))
        );
    }
}
