//! Status bar widget: mode indicator + key hints + flash messages

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mode_line = Line::from(vec![Span::styled(format!(" {} ", mode_text), mode_style)]);
        let mode_width = mode_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &mode_line, mode_width);

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => match mode {
                InputMode::Normal => "p:pick  space:timer  1-9:preset  r:reset  ?:help  q:quit".into(),
                InputMode::Insert => "Enter:add name  Esc:normal".into(),
                InputMode::Command => "Enter:run  Esc:cancel  help:commands".into(),
            },
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            let right_line = Line::from(vec![Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )]);
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
