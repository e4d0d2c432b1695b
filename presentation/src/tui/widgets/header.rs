//! Header widget: selected list and draw counts

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = self
            .state
            .selected_list
            .as_deref()
            .unwrap_or("(unsaved roster)");

        let (status, status_color) = if self.state.exhausted {
            ("Everyone has presented", Color::Magenta)
        } else if self.state.can_draw {
            ("Ready", Color::Green)
        } else {
            ("Add names to begin", Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(status_color)),
            Span::styled(
                list,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} left", self.state.available),
                Style::default().fg(Color::White),
            ),
            Span::raw(" · "),
            Span::styled(
                format!("{} presented", self.state.chosen),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Podium ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
