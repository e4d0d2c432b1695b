//! History widget: draws since the roster was loaded, newest first

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HistoryWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HistoryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .state
            .history
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = if i == 0 { Color::Yellow } else { Color::Gray };
                Line::styled(label.as_str(), Style::default().fg(color))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" History ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
