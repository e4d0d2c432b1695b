//! Spotlight widget: the current presenter

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SpotlightWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SpotlightWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for SpotlightWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let name_style = if self.state.chosen == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };

        let hint = if self.state.can_draw {
            "p: pick next"
        } else if self.state.exhausted {
            ":reset to start over"
        } else {
            ""
        };

        let lines = vec![
            Line::styled(self.state.presenter.as_str(), name_style),
            Line::styled(hint, Style::default().fg(Color::DarkGray)),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Presenter ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
