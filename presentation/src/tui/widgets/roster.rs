//! Roster widget: every name, with who has presented marked

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct RosterWidget<'a> {
    state: &'a TuiState,
}

impl<'a> RosterWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for RosterWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = if self.state.roster.is_empty() {
            vec![Line::styled(
                "i: add names, :open or :import a file",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            self.state
                .roster_marks()
                .into_iter()
                .map(|(name, done)| {
                    if done {
                        Line::from(vec![
                            Span::styled("✓ ", Style::default().fg(Color::Green)),
                            Span::styled(
                                name.to_string(),
                                Style::default()
                                    .fg(Color::DarkGray)
                                    .add_modifier(Modifier::CROSSED_OUT),
                            ),
                        ])
                    } else {
                        Line::from(vec![Span::raw("  "), Span::raw(name.to_string())])
                    }
                })
                .collect()
        };

        let title = format!(" Roster ({}) ", self.state.roster.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
