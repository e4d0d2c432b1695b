//! Presentation types widget: saved types and the selected description

use crate::tui::state::TuiState;
use podium_domain::format_clock;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct TypesWidget<'a> {
    state: &'a TuiState,
}

impl<'a> TypesWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for TypesWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();

        match &self.state.selected_type {
            Some(selected) => {
                lines.push(Line::styled(
                    format!(
                        "{} ({})",
                        selected.name,
                        format_clock(selected.default_duration_seconds)
                    ),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                lines.extend(
                    selected
                        .description_lines()
                        .into_iter()
                        .map(|line| Line::raw(line.to_string())),
                );
            }
            None if self.state.types.is_empty() => {
                lines.push(Line::styled(
                    ":add-type <name> <secs> <description>",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            None => {
                lines.push(Line::styled(
                    format!("Types: {}", self.state.types.join(", ")),
                    Style::default().fg(Color::Cyan),
                ));
                lines.push(Line::styled(
                    ":type <name> to select",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Presentation type ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
