//! Groups widget: size suggestions or the last random split

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct GroupsWidget<'a> {
    state: &'a TuiState,
}

impl<'a> GroupsWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn suggestion_lines(&self) -> Vec<Line<'a>> {
        let Some((total, suggestions)) = &self.state.suggestions else {
            return Vec::new();
        };

        let mut lines = vec![Line::styled(
            format!("Suggestions for {} students:", total),
            Style::default().fg(Color::Cyan),
        )];
        for s in suggestions {
            let fit = if s.remainder == 0 {
                Span::styled("exact", Style::default().fg(Color::Green))
            } else {
                Span::styled(
                    format!("{} left over", s.remainder),
                    Style::default().fg(Color::Yellow),
                )
            };
            lines.push(Line::from(vec![
                Span::raw(format!("  :groups {} {}  ", s.size, s.group_count)),
                Span::styled(
                    format!("{} groups of {} ", s.group_count, s.size),
                    Style::default().fg(Color::DarkGray),
                ),
                fit,
            ]));
        }
        lines
    }

    fn group_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for (i, members) in self.state.groups.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Group {}: ", i + 1),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(members.join(", ")),
            ]));
        }
        if self.state.excluded > 0 {
            lines.push(Line::styled(
                format!("{} not assigned", self.state.excluded),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines
    }
}

impl<'a> Widget for GroupsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = if self.state.groups.is_empty() {
            self.suggestion_lines()
        } else {
            self.group_lines()
        };
        if lines.is_empty() {
            lines.push(Line::styled(
                ":suggest for sizes, :groups <size> <count> to split",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Groups ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
