//! Timer widget: countdown, run state and presets

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct TimerWidget<'a> {
    state: &'a TuiState,
    presets: &'a [u32],
}

impl<'a> TimerWidget<'a> {
    pub fn new(state: &'a TuiState, presets: &'a [u32]) -> Self {
        Self { state, presets }
    }
}

/// `90` → `1:30`, `120` → `2m`
fn preset_label(seconds: u32) -> String {
    if seconds % 60 == 0 {
        format!("{}m", seconds / 60)
    } else {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

impl<'a> Widget for TimerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let timer = &self.state.timer;

        let clock_color = if self.state.timer_expired {
            Color::Red
        } else if timer.running {
            Color::Green
        } else {
            Color::White
        };
        let action = if timer.running { "Pause" } else { "Start" };

        let clock = Line::from(vec![
            Span::styled(
                timer.display(),
                Style::default()
                    .fg(clock_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   space: {}  t: reset", action),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let mut preset_spans = Vec::new();
        for (i, seconds) in self.presets.iter().enumerate().take(9) {
            let style = if timer.active_preset == Some(*seconds) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            preset_spans.push(Span::styled(
                format!(" {}:{} ", i + 1, preset_label(*seconds)),
                style,
            ));
            preset_spans.push(Span::raw(" "));
        }

        let title = if self.state.timer_expired {
            " Timer: time's up! "
        } else {
            " Timer "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(clock_color));

        Paragraph::new(vec![clock, Line::from(preset_spans)])
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
