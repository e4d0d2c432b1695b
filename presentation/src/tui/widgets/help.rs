//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Keys and commands, in display order
const KEYS: &[(&str, &str)] = &[
    ("p / Enter", "Pick the next presenter"),
    ("r", "Put everyone back in the pool"),
    ("space", "Start / pause the timer"),
    ("t", "Reset the timer"),
    ("1-9", "Apply a timer preset"),
    ("i", "Add names (Insert mode)"),
    (":", "Command mode"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":add <name>  :remove <name>  :clear", "Edit the roster"),
    (":open <file>  :import <file.csv>", "Load names from a file"),
    (":save <name>  :load <name>  :delete  :lists", "Saved lists"),
    (":preset <secs>  :start  :pause  :toggle  :timer-reset", "Timer"),
    (":suggest  :groups <size> <count>", "Groups"),
    (":type <name>  :add-type <name> <secs> <desc>", "Presentation types"),
    (":delete-type <name>  :types", "Manage types"),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn entries(entries: &'static [(&'static str, &'static str)], color: Color) -> Vec<Line<'static>> {
        entries
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(*key, Style::default().fg(color)),
                    Span::raw(" - "),
                    Span::raw(*what),
                ])
            })
            .collect()
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![Self::section("Keys"), Line::from("")];
        lines.extend(Self::entries(KEYS, Color::Yellow));
        lines.push(Line::from(""));
        lines.push(Self::section("Commands"));
        lines.push(Line::from(""));
        lines.extend(Self::entries(COMMANDS, Color::Green));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
