//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ──────────────────────────────────────┐
//! ├── Spotlight (5) ─────────┬── Roster (50%) ─────────┤
//! ├── Timer (5) ─────────────┼── History (25%) ────────┤
//! ├── Groups (flex) ─────────┼── Types (25%) ──────────┤
//! ├── Input (3) ─────────────┴─────────────────────────┤
//! └── StatusBar (1) ───────────────────────────────────┘

pub mod groups;
pub mod header;
pub mod help;
pub mod history;
pub mod input;
pub mod roster;
pub mod spotlight;
pub mod status_bar;
pub mod timer;
pub mod types;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub spotlight: Rect,
    pub timer: Rect,
    pub groups: Rect,
    pub roster: Rect,
    pub history: Rect,
    pub types: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Min(3),
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(columns[1]);

        Self {
            header: vertical[0],
            spotlight: left[0],
            timer: left[1],
            groups: left[2],
            roster: right[0],
            history: right[1],
            types: right[2],
            input: vertical[2],
            status_bar: vertical[3],
        }
    }

    /// Centered overlay covering the given percentages of `area`
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_terminal() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = MainLayout::compute(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.spotlight.height, 5);
        assert_eq!(layout.timer.y, layout.spotlight.y + 5);
        assert_eq!(layout.roster.x, layout.spotlight.width);
    }

    #[test]
    fn test_centered_overlay_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert_eq!(overlay.width, 60);
        assert_eq!(overlay.x, 20);
        assert!(overlay.bottom() <= area.bottom());
    }
}
