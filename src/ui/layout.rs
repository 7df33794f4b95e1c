//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct LayoutInfo {
    pub list_area: Rect,
    pub preview_area: Rect,
    /// Present only while the add prompt is open.
    pub prompt_area: Option<Rect>,
    pub status_area: Rect,
    pub legend_area: Rect,
}

pub fn calculate_layout(size: Rect, prompt_open: bool) -> LayoutInfo {
    let vertical = if prompt_open {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(size)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(size)
    };

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(vertical[0]);

    if prompt_open {
        LayoutInfo {
            list_area: main[0],
            preview_area: main[1],
            prompt_area: Some(vertical[1]),
            status_area: vertical[2],
            legend_area: vertical[3],
        }
    } else {
        LayoutInfo {
            list_area: main[0],
            preview_area: main[1],
            prompt_area: None,
            status_area: vertical[1],
            legend_area: vertical[2],
        }
    }
}
