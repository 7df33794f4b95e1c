//! Bottom status line
//!
//! Queue totals, the merge service URL, and the merge trigger state.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;
use crate::utils::format_bytes;

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    file_count: usize,
    total_bytes: u64,
    server_url: &str,
    merge_in_flight: bool,
    theme: &Theme,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {} file{} ", file_count, if file_count == 1 { "" } else { "s" }),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({}) ", format_bytes(total_bytes)),
            Style::default().fg(theme.dim),
        ),
        Span::styled(
            format!(" {} ", server_url),
            Style::default().fg(theme.dim),
        ),
    ];

    if merge_in_flight {
        spans.push(Span::styled(
            "  Merging...",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
