//! Toast notifications

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Theme;

/// Render a toast notification (brief pop-up message). Messages starting
/// with "Error:" get the error styling.
pub fn render_toast(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let max_width = (area.width as usize).min(80);
    let toast_width = (message.len() + 6).min(max_width) as u16;
    let toast_height = 4;

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = 2;

    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", theme.error)
    } else {
        ("✓ ", theme.success)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), Style::default()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
