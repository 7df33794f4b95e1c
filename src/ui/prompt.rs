//! Add-files input box
//!
//! Renders the prompt where the user types a path or glob pattern, with
//! a blinking cursor while it is receiving keystrokes.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

pub fn render_add_prompt(f: &mut Frame, area: Rect, input: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add PDFs (path or glob) - Enter to add, Esc to cancel ")
        .border_style(Style::default().fg(theme.accent));

    let cursor = Span::styled(
        "█",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::SLOW_BLINK),
    );

    let line = Line::from(vec![Span::raw(" "), Span::raw(input.to_string()), cursor]);
    let paragraph = Paragraph::new(line).block(block);
    f.render_widget(paragraph, area);
}
