//! Hotkey legend

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    prompt_open: bool,
    grab_active: bool,
    merge_in_flight: bool,
) -> Vec<Span<'static>> {
    let key = |s: &'static str| Span::styled(s, Style::default().fg(Color::Yellow));

    if prompt_open {
        return vec![
            key("Enter"),
            Span::raw(":Add  "),
            key("Esc"),
            Span::raw(":Cancel  "),
        ];
    }

    if grab_active {
        return vec![
            key("↑/↓"),
            Span::raw(":Pick target  "),
            key("Space"),
            Span::raw(":Drop (swap)  "),
            key("Esc"),
            Span::raw(":Cancel grab  "),
        ];
    }

    let mut spans = vec![
        key("↑/↓"),
        Span::raw(":Nav  "),
        key("a"),
        Span::raw(":Add  "),
        key("d"),
        Span::raw(":Remove  "),
        key("Space"),
        Span::raw(":Grab  "),
        key("J/K"),
        Span::raw(":Move  "),
    ];

    if merge_in_flight {
        spans.push(Span::styled("m", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(":Merging...  "));
    } else {
        spans.push(key("m"));
        spans.push(Span::raw(":Merge  "));
    }

    spans.push(key("n"));
    spans.push(Span::raw(":Night mode  "));
    spans.push(key("q"));
    spans.push(Span::raw(":Quit"));

    spans
}

pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    prompt_open: bool,
    grab_active: bool,
    merge_in_flight: bool,
    theme: &Theme,
) {
    let spans = build_hotkey_spans(prompt_open, grab_active, merge_in_flight);
    let legend = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(spans: &[Span<'static>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn grab_mode_shows_drop_and_cancel() {
        let text = text_of(&build_hotkey_spans(false, true, false));
        assert!(text.contains("Drop"));
        assert!(text.contains("Cancel grab"));
        assert!(!text.contains("Merge"));
    }

    #[test]
    fn merge_trigger_reads_disabled_while_in_flight() {
        let text = text_of(&build_hotkey_spans(false, false, true));
        assert!(text.contains("Merging..."));
    }
}
