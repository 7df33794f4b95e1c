//! File queue list
//!
//! Renders the queue in merge order: position number, name, size, and a
//! thumbnail marker. A grabbed entry is tagged and accented; while a grab
//! is active the cursor row is the drop target and is styled in lockstep.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::{EntryId, FileEntry, ThumbnailStatus};
use crate::ui::theme::Theme;
use crate::utils::{format_bytes, truncate_name};

fn thumb_marker(status: ThumbnailStatus) -> &'static str {
    match status {
        ThumbnailStatus::Pending => "·",
        ThumbnailStatus::Ready => "▣",
        ThumbnailStatus::Failed => "▢",
    }
}

pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    entries: &[FileEntry],
    state: &mut ListState,
    grabbed: Option<EntryId>,
    theme: &Theme,
) {
    let title = format!(" Files ({}) - merge order ", entries.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.border));

    if entries.is_empty() {
        let empty = List::new([ListItem::new(Line::from(Span::styled(
            "  Queue is empty - press 'a' to add PDFs or drop files here",
            Style::default().fg(theme.dim),
        )))])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Fixed columns: " NN. " + marker + size suffix
    let name_budget = (area.width as usize).saturating_sub(24).max(8);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_grabbed = grabbed == Some(entry.id);

            let number = Span::styled(
                format!(" {:>2}. ", idx + 1),
                Style::default().fg(theme.accent),
            );
            let marker = Span::styled(
                format!("{} ", thumb_marker(entry.thumbnail)),
                Style::default().fg(theme.dim),
            );
            let name_style = if is_grabbed {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let name = Span::styled(
                truncate_name(&entry.display_name, name_budget),
                name_style,
            );
            let size = Span::styled(
                format!("  {}", format_bytes(entry.size)),
                Style::default().fg(theme.dim),
            );
            let grab_tag = if is_grabbed {
                Span::styled(
                    "  [grabbed]",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("")
            };

            ListItem::new(Line::from(vec![number, marker, name, size, grab_tag]))
        })
        .collect();

    // While a grab is active the cursor is the drop target; style it
    // with the accent so source and target read as one gesture.
    let highlight = if grabbed.is_some() {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(if grabbed.is_some() { "↕" } else { ">" });

    f.render_stateful_widget(list, area, state);
}
