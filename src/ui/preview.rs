//! First-page preview pane
//!
//! Shows the rendered thumbnail for the entry under the cursor, or a
//! placeholder while rendering is pending, has failed, or thumbnails are
//! disabled.

use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_image::{protocol::StatefulProtocol, Resize, StatefulImage};

use crate::model::{EntryId, FileEntry, ThumbnailStatus};
use crate::ui::theme::Theme;
use crate::utils::format_bytes;

pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    entry: Option<&FileEntry>,
    protocols: &mut HashMap<EntryId, StatefulProtocol>,
    thumbnails_enabled: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(entry) = entry else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No file selected",
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Center);
        f.render_widget(hint, inner);
        return;
    };

    if thumbnails_enabled && entry.thumbnail == ThumbnailStatus::Ready {
        if let Some(protocol) = protocols.get_mut(&entry.id) {
            let image = StatefulImage::default().resize(Resize::Fit(None));
            f.render_stateful_widget(image, inner, protocol);
            return;
        }
    }

    let status_line = if !thumbnails_enabled {
        "Thumbnails disabled"
    } else {
        match entry.thumbnail {
            ThumbnailStatus::Pending => "Rendering preview...",
            ThumbnailStatus::Failed => "Preview unavailable",
            ThumbnailStatus::Ready => "Loading preview...",
        }
    };

    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "PDF",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(entry.display_name.clone()),
        Line::from(Span::styled(
            format_bytes(entry.size),
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(Span::styled(status_line, Style::default().fg(theme.dim))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(placeholder, inner);
}
