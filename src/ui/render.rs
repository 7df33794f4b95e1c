use ratatui::{widgets::Block, Frame};

use super::{file_list, layout, legend, preview, prompt, status_bar, theme, toast};
use crate::App;

/// Main render function - orchestrates all UI rendering. The whole frame
/// is redrawn from the model every time; list sizes are small enough
/// that full redraw beats incremental diffing.
pub fn render(f: &mut Frame, app: &mut App) {
    let theme = theme::theme(app.model.ui.night_mode);
    let size = f.area();

    f.render_widget(Block::default().style(theme.base), size);

    let layout_info = layout::calculate_layout(size, app.model.ui.has_prompt());

    // Temporary ListState synced back after rendering
    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(app.model.ui.selected);
    file_list::render_file_list(
        f,
        layout_info.list_area,
        app.model.files.entries(),
        &mut list_state,
        app.model.ui.grabbed,
        &theme,
    );
    app.model.ui.selected = list_state.selected();

    preview::render_preview(
        f,
        layout_info.preview_area,
        app.model.selected_entry(),
        &mut app.thumbnail_protocols,
        app.config.thumbnails_enabled,
        &theme,
    );

    if let (Some(area), Some(prompt_state)) =
        (layout_info.prompt_area, app.model.ui.add_prompt.as_ref())
    {
        prompt::render_add_prompt(f, area, &prompt_state.input, &theme);
    }

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.model.files.len(),
        app.model.files.total_bytes(),
        app.client.base_url(),
        app.model.ui.merge_in_flight,
        &theme,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.has_prompt(),
        app.model.ui.grabbed.is_some(),
        app.model.ui.merge_in_flight,
        &theme,
    );

    if let Some((message, _shown_at)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message, &theme);
    }
}
