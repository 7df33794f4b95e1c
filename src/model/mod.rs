//! Pure Application Model
//!
//! Cloneable state for the application, split into focused sub-models:
//!
//! - **FileListModel**: the ordered file queue (merge order)
//! - **UiModel**: selection, grab, prompt, toast, preferences
//!
//! No I/O lives here; services and handlers mutate the model and the
//! renderer draws it. The model is constructed once at startup and owned
//! by the App — no ambient globals.

pub mod files;
pub mod ui;

pub use files::{EntryId, FileEntry, FileListModel, ThumbnailStatus};
pub use ui::{AddPromptState, UiModel};

/// Root application model.
#[derive(Clone, Debug)]
pub struct Model {
    /// The file queue; its order is the merge order.
    pub files: FileListModel,

    /// Everything else the user sees.
    pub ui: UiModel,
}

impl Model {
    pub fn new(night_mode: bool) -> Self {
        Self {
            files: FileListModel::new(),
            ui: UiModel::new(night_mode),
        }
    }

    /// Entry under the cursor, if any.
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.ui
            .selected
            .and_then(|idx| self.files.entries().get(idx))
    }

    /// Move the cursor down one entry.
    pub fn select_next(&mut self) {
        if self.files.is_empty() {
            self.ui.selected = None;
            return;
        }
        let last = self.files.len() - 1;
        self.ui.selected = Some(match self.ui.selected {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        });
    }

    /// Move the cursor up one entry.
    pub fn select_prev(&mut self) {
        if self.files.is_empty() {
            self.ui.selected = None;
            return;
        }
        self.ui.selected = Some(match self.ui.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Keep the cursor inside the list after removals.
    pub fn clamp_selection(&mut self) {
        if self.files.is_empty() {
            self.ui.selected = None;
        } else if let Some(idx) = self.ui.selected {
            let last = self.files.len() - 1;
            if idx > last {
                self.ui.selected = Some(last);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn model_with(n: usize) -> Model {
        let mut model = Model::new(false);
        for i in 0..n {
            model
                .files
                .add(PathBuf::from(format!("/docs/{i}.pdf")), 10);
        }
        model
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut model = model_with(2);
        model.select_next();
        model.select_next();
        model.select_next();
        assert_eq!(model.ui.selected, Some(1));

        model.select_prev();
        model.select_prev();
        model.select_prev();
        assert_eq!(model.ui.selected, Some(0));
    }

    #[test]
    fn clamp_after_removal() {
        let mut model = model_with(3);
        model.ui.selected = Some(2);
        let last = model.files.entries()[2].id;
        model.files.remove(last);
        model.clamp_selection();
        assert_eq!(model.ui.selected, Some(1));
    }

    #[test]
    fn clamp_on_empty_list_clears_selection() {
        let mut model = model_with(1);
        model.ui.selected = Some(0);
        model.files.clear();
        model.clamp_selection();
        assert_eq!(model.ui.selected, None);
    }
}
