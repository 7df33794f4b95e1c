//! UI Model
//!
//! State for everything the user sees that is not the file queue itself:
//! selection, the grab used for reordering, the add prompt, the merge
//! trigger state, toasts, and the night-mode preference.

use std::time::Instant;

use super::files::EntryId;

/// State of the add-files input prompt.
#[derive(Clone, Debug, Default)]
pub struct AddPromptState {
    /// Path or glob pattern being typed.
    pub input: String,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Cursor position in the file list.
    pub selected: Option<usize>,

    /// Entry currently picked up for reordering. While set, the cursor
    /// marks the drop target; dropping on the grabbed entry itself is a
    /// no-op.
    pub grabbed: Option<EntryId>,

    /// Whether a merge request is outstanding. Doubles as the disabled
    /// state of the merge trigger; there is no request-level cancellation.
    pub merge_in_flight: bool,

    /// Add-files prompt, when open it consumes all key input.
    pub add_prompt: Option<AddPromptState>,

    /// Toast message (text, shown-at). Messages starting with "Error:"
    /// render in the error style.
    pub toast_message: Option<(String, Instant)>,

    /// Night-mode display preference, persisted across sessions.
    pub night_mode: bool,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(night_mode: bool) -> Self {
        Self {
            selected: None,
            grabbed: None,
            merge_in_flight: false,
            add_prompt: None,
            toast_message: None,
            night_mode,
            should_quit: false,
        }
    }

    /// Show a toast, replacing any currently visible one.
    pub fn toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    /// Whether a modal input is consuming keystrokes.
    pub fn has_prompt(&self) -> bool {
        self.add_prompt.is_some()
    }
}
