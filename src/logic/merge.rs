//! Merge submission logic
//!
//! The pure half of the merge flow: the precondition on the queue, the
//! ordered payload handed to the client, and the trigger state
//! transitions around a request. The request itself lives in
//! `services::merge`.

use std::path::PathBuf;

use crate::model::{FileListModel, Model, UiModel};

/// Merging a single document would just be a copy.
pub const MIN_FILES_TO_MERGE: usize = 2;

/// One outbound `files[]` part: the filename the server sees and the
/// local path its bytes are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergePart {
    pub file_name: String,
    pub path: PathBuf,
}

/// How a merge request ended. Exactly one outcome is produced per
/// request, whatever happens.
#[derive(Debug)]
pub enum MergeOutcome {
    /// Merged document written to disk.
    Saved {
        path: PathBuf,
        size: u64,
        merged: usize,
    },
    /// Request or local save failed; `message` is the best available
    /// explanation (server `error` field, classified transport error,
    /// or I/O error).
    Failed { message: String },
}

/// Check whether the queue can be merged. Returns the message to show
/// the user when it cannot.
pub fn check_precondition(files: &FileListModel) -> Result<(), String> {
    match files.len() {
        0 => Err("No files queued for merging".to_string()),
        n if n < MIN_FILES_TO_MERGE => {
            Err("At least two files are needed to merge".to_string())
        }
        _ => Ok(()),
    }
}

/// The outbound parts in current queue order. The order of the returned
/// parts is the page order of the merged document.
pub fn merge_payload(files: &FileListModel) -> Vec<MergePart> {
    files
        .entries()
        .iter()
        .map(|e| MergePart {
            file_name: e.display_name.clone(),
            path: e.path.clone(),
        })
        .collect()
}

/// Disable the merge trigger for the duration of a request. Returns
/// false if a request is already outstanding (the trigger is disabled,
/// so a second activation is ignored).
pub fn begin(ui: &mut UiModel) -> bool {
    if ui.merge_in_flight {
        return false;
    }
    ui.merge_in_flight = true;
    true
}

/// Apply a merge outcome to the model.
///
/// Re-enables the trigger for every outcome variant. A saved document
/// additionally clears the queue, the selection, and any grab; a failure
/// leaves the queue intact so the user can retry.
pub fn finish(model: &mut Model, outcome: &MergeOutcome) {
    model.ui.merge_in_flight = false;

    match outcome {
        MergeOutcome::Saved { path, size, merged } => {
            model.files.clear();
            model.ui.selected = None;
            model.ui.grabbed = None;
            model.ui.toast(format!(
                "Merged {} files ({}) -> {}",
                merged,
                crate::utils::format_bytes(*size),
                path.display()
            ));
        }
        MergeOutcome::Failed { message } => {
            model.ui.toast(format!("Error: {message}"));
        }
    }
}

/// Derive a timestamped variant of the output name, used when the
/// default name already exists in the download directory.
pub fn timestamped_name(default_name: &str, now: &chrono::DateTime<chrono::Local>) -> String {
    let stamp = now.format("%Y%m%d-%H%M%S");
    match default_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}-{stamp}.{ext}"),
        None => format!("{default_name}-{stamp}"),
    }
}
