//! Background merge request
//!
//! One task per user-triggered merge. The task always sends exactly one
//! `MergeOutcome` — success, server failure, transport failure, or a
//! failed local save all end up as a message the draw loop applies with
//! `logic::merge::finish`, which is what re-enables the trigger.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc::UnboundedSender;

use crate::api::MergeClient;
use crate::logic::errors::merge_failure_message;
use crate::logic::merge::{timestamped_name, MergeOutcome, MergePart};

pub fn spawn_merge(
    client: MergeClient,
    parts: Vec<MergePart>,
    download_dir: PathBuf,
    output_name: String,
    tx: UnboundedSender<MergeOutcome>,
) {
    tokio::spawn(async move {
        let outcome = run_merge(client, parts, download_dir, output_name).await;
        let _ = tx.send(outcome);
    });
}

async fn run_merge(
    client: MergeClient,
    parts: Vec<MergePart>,
    download_dir: PathBuf,
    output_name: String,
) -> MergeOutcome {
    let count = parts.len();
    crate::log_debug(&format!(
        "Merge: submitting {} files to {}",
        count,
        client.base_url()
    ));

    let bytes = match client.merge(&parts).await {
        Ok(bytes) => bytes,
        Err(e) => {
            crate::log_debug(&format!("Merge: request failed: {:#}", e));
            return MergeOutcome::Failed {
                message: merge_failure_message(&e, client.base_url()),
            };
        }
    };

    if let Err(e) = tokio::fs::create_dir_all(&download_dir).await {
        return MergeOutcome::Failed {
            message: format!(
                "Merged document could not be saved to {}: {}",
                download_dir.display(),
                e
            ),
        };
    }

    let path = pick_output_path(&download_dir, &output_name).await;
    match tokio::fs::write(&path, &bytes).await {
        Ok(()) => {
            crate::log_debug(&format!(
                "Merge: saved {} bytes to {}",
                bytes.len(),
                path.display()
            ));
            MergeOutcome::Saved {
                path,
                size: bytes.len() as u64,
                merged: count,
            }
        }
        Err(e) => MergeOutcome::Failed {
            message: format!("Merged document could not be saved: {e}"),
        },
    }
}

/// The configured output name, or a timestamped variant when that file
/// already exists.
async fn pick_output_path(dir: &Path, output_name: &str) -> PathBuf {
    let default = dir.join(output_name);
    if !tokio::fs::try_exists(&default).await.unwrap_or(false) {
        return default;
    }
    dir.join(timestamped_name(output_name, &chrono::Local::now()))
}
