//! Background thumbnail rendering
//!
//! One task per newly queued entry. Rasterization is delegated to an
//! external pdftoppm-style command that writes the first page as PNG to
//! stdout; the PNG is decoded off the runtime threads and wrapped in a
//! terminal-graphics protocol for the preview pane. A failure is logged
//! and reported as `Failed` — the entry keeps its placeholder and the
//! user is never interrupted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tokio::sync::mpsc::UnboundedSender;

use crate::model::EntryId;
use crate::ThumbnailUpdate;

pub fn spawn_render(
    id: EntryId,
    path: PathBuf,
    command: String,
    scale: u32,
    picker: Picker,
    tx: UnboundedSender<(EntryId, ThumbnailUpdate)>,
) {
    tokio::spawn(async move {
        match render_first_page(&command, &path, scale, picker).await {
            Ok(protocol) => {
                crate::log_debug(&format!("Thumbnail ready for {}", path.display()));
                let _ = tx.send((id, ThumbnailUpdate::Ready(protocol)));
            }
            Err(e) => {
                crate::log_debug(&format!(
                    "Thumbnail failed for {}: {:#}",
                    path.display(),
                    e
                ));
                let _ = tx.send((id, ThumbnailUpdate::Failed));
            }
        }
    });
}

async fn render_first_page(
    command: &str,
    path: &std::path::Path,
    scale: u32,
    picker: Picker,
) -> Result<StatefulProtocol> {
    let output = tokio::process::Command::new(command)
        .arg("-png")
        .arg("-f")
        .arg("1")
        .arg("-l")
        .arg("1")
        .arg("-scale-to")
        .arg(scale.to_string())
        .arg(path)
        .output()
        .await
        .with_context(|| format!("Failed to run {command}"))?;

    if !output.status.success() {
        anyhow::bail!(
            "{} exited with {}: {}",
            command,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let png = output.stdout;
    let img = tokio::task::spawn_blocking(move || image::load_from_memory(&png))
        .await
        .context("Decode task failed")?
        .context("Failed to decode rendered page")?;

    Ok(picker.new_resize_protocol(img))
}
