//! Configuration and persisted preferences
//!
//! `Config` is the YAML file the user edits (server URL, download
//! directory, thumbnail rasterizer). Every field has a usable default,
//! so a missing config file is fine. `Prefs` is the small state file
//! the application writes itself: currently just the night-mode toggle,
//! read at startup and saved whenever the user flips it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the merge service, e.g. "http://192.168.1.20:8080"
    pub server_url: String,

    /// Directory merged documents are saved to. Defaults to the
    /// platform downloads directory, falling back to the working
    /// directory.
    pub download_dir: Option<PathBuf>,

    /// Filename for merged documents. When it already exists a
    /// timestamped name is used instead.
    pub output_name: String,

    /// Render first-page thumbnails in the preview pane.
    pub thumbnails_enabled: bool,

    /// External rasterizer command. Must accept pdftoppm-style
    /// arguments and write the page image to stdout.
    pub thumbnail_command: String,

    /// Pixel width thumbnails are rendered at.
    pub thumbnail_scale: u32,

    /// Terminal graphics protocol: auto, kitty, iterm2, sixel, halfblocks.
    pub image_protocol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            download_dir: None,
            output_name: "merged.pdf".to_string(),
            thumbnails_enabled: true,
            thumbnail_command: "pdftoppm".to_string(),
            thumbnail_scale: 480,
            image_protocol: "auto".to_string(),
        }
    }
}

impl Config {
    /// Resolve the directory merged documents are written to.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Application-written preferences, independent of the merge logic.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub night_mode: bool,
}

impl Prefs {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("mergetui").join("prefs.yaml"))
    }

    /// Load saved preferences, falling back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_yaml::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("No config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(self).context("Failed to serialize preferences")?;
        std::fs::write(&path, yaml)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
