use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

/// Terminal client for a remote PDF merge service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PDF files to queue at startup
    files: Vec<PathBuf>,

    /// Merge service URL (overrides config)
    #[arg(short, long)]
    server: Option<String>,

    /// Path to config file (default: ~/.config/mergetui/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging to the system temp directory
    #[arg(short, long)]
    debug: bool,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::MergeClient;
use config::{Config, Prefs};
use logic::ingest::IngestOutcome;
use logic::merge::MergeOutcome;
use model::{EntryId, Model, ThumbnailStatus};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Thumbnail result reported by a background render task. Not part of
/// the Model because the protocol is not cloneable.
pub enum ThumbnailUpdate {
    Ready(ratatui_image::protocol::StatefulProtocol),
    Failed,
}

pub struct App {
    pub model: Model,

    /// Rendered thumbnail protocols by entry id. Kept outside the Model
    /// because StatefulProtocol is not Clone.
    pub thumbnail_protocols: HashMap<EntryId, ratatui_image::protocol::StatefulProtocol>,

    pub client: MergeClient,
    pub config: Config,

    prefs: Prefs,
    image_picker: Option<ratatui_image::picker::Picker>,

    merge_tx: tokio::sync::mpsc::UnboundedSender<MergeOutcome>,
    merge_rx: tokio::sync::mpsc::UnboundedReceiver<MergeOutcome>,
    thumb_tx: tokio::sync::mpsc::UnboundedSender<(EntryId, ThumbnailUpdate)>,
    thumb_rx: tokio::sync::mpsc::UnboundedReceiver<(EntryId, ThumbnailUpdate)>,
}

impl App {
    fn new(config: Config, prefs: Prefs) -> Self {
        let client = MergeClient::new(config.server_url.clone());
        let model = Model::new(prefs.night_mode);

        let (merge_tx, merge_rx) = tokio::sync::mpsc::unbounded_channel();
        let (thumb_tx, thumb_rx) = tokio::sync::mpsc::unbounded_channel();

        let image_picker = if config.thumbnails_enabled {
            Some(build_picker(&config.image_protocol))
        } else {
            None
        };

        Self {
            model,
            thumbnail_protocols: HashMap::new(),
            client,
            config,
            prefs,
            image_picker,
            merge_tx,
            merge_rx,
            thumb_tx,
            thumb_rx,
        }
    }

    /// Validate and queue a batch of candidate files. Rejections are
    /// per-file and never abort the rest of the batch.
    fn ingest_paths(&mut self, paths: &[PathBuf]) {
        if paths.is_empty() {
            return;
        }

        let mut added = 0usize;
        let mut rejections: Vec<String> = Vec::new();

        for path in paths {
            match logic::ingest::ingest_file(&mut self.model.files, path) {
                IngestOutcome::Added(id) => {
                    added += 1;
                    log_debug(&format!("Queued {}", path.display()));
                    self.spawn_thumbnail(id, path.clone());
                }
                IngestOutcome::NotPdf(p) => {
                    log_debug(&format!("Rejected {}: not a PDF", p.display()));
                    rejections.push(format!("{}: not a PDF", display_name_of(&p)));
                }
                IngestOutcome::Unreadable(p, err) => {
                    log_debug(&format!("Rejected {}: {}", p.display(), err));
                    rejections.push(format!("{}: {}", display_name_of(&p), err));
                }
            }
        }

        if added > 0 && self.model.ui.selected.is_none() {
            self.model.ui.selected = Some(0);
        }

        match (added, rejections.len()) {
            (_, 0) => self.model.ui.toast(format!(
                "Queued {} file{}",
                added,
                if added == 1 { "" } else { "s" }
            )),
            (0, 1) => self
                .model
                .ui
                .toast(format!("Error: Skipped {}", rejections[0])),
            (0, n) => self
                .model
                .ui
                .toast(format!("Error: Skipped {} files ({})", n, rejections[0])),
            (_, n) => self.model.ui.toast(format!(
                "Queued {}, skipped {} ({})",
                added, n, rejections[0]
            )),
        }
    }

    /// Handle input submitted from the add prompt.
    fn add_from_input(&mut self, input: &str) {
        let paths = logic::ingest::expand_input(input);
        if paths.is_empty() {
            if !input.trim().is_empty() {
                self.model
                    .ui
                    .toast(format!("No files match {}", input.trim()));
            }
            return;
        }
        self.ingest_paths(&paths);
    }

    /// Handle a bracketed paste: most terminals paste the path of a file
    /// dropped onto the window.
    fn handle_paste(&mut self, data: &str) {
        let paths = logic::ingest::paths_from_paste(data);
        self.ingest_paths(&paths);
    }

    fn spawn_thumbnail(&mut self, id: EntryId, path: PathBuf) {
        let Some(picker) = self.image_picker.as_ref() else {
            return;
        };
        services::thumbnails::spawn_render(
            id,
            path,
            self.config.thumbnail_command.clone(),
            self.config.thumbnail_scale,
            picker.clone(),
            self.thumb_tx.clone(),
        );
    }

    fn remove_selected(&mut self) {
        let Some(entry) = self.model.selected_entry() else {
            return;
        };
        let id = entry.id;
        let name = entry.display_name.clone();

        self.model.files.remove(id);
        self.thumbnail_protocols.remove(&id);
        if self.model.ui.grabbed == Some(id) {
            self.model.ui.grabbed = None;
        }
        self.model.clamp_selection();
        self.model.ui.toast(format!("Removed {}", name));
    }

    /// Swap the selected entry with its neighbor and follow it with the
    /// cursor.
    fn swap_with_neighbor(&mut self, delta: isize) {
        let Some(idx) = self.model.ui.selected else {
            return;
        };
        let Some(target) = idx.checked_add_signed(delta) else {
            return;
        };
        if target >= self.model.files.len() {
            return;
        }

        let a = self.model.files.entries()[idx].id;
        let b = self.model.files.entries()[target].id;
        self.model.files.swap(a, b);
        self.model.ui.selected = Some(target);
    }

    /// Kick off a merge request if the queue qualifies. The trigger
    /// stays disabled until the outcome message arrives.
    fn start_merge(&mut self) {
        if self.model.ui.merge_in_flight {
            return;
        }
        if let Err(msg) = logic::merge::check_precondition(&self.model.files) {
            self.model.ui.toast(format!("Error: {}", msg));
            return;
        }
        if !logic::merge::begin(&mut self.model.ui) {
            return;
        }

        let parts = logic::merge::merge_payload(&self.model.files);
        services::merge::spawn_merge(
            self.client.clone(),
            parts,
            self.config.resolved_download_dir(),
            self.config.output_name.clone(),
            self.merge_tx.clone(),
        );
    }

    fn toggle_night_mode(&mut self) {
        self.prefs.night_mode = !self.prefs.night_mode;
        self.model.ui.night_mode = self.prefs.night_mode;
        if let Err(e) = self.prefs.save() {
            log_debug(&format!("Failed to save preferences: {:#}", e));
        }
    }

    fn handle_merge_outcome(&mut self, outcome: MergeOutcome) {
        if matches!(outcome, MergeOutcome::Saved { .. }) {
            // Queue is cleared on a confirmed save; drop its thumbnails too
            self.thumbnail_protocols.clear();
        }
        logic::merge::finish(&mut self.model, &outcome);
    }

    fn handle_thumbnail_update(&mut self, id: EntryId, update: ThumbnailUpdate) {
        match update {
            ThumbnailUpdate::Ready(protocol) => {
                if let Some(entry) = self.model.files.get_mut(id) {
                    entry.thumbnail = ThumbnailStatus::Ready;
                    self.thumbnail_protocols.insert(id, protocol);
                } else {
                    log_debug(&format!("Dropped thumbnail for removed entry {}", id));
                }
            }
            ThumbnailUpdate::Failed => {
                if let Some(entry) = self.model.files.get_mut(id) {
                    entry.thumbnail = ThumbnailStatus::Failed;
                }
            }
        }
    }
}

fn display_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Initialize the terminal-graphics picker, with the protocol override
/// from config.
fn build_picker(protocol: &str) -> ratatui_image::picker::Picker {
    use ratatui_image::picker::{Picker, ProtocolType};

    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            log_debug(&format!("Thumbnails: failed to detect terminal: {}", e));
            Picker::from_fontsize((8, 16)) // Fallback font size
        }
    };

    match protocol.to_lowercase().as_str() {
        "auto" => {}
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => {
            log_debug(&format!(
                "Thumbnails: unknown protocol '{}', using auto-detect",
                unknown
            ));
        }
    }

    picker
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/mergetui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("mergetui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // Every setting has a default, so no config file is fine
    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let config_str = fs::read_to_string(&path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if let Some(server) = args.server {
        config.server_url = server;
    }

    let prefs = Prefs::load();

    // Initialize app and queue any files given on the command line
    let mut app = App::new(config, prefs);
    app.ingest_paths(&args.files);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

const TOAST_DISMISS_AFTER: Duration = Duration::from_millis(2500);

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render; the whole frame is redrawn from the model
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast
        let toast_expired = app
            .model
            .ui
            .toast_message
            .as_ref()
            .is_some_and(|(_, shown_at)| shown_at.elapsed() >= TOAST_DISMISS_AFTER);
        if toast_expired {
            app.model.ui.toast_message = None;
        }

        if app.model.ui.should_quit {
            break;
        }

        // Apply merge outcomes (non-blocking). finish() re-enables the
        // trigger for every outcome variant.
        while let Ok(outcome) = app.merge_rx.try_recv() {
            app.handle_merge_outcome(outcome);
        }

        // Attach finished thumbnails (non-blocking)
        while let Ok((id, update)) = app.thumb_rx.try_recv() {
            app.handle_thumbnail_update(id, update);
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::keyboard::handle_key(app, key)?;
                }
                Event::Paste(data) => {
                    app.handle_paste(&data);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
