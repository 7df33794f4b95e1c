// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: day/night palettes (the persisted night-mode preference)
// - layout: calculates screen layout (list, preview, prompt, bars)
// - render: main orchestration function that coordinates all rendering
// - file_list: renders the numbered file queue with grab/drop styling
// - preview: renders the first-page thumbnail pane
// - prompt: renders the add-files input box
// - status_bar: renders queue totals, server, and merge state
// - legend: renders the hotkey legend
// - toast: renders toast notifications

pub mod file_list;
pub mod layout;
pub mod legend;
pub mod preview;
pub mod prompt;
pub mod render;
pub mod status_bar;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
