//! Day and night palettes
//!
//! The day palette keeps the pink accent of the original web UI; night
//! mode dims everything onto a dark background with a cyan accent.

use ratatui::style::{Color, Style};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Painted over the whole frame before anything else.
    pub base: Style,
    pub border: Color,
    pub accent: Color,
    pub dim: Color,
    pub error: Color,
    pub success: Color,
}

pub fn theme(night_mode: bool) -> Theme {
    if night_mode {
        Theme {
            base: Style::default().bg(Color::Black).fg(Color::Gray),
            border: Color::DarkGray,
            accent: Color::Cyan,
            dim: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    } else {
        Theme {
            base: Style::default(),
            border: Color::Rgb(255, 192, 203),
            accent: Color::Rgb(255, 144, 166),
            dim: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    }
}
