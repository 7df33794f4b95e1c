//! Event Handlers
//!
//! - keyboard: user keyboard input
//!
//! Paste events (terminal file drops) and background-task messages are
//! handled directly on the App in main.rs.

pub mod keyboard;
