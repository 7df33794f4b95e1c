//! Mergetui Library
//!
//! Exposes modules for testing

pub mod api;
pub mod logic;
pub mod model;
pub mod utils;
