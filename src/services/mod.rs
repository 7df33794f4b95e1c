//! Background Services
//!
//! Fire-and-forget tokio tasks that do the slow work off the draw loop:
//! - merge: the multipart request to the merge service plus the local save
//! - thumbnails: per-entry first-page rasterization
//!
//! Each task reports back over an unbounded mpsc channel the draw loop
//! drains every frame; nothing here blocks input.

pub mod merge;
pub mod thumbnails;
