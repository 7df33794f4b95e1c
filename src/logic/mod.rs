//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a server:
//! - errors: classification and formatting of merge request failures
//! - ingest: file validation, glob expansion, pasted-path parsing
//! - merge: precondition, ordered payload, trigger state transitions

pub mod errors;
pub mod ingest;
pub mod merge;
