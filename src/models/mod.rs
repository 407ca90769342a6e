// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod query;
pub mod scan_match;

pub use query::{CaseSensitivity, Query};
pub use scan_match::Match;
