// file: src/classification/mod.rs
// description: classification table module exports
// reference: internal module structure

pub mod table;

pub use table::{ClassificationTable, SectionEntry};
