// file: src/exporter/mod.rs
// description: scan report export module exports
// reference: internal module structure

pub mod json;

pub use json::{JsonExporter, PageRange, ScanReport};
