// file: src/scanner/mod.rs
// description: keyword scanning module exports
// reference: internal module structure

pub mod keyword;
pub mod matcher;

pub use keyword::{PageKeywordScanner, find_first_match, scan_range};
pub use matcher::KeywordMatcher;
