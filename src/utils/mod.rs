// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod progress;
pub mod validation;

pub use progress::{ExtractionProgress, ExtractionStats};
pub use validation::Validator;
