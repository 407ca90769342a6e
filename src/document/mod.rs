// file: src/document/mod.rs
// description: page text extraction module exports
// reference: internal module structure

pub mod normalizer;
pub mod pdf;
pub mod source;

pub use normalizer::TextNormalizer;
pub use pdf::{PdfDocument, load_page_texts};
pub use source::{
    ExtractOptions, ExtractedPages, PageSource, TextPages, compute_fingerprint, extract_pages,
    load_text_pages, slice_chars,
};
