// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod classification;
pub mod config;
pub mod document;
pub mod error;
pub mod exporter;
pub mod models;
pub mod scanner;
pub mod utils;

pub use classification::{ClassificationTable, SectionEntry};
pub use config::{ClassificationConfig, Config, DocumentConfig, OutputConfig, QueryConfig};
pub use document::{
    ExtractOptions, ExtractedPages, PageSource, PdfDocument, TextNormalizer, TextPages,
    compute_fingerprint, extract_pages, load_page_texts, load_text_pages, slice_chars,
};
pub use error::{Result, ScanError};
pub use exporter::{JsonExporter, PageRange, ScanReport};
pub use models::{CaseSensitivity, Match, Query};
pub use scanner::{KeywordMatcher, PageKeywordScanner, find_first_match, scan_range};
pub use utils::{ExtractionProgress, ExtractionStats, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _table = ClassificationTable::nbs();
    }

    #[test]
    fn test_text_pages_through_scanner() {
        let source = TextPages::from_form_feeds("DIVISIONS\u{c}SECTION 10 - Metals\n10-1 Brass\u{c}");
        let (pages, _) = extract_pages(&source, &ExtractOptions::default()).unwrap();

        let query = ClassificationTable::nbs()
            .query_for(10, 12)
            .unwrap()
            .case_insensitive();
        let found = PageKeywordScanner::new(&query)
            .unwrap()
            .find_first_match(&pages)
            .unwrap();

        assert_eq!(found.page_number(), 2);
        assert_eq!(found.excerpt, "SECTION 10 -");
    }

    #[test]
    fn test_pdf_through_scanner() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("blue-book.pdf");
        document::pdf::fixtures::write_pdf(
            &path,
            &["Divisions", "Listing", "Section 10 Metals", "Section 10 Metals again"],
        );

        let extracted = load_page_texts(&path, &ExtractOptions::default()).unwrap();
        let found = scan_range(&extracted.pages, 1, 4, &["Section 10", "Metals"], 10)
            .unwrap()
            .unwrap();

        assert_eq!(found.page_index, 2);
        assert_eq!(found.excerpt, "Section 10");
    }
}
