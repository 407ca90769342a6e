// file: src/document/pdf.rs
// description: per-page PDF text extraction backed by lopdf
// reference: https://docs.rs/lopdf

use crate::document::source::{
    ExtractOptions, ExtractedPages, PageSource, compute_fingerprint, extract_pages,
};
use crate::error::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An open PDF. The parsed document lives only as long as this value.
pub struct PdfDocument {
    path: PathBuf,
    fingerprint: String,
    page_numbers: Vec<u32>,
    inner: lopdf::Document,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self> {
        debug!("Opening PDF: {}", path.display());
        let bytes = fs::read(path)?;
        Self::from_bytes(path, &bytes)
    }

    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self> {
        let fingerprint = compute_fingerprint(bytes);

        let inner = lopdf::Document::load_mem(bytes).map_err(|e| ScanError::Document {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if inner.is_encrypted() {
            return Err(ScanError::Document {
                path: path.to_path_buf(),
                message: "document is encrypted".to_string(),
            });
        }

        let page_numbers: Vec<u32> = inner.get_pages().into_keys().collect();
        info!(
            "Opened {} ({} pages, sha256 {})",
            path.display(),
            page_numbers.len(),
            &fingerprint[..12]
        );

        Ok(Self {
            path: path.to_path_buf(),
            fingerprint,
            page_numbers,
            inner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hex SHA-256 of the raw file bytes
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("path", &self.path)
            .field("fingerprint", &self.fingerprint)
            .field("pages", &self.page_numbers.len())
            .finish()
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page_number = *self
            .page_numbers
            .get(index)
            .ok_or(ScanError::PageOutOfRange {
                index,
                count: self.page_numbers.len(),
            })?;

        self.inner
            .extract_text(&[page_number])
            .map_err(|e| ScanError::Extraction {
                page: index + 1,
                message: e.to_string(),
            })
    }
}

/// Opens `path`, extracts every page, then drops the document.
pub fn load_page_texts(path: &Path, options: &ExtractOptions) -> Result<ExtractedPages> {
    let document = PdfDocument::open(path)?;
    let (pages, stats) = extract_pages(&document, options)?;
    let fingerprint = document.fingerprint().to_string();
    drop(document);

    Ok(ExtractedPages {
        source: path.to_path_buf(),
        fingerprint,
        pages,
        stats,
    })
}


#[cfg(test)]
mod tests {
    use super::fixtures::write_pdf;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_counts_pages() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blue-book.pdf");
        write_pdf(&path, &["Divisions", "Classification listing", "SECTION 10 Metals"]);

        let document = PdfDocument::open(&path).unwrap();
        assert_eq!(document.page_count(), 3);
        assert_eq!(document.fingerprint().len(), 64);
        assert_eq!(document.path(), path.as_path());
    }

    #[test]
    fn test_page_text_extraction() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blue-book.pdf");
        write_pdf(&path, &["Divisions", "SECTION 10 Metals"]);

        let document = PdfDocument::open(&path).unwrap();
        let text = document.page_text(1).unwrap();
        assert!(text.contains("Metals"), "unexpected text: {:?}", text);

        assert!(matches!(
            document.page_text(2),
            Err(ScanError::PageOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_load_page_texts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blue-book.pdf");
        write_pdf(&path, &["intro", "Section 10 Metals"]);

        let extracted = load_page_texts(&path, &ExtractOptions::default()).unwrap();

        assert_eq!(extracted.page_count(), 2);
        assert_eq!(extracted.stats.pages_extracted, 2);
        assert!(extracted.pages[1].contains("Section 10"));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.pdf");
        write_pdf(&path, &["same"]);

        let first = PdfDocument::open(&path).unwrap();
        let second = PdfDocument::open(&path).unwrap();
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let err = PdfDocument::from_bytes(Path::new("notes.pdf"), b"plain text").unwrap_err();
        assert!(matches!(err, ScanError::Document { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PdfDocument::open(Path::new("/nonexistent/blue-book.pdf")).unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}
