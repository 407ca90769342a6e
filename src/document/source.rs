// file: src/document/source.rs
// description: page text sources and the scoped extraction step
// reference: internal module structure

use crate::document::normalizer::TextNormalizer;
use crate::error::{Result, ScanError};
use crate::utils::progress::{ExtractionProgress, ExtractionStats};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Anything that can hand out per-page text by zero-based index.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn page_text(&self, index: usize) -> Result<String>;
}

/// In-memory pages, for text that was extracted elsewhere.
#[derive(Debug, Clone, Default)]
pub struct TextPages {
    pages: Vec<String>,
}

impl TextPages {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits on form feeds, the page separator `pdftotext` emits.
    pub fn from_form_feeds(content: &str) -> Self {
        let mut pages: Vec<String> = content.split('\u{c}').map(str::to_string).collect();
        if pages.len() > 1 && pages.last().is_some_and(|page| page.trim().is_empty()) {
            pages.pop();
        }
        Self { pages }
    }
}

impl PageSource for TextPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(ScanError::PageOutOfRange {
                index,
                count: self.pages.len(),
            })
    }
}

/// Page texts whose source has already been released.
#[derive(Debug, Clone)]
pub struct ExtractedPages {
    pub source: PathBuf,
    pub fingerprint: String,
    pub pages: Vec<String>,
    pub stats: ExtractionStats,
}

impl ExtractedPages {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub normalize_whitespace: bool,
    pub skip_unreadable_pages: bool,
    pub show_progress: bool,
}

/// Pulls every page out of `source` so the scanner only ever sees strings.
pub fn extract_pages<P: PageSource + ?Sized>(
    source: &P,
    options: &ExtractOptions,
) -> Result<(Vec<String>, ExtractionStats)> {
    let count = source.page_count();
    info!("Extracting text from {} pages", count);

    let normalizer = TextNormalizer::new();
    let mut progress = ExtractionProgress::new(count, options.show_progress);
    let mut pages = Vec::with_capacity(count);

    for index in 0..count {
        match source.page_text(index) {
            Ok(text) => {
                let text = if options.normalize_whitespace {
                    normalizer.normalize(&text)
                } else {
                    text
                };
                debug!("Page {} yielded {} bytes", index + 1, text.len());
                progress.page_extracted(text.chars().count());
                pages.push(text);
            }
            Err(err) if options.skip_unreadable_pages => {
                warn!("Skipping unreadable page {}: {}", index + 1, err);
                progress.page_failed();
                pages.push(String::new());
            }
            Err(err) => return Err(err),
        }
    }

    let stats = progress.finish();
    info!(
        "Extracted {} pages ({} failed, {:.1}% readable) in {} ms",
        stats.pages_extracted,
        stats.pages_failed,
        stats.success_rate(),
        stats.duration_ms
    );

    Ok((pages, stats))
}

/// Pages from pre-extracted text, one page per form-feed separated block.
pub fn load_text_pages(
    source: &Path,
    content: &str,
    options: &ExtractOptions,
) -> Result<ExtractedPages> {
    let pages = TextPages::from_form_feeds(content);
    let (pages, stats) = extract_pages(&pages, options)?;

    Ok(ExtractedPages {
        source: source.to_path_buf(),
        fingerprint: compute_fingerprint(content.as_bytes()),
        pages,
        stats,
    })
}

/// Hex SHA-256 of raw document bytes
pub fn compute_fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Char-indexed half-open slice, clamped to the text.
pub fn slice_chars(text: &str, from: usize, to: Option<usize>) -> &str {
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len())
    };

    let start = byte_at(from);
    let end = match to {
        Some(to) if to <= from => start,
        Some(to) => byte_at(to),
        None => text.len(),
    };

    &text[start..end]
}
