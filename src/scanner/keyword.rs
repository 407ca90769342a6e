// file: src/scanner/keyword.rs
// description: first-page keyword scan with bounded excerpts
// reference: internal scanning logic

use crate::error::{Result, ScanError};
use crate::models::{Match, Query};
use crate::scanner::matcher::KeywordMatcher;
use tracing::debug;

/// Stateless scanner over already-extracted page texts.
#[derive(Debug, Clone)]
pub struct PageKeywordScanner {
    matchers: Vec<KeywordMatcher>,
    excerpt_length: usize,
}

impl PageKeywordScanner {
    pub fn new(query: &Query) -> Result<Self> {
        let matchers = query
            .keywords()
            .iter()
            .map(|keyword| KeywordMatcher::new(keyword, query.case_sensitivity()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            matchers,
            excerpt_length: query.excerpt_length(),
        })
    }

    /// Returns the lowest-index page containing every keyword.
    pub fn find_first_match<S: AsRef<str>>(&self, pages: &[S]) -> Option<Match> {
        self.scan_pages(pages, 0)
    }

    /// Like [`find_first_match`](Self::find_first_match), restricted to
    /// `start..end`. The returned page index is absolute.
    pub fn scan_range<S: AsRef<str>>(
        &self,
        pages: &[S],
        start: usize,
        end: usize,
    ) -> Result<Option<Match>> {
        if start > end {
            return Err(ScanError::invalid_argument(format!(
                "range start {} is after range end {}",
                start, end
            )));
        }

        if end > pages.len() {
            return Err(ScanError::invalid_argument(format!(
                "range end {} exceeds page count {}",
                end,
                pages.len()
            )));
        }

        Ok(self.scan_pages(&pages[start..end], start))
    }

    fn scan_pages<S: AsRef<str>>(&self, pages: &[S], base_index: usize) -> Option<Match> {
        for (position, page) in pages.iter().enumerate() {
            let text = page.as_ref();
            if let Some(offset) = self.anchor_offset(text) {
                let page_index = base_index + position;
                debug!("Keywords found on page index {} at offset {}", page_index, offset);
                return Some(Match::new(page_index, offset, self.excerpt(text, offset)));
            }
        }

        debug!("No page among {} contains every keyword", pages.len());
        None
    }

    fn anchor_offset(&self, text: &str) -> Option<usize> {
        let mut anchor = None;
        for matcher in &self.matchers {
            let offset = matcher.find(text)?;
            anchor.get_or_insert(offset);
        }
        anchor
    }

    fn excerpt(&self, text: &str, offset: usize) -> String {
        let tail = &text[offset..];
        let end = tail
            .char_indices()
            .nth(self.excerpt_length)
            .map(|(idx, _)| idx)
            .unwrap_or(tail.len());
        tail[..end].to_string()
    }
}

/// Case-sensitive scan of all pages.
pub fn find_first_match<S, K>(
    pages: &[S],
    keywords: &[K],
    excerpt_length: usize,
) -> Result<Option<Match>>
where
    S: AsRef<str>,
    K: AsRef<str>,
{
    let query = Query::new(keywords.iter().map(|k| k.as_ref()), excerpt_length)?;
    Ok(PageKeywordScanner::new(&query)?.find_first_match(pages))
}

/// Case-sensitive scan of `start..end`.
pub fn scan_range<S, K>(
    pages: &[S],
    start: usize,
    end: usize,
    keywords: &[K],
    excerpt_length: usize,
) -> Result<Option<Match>>
where
    S: AsRef<str>,
    K: AsRef<str>,
{
    let query = Query::new(keywords.iter().map(|k| k.as_ref()), excerpt_length)?;
    PageKeywordScanner::new(&query)?.scan_range(pages, start, end)
}
