// file: src/scanner/matcher.rs
// description: literal keyword search with optional case folding
// reference: https://docs.rs/regex

use crate::error::{Result, ScanError};
use crate::models::CaseSensitivity;
use regex::{Regex, RegexBuilder};

/// Compiled-size ceiling for case-folded keywords. Unicode case classes make
/// folded patterns far larger than the keyword itself.
const FOLDED_SIZE_LIMIT: usize = 256 * (1 << 20);

/// Finds the earliest occurrence of one keyword in a page.
///
/// Case-insensitive keywords are escaped before compiling, so they keep
/// literal semantics and report offsets into the unmodified text.
#[derive(Debug, Clone)]
pub enum KeywordMatcher {
    Exact(String),
    Folded(Regex),
}

impl KeywordMatcher {
    pub fn new(keyword: &str, case_sensitivity: CaseSensitivity) -> Result<Self> {
        match case_sensitivity {
            CaseSensitivity::Sensitive => Ok(Self::Exact(keyword.to_string())),
            CaseSensitivity::Insensitive => RegexBuilder::new(&regex::escape(keyword))
                .case_insensitive(true)
                .size_limit(FOLDED_SIZE_LIMIT)
                .build()
                .map(Self::Folded)
                .map_err(|e| {
                    ScanError::invalid_argument(format!("unusable keyword {:?}: {}", keyword, e))
                }),
        }
    }

    pub fn find(&self, text: &str) -> Option<usize> {
        match self {
            Self::Exact(keyword) => text.find(keyword.as_str()),
            Self::Folded(pattern) => pattern.find(text).map(|m| m.start()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let matcher = KeywordMatcher::new("Metals", CaseSensitivity::Sensitive).unwrap();

        assert_eq!(matcher.find("Section 10 Metals"), Some(11));
        assert_eq!(matcher.find("SECTION 10 METALS"), None);
    }

    #[test]
    fn test_folded_match_reports_original_offset() {
        let matcher = KeywordMatcher::new("metals", CaseSensitivity::Insensitive).unwrap();

        assert_eq!(matcher.find("SECTION 10 METALS"), Some(11));
        assert_eq!(matcher.find("no match here"), None);
    }

    #[test]
    fn test_folded_match_is_literal() {
        let matcher = KeywordMatcher::new("a.c (x)", CaseSensitivity::Insensitive).unwrap();

        assert_eq!(matcher.find("abc (x)"), None);
        assert_eq!(matcher.find("zz A.C (X)"), Some(3));
    }

    #[test]
    fn test_long_folded_keyword() {
        let keyword = "Metals and Alloys ".repeat(3000);
        let text = format!("SECTION 10 {}", keyword.to_uppercase());

        let matcher = KeywordMatcher::new(&keyword, CaseSensitivity::Insensitive).unwrap();
        assert_eq!(matcher.find(&text), Some(11));
    }

    #[test]
    fn test_multibyte_offsets() {
        let matcher = KeywordMatcher::new("émail", CaseSensitivity::Insensitive).unwrap();
        let text = "Cloisonné ÉMAIL";

        let offset = matcher.find(text).unwrap();
        assert!(text.is_char_boundary(offset));
        assert!(text[offset..].starts_with("ÉMAIL"));
    }
}
