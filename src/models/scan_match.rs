// file: src/models/scan_match.rs
// description: page match produced by a keyword scan
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Zero-based index into the scanned page sequence
    pub page_index: usize,

    /// Byte offset of the anchor keyword, always on a char boundary
    pub offset: usize,

    pub excerpt: String,
}

impl Match {
    pub fn new(page_index: usize, offset: usize, excerpt: String) -> Self {
        Self {
            page_index,
            offset,
            excerpt,
        }
    }

    /// One-based page number as printed in the document viewer
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    pub fn excerpt_chars(&self) -> usize {
        self.excerpt.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_is_one_based() {
        let found = Match::new(43, 120, "Section 10".to_string());
        assert_eq!(found.page_number(), 44);
        assert_eq!(found.excerpt_chars(), 10);
    }

    #[test]
    fn test_serializes_fields() {
        let found = Match::new(1, 0, "Section 10".to_string());
        let json = serde_json::to_value(&found).unwrap();

        assert_eq!(json["page_index"], 1);
        assert_eq!(json["offset"], 0);
        assert_eq!(json["excerpt"], "Section 10");
    }
}
