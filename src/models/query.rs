// file: src/models/query.rs
// description: keyword query with validation and case handling
// reference: internal data structures

use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }
}

/// Keywords that must all appear on a page, plus excerpt bounds.
///
/// The first keyword is the anchor: a match's excerpt starts at its earliest
/// occurrence. Duplicates are dropped and keep their first position, so a
/// query built from a sorted set anchors on the lexically first keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    keywords: Vec<String>,
    case_sensitivity: CaseSensitivity,
    excerpt_length: usize,
}

impl Query {
    pub fn new<I, S>(keywords: I, excerpt_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.into();
            if keyword.is_empty() {
                return Err(ScanError::invalid_argument("keywords must not be empty strings"));
            }
            if !unique.contains(&keyword) {
                unique.push(keyword);
            }
        }

        if unique.is_empty() {
            return Err(ScanError::invalid_argument("at least one keyword is required"));
        }

        if excerpt_length == 0 {
            return Err(ScanError::invalid_argument(
                "excerpt length must be greater than 0",
            ));
        }

        Ok(Self {
            keywords: unique,
            case_sensitivity: CaseSensitivity::Sensitive,
            excerpt_length,
        })
    }

    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    pub fn case_insensitive(self) -> Self {
        self.with_case_sensitivity(CaseSensitivity::Insensitive)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn anchor(&self) -> &str {
        &self.keywords[0]
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    pub fn excerpt_length(&self) -> usize {
        self.excerpt_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_query_creation() {
        let query = Query::new(["Section 10", "Metals"], 3000).unwrap();

        assert_eq!(query.keywords(), ["Section 10", "Metals"]);
        assert_eq!(query.anchor(), "Section 10");
        assert_eq!(query.excerpt_length(), 3000);
        assert_eq!(query.case_sensitivity(), CaseSensitivity::Sensitive);
    }

    #[test]
    fn test_rejects_empty_keywords() {
        let err = Query::new(Vec::<String>::new(), 10).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = Query::new(["Metals", ""], 10).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_rejects_zero_excerpt_length() {
        let err = Query::new(["Metals"], 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let query = Query::new(["Metals", "Section 10", "Metals"], 5).unwrap();
        assert_eq!(query.keywords(), ["Metals", "Section 10"]);
    }

    #[test]
    fn test_sorted_set_anchors_on_lexically_first() {
        let set: BTreeSet<&str> = ["Section 10", "Metals"].into_iter().collect();
        let query = Query::new(set, 5).unwrap();
        assert_eq!(query.anchor(), "Metals");
    }

    #[test]
    fn test_case_insensitive_builder() {
        let query = Query::new(["metals"], 5).unwrap().case_insensitive();
        assert_eq!(query.case_sensitivity(), CaseSensitivity::Insensitive);
        assert_eq!(
            CaseSensitivity::from_ignore_case(false),
            CaseSensitivity::Sensitive
        );
    }
}
