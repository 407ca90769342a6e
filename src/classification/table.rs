// file: src/classification/table.rs
// description: button classification sections grouped by division
// reference: NBS Blue Book classification listing

use crate::error::{Result, ScanError};
use crate::models::Query;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionEntry {
    pub number: u32,
    pub category: String,
    pub label: String,
}

impl SectionEntry {
    pub fn new(number: u32, category: &str, label: &str) -> Self {
        Self {
            number,
            category: category.to_string(),
            label: label.to_string(),
        }
    }

    pub fn heading(&self) -> String {
        format!("Section {}", self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
    sections: Vec<SectionEntry>,
}

impl ClassificationTable {
    pub fn new(sections: Vec<SectionEntry>) -> Result<Self> {
        for (idx, entry) in sections.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(ScanError::Config(format!(
                    "section {} has an empty label",
                    entry.number
                )));
            }
            if sections[..idx].iter().any(|prev| prev.number == entry.number) {
                return Err(ScanError::Config(format!(
                    "section {} is listed twice",
                    entry.number
                )));
            }
        }

        Ok(Self { sections })
    }

    /// Sections from the Blue Book table of contents.
    pub fn nbs() -> Self {
        let materials = [
            (1, "Celluloid"),
            (2, "Ceramics"),
            (3, "China"),
            (4, "Enamels"),
            (5, "Fabrics/Textiles"),
            (6, "Glass, Black"),
            (7, "Glass, Clear and Colored"),
            (8, "Glass Mounted in/on Metal"),
            (9, "Horn"),
            (10, "Metals"),
            (11, "Shell"),
            (12, "Synthetic Polymers"),
            (13, "Vegetable Ivory"),
            (14, "Wood"),
            (15, "Other Materials"),
        ];
        let pictorials = [
            (17, "Animals"),
            (18, "Objects (without people)"),
            (19, "Plants"),
            (20, "Other Pictorials"),
        ];
        let patterns = [
            (22, "Patterns, Symbols"),
            (23, "Specific Types"),
            (24, "18th Century (or earlier)"),
            (25, "Usage (Non-military)"),
        ];

        let sections = materials
            .iter()
            .map(|(n, label)| SectionEntry::new(*n, "MATERIALS", label))
            .chain(
                pictorials
                    .iter()
                    .map(|(n, label)| SectionEntry::new(*n, "PICTORIALS", label)),
            )
            .chain(
                patterns
                    .iter()
                    .map(|(n, label)| SectionEntry::new(*n, "PATTERNS/TYPES", label)),
            )
            .collect();

        Self { sections }
    }

    pub fn sections(&self) -> &[SectionEntry] {
        &self.sections
    }

    pub fn lookup(&self, number: u32) -> Option<&SectionEntry> {
        self.sections.iter().find(|entry| entry.number == number)
    }

    /// Category names in table order, without repeats.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for entry in &self.sections {
            if !categories.contains(&entry.category.as_str()) {
                categories.push(&entry.category);
            }
        }
        categories
    }

    pub fn in_category(&self, category: &str) -> Vec<&SectionEntry> {
        self.sections
            .iter()
            .filter(|entry| entry.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Keywords that locate a section's heading page: its heading and label.
    pub fn query_for(&self, number: u32, excerpt_length: usize) -> Result<Query> {
        let entry = self.lookup(number).ok_or_else(|| {
            ScanError::invalid_argument(format!("unknown classification section {}", number))
        })?;

        Query::new([entry.heading(), entry.label.clone()], excerpt_length)
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::nbs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_metals() {
        let table = ClassificationTable::nbs();
        let entry = table.lookup(10).unwrap();

        assert_eq!(entry.category, "MATERIALS");
        assert_eq!(entry.label, "Metals");
        assert_eq!(entry.heading(), "Section 10");
    }

    #[test]
    fn test_unused_numbers_are_absent() {
        let table = ClassificationTable::nbs();

        assert!(table.lookup(16).is_none());
        assert!(table.lookup(21).is_none());
        assert_eq!(table.sections().len(), 23);
    }

    #[test]
    fn test_categories_in_table_order() {
        let table = ClassificationTable::nbs();
        assert_eq!(
            table.categories(),
            vec!["MATERIALS", "PICTORIALS", "PATTERNS/TYPES"]
        );
    }

    #[test]
    fn test_in_category_ignores_case() {
        let table = ClassificationTable::nbs();
        let pictorials = table.in_category("pictorials");

        assert_eq!(pictorials.len(), 4);
        assert_eq!(pictorials[0].label, "Animals");
        assert!(table.in_category("unknown").is_empty());
    }

    #[test]
    fn test_query_for_section() {
        let table = ClassificationTable::nbs();
        let query = table.query_for(10, 2000).unwrap();

        assert_eq!(query.keywords(), ["Section 10", "Metals"]);
        assert_eq!(query.excerpt_length(), 2000);

        assert!(table.query_for(99, 2000).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_custom_table_validation() {
        let duplicate = vec![
            SectionEntry::new(1, "MATERIALS", "Celluloid"),
            SectionEntry::new(1, "MATERIALS", "Ceramics"),
        ];
        assert!(ClassificationTable::new(duplicate).is_err());

        let blank = vec![SectionEntry::new(3, "MATERIALS", " ")];
        assert!(ClassificationTable::new(blank).is_err());

        let custom = vec![SectionEntry::new(30, "OTHER", "Studs")];
        let table = ClassificationTable::new(custom).unwrap();
        assert_eq!(table.lookup(30).unwrap().label, "Studs");
    }
}
