// file: src/document/normalizer.rs
// description: whitespace normalization for extracted page text
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HORIZONTAL_RUN: Regex =
        Regex::new(r"[ \t\x{a0}]+").expect("HORIZONTAL_RUN regex is valid");

    static ref BLANK_RUN: Regex = Regex::new(r"\n{3,}").expect("BLANK_RUN regex is valid");
}

/// Cleans up the irregular spacing PDF text extraction tends to produce.
///
/// Runs before page text reaches the scanner, so match offsets always refer
/// to the normalized text.
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, content: &str) -> String {
        let unified = content.replace("\r\n", "\n").replace('\r', "\n");

        let lines = unified
            .lines()
            .map(|line| HORIZONTAL_RUN.replace_all(line, " ").trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        BLANK_RUN.replace_all(&lines, "\n\n").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
