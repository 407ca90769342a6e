// file: src/utils/progress.rs
// description: progress tracking and statistics for page text extraction
// reference: uses indicatif for progress bars and tracks extraction metrics

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionStats {
    pub pages_extracted: usize,
    pub pages_failed: usize,
    pub total_chars: usize,
    pub duration_ms: u64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.pages_extracted + self.pages_failed;
        if total == 0 {
            return 0.0;
        }
        (self.pages_extracted as f64 / total as f64) * 100.0
    }
}

pub struct ExtractionProgress {
    bar: ProgressBar,
    stats: ExtractionStats,
    start_time: Instant,
}

impl ExtractionProgress {
    pub fn new(total_pages: usize, visible: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_pages as u64)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            stats: ExtractionStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn page_extracted(&mut self, chars: usize) {
        self.stats.pages_extracted += 1;
        self.stats.total_chars += chars;
        self.bar.inc(1);
        self.update_message();
    }

    pub fn page_failed(&mut self) {
        self.stats.pages_failed += 1;
        self.bar.inc(1);
        self.update_message();
    }

    /// Stops the bar and returns the final counters.
    pub fn finish(mut self) -> ExtractionStats {
        self.stats.duration_ms = self.start_time.elapsed().as_millis() as u64;
        self.bar.finish_and_clear();
        self.stats
    }

    fn update_message(&self) {
        self.bar.set_message(format!(
            "Chars: {} | Failed: {}",
            self.stats.total_chars, self.stats.pages_failed
        ));
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages {msg}")
    {
        Ok(style) => bar.set_style(style.progress_chars("█▓▒░")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let stats = ExtractionStats {
            pages_extracted: 9,
            pages_failed: 1,
            total_chars: 0,
            duration_ms: 0,
        };

        assert!((stats.success_rate() - 90.0).abs() < 0.01);
        assert_eq!(ExtractionStats::new().success_rate(), 0.0);
    }

    #[test]
    fn test_progress_counts_pages() {
        let mut progress = ExtractionProgress::new(3, false);

        progress.page_extracted(120);
        progress.page_extracted(30);
        progress.page_failed();

        let stats = progress.finish();
        assert_eq!(stats.pages_extracted, 2);
        assert_eq!(stats.pages_failed, 1);
        assert_eq!(stats.total_chars, 150);
    }
}
