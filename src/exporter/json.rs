// file: src/exporter/json.rs
// description: json export utilities for scan results

use crate::error::Result;
use crate::models::{Match, Query};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub document: String,
    pub fingerprint: String,
    pub page_count: usize,
    pub scanned_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<PageRange>,
    pub query: Query,
    pub result: Option<Match>,
}

impl ScanReport {
    pub fn new(
        document: &Path,
        fingerprint: &str,
        page_count: usize,
        range: Option<PageRange>,
        query: Query,
        result: Option<Match>,
    ) -> Self {
        Self {
            document: document.display().to_string(),
            fingerprint: fingerprint.to_string(),
            page_count,
            scanned_at: Utc::now().to_rfc3339(),
            range,
            query,
            result,
        }
    }

    pub fn found(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, report: &ScanReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }

    pub fn write(&self, report: &ScanReport, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(output, self.render(report)?)?;
        info!("Scan report written to {}", output.display());
        Ok(())
    }
}
