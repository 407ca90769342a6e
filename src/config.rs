// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::classification::{ClassificationTable, SectionEntry};
use crate::document::ExtractOptions;
use crate::error::{Result, ScanError};
use crate::models::{CaseSensitivity, Query};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub document: DocumentConfig,
    pub query: QueryConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentConfig {
    pub path: Option<PathBuf>,
    pub normalize_whitespace: bool,
    pub skip_unreadable_pages: bool,
    pub show_progress: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub keywords: Vec<String>,
    pub excerpt_length: usize,
    pub case_sensitivity: CaseSensitivity,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub json: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

impl DocumentConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            normalize_whitespace: self.normalize_whitespace,
            skip_unreadable_pages: self.skip_unreadable_pages,
            show_progress: self.show_progress,
        }
    }
}

impl QueryConfig {
    pub fn to_query(&self) -> Result<Query> {
        Ok(Query::new(self.keywords.iter().cloned(), self.excerpt_length)?
            .with_case_sensitivity(self.case_sensitivity))
    }
}

impl OutputConfig {
    /// Command-line switches win over the configured value.
    pub fn resolve_pretty(&self, pretty: bool, compact: bool) -> bool {
        if compact {
            false
        } else {
            pretty || self.pretty
        }
    }
}

impl ClassificationConfig {
    /// Configured sections, or the built-in Blue Book table when none are set.
    pub fn table(&self) -> Result<ClassificationTable> {
        if self.sections.is_empty() {
            Ok(ClassificationTable::nbs())
        } else {
            ClassificationTable::new(self.sections.clone())
        }
    }
}

impl Config {
    /// Layers built-in defaults, then the config file, then `PAGE_SCAN__*`
    /// environment variables. An explicit `path` must exist; the default
    /// `config/default.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new("config/default.toml")).required(false),
        };

        Self::build(
            file,
            config::Environment::with_prefix("PAGE_SCAN")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn build<F>(file: F, environment: config::Environment) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| ScanError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(environment)
            .build()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            document: DocumentConfig {
                path: None,
                normalize_whitespace: false,
                skip_unreadable_pages: true,
                show_progress: true,
            },
            query: QueryConfig {
                keywords: vec!["Section 10".to_string(), "Metals".to_string()],
                excerpt_length: 3000,
                case_sensitivity: CaseSensitivity::Sensitive,
            },
            output: OutputConfig {
                json: false,
                pretty: true,
            },
            classification: ClassificationConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.query.excerpt_length == 0 {
            return Err(ScanError::Config(
                "excerpt_length must be greater than 0".to_string(),
            ));
        }

        if self.query.keywords.iter().any(|k| k.is_empty()) {
            return Err(ScanError::Config(
                "keywords must not contain empty strings".to_string(),
            ));
        }

        self.classification.table()?;

        Ok(())
    }
}
