//! Configuration for the pagination service
//!
//! Settings can be loaded from YAML; every field has a default so an
//! empty document is a valid configuration.

use crate::error::{Error, Result, ResultExt};
use crate::source::CsvSource;
use crate::types::PageSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// App Config
// ============================================================================

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Delimited text file holding the dataset
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Field delimiter of the data file
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Whether the first row of the data file is a header
    #[serde(default = "default_true")]
    pub has_header: bool,

    /// Page size used when a request does not specify one
    #[serde(default)]
    pub default_page_size: PageSize,

    /// Largest page size the HTTP server accepts
    #[serde(default)]
    pub max_page_size: Option<PageSize>,

    /// Port for HTTP server mode
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("Popular_Baby_Names.csv")
}

fn default_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}

fn default_port() -> u16 {
    8080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            delimiter: default_delimiter(),
            has_header: true,
            default_page_size: PageSize::default(),
            max_page_size: None,
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Build the CSV source described by this config
    pub fn source(&self) -> CsvSource {
        CsvSource::with_delimiter(&self.data_file, self.delimiter)
    }

    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(Error::config("data_file cannot be empty"));
        }

        if self.delimiter == '"' || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::config(format!(
                "delimiter {:?} is not allowed",
                self.delimiter
            )));
        }

        if let Some(max) = self.max_page_size {
            if max < self.default_page_size {
                return Err(Error::config(format!(
                    "max_page_size ({max}) is smaller than default_page_size ({})",
                    self.default_page_size
                )));
            }
        }

        Ok(())
    }

    /// Enforce `max_page_size` on a requested page size
    pub fn check_page_size(&self, page_size: PageSize) -> Result<()> {
        match self.max_page_size {
            Some(max) if page_size > max => Err(Error::PageSizeTooLarge {
                requested: page_size.get(),
                max: max.get(),
            }),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    load_config_from_str(&content)
}

/// Load a configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<AppConfig> {
    // serde_yaml rejects an empty document; treat it as all defaults
    let config: AppConfig = if yaml.trim().is_empty() {
        AppConfig::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    config.validate()?;
    Ok(config)
}
