//! Branding and document configuration (optional TOML file).
//!
//! Every key is optional; missing keys fall back to the stock quotation text.
//!
//! ```toml
//! [company]
//! name = "PERFECT FURNITURE"
//! tagline = "Professional Interior Solutions for Modern Homes"
//!
//! [document]
//! currency_prefix = "Rs."
//! grouping = "indian"
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub company: CompanyConfig,
    pub document: DocumentConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    pub name: String,
    pub tagline: String,
    /// Printed at the bottom of every page.
    pub footer: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "PERFECT FURNITURE".to_string(),
            tagline: "Professional Interior Solutions for Modern Homes".to_string(),
            footer: "\"Angels fly because they take themselves lightly.\"".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// 12,34,567
    #[default]
    Indian,
    /// 1,234,567
    Western,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub title: String,
    pub currency_prefix: String,
    pub grouping: DigitGrouping,
    pub terms: Vec<String>,
    pub file_prefix: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "ESTIMATE QUOTATION".to_string(),
            currency_prefix: "Rs.".to_string(),
            grouping: DigitGrouping::Indian,
            terms: vec![
                "50% advance payment required to start work".to_string(),
                "Balance payment after completion".to_string(),
                "Quotation valid for 30 days".to_string(),
                "Material selection may affect final price".to_string(),
            ],
            file_prefix: "Estimate_Quotation".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.document.terms.is_empty() {
            return Err(ConfigError::Validation {
                field: "document.terms".to_string(),
                message: "at least one term is required".to_string(),
            });
        }
        if self.document.file_prefix.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "document.file_prefix".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

/// Load configuration from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Config::from_toml(path, &content)?;
    tracing::info!(path = %path.display(), company = %config.company.name, "config loaded");
    Ok(config)
}
