//! Error types for Interior Quote.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by quotation state updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A bedroom index outside the current bedroom collection.
    #[error("invalid index {index}: quotation has {len} bedroom(s)")]
    InvalidIndex { index: usize, len: usize },

    /// BHK type outside 1..=3.
    #[error("invalid BHK type {0}: expected 1, 2 or 3")]
    InvalidBhk(usize),

    /// The quotation lacks something the exported document needs.
    #[error("quotation is not ready for export: {0}")]
    NotReady(&'static str),
}

/// Errors that can occur when loading a saved quotation.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the quotation file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid quotation document.
    #[error("invalid quotation JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The quotation parsed but breaks a model invariant.
    #[error("invalid quotation: {source}")]
    Invalid {
        #[from]
        source: QuoteError,
    },
}

/// Errors that can occur when loading the branding configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The TOML is malformed or has wrongly typed keys.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A key parsed but holds an unusable value.
    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

/// Errors that can occur when exporting a quotation.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// The document renderer failed.
    #[error("document rendering failed: {message}")]
    Render { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
