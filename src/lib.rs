//! # Interior Quote
//!
//! A terminal form for pricing interior-furnishing work and exporting the
//! finished quotation.
//!
//! ## Features
//!
//! - Per-bedroom, living room and whole-house work categories
//! - Running total recomputed after every edit
//! - Branded A4 PDF quotation with pagination
//! - JSON snapshot and CSV cost breakdown exports
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use interior_quote::config::Config;
//! use interior_quote::export::{export_quotation, ExportFormat};
//! use interior_quote::model::load_quotation;
//! use std::path::Path;
//!
//! let quotation = load_quotation("quote.json").expect("Failed to load");
//! println!("Total: {}", quotation.total_cost());
//!
//! let snapshot = quotation.snapshot(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//! let path = export_quotation(&snapshot, &Config::default(), ExportFormat::Pdf, Path::new("."), 0)
//!     .expect("Failed to export");
//! println!("Saved {}", path.display());
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod state;
pub mod ui;
