//! Form state and the reducer that drives it.

pub mod action;

pub use action::{reduce, Action};

use crate::model::Quotation;

/// Quotation being edited plus the bedroom the form currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteForm {
    pub quotation: Quotation,
    pub active_bedroom: usize,
}

impl QuoteForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_quotation(quotation: Quotation) -> Self {
        Self {
            quotation,
            active_bedroom: 0,
        }
    }

    /// Always recomputed from the current inputs.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.quotation.total_cost()
    }
}
