use super::amount::{deserialize_raw, parse_amount};
use serde::{Deserialize, Serialize};

/// Singleton line items priced as quantity × rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkCategory {
    Kitchen,
    Painting,
    FalseCeiling,
    Electrical,
    Plumbing,
}

impl WorkCategory {
    pub const ALL: [WorkCategory; 5] = [
        WorkCategory::Kitchen,
        WorkCategory::Painting,
        WorkCategory::FalseCeiling,
        WorkCategory::Electrical,
        WorkCategory::Plumbing,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WorkCategory::Kitchen => "Kitchen",
            WorkCategory::Painting => "Painting",
            WorkCategory::FalseCeiling => "False Ceiling",
            WorkCategory::Electrical => "Electrical",
            WorkCategory::Plumbing => "Plumbing",
        }
    }

    /// Electrical and plumbing are counted in points, the rest in sqft.
    #[must_use]
    pub fn is_counted_in_units(self) -> bool {
        matches!(self, WorkCategory::Electrical | WorkCategory::Plumbing)
    }

    #[must_use]
    pub fn quantity_label(self) -> &'static str {
        match self {
            WorkCategory::Kitchen => "Kitchen Area (sqft)",
            WorkCategory::Painting => "Painting Area (sqft)",
            WorkCategory::FalseCeiling => "False Ceiling Area (sqft)",
            WorkCategory::Electrical => "Number of Electrical Points",
            WorkCategory::Plumbing => "Number of Plumbing Points",
        }
    }

    #[must_use]
    pub fn rate_label(self) -> &'static str {
        if self.is_counted_in_units() {
            "Rate per Point"
        } else {
            "Rate per sqft"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkField {
    Quantity,
    Rate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Area in sqft or number of points, as typed.
    #[serde(
        default,
        alias = "area",
        alias = "units",
        deserialize_with = "deserialize_raw"
    )]
    pub quantity: String,
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub rate: String,
}

impl WorkItem {
    #[must_use]
    pub fn field(&self, field: WorkField) -> &str {
        match field {
            WorkField::Quantity => &self.quantity,
            WorkField::Rate => &self.rate,
        }
    }

    pub fn set_field(&mut self, field: WorkField, value: String) {
        match field {
            WorkField::Quantity => self.quantity = value,
            WorkField::Rate => self.rate = value,
        }
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        parse_amount(&self.quantity) * parse_amount(&self.rate)
    }
}
