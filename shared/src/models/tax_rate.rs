//! Tax Rate Model

use serde::{Deserialize, Serialize};

/// A single tax rate within a jurisdiction's rate table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxRate {
    pub id: String,
    pub name: String,
    /// Percentage rate (21.0 = 21%), non-negative
    pub rate: f64,
    /// Exactly one rate per jurisdiction should carry this flag
    #[serde(default)]
    pub is_default: bool,
}

impl TaxRate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rate,
            is_default: false,
        }
    }

    /// Same as `new` but marked as the jurisdiction default
    pub fn new_default(id: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        Self {
            is_default: true,
            ..Self::new(id, name, rate)
        }
    }
}
