//! Tax Category Model

use serde::{Deserialize, Serialize};

/// A jurisdiction-owned classification of sellable items
/// (e.g. "alcohol", "takeaway"), mapped to one rate in the same config
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxCategory {
    pub id: String,
    pub name: String,
    /// Must reference a `TaxRate` in the owning jurisdiction
    pub tax_rate_id: String,
}
