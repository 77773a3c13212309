//! Cart lines and tax breakdown types
//!
//! Cart lines are produced by the external cart collaborator and are
//! immutable inputs to aggregation. `CartTaxResult` is the authoritative
//! bill the split engine consumes.

use serde::{Deserialize, Serialize};

/// A single sold line from the live cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Cart-assigned identity; the assignment key in item-split mode
    pub line_id: String,
    /// Tax-exclusive subtotal for the line
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// One row of the tax breakdown: this much tax at this rate, on this
/// much taxable amount. Always grouped by distinct rate, never per line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxBreakdownEntry {
    pub tax_rate_id: String,
    pub tax_rate_name: String,
    /// Percentage rate (21.0 = 21%)
    pub rate: f64,
    /// Sum of line amounts resolved to this rate
    pub taxable_amount: f64,
    /// taxable_amount x rate, rounded once per group
    pub tax_amount: f64,
}

/// Authoritative bill computed from the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTaxResult {
    pub subtotal: f64,
    pub tax_amount: f64,
    /// subtotal + tax_amount, exact by construction
    pub total: f64,
    pub breakdown: Vec<TaxBreakdownEntry>,
}

impl CartTaxResult {
    /// The result for an empty cart. Not an error.
    pub fn empty() -> Self {
        Self {
            subtotal: 0.0,
            tax_amount: 0.0,
            total: 0.0,
            breakdown: Vec::new(),
        }
    }
}

impl Default for CartTaxResult {
    fn default() -> Self {
        Self::empty()
    }
}
