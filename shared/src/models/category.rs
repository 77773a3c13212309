//! Catalog Category Model

use serde::{Deserialize, Serialize};

/// Externally-defined product category from the catalog service.
///
/// The engine only reads `tax_rate_id`: when populated it overrides the
/// jurisdiction's own category table during rate resolution. Everything
/// else is display metadata owned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Optional override, resolved against the jurisdiction's rate table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}
