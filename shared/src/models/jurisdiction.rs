//! Jurisdiction Configuration Model

use serde::{Deserialize, Serialize};

use super::tax_category::TaxCategory;
use super::tax_rate::TaxRate;
use crate::error::ConfigurationError;

/// Strategy a jurisdiction uses to pick a tax rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxMode {
    /// One flat rate for everything
    #[default]
    Fixed,
    /// Rate chosen by item category
    CategoryBased,
    /// Reserved: resolves like `Fixed` until product-level overrides exist
    ProductBased,
}

/// A tax regime (country or zone) with its own rate table and
/// categorization rules. Selected by the operator, loaded once per
/// session, and read-only from the engine's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JurisdictionConfig {
    pub id: String,
    pub name: String,
    /// ISO 4217 code ("EUR", "USD")
    pub currency_code: String,
    /// Label shown on receipts ("VAT", "IVA", "GST")
    pub tax_label: String,
    #[serde(default)]
    pub tax_mode: TaxMode,
    /// Ordered rate table; exactly one entry should be marked default
    pub tax_rates: Vec<TaxRate>,
    /// Populated when `tax_mode` is category-based
    #[serde(default)]
    pub tax_categories: Vec<TaxCategory>,
}

impl JurisdictionConfig {
    /// The rate marked default, falling back to the first rate.
    /// `None` only for an empty rate table.
    pub fn default_rate(&self) -> Option<&TaxRate> {
        self.tax_rates
            .iter()
            .find(|r| r.is_default)
            .or_else(|| self.tax_rates.first())
    }

    pub fn rate_by_id(&self, id: &str) -> Option<&TaxRate> {
        self.tax_rates.iter().find(|r| r.id == id)
    }

    pub fn category_by_id(&self, id: &str) -> Option<&TaxCategory> {
        self.tax_categories.iter().find(|c| c.id == id)
    }

    /// Load-time invariant check: at least one rate, exactly one default,
    /// and every category referencing an existing rate.
    ///
    /// Rate resolution itself only requires a non-empty rate table; the
    /// stricter checks here exist so a broken config surfaces at selection
    /// time rather than mid-sale.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.tax_rates.is_empty() {
            return Err(ConfigurationError::NoTaxRates(self.id.clone()));
        }

        let defaults = self.tax_rates.iter().filter(|r| r.is_default).count();
        if defaults == 0 {
            return Err(ConfigurationError::NoDefaultRate(self.id.clone()));
        }
        if defaults > 1 {
            return Err(ConfigurationError::MultipleDefaultRates(self.id.clone()));
        }

        for category in &self.tax_categories {
            if self.rate_by_id(&category.tax_rate_id).is_none() {
                return Err(ConfigurationError::UnknownRateReference {
                    category_id: category.id.clone(),
                    tax_rate_id: category.tax_rate_id.clone(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Canned per-country presets
// ============================================================================

impl JurisdictionConfig {
    /// France: category-based VAT (20% standard, 10% reduced, 5.5% super-reduced)
    pub fn france() -> Self {
        Self {
            id: "fr".to_string(),
            name: "France".to_string(),
            currency_code: "EUR".to_string(),
            tax_label: "VAT".to_string(),
            tax_mode: TaxMode::CategoryBased,
            tax_rates: vec![
                TaxRate::new_default("fr-standard", "Standard", 20.0),
                TaxRate::new("fr-reduced", "Reduced", 10.0),
                TaxRate::new("fr-super-reduced", "Super-reduced", 5.5),
            ],
            tax_categories: vec![
                TaxCategory {
                    id: "alcohol".to_string(),
                    name: "Alcohol".to_string(),
                    tax_rate_id: "fr-standard".to_string(),
                },
                TaxCategory {
                    id: "soft-drinks".to_string(),
                    name: "Soft drinks".to_string(),
                    tax_rate_id: "fr-reduced".to_string(),
                },
                TaxCategory {
                    id: "takeaway".to_string(),
                    name: "Takeaway".to_string(),
                    tax_rate_id: "fr-reduced".to_string(),
                },
            ],
        }
    }

    /// Spain: category-based IVA (21% general, 10% reducido, 4% superreducido)
    pub fn spain() -> Self {
        Self {
            id: "es".to_string(),
            name: "Spain".to_string(),
            currency_code: "EUR".to_string(),
            tax_label: "IVA".to_string(),
            tax_mode: TaxMode::CategoryBased,
            tax_rates: vec![
                TaxRate::new_default("es-general", "General", 21.0),
                TaxRate::new("es-reducido", "Reducido", 10.0),
                TaxRate::new("es-superreducido", "Superreducido", 4.0),
            ],
            tax_categories: vec![
                TaxCategory {
                    id: "alcohol".to_string(),
                    name: "Alcohol".to_string(),
                    tax_rate_id: "es-general".to_string(),
                },
                TaxCategory {
                    id: "food".to_string(),
                    name: "Food".to_string(),
                    tax_rate_id: "es-reducido".to_string(),
                },
            ],
        }
    }

    /// United States: a single fixed sales-tax rate
    pub fn united_states() -> Self {
        Self {
            id: "us".to_string(),
            name: "United States".to_string(),
            currency_code: "USD".to_string(),
            tax_label: "Sales Tax".to_string(),
            tax_mode: TaxMode::Fixed,
            tax_rates: vec![TaxRate::new_default("us-sales", "Sales Tax", 8.25)],
            tax_categories: Vec::new(),
        }
    }
}
