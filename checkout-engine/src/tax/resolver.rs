//! Tax rate resolution
//!
//! Resolution is a precedence-ordered chain tried in sequence:
//!
//! 1. catalog override: the external catalog category carries its own
//!    rate reference
//! 2. jurisdiction category: the config's own category table
//! 3. default rate: the rate marked default, else the first in the table
//!
//! Fixed mode jumps straight to the default; the reserved product-based
//! mode currently resolves the same way.

use shared::error::ConfigurationError;
use shared::models::{Category, JurisdictionConfig, TaxMode, TaxRate};

/// Resolve the applicable tax rate for an optional category.
///
/// Deterministic and side-effect free. Fails only when the config has no
/// rates at all; an unknown category falls back to the default rate.
pub fn resolve_rate<'a>(
    config: &'a JurisdictionConfig,
    category_id: Option<&str>,
    catalog: Option<&[Category]>,
) -> Result<&'a TaxRate, ConfigurationError> {
    match config.tax_mode {
        TaxMode::Fixed | TaxMode::ProductBased => default_rate(config),
        TaxMode::CategoryBased => category_id
            .and_then(|id| {
                catalog_override(config, id, catalog)
                    .or_else(|| jurisdiction_category(config, id))
            })
            .map(Ok)
            .unwrap_or_else(|| default_rate(config)),
    }
}

/// Chain step 1: a catalog category with a populated rate reference that
/// resolves against the jurisdiction's rate table
fn catalog_override<'a>(
    config: &'a JurisdictionConfig,
    category_id: &str,
    catalog: Option<&[Category]>,
) -> Option<&'a TaxRate> {
    catalog?
        .iter()
        .find(|c| c.id == category_id)
        .and_then(|c| c.tax_rate_id.as_deref())
        .and_then(|rate_id| config.rate_by_id(rate_id))
}

/// Chain step 2: the jurisdiction's own category table
fn jurisdiction_category<'a>(
    config: &'a JurisdictionConfig,
    category_id: &str,
) -> Option<&'a TaxRate> {
    config
        .category_by_id(category_id)
        .and_then(|c| config.rate_by_id(&c.tax_rate_id))
}

/// Chain step 3: the default rate. An empty rate table is the only
/// failure in the whole resolver.
fn default_rate(config: &JurisdictionConfig) -> Result<&TaxRate, ConfigurationError> {
    config
        .default_rate()
        .ok_or_else(|| ConfigurationError::NoTaxRates(config.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with_override() -> Vec<Category> {
        vec![
            Category {
                id: "desserts".to_string(),
                name: "Desserts".to_string(),
                tax_rate_id: Some("fr-super-reduced".to_string()),
                sort_order: 0,
            },
            Category {
                id: "merch".to_string(),
                name: "Merchandise".to_string(),
                tax_rate_id: None,
                sort_order: 1,
            },
        ]
    }

    #[test]
    fn test_fixed_mode_ignores_category() {
        let config = JurisdictionConfig::united_states();
        let rate = resolve_rate(&config, Some("alcohol"), None).unwrap();
        assert_eq!(rate.id, "us-sales");
        assert_eq!(rate.rate, 8.25);
    }

    #[test]
    fn test_category_based_resolves_via_jurisdiction_table() {
        let config = JurisdictionConfig::france();
        let rate = resolve_rate(&config, Some("soft-drinks"), None).unwrap();
        assert_eq!(rate.id, "fr-reduced");
        assert_eq!(rate.rate, 10.0);
    }

    #[test]
    fn test_catalog_override_wins_over_jurisdiction_table() {
        let mut config = JurisdictionConfig::france();
        // Jurisdiction table would map desserts to standard
        config.tax_categories.push(shared::models::TaxCategory {
            id: "desserts".to_string(),
            name: "Desserts".to_string(),
            tax_rate_id: "fr-standard".to_string(),
        });

        let catalog = catalog_with_override();
        let rate = resolve_rate(&config, Some("desserts"), Some(&catalog)).unwrap();
        assert_eq!(rate.id, "fr-super-reduced");
    }

    #[test]
    fn test_catalog_without_rate_reference_falls_through() {
        let config = JurisdictionConfig::france();
        let catalog = catalog_with_override();
        // "merch" exists in the catalog but has no rate reference and no
        // jurisdiction category: default applies
        let rate = resolve_rate(&config, Some("merch"), Some(&catalog)).unwrap();
        assert_eq!(rate.id, "fr-standard");
    }

    #[test]
    fn test_catalog_with_dangling_rate_reference_falls_through() {
        let config = JurisdictionConfig::france();
        let catalog = vec![Category {
            id: "soft-drinks".to_string(),
            name: "Soft drinks".to_string(),
            tax_rate_id: Some("not-a-rate".to_string()),
            sort_order: 0,
        }];
        // Override reference does not resolve; the jurisdiction's own
        // category table still applies
        let rate = resolve_rate(&config, Some("soft-drinks"), Some(&catalog)).unwrap();
        assert_eq!(rate.id, "fr-reduced");
    }

    #[test]
    fn test_unknown_category_falls_back_to_default() {
        let config = JurisdictionConfig::france();
        let rate = resolve_rate(&config, Some("not-a-category"), None).unwrap();
        assert_eq!(rate.id, "fr-standard");
    }

    #[test]
    fn test_no_category_uses_default() {
        let config = JurisdictionConfig::france();
        let rate = resolve_rate(&config, None, None).unwrap();
        assert_eq!(rate.id, "fr-standard");
    }

    #[test]
    fn test_product_based_resolves_like_fixed() {
        let mut config = JurisdictionConfig::france();
        config.tax_mode = TaxMode::ProductBased;
        let rate = resolve_rate(&config, Some("soft-drinks"), None).unwrap();
        assert_eq!(rate.id, "fr-standard");
    }

    #[test]
    fn test_empty_rate_table_is_configuration_error() {
        let mut config = JurisdictionConfig::united_states();
        config.tax_rates.clear();
        assert_eq!(
            resolve_rate(&config, None, None),
            Err(ConfigurationError::NoTaxRates("us".to_string()))
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let config = JurisdictionConfig::spain();
        let first = resolve_rate(&config, Some("food"), None).unwrap().clone();
        for _ in 0..10 {
            let again = resolve_rate(&config, Some("food"), None).unwrap();
            assert_eq!(*again, first);
        }
    }
}
