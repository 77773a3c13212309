//! Cart tax aggregation
//!
//! Groups cart lines by their resolved rate and produces the
//! authoritative bill. Tax is rounded once per rate group, not per line,
//! so summing many small lines at the same rate never drifts from the
//! tax on their combined amount.

use rust_decimal::Decimal;
use shared::cart::{CartLine, CartTaxResult, TaxBreakdownEntry};
use shared::error::ConfigurationError;
use shared::models::{Category, JurisdictionConfig, TaxRate};

use super::resolver::resolve_rate;
use crate::money::{round2, to_decimal, to_f64};

/// Running accumulator for one distinct resolved rate
struct RateGroup<'a> {
    rate: &'a TaxRate,
    taxable: Decimal,
}

/// Aggregate cart lines into a `CartTaxResult`.
///
/// Breakdown entries appear in order of first appearance of each rate in
/// `lines`, so repeated calls on the same input are reproducible. An
/// empty cart yields an all-zero result, not an error.
pub fn aggregate_cart_tax(
    config: &JurisdictionConfig,
    lines: &[CartLine],
    catalog: Option<&[Category]>,
) -> Result<CartTaxResult, ConfigurationError> {
    let mut groups: Vec<RateGroup> = Vec::new();
    let mut subtotal = Decimal::ZERO;

    for line in lines {
        let rate = resolve_rate(config, line.category_id.as_deref(), catalog)?;
        let amount = to_decimal(line.amount);
        subtotal += amount;

        match groups.iter().position(|g| g.rate.id == rate.id) {
            Some(idx) => groups[idx].taxable += amount,
            None => groups.push(RateGroup {
                rate,
                taxable: amount,
            }),
        }
    }

    let mut breakdown = Vec::with_capacity(groups.len());
    let mut tax_total = Decimal::ZERO;
    for group in groups {
        // Rounded once per group
        let tax = round2(group.taxable * to_decimal(group.rate.rate) / Decimal::ONE_HUNDRED);
        tax_total += tax;
        breakdown.push(TaxBreakdownEntry {
            tax_rate_id: group.rate.id.clone(),
            tax_rate_name: group.rate.name.clone(),
            rate: group.rate.rate,
            taxable_amount: to_f64(group.taxable),
            tax_amount: to_f64(tax),
        });
    }

    Ok(CartTaxResult {
        subtotal: to_f64(subtotal),
        tax_amount: to_f64(tax_total),
        total: to_f64(subtotal + tax_total),
        breakdown,
    })
}
