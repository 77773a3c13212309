//! Item split: payers owe their assigned lines plus a tax share
//!
//! Each payer's owed amount is the pre-tax sum of their assigned lines
//! plus a proportional slice of the aggregate tax:
//! `tax_share = tax_amount x payer_subtotal / cart_subtotal`, rounded to
//! cents at the share level. Unassigned lines contribute to no payer and
//! surface only through reconciliation.

use rust_decimal::Decimal;
use shared::cart::CartLine;
use shared::split::{SplitSession, SplitShare};

use crate::money::{to_decimal, to_f64};

pub(super) fn compute(session: &SplitSession) -> Vec<SplitShare> {
    let cart_subtotal = to_decimal(session.subtotal);
    let total_tax = to_decimal(session.tax_amount);

    (1..=session.payer_count)
        .map(|n| {
            let payer_id = SplitSession::payer_id(n);
            let lines: Vec<CartLine> = session
                .lines
                .iter()
                .filter(|l| session.assigned_payer(&l.line_id) == Some(payer_id.as_str()))
                .cloned()
                .collect();

            let payer_subtotal: Decimal = lines.iter().map(|l| to_decimal(l.amount)).sum();
            let tax_share = if cart_subtotal > Decimal::ZERO {
                total_tax * payer_subtotal / cart_subtotal
            } else {
                Decimal::ZERO
            };

            SplitShare {
                payer_id,
                name: SplitSession::payer_name(n),
                owed: to_f64(payer_subtotal + tax_share),
                paid: 0.0,
                remaining: 0.0,
                lines: Some(lines),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::cart::CartTaxResult;
    use shared::split::SplitMode;

    fn line(line_id: &str, amount: f64) -> CartLine {
        CartLine {
            line_id: line_id.to_string(),
            amount,
            category_id: None,
            product_id: None,
        }
    }

    fn item_session() -> SplitSession {
        let bill = CartTaxResult {
            subtotal: 35.0,
            tax_amount: 5.0,
            total: 40.0,
            breakdown: Vec::new(),
        };
        let lines = vec![line("l1", 15.0), line("l2", 20.0)];
        let mut session = SplitSession::open(&bill, &lines);
        session.mode = SplitMode::Item;
        session
    }

    #[test]
    fn test_proportional_tax_share() {
        let mut session = item_session();
        session
            .assignments
            .insert("l1".to_string(), "payer-1".to_string());
        session
            .assignments
            .insert("l2".to_string(), "payer-2".to_string());

        let shares = compute(&session);
        // 15 + 5 * 15/35 = 17.14, 20 + 5 * 20/35 = 22.86
        assert_eq!(shares[0].owed, 17.14);
        assert_eq!(shares[1].owed, 22.86);
    }

    #[test]
    fn test_unassigned_lines_owe_nothing() {
        let session = item_session();
        let shares = compute(&session);
        assert_eq!(shares[0].owed, 0.0);
        assert_eq!(shares[1].owed, 0.0);
        assert!(shares[0].lines.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_zero_subtotal_has_no_tax_share() {
        let bill = CartTaxResult::empty();
        let lines = vec![line("l1", 0.0)];
        let mut session = SplitSession::open(&bill, &lines);
        session.mode = SplitMode::Item;
        session
            .assignments
            .insert("l1".to_string(), "payer-1".to_string());

        let shares = compute(&session);
        assert_eq!(shares[0].owed, 0.0);
    }
}
