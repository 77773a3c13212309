//! Equal split: every payer owes total / N
//!
//! Shares are left unrounded so N x share reconstructs the exact total;
//! display layers round at presentation time.

use rust_decimal::Decimal;
use shared::split::{SplitSession, SplitShare};

use crate::money::{to_decimal, to_f64_raw};

pub(super) fn compute(session: &SplitSession) -> Vec<SplitShare> {
    let per_share = to_decimal(session.total) / Decimal::from(session.payer_count.max(1));
    let owed = to_f64_raw(per_share);

    (1..=session.payer_count)
        .map(|n| SplitShare {
            payer_id: SplitSession::payer_id(n),
            name: SplitSession::payer_name(n),
            owed,
            paid: 0.0,
            remaining: 0.0,
            lines: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::cart::CartTaxResult;

    fn session_with_total(total: f64, payer_count: i32) -> SplitSession {
        let bill = CartTaxResult {
            subtotal: total,
            tax_amount: 0.0,
            total,
            breakdown: Vec::new(),
        };
        let mut session = SplitSession::open(&bill, &[]);
        session.payer_count = payer_count;
        session
    }

    #[test]
    fn test_every_share_is_identical() {
        let shares = compute(&session_with_total(40.0, 3));
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].owed, shares[1].owed);
        assert_eq!(shares[1].owed, shares[2].owed);
    }

    #[test]
    fn test_shares_reconstruct_total() {
        let shares = compute(&session_with_total(40.0, 3));
        let sum: f64 = shares.iter().map(|s| s.owed).sum();
        assert!((sum - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_division_is_exact() {
        let shares = compute(&session_with_total(40.0, 4));
        assert!(shares.iter().all(|s| s.owed == 10.0));
    }
}
