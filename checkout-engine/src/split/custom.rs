//! Custom split: each payer owes whatever the operator typed
//!
//! Unset payers owe 0. The engine never redistributes a remainder; an
//! imbalance against the total is reported through reconciliation.

use shared::split::{SplitSession, SplitShare};

pub(super) fn compute(session: &SplitSession) -> Vec<SplitShare> {
    (1..=session.payer_count)
        .map(|n| {
            let payer_id = SplitSession::payer_id(n);
            let owed = session.custom_amount_for(&payer_id);
            SplitShare {
                payer_id,
                name: SplitSession::payer_name(n),
                owed,
                paid: 0.0,
                remaining: 0.0,
                lines: None,
            }
        })
        .collect()
}
