//! Bill split session engine
//!
//! Three split modes over one aggregated bill:
//! - **equal**: every payer owes total / N
//! - **custom**: operator types each payer's amount, engine reports balance
//! - **item**: payers owe their assigned lines plus a proportional tax share
//!
//! The session is a value: every transition takes `&SplitSession` and
//! returns the next session. `reset` is the only transition that removes
//! data; changing the mode or payer count preserves paid-so-far totals
//! and item assignments.

mod custom;
mod equal;
mod items;


use rust_decimal::Decimal;
use shared::error::ValidationError;
use shared::split::{SplitMode, SplitReconciliation, SplitSession, SplitShare};

use crate::money::{
    MONEY_TOLERANCE, round2, to_decimal, to_f64, to_f64_raw, validate_custom_amount,
    validate_payment_amount,
};

/// Minimum number of payers in any split
pub const MIN_PAYERS: i32 = 2;

/// Clone the session and stamp `updated_at`
fn touched(session: &SplitSession) -> SplitSession {
    let mut next = session.clone();
    next.updated_at = chrono::Utc::now().timestamp_millis();
    next
}

fn require_payer(session: &SplitSession, payer_id: &str) -> Result<(), ValidationError> {
    if !session.has_payer(payer_id) {
        return Err(ValidationError::UnknownPayer(payer_id.to_string()));
    }
    Ok(())
}

// ============================================================================
// Transitions
// ============================================================================

/// Switch the split mode.
///
/// Assignments and custom amounts lose meaning outside their mode but are
/// preserved untouched; shares are recomputed wholesale on the next
/// breakdown call.
pub fn set_mode(session: &SplitSession, mode: SplitMode) -> SplitSession {
    let mut next = touched(session);
    next.mode = mode;
    tracing::debug!(session_id = %next.session_id, ?mode, "split mode changed");
    next
}

/// Change the number of payers. Paid-so-far totals and assignments are
/// preserved; entries for payers beyond the new count stay in the maps
/// and are ignored by breakdown until the count grows again.
pub fn set_payer_count(
    session: &SplitSession,
    count: i32,
) -> Result<SplitSession, ValidationError> {
    if count < MIN_PAYERS {
        return Err(ValidationError::InvalidPayerCount(count));
    }
    let mut next = touched(session);
    next.payer_count = count;
    Ok(next)
}

/// Record the operator-typed amount for one payer (custom mode).
///
/// Stored verbatim; the engine never redistributes a remainder. Balance
/// is reported via [`reconciliation`].
pub fn set_custom_amount(
    session: &SplitSession,
    payer_id: &str,
    amount: f64,
) -> Result<SplitSession, ValidationError> {
    validate_custom_amount(amount)?;
    require_payer(session, payer_id)?;
    let mut next = touched(session);
    next.custom_amounts.insert(payer_id.to_string(), amount);
    Ok(next)
}

/// Assign a line to a payer (item mode).
///
/// Assignment is exclusive: the new mapping silently replaces any prior
/// one, so a line never belongs to two payers.
pub fn assign_item(
    session: &SplitSession,
    line_id: &str,
    payer_id: &str,
) -> Result<SplitSession, ValidationError> {
    if session.line_by_id(line_id).is_none() {
        return Err(ValidationError::LineNotFound(line_id.to_string()));
    }
    require_payer(session, payer_id)?;
    let mut next = touched(session);
    next.assignments
        .insert(line_id.to_string(), payer_id.to_string());
    Ok(next)
}

/// Remove a line's assignment. Unassigned lines contribute to no payer.
pub fn unassign_item(session: &SplitSession, line_id: &str) -> SplitSession {
    let mut next = touched(session);
    next.assignments.remove(line_id);
    next
}

/// Record a partial payment against one payer's share.
///
/// The amount must be strictly positive; there is no upper bound against
/// the owed amount. Overpayment surfaces as negative `remaining` (tips,
/// rounding generosity).
pub fn record_payment(
    session: &SplitSession,
    payer_id: &str,
    amount: f64,
) -> Result<SplitSession, ValidationError> {
    validate_payment_amount(amount)?;
    require_payer(session, payer_id)?;

    let mut next = touched(session);
    let paid = to_f64(to_decimal(session.paid_for(payer_id)) + to_decimal(amount));
    next.paid_amounts.insert(payer_id.to_string(), paid);
    tracing::debug!(session_id = %next.session_id, payer_id, amount, paid, "payment recorded");

    let overpaid = compute_breakdown(&next)
        .into_iter()
        .find(|s| s.payer_id == payer_id)
        .map(|s| s.remaining)
        .filter(|r| *r < 0.0);
    if let Some(remaining) = overpaid {
        tracing::warn!(
            session_id = %next.session_id,
            payer_id,
            overpaid = -remaining,
            "payer overpaid their share"
        );
    }

    Ok(next)
}

/// Clear custom amounts, assignments, and paid-so-far, and return to
/// equal mode with two payers. The only transition that removes data.
pub fn reset(session: &SplitSession) -> SplitSession {
    let mut next = touched(session);
    next.mode = SplitMode::Equal;
    next.payer_count = MIN_PAYERS;
    next.custom_amounts.clear();
    next.assignments.clear();
    next.paid_amounts.clear();
    tracing::debug!(session_id = %next.session_id, "split session reset");
    next
}

// ============================================================================
// Queries
// ============================================================================

/// Compute every payer's share under the current mode.
///
/// Pure function of the session; recomputed on every call, nothing is
/// cached beyond the paid-so-far totals.
pub fn compute_breakdown(session: &SplitSession) -> Vec<SplitShare> {
    let mut shares = match session.mode {
        SplitMode::Equal => equal::compute(session),
        SplitMode::Custom => custom::compute(session),
        SplitMode::Item => items::compute(session),
    };

    for share in &mut shares {
        share.paid = session.paid_for(&share.payer_id);
        share.remaining = to_f64_raw(to_decimal(share.owed) - to_decimal(share.paid));
    }

    shares
}

/// Reconciliation status of the current configuration.
///
/// Equal mode is balanced by construction. Custom mode compares the typed
/// amounts against the total. Item mode reports the unassigned lines and
/// the shortfall they cause. Always data, never an error.
pub fn reconciliation(session: &SplitSession) -> SplitReconciliation {
    match session.mode {
        SplitMode::Equal => SplitReconciliation::balanced(),
        SplitMode::Custom => {
            let typed: Decimal = session
                .payer_ids()
                .iter()
                .map(|id| to_decimal(session.custom_amount_for(id)))
                .sum();
            let delta = to_decimal(session.total) - typed;
            SplitReconciliation {
                balanced: delta.abs() <= MONEY_TOLERANCE,
                delta: to_f64(delta),
                unassigned_lines: Vec::new(),
                unassigned_amount: 0.0,
            }
        }
        SplitMode::Item => {
            let owed: Decimal = items::compute(session)
                .iter()
                .map(|s| to_decimal(s.owed))
                .sum();
            let delta = to_decimal(session.total) - owed;

            let mut unassigned_lines = Vec::new();
            let mut unassigned_amount = Decimal::ZERO;
            for line in &session.lines {
                let covered = session
                    .assigned_payer(&line.line_id)
                    .is_some_and(|p| session.has_payer(p));
                if !covered {
                    unassigned_lines.push(line.line_id.clone());
                    unassigned_amount += to_decimal(line.amount);
                }
            }

            SplitReconciliation {
                balanced: delta.abs() <= MONEY_TOLERANCE,
                delta: to_f64(delta),
                unassigned_lines,
                unassigned_amount: to_f64(unassigned_amount),
            }
        }
    }
}

/// True when every share is paid down to within one cent overall.
pub fn is_fully_settled(session: &SplitSession) -> bool {
    let remaining: Decimal = compute_breakdown(session)
        .iter()
        .map(|s| to_decimal(s.remaining))
        .sum();
    round2(remaining) <= MONEY_TOLERANCE
}
