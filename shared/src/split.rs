//! Split session types
//!
//! The split session is one versioned value holding everything mutable
//! about a bill split: mode, payer count, operator-typed amounts, item
//! assignments, and paid-so-far totals, plus the frozen bill figures it
//! was opened against. Transitions live in `checkout-engine` and return
//! a new session value; nothing here mutates shared state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartTaxResult};

/// Strategy for dividing one bill's total among multiple payers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplitMode {
    /// Every payer owes total / N
    #[default]
    Equal,
    /// Operator types each payer's amount
    Custom,
    /// Payers owe the items assigned to them plus a proportional tax share
    Item,
}

/// One payer's computed owed/paid/remaining figures within a split.
///
/// Shares are recomputed wholesale on every breakdown call; they are never
/// partially migrated across a mode or count change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitShare {
    /// Generated identifier (`payer-1`, `payer-2`, ...), never user-supplied
    pub payer_id: String,
    pub name: String,
    pub owed: f64,
    pub paid: f64,
    /// owed - paid; negative when overpaid
    pub remaining: f64,
    /// Lines assigned to this payer (item mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<CartLine>>,
}

/// Reconciliation status for the current split configuration.
///
/// Imbalance is reported, never thrown: the caller decides whether to
/// block confirmation on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitReconciliation {
    pub balanced: bool,
    /// total - sum of owed amounts
    pub delta: f64,
    /// Item mode: lines assigned to no current payer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unassigned_lines: Vec<String>,
    #[serde(default)]
    pub unassigned_amount: f64,
}

impl SplitReconciliation {
    pub fn balanced() -> Self {
        Self {
            balanced: true,
            delta: 0.0,
            unassigned_lines: Vec::new(),
            unassigned_amount: 0.0,
        }
    }
}

/// Split session state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitSession {
    pub session_id: String,
    #[serde(default)]
    pub mode: SplitMode,
    /// Number of payers, >= 2
    pub payer_count: i32,
    /// Operator-typed amounts (custom mode), keyed by payer id
    #[serde(default)]
    pub custom_amounts: HashMap<String, f64>,
    /// line_id -> payer_id; a line belongs to at most one payer
    #[serde(default)]
    pub assignments: HashMap<String, String>,
    /// Running paid totals per payer id; only `reset` clears these
    #[serde(default)]
    pub paid_amounts: HashMap<String, f64>,

    // -- Frozen bill figures the session was opened against --
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub lines: Vec<CartLine>,

    pub created_at: i64,
    pub updated_at: i64,
}

impl SplitSession {
    /// Open a split session against an aggregated bill.
    ///
    /// Starts in equal mode with two payers, which is also the state
    /// `reset` returns to.
    pub fn open(bill: &CartTaxResult, lines: &[CartLine]) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            mode: SplitMode::Equal,
            payer_count: 2,
            custom_amounts: HashMap::new(),
            assignments: HashMap::new(),
            paid_amounts: HashMap::new(),
            subtotal: bill.subtotal,
            tax_amount: bill.tax_amount,
            total: bill.total,
            lines: lines.to_vec(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Generated payer identifier for a 1-based index
    pub fn payer_id(n: i32) -> String {
        format!("payer-{n}")
    }

    /// Display name for a 1-based index
    pub fn payer_name(n: i32) -> String {
        format!("Payer {n}")
    }

    /// Identifiers of the current payers, in order
    pub fn payer_ids(&self) -> Vec<String> {
        (1..=self.payer_count).map(Self::payer_id).collect()
    }

    pub fn has_payer(&self, payer_id: &str) -> bool {
        self.payer_ids().iter().any(|id| id == payer_id)
    }

    /// Paid-so-far for a payer, 0 if none recorded
    pub fn paid_for(&self, payer_id: &str) -> f64 {
        self.paid_amounts.get(payer_id).copied().unwrap_or(0.0)
    }

    /// Operator-typed amount for a payer, 0 if unset
    pub fn custom_amount_for(&self, payer_id: &str) -> f64 {
        self.custom_amounts.get(payer_id).copied().unwrap_or(0.0)
    }

    pub fn line_by_id(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.line_id == line_id)
    }

    /// The payer a line is currently assigned to, if any
    pub fn assigned_payer(&self, line_id: &str) -> Option<&str> {
        self.assignments.get(line_id).map(String::as_str)
    }
}
