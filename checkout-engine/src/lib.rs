//! Checkout calculation engine
//!
//! The computational core of the POS: tax rate resolution, cart tax
//! aggregation, and bill splitting with partial-payment tracking.
//!
//! # Architecture
//!
//! ```text
//! JurisdictionConfig + CartLine[] ──► tax::aggregate_cart_tax ──► CartTaxResult
//!                                                                      │
//!                                          SplitSession::open ◄────────┘
//!                                                  │
//!               split::{set_mode, assign_item, record_payment, ...}
//!                                                  │
//!                            split::compute_breakdown ──► SplitShare[]
//! ```
//!
//! Everything is synchronous and free of I/O: the calculation functions
//! are pure, and split-session transitions take a session by reference
//! and return the next session value.

pub mod money;
pub mod split;
pub mod tax;

// Re-exports
pub use split::{
    assign_item, compute_breakdown, is_fully_settled, reconciliation, record_payment, reset,
    set_custom_amount, set_mode, set_payer_count, unassign_item,
};
pub use tax::{aggregate_cart_tax, resolve_rate};

// Re-export shared types for convenience
pub use shared::{
    CartLine, CartTaxResult, ConfigurationError, SplitMode, SplitReconciliation, SplitSession,
    SplitShare, TaxBreakdownEntry, ValidationError,
};
