//! Shared types for the checkout calculation engine
//!
//! Data model used across crates: jurisdiction tax configuration,
//! cart lines and tax breakdowns, split-session state, and error types.
//! All computation lives in `checkout-engine`; this crate holds values
//! and trivial accessors only.

pub mod cart;
pub mod error;
pub mod models;
pub mod split;

// Re-exports
pub use cart::{CartLine, CartTaxResult, TaxBreakdownEntry};
pub use error::{ConfigurationError, ValidationError};
pub use serde::{Deserialize, Serialize};
pub use split::{SplitMode, SplitReconciliation, SplitSession, SplitShare};
