//! Error types
//!
//! Two kinds cover the whole core: a jurisdiction configuration that cannot
//! resolve any tax rate (a setup problem, surfaced to the operator), and a
//! caller contract violation on a split-session transition. Reconciliation
//! mismatches are modeled as data (`SplitReconciliation`), not errors.

use thiserror::Error;

/// Jurisdiction configuration errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("jurisdiction '{0}' has no tax rates configured")]
    NoTaxRates(String),

    #[error("jurisdiction '{0}' has no tax rate marked as default")]
    NoDefaultRate(String),

    #[error("jurisdiction '{0}' marks more than one tax rate as default")]
    MultipleDefaultRates(String),

    #[error("tax category '{category_id}' references unknown tax rate '{tax_rate_id}'")]
    UnknownRateReference {
        category_id: String,
        tax_rate_id: String,
    },
}

/// Split-session validation errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(f64),

    #[error("{0} must be a finite number")]
    NonFiniteAmount(String),

    #[error("amount exceeds maximum allowed, got {0}")]
    AmountTooLarge(f64),

    #[error("payer count must be at least 2, got {0}")]
    InvalidPayerCount(i32),

    #[error("unknown payer: {0}")]
    UnknownPayer(String),

    #[error("line not found in split session: {0}")]
    LineNotFound(String),
}
