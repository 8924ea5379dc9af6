//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The core itself is total: errors only
//! arise at the text-input boundary where raw user input is parsed.

use thiserror::Error;

use crate::models::{CategoryParseError, MoneyParseError};

/// The main error type for expense-tracking operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// An amount field that does not parse as a decimal number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A category name outside the fixed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl OutlayError {
    /// Create an invalid-amount error from the rejected input
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount(input.into())
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is an unknown-category error
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, Self::UnknownCategory(_))
    }
}

// Implement From traits for the model-level parse errors

impl From<MoneyParseError> for OutlayError {
    fn from(err: MoneyParseError) -> Self {
        match err {
            MoneyParseError::InvalidFormat(input) => Self::InvalidAmount(input),
        }
    }
}

impl From<CategoryParseError> for OutlayError {
    fn from(err: CategoryParseError) -> Self {
        match err {
            CategoryParseError::Unknown(input) => Self::UnknownCategory(input),
        }
    }
}

/// Result type alias for expense-tracking operations
pub type OutlayResult<T> = Result<T, OutlayError>;
