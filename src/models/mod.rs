//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: money amounts, the fixed category set, and expense records.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CategoryParseError};
pub use expense::Expense;
pub use ids::{ExpenseId, SubscriptionId};
pub use money::{Money, MoneyParseError};
