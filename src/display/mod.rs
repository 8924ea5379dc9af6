//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, daily logs, and category
//! breakdowns as plain text for a host surface to print.

pub mod expense;

pub use expense::{
    format_amount, format_breakdown, format_daily_log, format_date, format_expense_row,
    format_log_heading, format_remaining,
};
