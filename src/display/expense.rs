//! Expense display formatting
//!
//! Renders expenses, daily logs, and breakdowns as plain text. Amounts are
//! always shown to two decimal places with the configured currency symbol;
//! dates use a medium date plus short time style.

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::models::{Category, Expense, Money};
use crate::reports::CategoryBreakdown;

/// Format a date with the configured date and time formats
///
/// The default settings render "Jan 5, 2026 14:30".
pub fn format_date(date: NaiveDateTime, settings: &Settings) -> String {
    format!(
        "{} {}",
        date.format(&settings.date_format),
        date.format(&settings.time_format)
    )
}

/// Format an amount with the configured currency symbol
pub fn format_amount(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format a single expense for display (log row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:18} {:24} {:>12}",
        format_date(expense.date(), settings),
        truncate(expense.description(), 24),
        format_amount(expense.amount(), settings)
    )
}

/// Format a daily log for one category
pub fn format_daily_log(expenses: &[&Expense], total: Money, settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:18} {:24} {:>12}\n",
        "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(56));
    output.push('\n');
    output.push_str(&format!(
        "{:>43} {:>12}\n",
        "Total:",
        format_amount(total, settings)
    ));

    output
}

/// Format a category breakdown as a summary table
pub fn format_breakdown(breakdown: &CategoryBreakdown, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:16} {:>12} {:>8}\n",
        "Category", "Total", "Count"
    ));
    output.push_str(&"-".repeat(38));
    output.push('\n');

    for row in &breakdown.totals {
        output.push_str(&format!(
            "{:16} {:>12} {:>8}\n",
            row.category.display_name(),
            format_amount(row.total, settings),
            row.expense_count
        ));
    }

    output.push_str(&"-".repeat(38));
    output.push('\n');
    output.push_str(&format!(
        "{:16} {:>12} {:>8}\n",
        "Total",
        format_amount(breakdown.grand_total, settings),
        breakdown.expense_count
    ));

    output
}

/// Format the remaining-savings line for the monthly saver view
pub fn format_remaining(remaining: Money, settings: &Settings) -> String {
    format!("Remaining this month: {}", format_amount(remaining, settings))
}

/// The display heading for a category log
pub fn format_log_heading(category: Category) -> String {
    format!("{} expenses", category.display_name())
}

/// Truncate a string to a maximum length
///
/// Lengths are counted in chars to match the column widths above, so the
/// cut never lands inside a multi-byte character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
