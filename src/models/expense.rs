//! Expense record model
//!
//! An expense is one recorded spending event. Records are immutable once
//! created: the store builds them on add, and removal is the only way out.
//! Corrections are modeled as remove-and-re-add.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded spending event
///
/// Fields are private and there are no mutators; an expense never changes
/// after it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation and never reused
    id: ExpenseId,

    /// When the expense occurred (caller-supplied, not creation time)
    date: NaiveDateTime,

    /// Amount spent; zero and negative amounts are stored as given
    amount: Money,

    /// Free-text description, may be empty
    #[serde(default)]
    description: String,

    /// Spending category
    category: Category,
}

impl Expense {
    /// Create an expense with a fresh identifier
    ///
    /// Only the store constructs expenses; everything else receives them
    /// from it.
    pub(crate) fn new(
        date: NaiveDateTime,
        amount: Money,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            amount,
            description: description.into(),
            category,
        }
    }

    /// Unique identifier
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// When the expense occurred
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Amount spent
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Spending category
    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            sample_date(),
            Money::from_cents(1250),
            "milk",
            Category::Groceries,
        );

        assert_eq!(expense.date(), sample_date());
        assert_eq!(expense.amount(), Money::from_cents(1250));
        assert_eq!(expense.description(), "milk");
        assert_eq!(expense.category(), Category::Groceries);
    }

    #[test]
    fn test_fresh_ids_differ() {
        let a = Expense::new(sample_date(), Money::zero(), "", Category::Food);
        let b = Expense::new(sample_date(), Money::zero(), "", Category::Food);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_empty_description_allowed() {
        let expense = Expense::new(sample_date(), Money::from_cents(500), "", Category::Fuel);
        assert_eq!(expense.description(), "");
    }

    #[test]
    fn test_zero_and_negative_amounts_allowed() {
        let zero = Expense::new(sample_date(), Money::zero(), "nothing", Category::Rent);
        assert!(zero.amount().is_zero());

        let refund = Expense::new(
            sample_date(),
            Money::from_cents(-300),
            "refund",
            Category::Utilities,
        );
        assert!(refund.amount().is_negative());
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(
            sample_date(),
            Money::from_cents(4000),
            "electric bill",
            Category::Electricity,
        );

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"electricity\""));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, expense);
    }
}
