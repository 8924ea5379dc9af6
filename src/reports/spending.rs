//! Spending views
//!
//! Category filtering and totals computed on demand from the store. These
//! are pure reads: nothing here caches, so a view recomputed after a store
//! notification always reflects the current contents.

use crate::models::{Category, Expense, Money};
use crate::store::ExpenseStore;

/// All expenses in one category, in store insertion order
pub fn expenses_for_category<'a>(store: &'a ExpenseStore, category: Category) -> Vec<&'a Expense> {
    store
        .list()
        .iter()
        .filter(|expense| expense.category() == category)
        .collect()
}

/// Total spent in one category
///
/// Sums the matching amounts in list order; an empty category totals to
/// exactly zero.
pub fn total_for_category(store: &ExpenseStore, category: Category) -> Money {
    expenses_for_category(store, category)
        .into_iter()
        .map(|expense| expense.amount())
        .sum()
}

/// Totals for a single category within a breakdown
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// The category
    pub category: Category,
    /// Total spent in this category
    pub total: Money,
    /// Number of expenses in this category
    pub expense_count: usize,
}

/// Spending breakdown across every category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// One row per category, in canonical category order
    pub totals: Vec<CategoryTotal>,
    /// Total across all categories
    pub grand_total: Money,
    /// Total number of expenses
    pub expense_count: usize,
}

impl CategoryBreakdown {
    /// Generate a breakdown from the store's current contents
    pub fn generate(store: &ExpenseStore) -> Self {
        // Rows sit in canonical category order, so the category's index
        // doubles as the row index
        let mut totals: Vec<CategoryTotal> = Category::all()
            .iter()
            .map(|&category| CategoryTotal {
                category,
                total: Money::zero(),
                expense_count: 0,
            })
            .collect();

        let mut grand_total = Money::zero();
        for expense in store.list() {
            let row = &mut totals[expense.category().index()];
            row.total += expense.amount();
            row.expense_count += 1;
            grand_total += expense.amount();
        }

        Self {
            totals,
            grand_total,
            expense_count: store.len(),
        }
    }

    /// Total for one category in this breakdown
    pub fn total_for(&self, category: Category) -> Money {
        self.totals[category.index()].total
    }

    /// Categories with at least one expense, highest spending first
    pub fn top_categories(&self) -> Vec<&CategoryTotal> {
        let mut rows: Vec<&CategoryTotal> = self
            .totals
            .iter()
            .filter(|row| row.expense_count > 0)
            .collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn sample_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn seeded_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add(
            sample_date(),
            Money::from_cents(1250),
            "milk",
            Category::Groceries,
        );
        store.add(
            sample_date(),
            Money::from_cents(4000),
            "electric bill",
            Category::Electricity,
        );
        store.add(
            sample_date(),
            Money::from_cents(800),
            "bread",
            Category::Groceries,
        );
        store
    }

    #[test]
    fn test_filter_preserves_insertion_order() {
        let store = seeded_store();
        let groceries = expenses_for_category(&store, Category::Groceries);

        assert_eq!(groceries.len(), 2);
        assert_eq!(groceries[0].description(), "milk");
        assert_eq!(groceries[1].description(), "bread");
    }

    #[test]
    fn test_filter_empty_category() {
        let store = seeded_store();
        assert!(expenses_for_category(&store, Category::Rent).is_empty());
    }

    #[test]
    fn test_total_for_category() {
        let store = seeded_store();
        assert_eq!(
            total_for_category(&store, Category::Groceries),
            Money::from_cents(2050)
        );
        assert_eq!(
            total_for_category(&store, Category::Electricity),
            Money::from_cents(4000)
        );
    }

    #[test]
    fn test_total_for_empty_category_is_zero() {
        let store = seeded_store();
        assert_eq!(total_for_category(&store, Category::Fuel), Money::zero());

        let empty = ExpenseStore::new();
        assert_eq!(total_for_category(&empty, Category::Groceries), Money::zero());
    }

    #[test]
    fn test_total_includes_negative_amounts() {
        let mut store = ExpenseStore::new();
        store.add(
            sample_date(),
            Money::from_cents(1000),
            "dinner out",
            Category::Food,
        );
        store.add(
            sample_date(),
            Money::from_cents(-250),
            "refund",
            Category::Food,
        );

        assert_eq!(
            total_for_category(&store, Category::Food),
            Money::from_cents(750)
        );
    }

    #[test]
    fn test_breakdown_covers_all_categories() {
        let store = seeded_store();
        let breakdown = CategoryBreakdown::generate(&store);

        assert_eq!(breakdown.totals.len(), Category::COUNT);
        assert_eq!(breakdown.grand_total, Money::from_cents(6050));
        assert_eq!(breakdown.expense_count, 3);
        assert_eq!(
            breakdown.total_for(Category::Groceries),
            Money::from_cents(2050)
        );
        assert_eq!(breakdown.total_for(Category::Rent), Money::zero());
    }

    #[test]
    fn test_breakdown_rows_in_canonical_order() {
        let breakdown = CategoryBreakdown::generate(&ExpenseStore::new());
        for (row, category) in breakdown.totals.iter().zip(Category::all()) {
            assert_eq!(row.category, *category);
            assert!(row.total.is_zero());
        }
    }

    #[test]
    fn test_top_categories_sorted_by_spending() {
        let store = seeded_store();
        let breakdown = CategoryBreakdown::generate(&store);
        let top = breakdown.top_categories();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, Category::Electricity);
        assert_eq!(top[1].category, Category::Groceries);
    }

    #[test]
    fn test_views_recompute_after_removal() {
        let mut store = seeded_store();
        let milk_id = store.list()[0].id();
        store.remove(milk_id);

        assert_eq!(
            total_for_category(&store, Category::Groceries),
            Money::from_cents(800)
        );
        let groceries = expenses_for_category(&store, Category::Groceries);
        assert_eq!(groceries.len(), 1);
        assert_eq!(groceries[0].description(), "bread");
    }
}
