//! Session wiring
//!
//! A session owns one expense store plus the per-view states that read
//! from it. Everything is constructed explicitly at startup and handed to
//! whoever needs it; there is no ambient global instance.

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::reports::{expenses_for_category, total_for_category, MonthlySaver};
use crate::store::ExpenseStore;

/// Daily log view state: which category the log is filtered to
///
/// The log itself holds no expenses; entries and totals are read from the
/// store on demand, so they are correct immediately after any change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyLog {
    category: Category,
}

impl DailyLog {
    /// Start on the first category
    pub fn new() -> Self {
        Self {
            category: Category::Groceries,
        }
    }

    /// The currently selected category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Switch the log to another category
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Entries for the selected category, in insertion order
    pub fn entries<'a>(&self, store: &'a ExpenseStore) -> Vec<&'a Expense> {
        expenses_for_category(store, self.category)
    }

    /// Total spent in the selected category
    pub fn total(&self, store: &ExpenseStore) -> Money {
        total_for_category(store, self.category)
    }
}

impl Default for DailyLog {
    fn default() -> Self {
        Self::new()
    }
}

/// A running expense-tracking session
///
/// Bundles the store, the daily log and saver view states, and the display
/// settings. Hosts keep one of these per open tracker.
#[derive(Debug)]
pub struct Session {
    store: ExpenseStore,
    daily_log: DailyLog,
    saver: MonthlySaver,
    settings: Settings,
}

impl Session {
    /// Create a session with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a session with the given display settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            store: ExpenseStore::new(),
            daily_log: DailyLog::new(),
            saver: MonthlySaver::new(),
            settings,
        }
    }

    /// The expense store
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// The expense store, mutably (for adds, removes, subscriptions)
    pub fn store_mut(&mut self) -> &mut ExpenseStore {
        &mut self.store
    }

    /// The daily log view state
    pub fn daily_log(&self) -> &DailyLog {
        &self.daily_log
    }

    /// The daily log view state, mutably
    pub fn daily_log_mut(&mut self) -> &mut DailyLog {
        &mut self.daily_log
    }

    /// The monthly saver view state
    pub fn saver(&self) -> &MonthlySaver {
        &self.saver
    }

    /// The monthly saver view state, mutably
    pub fn saver_mut(&mut self) -> &mut MonthlySaver {
        &mut self.saver
    }

    /// The session's display settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Record an expense from a raw amount field
    ///
    /// This is the text boundary for the add form: the amount arrives as
    /// the user typed it. If it does not parse as a decimal number the
    /// call fails, the store stays untouched, and no subscriber fires.
    pub fn add_expense(
        &mut self,
        date: NaiveDateTime,
        amount_text: &str,
        description: impl Into<String>,
        category: Category,
    ) -> OutlayResult<Expense> {
        let amount = Money::parse(amount_text).map_err(|err| {
            tracing::warn!(input = amount_text, "rejected expense amount");
            OutlayError::from(err)
        })?;

        Ok(self.store.add(date, amount, description, category))
    }

    /// Remove an expense; returns whether anything was removed
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        self.store.remove(id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
