//! In-memory expense store
//!
//! The store owns every expense for a session, keeps them in insertion
//! order, and notifies subscribers synchronously after each mutation so
//! dependent views are never stale behind a change.

use chrono::NaiveDateTime;
use std::fmt;

use crate::models::{Category, Expense, ExpenseId, Money, SubscriptionId};

/// A change to the store's contents, delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// An expense was appended to the store
    Added(ExpenseId),
    /// An expense was removed from the store
    Removed(ExpenseId),
}

impl StoreEvent {
    /// The expense the event refers to
    pub fn expense_id(&self) -> ExpenseId {
        match self {
            StoreEvent::Added(id) | StoreEvent::Removed(id) => *id,
        }
    }
}

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// In-memory owner of all expense records for a session
///
/// Expenses are only ever created through [`ExpenseStore::add`] and leave
/// through [`ExpenseStore::remove`]; there is no in-place update. The store
/// is single-threaded and callbacks run on the caller's stack, before the
/// mutating call returns.
pub struct ExpenseStore {
    /// Records in insertion order
    expenses: Vec<Expense>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl ExpenseStore {
    /// Create an empty store with no subscribers
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Record a new expense and notify subscribers
    ///
    /// The record is appended after all existing expenses and a copy of it
    /// is returned. The amount is stored as given; zero and negative
    /// amounts and empty descriptions are all accepted here.
    pub fn add(
        &mut self,
        date: NaiveDateTime,
        amount: Money,
        description: impl Into<String>,
        category: Category,
    ) -> Expense {
        let expense = Expense::new(date, amount, description, category);
        let id = expense.id();
        self.expenses.push(expense.clone());

        tracing::debug!(id = %id, category = %expense.category(), "expense added");
        self.notify(StoreEvent::Added(id));

        expense
    }

    /// Remove the expense with the given ID
    ///
    /// Returns whether anything was removed. Removing an ID that is not in
    /// the store is a no-op: the contents stay unchanged and subscribers
    /// are not notified.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let len_before = self.expenses.len();
        self.expenses.retain(|expense| expense.id() != id);
        let removed = self.expenses.len() < len_before;

        if removed {
            tracing::debug!(id = %id, "expense removed");
            self.notify(StoreEvent::Removed(id));
        }

        removed
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    /// Check whether an expense with the given ID is in the store
    pub fn contains(&self, id: ExpenseId) -> bool {
        self.get(id).is_some()
    }

    /// Number of expenses in the store
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the store has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Register a callback to run on every store change
    ///
    /// Callbacks run synchronously inside [`ExpenseStore::add`] and
    /// [`ExpenseStore::remove`], in subscription order. The returned ID
    /// is the handle for [`ExpenseStore::unsubscribe`].
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscription; returns whether it existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() < len_before
    }

    /// Number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExpenseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseStore")
            .field("expenses", &self.expenses)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
