//! Derived views over the expense store
//!
//! Provides the spending views (category filtering, totals, breakdown)
//! and the savings goal tracker. Everything here is computed on demand
//! from current state; nothing is cached between calls.

pub mod savings;
pub mod spending;

pub use savings::{remaining_savings, MonthlySaver};
pub use spending::{expenses_for_category, total_for_category, CategoryBreakdown, CategoryTotal};
