//! Outlay - In-memory personal expense tracking core
//!
//! This library provides the core of a personal expense tracker: a fixed
//! set of spending categories, immutable expense records held in an
//! in-memory store with synchronous change notification, and the derived
//! views (daily log, category totals, savings goal) that read from it.
//! Rendering and input widgets belong to the embedding surface; this crate
//! stays UI-free.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session display preferences
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, IDs)
//! - `store`: The in-memory expense store and its change events
//! - `reports`: Derived views (category filter/totals, savings goal)
//! - `session`: Session wiring and the raw text-input boundary
//! - `display`: Plain-text formatting for terminal surfaces
//!
//! # Example
//!
//! ```
//! use outlay::models::Category;
//! use outlay::session::Session;
//! use chrono::NaiveDate;
//!
//! let mut session = Session::new();
//! let date = NaiveDate::from_ymd_opt(2026, 1, 5)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//!
//! let expense = session.add_expense(date, "12.50", "milk", Category::Groceries)?;
//! assert_eq!(session.store().len(), 1);
//! assert_eq!(expense.description(), "milk");
//! # Ok::<(), outlay::OutlayError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod session;
pub mod store;

pub use error::{OutlayError, OutlayResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with sensible defaults
///
/// Embedding hosts call this once at startup; further calls are no-ops.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("outlay=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
