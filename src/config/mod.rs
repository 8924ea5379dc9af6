//! Configuration module for the expense tracker
//!
//! Holds session display preferences. There is no disk persistence here;
//! hosts construct settings at startup and hand them to the session.

pub mod settings;

pub use settings::Settings;
