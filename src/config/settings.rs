//! Display settings for the expense tracker
//!
//! Session-level preferences for how amounts and dates are rendered. The
//! core holds no disk state, so settings are plain values constructed at
//! startup; serde defaults let hosts deserialize partial configs.

use serde::{Deserialize, Serialize};

/// Display preferences for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime format, medium style by default)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Time format (strftime format, 24-hour by default)
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

impl Settings {
    /// Settings with a different currency symbol
    pub fn with_currency_symbol(symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: symbol.into(),
            ..Self::default()
        }
    }
}
