//! Spending category model
//!
//! Categories are a fixed, closed set: there is no user-defined category
//! management. Display names are derived from the canonical identifiers, so
//! the two can never drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category for an expense
///
/// The serialized form uses the camelCase identifier (e.g. `"houseHelp"`),
/// matching [`Category::identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Groceries,
    Utilities,
    Food,
    Electricity,
    Rent,
    Fuel,
    HouseHelp,
}

impl Category {
    /// All categories, in canonical order
    pub const ALL: [Category; 7] = [
        Category::Groceries,
        Category::Utilities,
        Category::Food,
        Category::Electricity,
        Category::Rent,
        Category::Fuel,
        Category::HouseHelp,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Get all categories in canonical order
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The canonical camelCase identifier for this category
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Utilities => "utilities",
            Self::Food => "food",
            Self::Electricity => "electricity",
            Self::Rent => "rent",
            Self::Fuel => "fuel",
            Self::HouseHelp => "houseHelp",
        }
    }

    /// Human-readable name: the identifier with its first character
    /// upper-cased and nothing else changed ("houseHelp" -> "HouseHelp")
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::Food => "Food",
            Self::Electricity => "Electricity",
            Self::Rent => "Rent",
            Self::Fuel => "Fuel",
            Self::HouseHelp => "HouseHelp",
        }
    }

    /// Position in canonical order, usable as an array index
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.identifier() == trimmed || c.display_name() == trimmed)
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(f, "Unknown category: {}", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}
