//! Spending categories
//!
//! Expenses and budgets draw their category from the same closed set.
//! Raw user input is parsed once at the boundary; everything past that point
//! works with the enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Healthcare,
    Shopping,
    Bills,
    Education,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Transportation,
        Self::Entertainment,
        Self::Healthcare,
        Self::Shopping,
        Self::Bills,
        Self::Education,
        Self::Other,
    ];

    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Parse a category name (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Result<Self, CategoryParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CategoryParseError::Empty);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors from parsing a category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Category is required"),
            Self::Unknown(name) => write!(f, "Unknown category: {}", name),
        }
    }
}

impl std::error::Error for CategoryParseError {}
