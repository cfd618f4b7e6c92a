use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::item::Category;

/// Label of the "no category filter" choice.
pub const ALL_CATEGORIES: &str = "All Categories";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort key '{0}'. Expected date, title, category or location")]
    UnknownSortKey(String),

    #[error("Unknown category filter '{0}'")]
    UnknownCategory(String),
}

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Date,
    Title,
    Category,
    Location,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Date,
        SortKey::Title,
        SortKey::Category,
        SortKey::Location,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Title => "title",
            SortKey::Category => "category",
            SortKey::Location => "location",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "posted" | "dateposted" | "newest" => Ok(SortKey::Date),
            "title" | "name" => Ok(SortKey::Title),
            "category" | "cat" => Ok(SortKey::Category),
            "location" | "loc" | "where" => Ok(SortKey::Location),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Category restriction: everything, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub fn is_all(self) -> bool {
        self == CategoryFilter::All
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) || trimmed.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        trimmed
            .parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| QueryError::UnknownCategory(s.to_string()))
    }
}

/// What a listing should show: free-text term, category filter and order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    /// Matched case-insensitively against title, description and location.
    /// Empty matches everything.
    pub term: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether the term or the category narrows the listing.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.term.is_empty() || !self.category.is_all()
    }
}
