use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Category, Message};

/// Category selector shown next to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Sales,
    General,
    Recruitment,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category filter `{0}` (expected all, sales, general or recruitment)")]
pub struct ParseCategoryFilterError(pub String);

impl CategoryFilter {
    /// Options in the order the selector presents them.
    pub const ALL_OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Recruitment,
        CategoryFilter::Sales,
        CategoryFilter::General,
    ];

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Sales => *category == Category::Sales,
            CategoryFilter::General => *category == Category::General,
            CategoryFilter::Recruitment => *category == Category::Recruitment,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Messages",
            CategoryFilter::Sales => "Sales",
            CategoryFilter::General => "General",
            CategoryFilter::Recruitment => "Recruitment",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Sales => "sales",
            CategoryFilter::General => "general",
            CategoryFilter::Recruitment => "recruitment",
        }
    }

    fn position(&self) -> usize {
        Self::ALL_OPTIONS
            .iter()
            .position(|option| option == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let index = (self.position() + 1) % Self::ALL_OPTIONS.len();
        Self::ALL_OPTIONS[index]
    }

    pub fn previous(&self) -> Self {
        let len = Self::ALL_OPTIONS.len();
        let index = (self.position() + len - 1) % len;
        Self::ALL_OPTIONS[index]
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "sales" => Ok(CategoryFilter::Sales),
            "general" => Ok(CategoryFilter::General),
            "recruitment" => Ok(CategoryFilter::Recruitment),
            _ => Err(ParseCategoryFilterError(s.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interactive filter state: the selected category and the search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    category: CategoryFilter,
    query: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn apply<'a>(&self, messages: &'a [Message]) -> Vec<&'a Message> {
        visible_messages(messages, &self.category, &self.query)
    }
}

/// Derive the visible messages: category pass first, then the search pass.
///
/// Both passes are plain predicates, so the result keeps the input order and
/// an empty result is a normal outcome.
pub fn visible_messages<'a>(
    all: &'a [Message],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Message> {
    let query = query.to_lowercase();

    all.iter()
        .filter(|message| category.matches(&message.category))
        .filter(|message| {
            query.is_empty()
                || message.content.to_lowercase().contains(&query)
                || message.sender.to_lowercase().contains(&query)
        })
        .collect()
}
