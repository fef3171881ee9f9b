use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of message, as assigned by the sender's intent.
///
/// The known kinds are closed, but messages loaded from a file may carry any
/// string; those land in `Other` and render with the default presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Sales,
    General,
    Recruitment,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Sales => "sales",
            Category::General => "general",
            Category::Recruitment => "recruitment",
            Category::Other(raw) => raw,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sales" => Category::Sales,
            "general" => Category::General,
            "recruitment" => Category::Recruitment,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u32,
    pub sender: String,
    pub content: String,
    #[serde(alias = "type")]
    pub category: Category,
    pub priority: Priority,
    #[serde(default)]
    pub has_attachments: bool,
    /// ISO-8601, only parsed when formatted for display
    pub timestamp: String,
}
