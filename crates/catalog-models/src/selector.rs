use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Category;

/// What currently drives a listing: a category or a free-text query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    Category(Category),
    Query(String),
}

impl Selector {
    pub fn query(text: impl Into<String>) -> Self {
        Selector::Query(text.into())
    }

    /// Whether the gateway can continue this listing past page 1.
    /// Search has no page parameter, so only categories paginate.
    pub fn supports_pagination(&self) -> bool {
        matches!(self, Selector::Category(_))
    }

    pub fn label(&self) -> String {
        match self {
            Selector::Category(category) => category.label().to_string(),
            Selector::Query(query) => format!("Search: \"{}\"", query),
        }
    }
}

impl From<Category> for Selector {
    fn from(category: Category) -> Self {
        Selector::Category(category)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Category(category) => write!(f, "category:{}", category.slug()),
            Selector::Query(query) => write!(f, "query:{}", query),
        }
    }
}
