//! FAQ Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, not_blank};

/// FAQ entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    /// Sort key, ascending
    pub order: i32,
    pub published: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Faq {
    /// Case-insensitive match against question or answer (`needle` lower-cased)
    pub fn matches(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
            || self.answer.to_lowercase().contains(needle)
    }
}

/// Create FAQ payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaqCreate {
    #[validate(length(max = 500), custom(function = "not_blank"))]
    pub question: String,
    #[validate(length(max = 5000), custom(function = "not_blank"))]
    pub answer: String,
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub category: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub published: bool,
}

/// `GET /api/faq` query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqListQuery {
    /// `all` or absent means no filter
    pub category: Option<String>,
}

impl FaqListQuery {
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "all")
    }
}

/// `GET /api/faq/categories` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCategories {
    pub categories: Vec<String>,
}
