//! Blog Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, not_blank};

/// Blog post entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// URL-safe key derived from the title (not unique)
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub publish_date: i64,
    /// Display string, e.g. "8 min read"
    pub read_time: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl BlogPost {
    /// Case-insensitive match against title, excerpt, content or any tag.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Create blog post payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogPostCreate {
    #[validate(length(max = 300), custom(function = "not_blank"))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub excerpt: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[validate(length(max = 200), custom(function = "not_blank"))]
    pub author: String,
    #[validate(length(max = 50))]
    pub read_time: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub published: bool,
}

/// `GET /api/blog/posts` query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogListQuery {
    #[serde(default)]
    #[validate(range(min = 0))]
    pub skip: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 50))]
    pub limit: i64,
    pub tag: Option<String>,
    pub featured: Option<bool>,
}

impl Default for BlogListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_page_size(),
            tag: None,
            featured: None,
        }
    }
}

fn default_page_size() -> i64 {
    10
}

/// `?q=` search query (blog and FAQ)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}
