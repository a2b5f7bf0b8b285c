//! FAQ Repository

use super::{BaseRepository, FIELDS, RepoResult};
use shared::models::Faq;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "faqs";

/// 列表上限
pub const MAX_FAQS: usize = 100;

#[derive(Clone)]
pub struct FaqRepository {
    base: BaseRepository,
}

impl FaqRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Published FAQs sorted by `order` ascending, ties in insertion order
    pub async fn find_published(&self, category: Option<&str>) -> RepoResult<Vec<Faq>> {
        let query = match category {
            Some(_) => format!(
                "SELECT {FIELDS} FROM faqs WHERE published = true AND category = $category ORDER BY seq"
            ),
            None => format!("SELECT {FIELDS} FROM faqs WHERE published = true ORDER BY seq"),
        };

        let mut faqs: Vec<Faq> = self
            .base
            .db()
            .query(query)
            .bind(("category", category.map(str::to_string)))
            .await?
            .take(0)?;

        // `order` is a SurrealQL keyword; stable sort keeps insertion order on ties
        faqs.sort_by_key(|f| f.order);
        faqs.truncate(MAX_FAQS);
        Ok(faqs)
    }

    /// Distinct categories across all FAQs, in first-seen order
    pub async fn categories(&self) -> RepoResult<Vec<String>> {
        #[derive(serde::Deserialize)]
        struct Row {
            category: String,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT category, seq FROM faqs ORDER BY seq")
            .await?
            .take(0)?;

        let mut seen = std::collections::HashSet::new();
        Ok(rows
            .into_iter()
            .map(|r| r.category)
            .filter(|c| seen.insert(c.clone()))
            .collect())
    }

    pub async fn create(&self, faq: Faq) -> RepoResult<Faq> {
        self.base.insert(TABLE, &faq.id, &faq).await?;
        Ok(faq)
    }

    pub async fn count(&self) -> RepoResult<i64> {
        self.base.count("SELECT count() FROM faqs GROUP ALL").await
    }
}
