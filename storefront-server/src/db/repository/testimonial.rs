//! Testimonial Repository

use super::{BaseRepository, FIELDS, RepoResult};
use shared::models::Testimonial;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "testimonials";

/// 列表上限
pub const MAX_TESTIMONIALS: usize = 100;

#[derive(Clone)]
pub struct TestimonialRepository {
    base: BaseRepository,
}

impl TestimonialRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Most recent first
    pub async fn find_all(&self, verified_only: bool) -> RepoResult<Vec<Testimonial>> {
        let query = if verified_only {
            format!("SELECT {FIELDS} FROM testimonials WHERE verified = true ORDER BY date DESC")
        } else {
            format!("SELECT {FIELDS} FROM testimonials ORDER BY date DESC")
        };
        let mut rows: Vec<Testimonial> = self.base.db().query(query).await?.take(0)?;
        rows.truncate(MAX_TESTIMONIALS);
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Testimonial>> {
        self.base.find_by_key(TABLE, id).await
    }

    pub async fn create(&self, testimonial: Testimonial) -> RepoResult<Testimonial> {
        self.base.insert(TABLE, &testimonial.id, &testimonial).await?;
        Ok(testimonial)
    }

    pub async fn count(&self) -> RepoResult<i64> {
        self.base
            .count("SELECT count() FROM testimonials GROUP ALL")
            .await
    }
}
