//! Repository Module
//!
//! One repository per collection, all on top of [`BaseRepository`].

pub mod blog;
pub mod contact;
pub mod faq;
pub mod newsletter;
pub mod order;
pub mod product;
pub mod testimonial;

// Re-exports
pub use blog::BlogRepository;
pub use contact::ContactRepository;
pub use faq::FaqRepository;
pub use newsletter::NewsletterRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use testimonial::TestimonialRepository;

use std::sync::atomic::{AtomicI64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use shared::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // record-id clash on CREATE, or a UNIQUE index hit
        if msg.contains("already exists") || msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 记录键 = 实体对外的 id 字符串
// =============================================================================
//
//   - 写入: CREATE type::thing(table, id) CONTENT <实体去掉 id 字段>
//   - 读取: SELECT *, record::id(id) AS id FROM ...
//
// API 永远只看到纯 id，不暴露 "table:id"。

/// Projection that turns the record id back into the plain key
pub(crate) const FIELDS: &str = "*, record::id(id) AS id";

// =============================================================================
// 插入序号: 每条记录写入时带 `seq`，列表按它还原插入顺序
// =============================================================================
//
// created_at 只有毫秒精度，同一毫秒内的两次写入无法区分先后；
// seq 在进程内严格递增，起点取当前微秒，重启后仍大于旧记录。

static LAST_SEQ: AtomicI64 = AtomicI64::new(0);

/// Next insertion sequence number
pub(crate) fn next_seq() -> i64 {
    let now = shared::util::now_micros();
    let mut last = LAST_SEQ.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_SEQ.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// Row shape of `SELECT count() ... GROUP ALL`
#[derive(Debug, serde::Deserialize)]
pub(crate) struct CountRow {
    pub count: i64,
}

pub(crate) fn thing(table: &str, id: &str) -> RecordId {
    RecordId::from_table_key(table, id)
}

/// Serialize an entity without its `id` field (the id lives in the record key)
pub(crate) fn content_of<T: Serialize>(entity: &T) -> RepoResult<serde_json::Value> {
    let mut value =
        serde_json::to_value(entity).map_err(|e| RepoError::Database(e.to_string()))?;
    match value.as_object_mut() {
        Some(map) => {
            map.remove("id");
        }
        None => {
            return Err(RepoError::Validation(
                "entity must serialize to an object".into(),
            ));
        }
    }
    Ok(value)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Insert a new document keyed by `id`; fails with `Duplicate` if the key is taken
    pub async fn insert<T: Serialize>(&self, table: &str, id: &str, entity: &T) -> RepoResult<()> {
        let mut data = content_of(entity)?;
        if let Some(map) = data.as_object_mut() {
            map.insert("seq".into(), next_seq().into());
        }
        self.db
            .query("CREATE $thing CONTENT $data RETURN NONE")
            .bind(("thing", thing(table, id)))
            .bind(("data", data))
            .await?
            .check()?;
        Ok(())
    }

    /// Fetch one document by key
    pub async fn find_by_key<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
    ) -> RepoResult<Option<T>> {
        let mut result = self
            .db
            .query(format!("SELECT {FIELDS} FROM $thing"))
            .bind(("thing", thing(table, id)))
            .await?;
        let rows: Vec<T> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Run a `SELECT count() ... GROUP ALL` statement
    pub async fn count(&self, query: &str) -> RepoResult<i64> {
        let mut result = self.db.query(query.to_string()).await?;
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::DbService;
    use surrealdb::Surreal;
    use surrealdb::engine::local::Db;

    /// Fresh in-memory store with the schema applied
    pub async fn memory_db() -> Surreal<Db> {
        DbService::memory("test", "test").await.unwrap().db
    }
}
