//! 数据库模块 - 嵌入式 SurrealDB 文档存储
//!
//! 七个互相独立的集合，没有跨集合关联：
//! products, orders, blog_posts, faqs, contact_messages,
//! newsletter_subscribers, testimonials

pub mod repository;
pub mod seed;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, SurrealKv};

use crate::db::repository::RepoResult;

/// 表定义 (SCHEMALESS，只声明表和索引)
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS products SCHEMALESS;
DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
DEFINE INDEX IF NOT EXISTS orders_status ON orders FIELDS status;
DEFINE TABLE IF NOT EXISTS blog_posts SCHEMALESS;
DEFINE INDEX IF NOT EXISTS blog_posts_slug ON blog_posts FIELDS slug;
DEFINE TABLE IF NOT EXISTS faqs SCHEMALESS;
DEFINE TABLE IF NOT EXISTS contact_messages SCHEMALESS;
DEFINE TABLE IF NOT EXISTS newsletter_subscribers SCHEMALESS;
DEFINE INDEX IF NOT EXISTS newsletter_email ON newsletter_subscribers FIELDS email UNIQUE;
DEFINE TABLE IF NOT EXISTS testimonials SCHEMALESS;
"#;

/// Database service wrapper
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// 打开持久化数据库 (SurrealKV 文件引擎)
    pub async fn open(path: &str, namespace: &str, database: &str) -> RepoResult<Self> {
        tracing::info!(path = %path, "Opening database");
        let db = Surreal::new::<SurrealKv>(path).await?;
        Self::prepare(db, namespace, database).await
    }

    /// 内存数据库 (测试用)
    pub async fn memory(namespace: &str, database: &str) -> RepoResult<Self> {
        let db = Surreal::new::<Mem>(()).await?;
        Self::prepare(db, namespace, database).await
    }

    async fn prepare(db: Surreal<Db>, namespace: &str, database: &str) -> RepoResult<Self> {
        db.use_ns(namespace).use_db(database).await?;
        db.query(SCHEMA).await?.check()?;
        tracing::debug!(namespace, database, "Database schema ready");
        Ok(Self { db })
    }

    /// 简单连通性检查
    pub async fn ping(db: &Surreal<Db>) -> RepoResult<()> {
        db.query("RETURN true").await?.check()?;
        Ok(())
    }
}
