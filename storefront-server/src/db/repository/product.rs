//! Product Repository

use super::{BaseRepository, FIELDS, RepoResult, content_of, thing};
use shared::models::{Product, ProductCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "products";

/// 列表上限
pub const MAX_PRODUCTS: usize = 100;

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products in insertion order (capped)
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .base
            .db()
            .query(format!("SELECT {FIELDS} FROM products ORDER BY seq"))
            .await?
            .take(0)?;
        products.truncate(MAX_PRODUCTS);
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        self.base.find_by_key(TABLE, id).await
    }

    /// Create a new product
    pub async fn create(&self, product: Product) -> RepoResult<Product> {
        self.base.insert(TABLE, &product.id, &product).await?;
        Ok(product)
    }

    /// Replace all mutable fields; `None` when the product does not exist
    pub async fn replace(
        &self,
        id: &str,
        data: ProductCreate,
        now: i64,
    ) -> RepoResult<Option<Product>> {
        let Some(mut product) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        product.apply(data, now);

        self.base
            .db()
            .query("UPDATE $thing MERGE $data RETURN NONE")
            .bind(("thing", thing(TABLE, id)))
            .bind(("data", content_of(&product)?))
            .await?
            .check()?;

        Ok(Some(product))
    }

    pub async fn count(&self) -> RepoResult<i64> {
        self.base
            .count("SELECT count() FROM products GROUP ALL")
            .await
    }

    pub async fn count_in_stock(&self) -> RepoResult<i64> {
        self.base
            .count("SELECT count() FROM products WHERE in_stock = true GROUP ALL")
            .await
    }
}
