//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ValidatedJson;
use crate::auth::AdminAccess;
use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use shared::models::{Product, ProductCreate};
use shared::util::{new_id, now_millis};
use shared::{AppError, AppResult, ErrorCode};

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    _admin: AdminAccess,
    ValidatedJson(payload): ValidatedJson<ProductCreate>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo
        .create(Product::from_create(new_id(), payload, now_millis()))
        .await?;

    tracing::info!(product_id = %product.id, name = %product.name, "Product created");
    Ok(Json(product))
}

/// PUT /api/products/:id - 整体替换商品可变字段
pub async fn update(
    State(state): State<ServerState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ProductCreate>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.get_db());
    let product = repo
        .replace(&id, payload, now_millis())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

    tracing::info!(product_id = %product.id, "Product updated");
    Ok(Json(product))
}
