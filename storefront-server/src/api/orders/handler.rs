//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ValidatedJson;
use crate::core::ServerState;
use crate::orders::OrderService;
use shared::AppResult;
use shared::models::{DownloadDescriptor, Order, OrderCreate, PaymentVerification};

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = OrderService::new(&state).create_order(payload).await?;
    Ok(Json(order))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(OrderService::new(&state).get_order(&id).await?))
}

/// POST /api/orders/:id/verify-payment - 轮询支付状态
pub async fn verify_payment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PaymentVerification>> {
    Ok(Json(OrderService::new(&state).verify_payment(&id).await?))
}

/// GET /api/orders/:id/download/:token
pub async fn download(
    State(state): State<ServerState>,
    Path((id, token)): Path<(String, String)>,
) -> AppResult<Json<DownloadDescriptor>> {
    Ok(Json(OrderService::new(&state).download(&id, &token).await?))
}
