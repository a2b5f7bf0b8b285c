//! Order API 模块
//!
//! 订单 id 与下载令牌都是不透明字符串；拿到 id 不等于能下载。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/verify-payment", post(handler::verify_payment))
        .route("/{id}/download/{token}", get(handler::download))
}
