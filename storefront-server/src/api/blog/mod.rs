//! Blog API 模块
//!
//! `/posts/search` 是静态段，优先于 `/posts/{slug}` 匹配。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/blog", blog_routes())
}

fn blog_routes() -> Router<ServerState> {
    Router::new()
        .route("/posts", get(handler::list).post(handler::create))
        .route("/posts/search", get(handler::search))
        .route("/posts/{slug}", get(handler::get_by_slug))
}
