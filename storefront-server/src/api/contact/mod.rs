//! Contact API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/contact", contact_routes())
}

fn contact_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/messages", get(handler::list))
        .route("/messages/{id}", put(handler::update_status))
}
