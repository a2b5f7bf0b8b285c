//! Newsletter API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/newsletter", newsletter_routes())
}

fn newsletter_routes() -> Router<ServerState> {
    Router::new()
        .route("/subscribe", post(handler::subscribe))
        .route("/unsubscribe", post(handler::unsubscribe))
        .route("/subscribers", get(handler::list_subscribers))
}
