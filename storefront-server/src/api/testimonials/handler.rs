//! Testimonial API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::Query;
use crate::core::ServerState;
use crate::db::repository::TestimonialRepository;
use shared::models::{Testimonial, TestimonialListQuery};
use shared::{AppError, AppResult, ErrorCode};

/// GET /api/testimonials?verified_only= (默认 true)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TestimonialListQuery>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let repo = TestimonialRepository::new(state.get_db());
    Ok(Json(repo.find_all(query.verified_only).await?))
}

/// GET /api/testimonials/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Testimonial>> {
    let repo = TestimonialRepository::new(state.get_db());
    let testimonial = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TestimonialNotFound))?;
    Ok(Json(testimonial))
}
