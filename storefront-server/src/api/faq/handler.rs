//! FAQ API Handlers

use axum::{Json, extract::State};

use crate::api::extract::{Query, ValidatedJson};
use crate::api::{MAX_SEARCH_RESULTS, search_needle};
use crate::auth::AdminAccess;
use crate::core::ServerState;
use crate::db::repository::FaqRepository;
use shared::AppResult;
use shared::models::{Faq, FaqCategories, FaqCreate, FaqListQuery, SearchQuery};
use shared::util::{new_id, now_millis};

/// GET /api/faq - 已发布条目，按 order 升序
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FaqListQuery>,
) -> AppResult<Json<Vec<Faq>>> {
    let repo = FaqRepository::new(state.get_db());
    Ok(Json(repo.find_published(query.category_filter()).await?))
}

/// GET /api/faq/search?q=
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Faq>>> {
    let needle = search_needle(&query.q)?;

    let repo = FaqRepository::new(state.get_db());
    let hits = repo
        .find_published(None)
        .await?
        .into_iter()
        .filter(|f| f.matches(&needle))
        .take(MAX_SEARCH_RESULTS)
        .collect();
    Ok(Json(hits))
}

/// GET /api/faq/categories
pub async fn categories(State(state): State<ServerState>) -> AppResult<Json<FaqCategories>> {
    let repo = FaqRepository::new(state.get_db());
    Ok(Json(FaqCategories {
        categories: repo.categories().await?,
    }))
}

/// POST /api/faq
pub async fn create(
    State(state): State<ServerState>,
    _admin: AdminAccess,
    ValidatedJson(payload): ValidatedJson<FaqCreate>,
) -> AppResult<Json<Faq>> {
    let now = now_millis();
    let faq = Faq {
        id: new_id(),
        question: payload.question,
        answer: payload.answer,
        category: payload.category,
        order: payload.order,
        published: payload.published,
        created_at: now,
        updated_at: now,
    };

    let repo = FaqRepository::new(state.get_db());
    let faq = repo.create(faq).await?;
    tracing::info!(faq_id = %faq.id, category = %faq.category, "FAQ created");
    Ok(Json(faq))
}
