//! Blog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::extract::{Query, ValidatedJson};
use crate::api::{MAX_SEARCH_RESULTS, search_needle};
use crate::auth::AdminAccess;
use crate::core::ServerState;
use crate::db::repository::BlogRepository;
use crate::utils::slugify;
use shared::models::{BlogListQuery, BlogPost, BlogPostCreate, SearchQuery};
use shared::util::{new_id, now_millis};
use shared::{AppError, AppResult, ErrorCode};

/// GET /api/blog/posts - 已发布文章 (tag / featured 过滤 + 分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BlogListQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    query.validate()?;

    let repo = BlogRepository::new(state.get_db());
    let posts = repo.find_published(query.tag, query.featured).await?;

    let page = posts
        .into_iter()
        .skip(query.skip as usize)
        .take(query.limit as usize)
        .collect();
    Ok(Json(page))
}

/// GET /api/blog/posts/:slug
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let repo = BlogRepository::new(state.get_db());
    let post = repo
        .find_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BlogPostNotFound))?;
    Ok(Json(post))
}

/// GET /api/blog/posts/search?q= - 标题/摘要/正文/标签，不区分大小写
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let needle = search_needle(&query.q)?;

    let repo = BlogRepository::new(state.get_db());
    let hits = repo
        .find_published(None, None)
        .await?
        .into_iter()
        .filter(|p| p.matches(&needle))
        .take(MAX_SEARCH_RESULTS)
        .collect();
    Ok(Json(hits))
}

/// POST /api/blog/posts - 创建文章，slug 由标题生成
pub async fn create(
    State(state): State<ServerState>,
    _admin: AdminAccess,
    ValidatedJson(payload): ValidatedJson<BlogPostCreate>,
) -> AppResult<Json<BlogPost>> {
    let now = now_millis();
    let id = new_id();
    let slug = match slugify(&payload.title) {
        s if s.is_empty() => id.clone(),
        s => s,
    };

    let post = BlogPost {
        id,
        title: payload.title,
        slug,
        excerpt: payload.excerpt,
        content: payload.content,
        author: payload.author,
        publish_date: now,
        read_time: payload.read_time,
        tags: payload.tags,
        featured: payload.featured,
        published: payload.published,
        created_at: now,
        updated_at: now,
    };

    let repo = BlogRepository::new(state.get_db());
    let post = repo.create(post).await?;
    tracing::info!(post_id = %post.id, slug = %post.slug, "Blog post created");
    Ok(Json(post))
}
