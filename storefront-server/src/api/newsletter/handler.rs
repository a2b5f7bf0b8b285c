//! Newsletter API Handlers

use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;

use crate::api::extract::{Query, ValidatedJson};
use crate::auth::AdminAccess;
use crate::core::ServerState;
use crate::db::repository::{NewsletterRepository, RepoError};
use shared::models::{MessageResponse, NewsletterSubscribe, NewsletterSubscriber, normalize_email};
use shared::util::{new_id, now_millis};
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Default, Deserialize)]
pub struct UnsubscribeQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnsubscribeBody {
    email: String,
}

/// POST /api/newsletter/subscribe - 新订阅或重新激活
pub async fn subscribe(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<NewsletterSubscribe>,
) -> AppResult<Json<NewsletterSubscriber>> {
    let email = normalize_email(&payload.email);
    let repo = NewsletterRepository::new(state.get_db());

    if let Some(mut existing) = repo.find_by_email(&email).await? {
        if existing.subscribed {
            return Err(AppError::new(ErrorCode::AlreadySubscribed));
        }
        repo.set_subscribed(&existing.id, true).await?;
        existing.subscribed = true;
        tracing::info!(subscriber_id = %existing.id, "Newsletter subscription reactivated");
        return Ok(Json(existing));
    }

    let subscriber = NewsletterSubscriber {
        id: new_id(),
        email,
        subscribed: true,
        subscribed_at: now_millis(),
    };
    let subscriber = repo.create(subscriber).await.map_err(|e| match e {
        // 并发的同邮箱订阅撞上唯一索引
        RepoError::Duplicate(_) => AppError::new(ErrorCode::AlreadySubscribed),
        other => other.into(),
    })?;

    tracing::info!(subscriber_id = %subscriber.id, "Newsletter subscription created");
    Ok(Json(subscriber))
}

/// POST /api/newsletter/unsubscribe - 邮箱取自 JSON body 或 `?email=`
pub async fn unsubscribe(
    State(state): State<ServerState>,
    Query(query): Query<UnsubscribeQuery>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let email = match query.email {
        Some(email) => email,
        None if !body.is_empty() => {
            serde_json::from_slice::<UnsubscribeBody>(&body)
                .map_err(|e| AppError::with_message(ErrorCode::ValidationFailed, e.to_string()))?
                .email
        }
        None => return Err(AppError::new(ErrorCode::RequiredField).with_detail("field", "email")),
    };
    let email = normalize_email(&email);

    let repo = NewsletterRepository::new(state.get_db());
    let subscriber = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SubscriberNotFound))?;
    repo.set_subscribed(&subscriber.id, false).await?;

    tracing::info!(subscriber_id = %subscriber.id, "Newsletter unsubscribed");
    Ok(Json(MessageResponse::new("Successfully unsubscribed")))
}

/// GET /api/newsletter/subscribers - 仅活跃订阅
pub async fn list_subscribers(
    State(state): State<ServerState>,
    _admin: AdminAccess,
) -> AppResult<Json<Vec<NewsletterSubscriber>>> {
    let repo = NewsletterRepository::new(state.get_db());
    Ok(Json(repo.find_active().await?))
}
