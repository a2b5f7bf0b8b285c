//! Contact API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::{Query, ValidatedJson};
use crate::auth::AdminAccess;
use crate::core::ServerState;
use crate::db::repository::ContactRepository;
use shared::models::{
    ContactListQuery, ContactMessage, ContactMessageCreate, MessageResponse, MessageStatus,
    MessageStatusQuery,
};
use shared::util::{new_id, now_millis};
use shared::{AppError, AppResult, ErrorCode};

fn parse_status(raw: &str) -> AppResult<MessageStatus> {
    raw.parse::<MessageStatus>()
        .map_err(|_| AppError::new(ErrorCode::InvalidMessageStatus).with_detail("status", raw))
}

/// POST /api/contact - 提交留言
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<ContactMessageCreate>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessage {
        id: new_id(),
        name: payload.name,
        email: payload.email.trim().to_string(),
        subject: payload.subject,
        message: payload.message,
        inquiry_type: payload.inquiry_type,
        status: MessageStatus::New,
        created_at: now_millis(),
    };

    let repo = ContactRepository::new(state.get_db());
    let message = repo.create(message).await?;
    tracing::info!(message_id = %message.id, inquiry_type = %message.inquiry_type, "Contact message received");
    Ok(Json(message))
}

/// GET /api/contact/messages?status= - 最新在前
pub async fn list(
    State(state): State<ServerState>,
    _admin: AdminAccess,
    Query(query): Query<ContactListQuery>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    // 空字符串也是非法状态
    let status = query.status.as_deref().map(parse_status).transpose()?;

    let repo = ContactRepository::new(state.get_db());
    Ok(Json(repo.find_all(status).await?))
}

/// PUT /api/contact/messages/:id?status=
pub async fn update_status(
    State(state): State<ServerState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
    Query(query): Query<MessageStatusQuery>,
) -> AppResult<Json<MessageResponse>> {
    let status = parse_status(&query.status)?;

    let repo = ContactRepository::new(state.get_db());
    if !repo.update_status(&id, status).await? {
        return Err(AppError::new(ErrorCode::MessageNotFound));
    }

    tracing::info!(message_id = %id, status = status.as_str(), "Contact message status updated");
    Ok(Json(MessageResponse::new("Status updated successfully")))
}
