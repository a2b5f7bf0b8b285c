//! Contact Message Repository

use super::{BaseRepository, FIELDS, RepoResult, thing};
use shared::models::{ContactMessage, MessageStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "contact_messages";

/// 列表上限
pub const MAX_MESSAGES: usize = 100;

#[derive(Clone)]
pub struct ContactRepository {
    base: BaseRepository,
}

impl ContactRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, message: ContactMessage) -> RepoResult<ContactMessage> {
        self.base.insert(TABLE, &message.id, &message).await?;
        Ok(message)
    }

    /// Newest first, optionally filtered by status
    pub async fn find_all(&self, status: Option<MessageStatus>) -> RepoResult<Vec<ContactMessage>> {
        let query = match status {
            Some(_) => format!(
                "SELECT {FIELDS} FROM contact_messages WHERE status = $status ORDER BY created_at DESC"
            ),
            None => format!("SELECT {FIELDS} FROM contact_messages ORDER BY created_at DESC"),
        };

        let mut messages: Vec<ContactMessage> = self
            .base
            .db()
            .query(query)
            .bind(("status", status))
            .await?
            .take(0)?;
        messages.truncate(MAX_MESSAGES);
        Ok(messages)
    }

    /// Set the status; `false` when the message does not exist
    pub async fn update_status(&self, id: &str, status: MessageStatus) -> RepoResult<bool> {
        #[derive(serde::Deserialize)]
        struct Row {
            #[allow(dead_code)]
            status: MessageStatus,
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status RETURN status")
            .bind(("thing", thing(TABLE, id)))
            .bind(("status", status))
            .await?;
        let rows: Vec<Row> = result.take(0)?;
        Ok(!rows.is_empty())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ContactMessage>> {
        self.base.find_by_key(TABLE, id).await
    }
}
