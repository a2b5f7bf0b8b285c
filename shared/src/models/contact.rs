//! Contact Message Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use super::not_blank;

/// Contact message handling status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    New,
    InProgress,
    Resolved,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

impl FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(format!("unknown message status '{}'", other)),
        }
    }
}

/// Contact message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub inquiry_type: String,
    pub status: MessageStatus,
    pub created_at: i64,
}

/// Public contact form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessageCreate {
    #[validate(length(max = 200), custom(function = "not_blank"))]
    pub name: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(max = 300), custom(function = "not_blank"))]
    pub subject: String,
    #[validate(length(max = 10000), custom(function = "not_blank"))]
    pub message: String,
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub inquiry_type: String,
}

/// `GET /api/contact/messages` query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactListQuery {
    pub status: Option<String>,
}

/// `PUT /api/contact/messages/{id}?status=` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageStatusQuery {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("new".parse::<MessageStatus>(), Ok(MessageStatus::New));
        assert_eq!(
            "in_progress".parse::<MessageStatus>(),
            Ok(MessageStatus::InProgress)
        );
        assert_eq!("resolved".parse::<MessageStatus>(), Ok(MessageStatus::Resolved));
        assert!("closed".parse::<MessageStatus>().is_err());
        assert!("NEW".parse::<MessageStatus>().is_err());
    }

    #[test]
    fn test_status_str_matches_serde() {
        for s in [MessageStatus::New, MessageStatus::InProgress, MessageStatus::Resolved] {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
        }
    }
}
