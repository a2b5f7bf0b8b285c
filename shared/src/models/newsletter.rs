//! Newsletter Subscriber Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Newsletter subscriber entity
///
/// Unsubscribing is a soft delete (`subscribed = false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: String,
    pub email: String,
    pub subscribed: bool,
    pub subscribed_at: i64,
}

/// Subscribe / unsubscribe payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewsletterSubscribe {
    #[validate(email, length(max = 254))]
    pub email: String,
}

/// Canonical form used for uniqueness checks
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Reader@Example.COM "), "reader@example.com");
    }

    #[test]
    fn test_subscribe_validation() {
        let ok = NewsletterSubscribe { email: "reader@example.com".into() };
        assert!(ok.validate().is_ok());
        let bad = NewsletterSubscribe { email: "reader".into() };
        assert!(bad.validate().is_err());
    }
}
