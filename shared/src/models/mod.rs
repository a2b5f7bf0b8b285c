//! Data models
//!
//! Shared between storefront-server and its clients (via API).
//! IDs are opaque strings; timestamps are Unix epoch milliseconds.

pub mod blog;
pub mod contact;
pub mod faq;
pub mod newsletter;
pub mod order;
pub mod product;
pub mod stats;
pub mod testimonial;

// Re-exports
pub use blog::*;
pub use contact::*;
pub use faq::*;
pub use newsletter::*;
pub use order::*;
pub use product::*;
pub use stats::*;
pub use testimonial::*;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// Plain `{"message": ...}` acknowledgement body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Rejects strings that are empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn default_true() -> bool {
    true
}
