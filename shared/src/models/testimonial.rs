//! Testimonial Model

use serde::{Deserialize, Serialize};

/// Testimonial entity (seeded only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    /// 1..=5
    pub rating: u8,
    pub comment: String,
    /// Initials shown in place of a picture
    pub avatar: String,
    pub verified: bool,
    pub date: i64,
    pub created_at: i64,
}

/// `GET /api/testimonials` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialListQuery {
    #[serde(default = "super::default_true")]
    pub verified_only: bool,
}

impl Default for TestimonialListQuery {
    fn default() -> Self {
        Self { verified_only: true }
    }
}
