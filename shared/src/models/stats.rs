//! Storefront statistics (display only, never persisted)

use serde::{Deserialize, Serialize};

/// `GET /api/stats` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_users: String,
    pub success_rate: String,
    pub countries_served: String,
    pub years_experience: String,
    pub transactions_processed: String,
    pub support_rating: String,
}
