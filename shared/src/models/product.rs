//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, not_blank};

/// Product tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTier {
    Lite,
    Pro,
    Ultimate,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub version: String,
    pub tier: ProductTier,
    /// Price in `currency`
    pub price: f64,
    pub original_price: f64,
    pub currency: String,
    /// Price in BTC
    pub btc_price: f64,
    pub description: String,
    /// Ordered feature bullets
    pub features: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub badge: String,
    pub in_stock: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create / replace product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(max = 200), custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(max = 50), custom(function = "not_blank"))]
    pub version: String,
    pub tier: ProductTier,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub original_price: f64,
    #[serde(default = "default_currency")]
    #[validate(length(min = 3, max = 8))]
    pub currency: String,
    #[validate(range(min = 0.0))]
    pub btc_price: f64,
    #[validate(length(max = 5000), custom(function = "not_blank"))]
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub badge: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Product {
    /// Build a new product from its creation payload
    pub fn from_create(id: String, data: ProductCreate, now: i64) -> Self {
        Self {
            id,
            name: data.name,
            version: data.version,
            tier: data.tier,
            price: data.price,
            original_price: data.original_price,
            currency: data.currency,
            btc_price: data.btc_price,
            description: data.description,
            features: data.features,
            limitations: data.limitations,
            badge: data.badge,
            in_stock: data.in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field with the payload and bump `updated_at`
    pub fn apply(&mut self, data: ProductCreate, now: i64) {
        let id = std::mem::take(&mut self.id);
        let created_at = self.created_at;
        *self = Self::from_create(id, data, created_at);
        self.updated_at = now;
    }
}
