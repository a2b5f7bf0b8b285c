//! Order Model
//!
//! 订单状态是一个封闭的状态机，所有状态迁移都必须经过
//! [`OrderStatus::transition_to`] 校验。

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use super::not_blank;

/// Order status
///
/// ```text
/// pending ──► payment_sent ──► confirmed ──► completed
///    │             │
///    │             └──────► expired
///    ├──────► confirmed
///    └──────► expired
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    PaymentSent,
    Confirmed,
    Completed,
    Expired,
}

/// Illegal status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move order from {from} to {to}")]
pub struct OrderTransitionError {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PaymentSent => "payment_sent",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Expired => "expired",
        }
    }

    /// Whether `self -> next` is a legal move
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, PaymentSent)
                | (Pending, Confirmed)
                | (Pending, Expired)
                | (PaymentSent, Confirmed)
                | (PaymentSent, Expired)
                | (Confirmed, Completed)
        )
    }

    pub fn transition_to(&self, next: OrderStatus) -> Result<OrderStatus, OrderTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(OrderTransitionError { from: *self, to: next })
        }
    }

    /// Still waiting for payment
    pub fn is_awaiting_payment(&self) -> bool {
        matches!(self, Self::Pending | Self::PaymentSent)
    }

    /// Payment has been confirmed (possibly already fulfilled)
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Completed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_email: String,
    pub customer_name: String,
    /// Weak reference to a product id
    pub product_id: String,
    /// Snapshot of the product price at creation time
    pub amount_usd: f64,
    pub amount_btc: f64,
    pub status: OrderStatus,
    /// Address the customer pays to
    pub btc_address: String,
    pub payment_received: bool,
    pub download_token: String,
    /// End of the payment window (millis)
    pub expires_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    /// Payment window has elapsed while still unpaid
    pub fn is_overdue(&self, now: i64) -> bool {
        self.status.is_awaiting_payment() && now > self.expires_at
    }

    /// Status and payment flag both say the download may be released
    pub fn is_downloadable(&self) -> bool {
        self.status == OrderStatus::Confirmed && self.payment_received
    }
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(email, length(max = 254))]
    pub customer_email: String,
    #[validate(length(max = 200), custom(function = "not_blank"))]
    pub customer_name: String,
    #[validate(length(max = 200), custom(function = "not_blank"))]
    pub product_id: String,
    pub accept_terms: bool,
}

/// Outcome reported by `verify-payment`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Confirmed,
    Pending,
}

/// `POST /api/orders/{id}/verify-payment` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentVerification {
    pub status: PaymentState,
    pub message: String,
}

impl PaymentVerification {
    pub fn confirmed() -> Self {
        Self {
            status: PaymentState::Confirmed,
            message: "Payment verified successfully".to_string(),
        }
    }

    pub fn pending() -> Self {
        Self {
            status: PaymentState::Pending,
            message: "Payment not yet detected".to_string(),
        }
    }
}

/// Time-limited download descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadDescriptor {
    pub download_url: String,
    /// Link expiry (millis)
    pub expires_at: i64,
    pub instructions: String,
}
