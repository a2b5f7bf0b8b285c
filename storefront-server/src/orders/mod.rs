//! 订单生命周期
//!
//! - **verifier**: 支付校验能力 (可替换)
//! - **service**: 下单 / 校验支付 / 下载 / 查询
//!
//! ```text
//! create ──► pending ──verify──► confirmed ──download──► descriptor
//!               │
//!               └── expires_at 已过 ──► expired
//! ```
//!
//! 状态迁移规则在 `shared::models::OrderStatus`，持久化一律走
//! `OrderRepository::compare_and_set_status`。

pub mod service;
pub mod verifier;

pub use service::OrderService;
pub use verifier::{
    PaymentCheck, PaymentVerifier, PaymentVerifierError, RandomPaymentVerifier,
    StaticPaymentVerifier,
};
