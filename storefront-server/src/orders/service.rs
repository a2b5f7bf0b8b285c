//! Order Service
//!
//! 下单、支付校验、下载授权。所有状态写入都带预期旧状态 (compare-and-set)，
//! 并发的两次 verify 只会有一次生效，另一次读到已确认的结果。

use std::sync::Arc;

use shared::models::{DownloadDescriptor, Order, OrderCreate, OrderStatus, PaymentVerification};
use shared::util::{constant_time_eq, new_id, now_millis, secret_token};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::{Config, ServerState};
use crate::db::repository::{OrderRepository, ProductRepository};
use crate::orders::verifier::{PaymentCheck, PaymentVerifier};
use crate::security_log;

pub struct OrderService {
    orders: OrderRepository,
    products: ProductRepository,
    verifier: Arc<dyn PaymentVerifier>,
    config: Config,
}

impl OrderService {
    pub fn new(state: &ServerState) -> Self {
        Self {
            orders: OrderRepository::new(state.get_db()),
            products: ProductRepository::new(state.get_db()),
            verifier: state.payment_verifier.clone(),
            config: state.config.clone(),
        }
    }

    /// 下单：快照商品价格，生成下载令牌，状态 pending
    pub async fn create_order(&self, data: OrderCreate) -> AppResult<Order> {
        if !data.accept_terms {
            return Err(AppError::new(ErrorCode::TermsNotAccepted));
        }

        let product = self
            .products
            .find_by_id(&data.product_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;
        if !product.in_stock {
            return Err(AppError::new(ErrorCode::ProductOutOfStock)
                .with_detail("product_id", product.id));
        }

        let now = now_millis();
        let order = Order {
            id: new_id(),
            customer_email: data.customer_email.trim().to_string(),
            customer_name: data.customer_name.trim().to_string(),
            product_id: product.id,
            amount_usd: product.price,
            amount_btc: product.btc_price,
            status: OrderStatus::Pending,
            // 所有订单共用一个收款地址
            btc_address: self.config.payment_btc_address.clone(),
            payment_received: false,
            download_token: secret_token(),
            expires_at: now + self.config.order_expiry_millis(),
            created_at: now,
            updated_at: now,
        };

        let order = self.orders.create(order).await?;
        tracing::info!(
            order_id = %order.id,
            product_id = %order.product_id,
            amount_usd = order.amount_usd,
            "Order created"
        );
        Ok(order)
    }

    pub async fn get_order(&self, id: &str) -> AppResult<Order> {
        self.find(id).await
    }

    /// 轮询式支付校验
    pub async fn verify_payment(&self, id: &str) -> AppResult<PaymentVerification> {
        let order = self.find(id).await?;
        let now = now_millis();

        if order.status.is_paid() {
            return Ok(PaymentVerification::confirmed());
        }
        if order.status == OrderStatus::Expired {
            return Err(AppError::new(ErrorCode::OrderExpired));
        }
        if order.is_overdue(now) {
            return self.expire(&order, now).await;
        }

        let check = self.verifier.check_payment(&order).await.map_err(|e| {
            tracing::error!(
                order_id = %order.id,
                verifier = self.verifier.name(),
                error = %e,
                "Payment check failed"
            );
            AppError::with_message(ErrorCode::PaymentVerificationFailed, e.to_string())
        })?;

        match check {
            PaymentCheck::NotDetected => Ok(PaymentVerification::pending()),
            PaymentCheck::Confirmed => self.confirm(&order, now).await,
        }
    }

    /// 下载授权：令牌匹配且已确认付款
    pub async fn download(&self, id: &str, token: &str) -> AppResult<DownloadDescriptor> {
        let order = self.find(id).await?;

        if !constant_time_eq(order.download_token.as_bytes(), token.as_bytes()) {
            security_log!("WARN", "download_token_mismatch", order_id = order.id.clone());
            return Err(AppError::new(ErrorCode::DownloadTokenInvalid));
        }
        if !order.is_downloadable() {
            return Err(AppError::new(ErrorCode::PaymentNotConfirmed)
                .with_detail("status", order.status.as_str()));
        }

        let hours = self.config.download_ttl_hours;
        Ok(DownloadDescriptor {
            download_url: format!(
                "{}/{}/{}/software.zip",
                self.config.download_base_url.trim_end_matches('/'),
                order.id,
                order.download_token
            ),
            expires_at: now_millis() + self.config.download_ttl_millis(),
            instructions: format!(
                "Download will expire in {hours} hours. Please save the file immediately."
            ),
        })
    }

    async fn find(&self, id: &str) -> AppResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))
    }

    async fn confirm(&self, order: &Order, now: i64) -> AppResult<PaymentVerification> {
        let next = order
            .status
            .transition_to(OrderStatus::Confirmed)
            .map_err(|e| AppError::with_message(ErrorCode::InvalidStatusTransition, e.to_string()))?;

        let applied = self
            .orders
            .compare_and_set_status(&order.id, order.status, next, Some(true), now)
            .await?;
        if applied {
            tracing::info!(order_id = %order.id, "Payment confirmed");
            return Ok(PaymentVerification::confirmed());
        }

        // 另一个请求抢先写入
        match self.orders.find_by_id(&order.id).await? {
            Some(current) if current.status.is_paid() => Ok(PaymentVerification::confirmed()),
            Some(current) => Err(AppError::new(ErrorCode::OrderStatusConflict)
                .with_detail("status", current.status.as_str())),
            None => Err(AppError::new(ErrorCode::OrderNotFound)),
        }
    }

    async fn expire(&self, order: &Order, now: i64) -> AppResult<PaymentVerification> {
        let applied = self
            .orders
            .compare_and_set_status(&order.id, order.status, OrderStatus::Expired, None, now)
            .await?;
        if applied {
            tracing::info!(order_id = %order.id, "Order expired");
            return Err(AppError::new(ErrorCode::OrderExpired));
        }

        match self.orders.find_by_id(&order.id).await? {
            Some(current) if current.status.is_paid() => Ok(PaymentVerification::confirmed()),
            Some(_) => Err(AppError::new(ErrorCode::OrderExpired)),
            None => Err(AppError::new(ErrorCode::OrderNotFound)),
        }
    }
}
