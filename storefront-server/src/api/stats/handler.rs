//! Stats API Handlers
//!
//! 展示用数字：真实计数与固定下限取较大值，不持久化。

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::{NewsletterRepository, OrderRepository, ProductRepository};
use crate::utils::format_thousands;
use shared::AppResult;
use shared::models::{OrderStatus, Stats};

const USERS_PER_ORDER: i64 = 15;
const MIN_USERS: i64 = 50_000;
const TRANSACTIONS_PER_ORDER: i64 = 100;
const MIN_TRANSACTIONS: i64 = 250_000;

/// Compose the public stats block from the confirmed order count
pub fn compose_stats(confirmed_orders: i64) -> Stats {
    let users = (confirmed_orders * USERS_PER_ORDER).max(MIN_USERS);
    let transactions = (confirmed_orders * TRANSACTIONS_PER_ORDER).max(MIN_TRANSACTIONS);

    Stats {
        total_users: format!("{}+", format_thousands(users)),
        success_rate: "99.7%".into(),
        countries_served: "120+".into(),
        years_experience: "8+".into(),
        transactions_processed: format!("{:.1}M+", transactions as f64 / 100_000.0),
        support_rating: "4.9/5".into(),
    }
}

/// GET /api/stats
pub async fn get_stats(State(state): State<ServerState>) -> AppResult<Json<Stats>> {
    let db = state.get_db();
    let orders = OrderRepository::new(db.clone());
    let subscribers = NewsletterRepository::new(db.clone());
    let products = ProductRepository::new(db);

    let (confirmed, active_subscribers, in_stock) = futures::try_join!(
        orders.count_by_status(OrderStatus::Confirmed),
        subscribers.count_active(),
        products.count_in_stock(),
    )?;

    tracing::debug!(confirmed, active_subscribers, in_stock, "Stats counts");
    Ok(Json(compose_stats(confirmed)))
}
