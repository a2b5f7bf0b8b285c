//! Order Repository
//!
//! 状态写入一律走 compare-and-set：只有当库中状态仍属于预期来源状态时才更新。

use super::{BaseRepository, RepoResult, thing};
use shared::models::{Order, OrderStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "orders";

#[derive(Debug, serde::Deserialize)]
struct StatusRow {
    status: OrderStatus,
}

fn is_write_conflict(err: &surrealdb::Error) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("conflict") && msg.contains("transaction")
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        self.base.find_by_key(TABLE, id).await
    }

    /// Persist a new order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        self.base.insert(TABLE, &order.id, &order).await?;
        Ok(order)
    }

    /// Move `id` to `to` only if its stored status is still `expected`.
    ///
    /// Returns `false` when the guard did not hold (or the order is gone).
    /// `payment_received` is written alongside when given.
    pub async fn compare_and_set_status(
        &self,
        id: &str,
        expected: OrderStatus,
        to: OrderStatus,
        payment_received: Option<bool>,
        now: i64,
    ) -> RepoResult<bool> {
        let query = match payment_received {
            Some(_) => {
                "UPDATE $thing SET status = $to, payment_received = $paid, updated_at = $now \
                 WHERE status = $expected RETURN status"
            }
            None => {
                "UPDATE $thing SET status = $to, updated_at = $now \
                 WHERE status = $expected RETURN status"
            }
        };

        let outcome = self
            .base
            .db()
            .query(query)
            .bind(("thing", thing(TABLE, id)))
            .bind(("to", to))
            .bind(("paid", payment_received.unwrap_or(false)))
            .bind(("now", now))
            .bind(("expected", expected))
            .await
            .and_then(|mut result| result.take::<Vec<StatusRow>>(0));

        match outcome {
            Ok(rows) => Ok(rows.first().is_some_and(|r| r.status == to)),
            // 并发写同一条记录时，失败的一方按"守卫未通过"处理
            Err(e) if is_write_conflict(&e) => {
                tracing::debug!(order_id = %id, error = %e, "Order status write lost a race");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Count orders in `status`
    pub async fn count_by_status(&self, status: OrderStatus) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM orders WHERE status = $status GROUP ALL")
            .bind(("status", status))
            .await?;
        let rows: Vec<super::CountRow> = result.take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }
}
