//! Payment verifier abstraction
//!
//! The order service never decides on its own whether a payment arrived; it asks a
//! [`PaymentVerifier`]. The shipped implementations are stand-ins for a chain watcher.

use async_trait::async_trait;
use rand::Rng;

use shared::models::Order;

/// Outcome of a single payment check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentCheck {
    Confirmed,
    NotDetected,
}

/// Errors a verifier may report
#[derive(Debug, thiserror::Error)]
pub enum PaymentVerifierError {
    #[error("Payment backend unavailable: {0}")]
    Unavailable(String),
}

/// Decides whether the payment for an order has been received
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Short name for logs and debug output
    fn name(&self) -> &'static str;

    async fn check_payment(&self, order: &Order) -> Result<PaymentCheck, PaymentVerifierError>;
}

/// Confirms with a fixed probability per call (polling stub)
pub struct RandomPaymentVerifier {
    probability: f64,
}

impl RandomPaymentVerifier {
    /// `probability` is clamped to `[0, 1]`
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

#[async_trait]
impl PaymentVerifier for RandomPaymentVerifier {
    fn name(&self) -> &'static str {
        "random"
    }

    async fn check_payment(&self, order: &Order) -> Result<PaymentCheck, PaymentVerifierError> {
        let hit = rand::thread_rng().gen_bool(self.probability);
        tracing::debug!(order_id = %order.id, hit, "Random payment check");
        Ok(if hit {
            PaymentCheck::Confirmed
        } else {
            PaymentCheck::NotDetected
        })
    }
}

/// Always gives the same answer
pub struct StaticPaymentVerifier {
    answer: PaymentCheck,
}

impl StaticPaymentVerifier {
    pub fn new(answer: PaymentCheck) -> Self {
        Self { answer }
    }

    pub fn confirming() -> Self {
        Self::new(PaymentCheck::Confirmed)
    }

    pub fn never() -> Self {
        Self::new(PaymentCheck::NotDetected)
    }
}

#[async_trait]
impl PaymentVerifier for StaticPaymentVerifier {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn check_payment(&self, _order: &Order) -> Result<PaymentCheck, PaymentVerifierError> {
        Ok(self.answer)
    }
}
