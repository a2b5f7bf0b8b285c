//! Shared helpers for the HTTP-level tests: a temp-dir backed server state and a
//! one-shot JSON request helper.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use storefront_server::{
    Config, PaymentCheck, ServerState, StaticPaymentVerifier, build_router,
};

pub struct TestApp {
    pub app: NormalizePath<Router>,
    pub state: ServerState,
    _tmp: TempDir,
}

pub async fn spawn_app(payment: PaymentCheck, admin_token: Option<&str>) -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    config.db_namespace = "test".into();
    config.db_name = "test".into();
    config.order_expiry_minutes = 30;
    config.download_ttl_hours = 24;
    config.download_base_url = "https://downloads.example.com".into();
    config.payment_confirm_probability = 0.5;
    config.admin_token = admin_token.map(str::to_string);

    let mut state = ServerState::initialize(&config).await.unwrap();
    state.payment_verifier = Arc::new(StaticPaymentVerifier::new(payment));

    TestApp {
        app: build_router(state.clone()),
        state,
        _tmp: tmp,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body), None).await
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}
