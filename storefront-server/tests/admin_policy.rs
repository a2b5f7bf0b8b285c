//! Admin endpoints behind a bearer token.

mod common;

use common::spawn_app;
use http::StatusCode;
use serde_json::json;
use storefront_server::PaymentCheck;

const TOKEN: &str = "test-admin-token";

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = spawn_app(PaymentCheck::NotDetected, Some(TOKEN)).await;

    let admin_reads = ["/api/contact/messages", "/api/newsletter/subscribers"];
    for uri in admin_reads {
        let (status, body) = app.send("GET", uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["code"], 1001);

        let (status, _) = app.send("GET", uri, None, Some("wrong")).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");

        let (status, _) = app.send("GET", uri, None, Some(TOKEN)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }

    let faq = json!({"question": "Q?", "answer": "A", "category": "general"});
    let (status, _) = app.send("POST", "/api/faq/", Some(faq.clone()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.send("POST", "/api/faq/", Some(faq), Some(TOKEN)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .send("PUT", "/api/contact/messages/x?status=new", None, Some("wrong"))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_public_routes_stay_open() {
    let app = spawn_app(PaymentCheck::NotDetected, Some(TOKEN)).await;

    for uri in ["/api/products", "/api/blog/posts", "/api/faq", "/api/testimonials", "/api/stats"] {
        let (status, _) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }

    let (status, _) = app
        .post(
            "/api/orders",
            json!({
                "customer_email": "b@example.com",
                "customer_name": "B",
                "product_id": "sqr400-v58-lite",
                "accept_terms": true
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}
