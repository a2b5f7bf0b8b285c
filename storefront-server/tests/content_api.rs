//! Catalogue and content endpoints over HTTP, against the seeded store.

mod common;

use common::spawn_app;
use http::StatusCode;
use serde_json::{Value, json};
use storefront_server::PaymentCheck;

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_root_and_health() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, body) = app.get("/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Storefront API is running");

    let (_, body) = app.get("/api/").await;
    assert_eq!(body["message"], "Storefront API is running");

    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Storefront API");

    let (status, body) = app.get("/api/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_products_seeded_and_created() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, list) = app.get("/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&list),
        vec!["sqr400-v58-lite", "sqr400-v58-pro", "sqr400-v784"]
    );

    let (status, product) = app.get("/api/products/sqr400-v784").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["tier"], "ultimate");
    assert_eq!(product["price"], 2500.0);

    let (status, err) = app.get("/api/products/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["detail"], "Product not found");

    let (status, created) = app
        .post(
            "/api/products/",
            json!({
                "name": "Trial",
                "version": "1.0",
                "tier": "lite",
                "price": 0.0,
                "original_price": 0.0,
                "btc_price": 0.0,
                "description": "Trial edition",
                "features": ["basic"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["currency"], "USD");
    assert_eq!(created["in_stock"], true);
    assert_eq!(created["created_at"], created["updated_at"]);

    let (status, _) = app
        .post(
            "/api/products",
            json!({
                "name": "Bad",
                "version": "1.0",
                "tier": "platinum",
                "price": 1.0,
                "original_price": 1.0,
                "btc_price": 0.0,
                "description": "x",
                "features": []
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/products",
            json!({
                "name": "Negative",
                "version": "1.0",
                "tier": "pro",
                "price": -1.0,
                "original_price": 1.0,
                "btc_price": 0.0,
                "description": "x",
                "features": []
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            "PUT",
            "/api/products/missing",
            Some(json!({
                "name": "x", "version": "1", "tier": "pro", "price": 1.0,
                "original_price": 1.0, "btc_price": 0.0, "description": "x", "features": []
            })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blog_filters_pagination_and_search() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (_, all) = app.get("/api/blog/posts").await;
    assert_eq!(ids(&all), vec!["1", "2", "3"]);

    let (_, featured) = app.get("/api/blog/posts?featured=true").await;
    assert_eq!(featured.as_array().unwrap().len(), 2);

    let (_, tagged) = app.get("/api/blog/posts?tag=versions").await;
    assert_eq!(ids(&tagged), vec!["3"]);

    let (_, page) = app.get("/api/blog/posts?skip=1&limit=1").await;
    assert_eq!(ids(&page), vec!["2"]);

    let (status, _) = app.get("/api/blog/posts?limit=51").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app.get("/api/blog/posts?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, post) = app.get("/api/blog/posts/what-is-sqr400-complete-guide").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["id"], "1");

    let (status, err) = app.get("/api/blog/posts/no-such-post").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["detail"], "Blog post not found");

    let (status, hits) = app.get("/api/blog/posts/search?q=COMPARISON").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&hits), vec!["2"]);

    let (status, err) = app.get("/api/blog/posts/search?q=a").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 9);
}

#[tokio::test]
async fn test_blog_create_derives_slug() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, post) = app
        .post(
            "/api/blog/posts",
            json!({
                "title": "Release Notes: v8.0!",
                "excerpt": "What is new",
                "content": "Everything",
                "author": "Team",
                "read_time": "2 min read",
                "tags": ["updates"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["slug"], "release-notes-v80");
    assert_eq!(post["published"], true);
    assert_eq!(post["featured"], false);

    let (status, fetched) = app.get("/api/blog/posts/release-notes-v80").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], post["id"]);
}

#[tokio::test]
async fn test_unpublished_blog_posts_stay_hidden() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, draft) = app
        .post(
            "/api/blog/posts",
            json!({
                "title": "Quasar Draft",
                "excerpt": "quasar internals",
                "content": "Not ready",
                "author": "Team",
                "read_time": "1 min read",
                "tags": ["quasar"],
                "featured": true,
                "published": false
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["published"], false);
    let draft_id = draft["id"].as_str().unwrap().to_string();

    let (status, visible) = app
        .post(
            "/api/blog/posts",
            json!({
                "title": "Quasar Notes",
                "excerpt": "quasar overview",
                "content": "Ready",
                "author": "Team",
                "read_time": "1 min read",
                "tags": ["quasar"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let visible_id = visible["id"].as_str().unwrap().to_string();

    let (_, all) = app.get("/api/blog/posts").await;
    assert!(!ids(&all).contains(&draft_id));
    assert!(ids(&all).contains(&visible_id));

    let (_, tagged) = app.get("/api/blog/posts?tag=quasar").await;
    assert_eq!(ids(&tagged), vec![visible_id.clone()]);

    let (_, featured) = app.get("/api/blog/posts?featured=true").await;
    assert!(!ids(&featured).contains(&draft_id));

    let (status, _) = app.get("/api/blog/posts/quasar-draft").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, hits) = app.get("/api/blog/posts/search?q=quasar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&hits), vec![visible_id]);
}

#[tokio::test]
async fn test_unpublished_faqs_stay_hidden() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, hidden) = app
        .post(
            "/api/faq",
            json!({
                "question": "Is the quasar plan hidden?",
                "answer": "Yes",
                "category": "support",
                "order": 0,
                "published": false
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let hidden_id = hidden["id"].as_str().unwrap().to_string();

    let (status, shown) = app
        .post(
            "/api/faq",
            json!({
                "question": "Is the quasar plan available?",
                "answer": "Soon",
                "category": "support",
                "order": 7
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let shown_id = shown["id"].as_str().unwrap().to_string();

    let (_, all) = app.get("/api/faq").await;
    assert_eq!(all.as_array().unwrap().len(), 7);
    assert!(!ids(&all).contains(&hidden_id));

    let (_, support) = app.get("/api/faq?category=support").await;
    assert_eq!(support.as_array().unwrap().len(), 3);
    assert!(!ids(&support).contains(&hidden_id));

    let (status, hits) = app.get("/api/faq/search?q=quasar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&hits), vec![shown_id]);
}

#[tokio::test]
async fn test_faq_ordering_categories_and_search() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, all) = app.get("/api/faq").await;
    assert_eq!(status, StatusCode::OK);
    let orders: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5, 6]);

    // 尾部斜杠等价
    let (status, same) = app.get("/api/faq/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(same, all);

    let (_, support) = app.get("/api/faq?category=support").await;
    assert_eq!(support.as_array().unwrap().len(), 2);
    let (_, everything) = app.get("/api/faq?category=all").await;
    assert_eq!(everything.as_array().unwrap().len(), 6);

    let (_, body) = app.get("/api/faq/categories").await;
    assert_eq!(
        body["categories"],
        json!(["legal", "purchase", "effectiveness", "features", "support"])
    );

    let (status, created) = app
        .post(
            "/api/faq/",
            json!({"question": "First?", "answer": "Yes", "category": "general", "order": 0}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, all) = app.get("/api/faq").await;
    assert_eq!(all[0]["id"], created["id"]);

    let (_, hits) = app.get("/api/faq/search?q=download").await;
    assert!(!hits.as_array().unwrap().is_empty());
    let (status, _) = app.get("/api/faq/search?q=x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_messages() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, message) = app
        .post(
            "/api/contact/",
            json!({
                "name": "Ann",
                "email": "ann@example.com",
                "subject": "Licensing",
                "message": "Question about seats",
                "inquiry_type": "sales"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message["status"], "new");
    let id = message["id"].as_str().unwrap();

    let (status, _) = app
        .post(
            "/api/contact",
            json!({"name": "B", "email": "nope", "subject": "s", "message": "m", "inquiry_type": "t"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .send("PUT", &format!("/api/contact/messages/{id}?status=resolved"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Status updated successfully");

    let (status, err) = app
        .send("PUT", &format!("/api/contact/messages/{id}?status=archived"), None, None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["detail"], "Invalid status");

    let (status, err) = app
        .send("PUT", "/api/contact/messages/ghost?status=new", None, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["detail"], "Message not found");

    let (_, resolved) = app.get("/api/contact/messages?status=resolved").await;
    assert_eq!(ids(&resolved), vec![id.to_string()]);
    let (_, fresh) = app.get("/api/contact/messages?status=new").await;
    assert!(fresh.as_array().unwrap().is_empty());
    let (status, _) = app.get("/api/contact/messages?status=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, err) = app.get("/api/contact/messages?status=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["detail"], "Invalid status");
}

#[tokio::test]
async fn test_testimonials_and_stats() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, list) = app.get("/api/testimonials").await;
    assert_eq!(status, StatusCode::OK);
    // 最新 date 在前
    assert_eq!(ids(&list), vec!["3", "2", "1"]);

    let (_, all) = app.get("/api/testimonials/?verified_only=false").await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, one) = app.get("/api/testimonials/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["rating"], 5);

    let (status, _) = app.get("/api/testimonials/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, stats) = app.get("/api/stats/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_users"], "50,000+");
    assert_eq!(stats["transactions_processed"], "2.5M+");
    assert_eq!(stats["countries_served"], "120+");
}

#[tokio::test]
async fn test_unknown_route_uses_error_body() {
    let app = spawn_app(PaymentCheck::NotDetected, None).await;

    let (status, err) = app.get("/api/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 3);
    assert_eq!(err["detail"], "Resource not found");
}

#[tokio::test]
async fn test_cors_and_request_id_headers() {
    use axum::body::Body;
    use http::Request;
    use tower::ServiceExt;

    let app = spawn_app(PaymentCheck::NotDetected, None).await;
    let response = app
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("origin", "https://shop.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    assert!(response.headers().contains_key("x-request-id"));
}
