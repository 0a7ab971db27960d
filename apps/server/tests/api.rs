use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use fundboard_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(data_api_url: String) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        data_api_url,
        data_api_key: "test-anon-key".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        app_domain: "fundboard.app".to_string(),
        verify_action: "/auth/verify".to_string(),
        resend_url: "/auth/resend".to_string(),
    }
}

fn build_test_router(store: &MockServer) -> Router {
    let config = test_config(store.uri());
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let store = MockServer::start().await;
    let (status, body) = get(build_test_router(&store), "/api/v1/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn create_contribution_returns_created_record() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/contributions"))
        .and(body_json(json!({
            "amount": 50.0,
            "proposal_id": "p1",
            "member_id": "m1",
            "payment_id": "pi_123",
            "status": "COMPLETED"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c1",
            "amount": 50,
            "proposal_id": "p1",
            "member_id": "m1",
            "payment_id": "pi_123",
            "status": "COMPLETED",
            "created_at": "2024-05-01T10:00:00+00:00"
        })))
        .expect(1)
        .mount(&store)
        .await;

    let request = post_json(
        "/api/v1/contributions",
        &json!({
            "amount": 50,
            "projectId": "p1",
            "memberId": "m1",
            "stripePaymentIntentId": "pi_123"
        }),
    );
    let (status, body) = send(build_test_router(&store), request).await;

    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["id"], "c1");
    assert_eq!(created["amount"], 50.0);
    assert_eq!(created["projectId"], "p1");
    assert_eq!(created["memberId"], "m1");
    assert_eq!(created["paymentId"], "pi_123");
    assert_eq!(created["status"], "COMPLETED");
    assert!(created.get("project").is_none());
}

#[tokio::test]
async fn malformed_payload_is_rejected_before_reaching_the_store() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&store)
        .await;

    let request = post_json("/api/v1/contributions", &json!({ "amount": 5 }));
    let (status, body) = send(build_test_router(&store), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], 400);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .starts_with("Input validation failed"));
}

#[tokio::test]
async fn not_null_violation_is_not_a_conflict() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/contributions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "23502",
            "message": "null value in column \"proposal_id\" violates not-null constraint"
        })))
        .mount(&store)
        .await;

    let request = post_json(
        "/api/v1/contributions",
        &json!({
            "amount": 10,
            "projectId": "p1",
            "memberId": "m1",
            "stripePaymentIntentId": "pi_1"
        }),
    );
    let (status, _) = send(build_test_router(&store), request).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn store_constraint_violation_maps_to_conflict() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/contributions"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"contributions_payment_id_key\""
        })))
        .mount(&store)
        .await;

    let request = post_json(
        "/api/v1/contributions",
        &json!({
            "amount": 10,
            "projectId": "p1",
            "memberId": "m1",
            "stripePaymentIntentId": "pi_dup"
        }),
    );
    let (status, body) = send(build_test_router(&store), request).await;

    assert_eq!(status, StatusCode::CONFLICT);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], 409);
    assert!(error["message"].as_str().unwrap().contains("duplicate key"));
}

#[tokio::test]
async fn member_contributions_are_listed_newest_first() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contributions"))
        .and(query_param("select", "*,project:projects(*)"))
        .and(query_param("member_id", "eq.m1"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "c2", "amount": 30, "proposal_id": "p2", "member_id": "m1",
                "payment_id": "pi_c2", "status": "COMPLETED",
                "created_at": "2024-05-02T10:00:00+00:00",
                "project": { "id": "p2", "title": "Bike racks" }
            },
            {
                "id": "c1", "amount": 20, "proposal_id": "p1", "member_id": "m1",
                "payment_id": "pi_c1", "status": "COMPLETED",
                "created_at": "2024-05-01T10:00:00+00:00",
                "project": { "id": "p1", "title": "Library roof" }
            }
        ])))
        .expect(1)
        .mount(&store)
        .await;

    let (status, body) = get(build_test_router(&store), "/api/v1/members/m1/contributions").await;

    assert_eq!(status, StatusCode::OK);
    let rows: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "c2");
    assert_eq!(rows[0]["project"]["title"], "Bike racks");
    assert_eq!(rows[1]["id"], "c1");
}

#[tokio::test]
async fn project_contributions_carry_member_profile() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contributions"))
        .and(query_param("select", "*,member_profile:profiles(*)"))
        .and(query_param("proposal_id", "eq.p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "c3", "amount": 15, "proposal_id": "p1", "member_id": "m2",
                "payment_id": "pi_c3", "status": "COMPLETED",
                "created_at": "2024-05-03T09:00:00+00:00",
                "member_profile": { "id": "m2", "full_name": "Ada" }
            }
        ])))
        .expect(1)
        .mount(&store)
        .await;

    let (status, body) = get(build_test_router(&store), "/api/v1/projects/p1/contributions").await;

    assert_eq!(status, StatusCode::OK);
    let rows: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["memberProfile"]["full_name"], "Ada");
}

#[tokio::test]
async fn empty_listing_is_an_empty_array() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contributions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&store)
        .await;

    let (status, body) = get(build_test_router(&store), "/api/v1/projects/p9/contributions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn store_outage_maps_to_bad_gateway() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contributions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&store)
        .await;

    let (status, _) = get(build_test_router(&store), "/api/v1/members/m1/contributions").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn image_hosts_include_storage_host() {
    let store = MockServer::start().await;
    let (status, body) = get(build_test_router(&store), "/api/v1/image-hosts").await;

    assert_eq!(status, StatusCode::OK);
    let policy: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        policy["hosts"],
        json!(["youtube.com", "fundboard.app", "127.0.0.1"])
    );
}

#[tokio::test]
async fn verify_page_renders_step_with_error() {
    let store = MockServer::start().await;
    let (status, body) = get(
        build_test_router(&store),
        "/verify?error=Code%20expired&code=12",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Code expired"));
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains(r#"value="12""#));
    assert!(html.contains(r#"maxlength="6""#));
    assert!(html.contains(r#"action="/auth/verify""#));
    assert!(html.contains(r#"href="/auth/resend""#));
}

#[tokio::test]
async fn verify_page_without_error_has_no_banner() {
    let store = MockServer::start().await;
    let (status, body) = get(build_test_router(&store), "/verify").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(!html.contains(r#"role="alert""#));
    assert!(html.contains("Verify"));
}
