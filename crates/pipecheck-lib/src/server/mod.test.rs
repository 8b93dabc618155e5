use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

// ============================================================================
// Test Utilities
// ============================================================================

fn test_router(config: AppConfig) -> Router {
    router(&config).unwrap()
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/pipelines/parse")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Routes
// ============================================================================

#[tokio::test]
async fn test_ping() {
    let response = test_router(AppConfig::default())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "Ping": "Pong" }));
}

#[tokio::test]
async fn test_parse_diamond() {
    let payload = json!({
        "nodes": [{ "id": "a" }, { "id": "b" }, { "id": "c" }, { "id": "d" }],
        "edges": [
            { "source": "a", "target": "b" },
            { "source": "a", "target": "c" },
            { "source": "b", "target": "d" },
            { "source": "c", "target": "d" }
        ]
    });

    let response = test_router(AppConfig::default())
        .oneshot(post_json(payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "num_nodes": 4, "num_edges": 4, "is_dag": true })
    );
}

#[tokio::test]
async fn test_parse_cycle() {
    let payload = json!({
        "nodes": [{ "id": "a" }, { "id": "b" }],
        "edges": [{ "source": "a", "target": "b" }, { "source": "b", "target": "a" }]
    });

    let response = test_router(AppConfig::default())
        .oneshot(post_json(payload.to_string()))
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        json!({ "num_nodes": 2, "num_edges": 2, "is_dag": false })
    );
}

#[tokio::test]
async fn test_wrong_method_on_parse() {
    let response = test_router(AppConfig::default())
        .oneshot(Request::get("/pipelines/parse").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// Error Responses
// ============================================================================

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let response = test_router(AppConfig::default())
        .oneshot(post_json(r#"{ "nodes": [{ "type": "llm" }], "edges": [] }"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("id"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = test_router(AppConfig::default())
        .oneshot(post_json("{ not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_is_unsupported() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/pipelines/parse")
        .body(Body::from(r#"{ "nodes": [], "edges": [] }"#))
        .unwrap();

    let response = test_router(AppConfig::default())
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = AppConfig {
        max_body_bytes: 64,
        ..AppConfig::default()
    };
    let nodes: Vec<Value> = (0..50).map(|i| json!({ "id": format!("node-{}", i) })).collect();
    let payload = json!({ "nodes": nodes, "edges": [] });

    let response = test_router(config)
        .oneshot(post_json(payload.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_reject_policy_returns_detail() {
    let config = AppConfig {
        dangling_edges: DanglingEdgePolicy::Reject,
        ..AppConfig::default()
    };
    let payload = json!({
        "nodes": [{ "id": "a" }],
        "edges": [{ "source": "a", "target": "ghost" }]
    });

    let response = test_router(config)
        .oneshot(post_json(payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Edge 0 has target 'ghost' which is not a declared node" })
    );
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/pipelines/parse")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = test_router(AppConfig::default())
        .oneshot(request)
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_cors_headers() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "http://evil.test")
        .body(Body::empty())
        .unwrap();

    let response = test_router(AppConfig::default())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[test]
fn test_cors_layer_rejects_invalid_origin() {
    let result = cors_layer(&["http://bad\norigin".to_string()]);
    assert!(matches!(result, Err(ConfigError::InvalidOrigin { .. })));
}
