use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

// ============================================================================
// Request Actions
// ============================================================================

/// Status and parsed body of one response; plain-text bodies land in `Value::String`
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(app: &Router, request: Request<Body>) -> ApiResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should always produce a response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    ApiResponse { status, body }
}

pub async fn post_json(app: &Router, uri: &str, payload: Value) -> ApiResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build");
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> ApiResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn register(app: &Router, name: &str, email: &str, password: &str) -> ApiResponse {
    post_json(
        app,
        "/api/register",
        json!({ "name": name, "email": email, "password": password }),
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> ApiResponse {
    post_json(
        app,
        "/api/login",
        json!({ "email": email, "password": password }),
    )
    .await
}

pub async fn save_session(
    app: &Router,
    user_id: &str,
    duration: f64,
    start_time: &str,
    end_time: &str,
) -> ApiResponse {
    post_json(
        app,
        "/api/sessions",
        json!({
            "userId": user_id,
            "duration": duration,
            "startTime": start_time,
            "endTime": end_time,
        }),
    )
    .await
}

pub async fn history(app: &Router, user_id: &str) -> ApiResponse {
    get(app, &format!("/api/sessions/{}", user_id)).await
}
