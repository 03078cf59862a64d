//! Auth proxy endpoints.
//!
//! Forward-only: relay the upstream status code and body, wrapping
//! upstream error bodies as `{"error": ...}` and translating transport or
//! parse failures into a generic 500.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Shared proxy state: upstream base URL and a reusable HTTP client.
pub struct AppState {
    upstream: String,
    client: reqwest::Client,
}

impl AppState {
    pub fn new(upstream: impl Into<String>) -> Arc<Self> {
        let mut upstream: String = upstream.into();
        while upstream.ends_with('/') {
            upstream.pop();
        }
        Arc::new(Self {
            upstream,
            client: reqwest::Client::new(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .with_state(state)
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

fn relay(status_code: u16, data: Value, fallback_message: &str) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_success() {
        (status, Json(data)).into_response()
    } else {
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(fallback_message);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn login(State(state): State<Arc<AppState>>, Json(body): Json<LoginBody>) -> Response {
    let resp = match state
        .client
        .post(format!("{}/login", state.upstream))
        .json(&body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("login relay failed: {e}");
            return internal_error();
        }
    };

    let status = resp.status().as_u16();
    match resp.json::<Value>().await {
        Ok(data) => relay(status, data, "Login failed"),
        Err(e) => {
            tracing::error!("login response parse failed: {e}");
            internal_error()
        }
    }
}

async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let Some(auth_header) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "No authorization header provided" })),
        )
            .into_response();
    };

    let resp = match state
        .client
        .post(format!("{}/logout", state.upstream))
        .header(header::AUTHORIZATION.as_str(), auth_header)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("logout relay failed: {e}");
            return internal_error();
        }
    };

    let status = resp.status().as_u16();
    match resp.json::<Value>().await {
        Ok(data) => relay(status, data, "Logout failed"),
        Err(e) => {
            tracing::error!("logout response parse failed: {e}");
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    fn login_request() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email":"a@b.c","password":"pw"}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn login_relays_success_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"token":"tok-1","user":{"id":"u1","email":"a@b.c","created_at":"2024-01-01T00:00:00Z"}}"#,
            )
            .create_async()
            .await;

        let app = router(AppState::new(server.url()));
        let (status, body) = send(app, login_request()).await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token"], "tok-1");
        assert_eq!(body["user"]["email"], "a@b.c");
    }

    #[tokio::test]
    async fn login_relays_non_200_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token":"tok-1","user":{"id":"u1","email":"a@b.c","created_at":"2024-01-01T00:00:00Z"}}"#)
            .create_async()
            .await;

        let app = router(AppState::new(server.url()));
        let (status, body) = send(app, login_request()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["token"], "tok-1");
    }

    #[tokio::test]
    async fn login_relays_upstream_error_status_and_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"invalid credentials"}"#)
            .create_async()
            .await;

        let app = router(AppState::new(server.url()));
        let (status, body) = send(app, login_request()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid credentials");
    }

    #[tokio::test]
    async fn login_wraps_errorless_upstream_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let app = router(AppState::new(server.url()));
        let (status, body) = send(app, login_request()).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Login failed");
    }

    #[tokio::test]
    async fn login_transport_failure_is_500() {
        // Nothing listens on this port
        let app = router(AppState::new("http://127.0.0.1:1"));
        let (status, body) = send(app, login_request()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn login_unparseable_upstream_body_is_500() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let app = router(AppState::new(server.url()));
        let (status, body) = send(app, login_request()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn logout_requires_auth_header() {
        let app = router(AppState::new("http://127.0.0.1:1"));
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/logout")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "No authorization header provided");
    }

    #[tokio::test]
    async fn logout_forwards_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/logout")
            .match_header("authorization", "Bearer tok-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"logged out"}"#)
            .create_async()
            .await;

        let app = router(AppState::new(server.url()));
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/logout")
            .header(header::AUTHORIZATION, "Bearer tok-1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "logged out");
    }

    #[tokio::test]
    async fn logout_relays_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/logout")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"token expired"}"#)
            .create_async()
            .await;

        let app = router(AppState::new(server.url()));
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/logout")
            .header(header::AUTHORIZATION, "Bearer stale")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "token expired");
    }
}
