//! Shared harness for HTTP-level integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! production, but with stub identity and insights collaborators so no
//! network is involved. Bearer tokens follow the `token-<uuid>` shape and
//! map straight back to that user id.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use uuid::Uuid;

use studypulse_api::config::{IdentityConfig, InsightsConfig, ServerConfig};
use studypulse_api::routes;
use studypulse_api::state::AppState;
use studypulse_identity::{IdentityError, IdentityProvider, IdentityUser, Session, SignUp};
use studypulse_insights::{InsightsBackend, InsightsError};

/// Password accepted by the stub provider's password grant.
pub const STUB_PASSWORD: &str = "correct-horse-battery";

/// ID token accepted by the stub provider's native Google flow.
pub const STUB_GOOGLE_TOKEN: &str = "valid-google-id-token";

/// The bearer token the stub provider maps back to `user_id`.
pub fn token_for(user_id: Uuid) -> String {
    format!("token-{user_id}")
}

/// The email the stub provider reports for `user_id`.
pub fn email_for(user_id: Uuid) -> String {
    format!("{user_id}@stub.test")
}

fn stub_session(user: IdentityUser) -> Session {
    Session {
        access_token: token_for(user.id),
        refresh_token: format!("refresh-{}", user.id),
        token_type: "bearer".to_string(),
        expires_in: 3600,
        user,
    }
}

/// Identity provider replacement: tokens are `token-<uuid>`, sign-ups
/// always succeed, and the password grant accepts [`STUB_PASSWORD`].
pub struct StubIdentity;

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<SignUp, IdentityError> {
        let user = IdentityUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
        };
        Ok(SignUp {
            user: Some(user.clone()),
            session: Some(stub_session(user)),
        })
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError> {
        if password != STUB_PASSWORD {
            return Err(IdentityError::Api {
                status: 400,
                message: "Invalid login credentials".to_string(),
            });
        }
        let user = IdentityUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
        };
        Ok(stub_session(user))
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        let id = access_token
            .strip_prefix("token-")
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .ok_or(IdentityError::Api {
                status: 401,
                message: "invalid JWT".to_string(),
            })?;
        Ok(IdentityUser {
            id,
            email: email_for(id),
        })
    }

    async fn update_password(
        &self,
        access_token: &str,
        _new_password: &str,
    ) -> Result<(), IdentityError> {
        self.get_user(access_token).await.map(|_| ())
    }

    async fn sign_in_with_id_token(
        &self,
        _provider: &str,
        id_token: &str,
    ) -> Result<Session, IdentityError> {
        if id_token != STUB_GOOGLE_TOKEN {
            return Err(IdentityError::Api {
                status: 400,
                message: "Invalid ID token".to_string(),
            });
        }
        let user = IdentityUser {
            id: Uuid::new_v4(),
            email: "native@stub.test".to_string(),
        };
        Ok(stub_session(user))
    }

    fn authorize_url(&self, provider: &str, redirect_to: &str) -> String {
        format!("https://identity.stub/authorize?provider={provider}&redirect_to={redirect_to}")
    }
}

/// Insights backend replacement: echoes a deterministic completion, or
/// fails with an upstream-style error when constructed with `fail`.
pub struct StubInsights {
    pub fail: bool,
}

#[async_trait]
impl InsightsBackend for StubInsights {
    async fn generate(&self, prompt: &str) -> Result<String, InsightsError> {
        if self.fail {
            return Err(InsightsError::Api {
                status: 429,
                message: "quota exhausted".to_string(),
            });
        }
        Ok(format!(
            "## Study Insights\n\nPrompt received ({} chars).",
            prompt.len()
        ))
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        identity: IdentityConfig {
            base_url: "https://identity.stub".to_string(),
            api_key: "stub-api-key".to_string(),
            google_redirect_url: "http://localhost:5173/dashboard".to_string(),
        },
        insights: InsightsConfig {
            base_url: "https://insights.stub/v1".to_string(),
            api_key: None,
            model: "stub-model".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and the default (succeeding) stubs.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubInsights { fail: false })
}

/// Like [`build_test_app`], but the insights backend always fails.
pub fn build_failing_insights_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubInsights { fail: true })
}

fn build_test_app_with(pool: PgPool, insights: StubInsights) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        identity: Arc::new(StubIdentity),
        insights: Arc::new(insights),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::app_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("body was not JSON: {e}"))
}

/// Collect a response body as raw bytes (for asserting empty bodies).
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
