#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use keystone_api::auth::jwt::{generate_access_token, JwtConfig};
use keystone_api::config::ServerConfig;
use keystone_api::router::build_app_router;
use keystone_api::state::AppState;
use keystone_core::groups::GroupMap;
use keystone_core::linking::LinkRef;
use keystone_core::naming::AdminName;
use keystone_db::models::admin::{Admin, CreateAdmin};
use keystone_db::models::user::{CreateUser, User};
use keystone_db::repositories::{AdminRepo, UserRepo};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert an admin with the given group ids.
pub async fn seed_admin(pool: &PgPool, name: &str, groups: &[&str]) -> Admin {
    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            name: AdminName::parse(name),
        },
    )
    .await
    .expect("admin creation should succeed");

    if groups.is_empty() {
        return admin;
    }

    let groups: GroupMap = groups
        .iter()
        .map(|g| (g.to_string(), g.to_uppercase()))
        .collect();
    AdminRepo::update_groups(pool, &admin.id, &groups)
        .await
        .unwrap()
        .unwrap()
}

/// Insert a user account.
pub async fn seed_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{}@test.com", username.to_lowercase()),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Write both back-references of an admin/user pair directly.
pub async fn pair(pool: &PgPool, admin: &Admin, user: &User) -> (Admin, User) {
    let admin = AdminRepo::link_user(
        pool,
        &admin.id,
        &LinkRef {
            id: user.id.clone(),
            name: user.username.clone(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    let user = UserRepo::link_admin(
        pool,
        &user.id,
        &LinkRef {
            id: admin.id.clone(),
            name: admin.full_name(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    (admin, user)
}

/// Create a caller: a user paired with an admin in `groups`, and an access
/// token for that user carrying the given scopes.
pub async fn seed_caller(
    pool: &PgPool,
    username: &str,
    groups: &[&str],
    scope: &[&str],
) -> (Admin, String) {
    let admin = seed_admin(pool, &format!("{username} Caller"), groups).await;
    let user = seed_user(pool, username).await;
    let (admin, user) = pair(pool, &admin, &user).await;

    let token = generate_access_token(&user.id, scope, &test_config().jwt)
        .expect("token generation should succeed");
    (admin, token)
}

/// A caller in the `root` group with the `admin` scope.
pub async fn root_caller(pool: &PgPool) -> (Admin, String) {
    seed_caller(pool, "root", &["root"], &["account", "admin"]).await
}
