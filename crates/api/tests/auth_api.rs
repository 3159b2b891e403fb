//! HTTP-level integration tests for the auth endpoints: login, lockout,
//! refresh rotation, logout, and bearer enforcement on admin routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use sqlx::PgPool;

use memopyk_api::auth::password::hash_password;
use memopyk_db::models::user::CreateUser;
use memopyk_db::repositories::UserRepo;

/// Insert a user with a known password, returning its username.
async fn seed_user(pool: &PgPool, username: &str, password: &str) {
    let password_hash = hash_password(password).unwrap();
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
            role: None,
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_with_valid_credentials(pool: PgPool) {
    seed_user(&pool, "stephane", "s3cret-enough").await;

    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "stephane", "password": "s3cret-enough"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["username"], "stephane");
    assert_eq!(json["user"]["role"], "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password_returns_401(pool: PgPool) {
    seed_user(&pool, "stephane", "right-password").await;

    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "stephane", "password": "wrong-password"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "nobody", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_failures_lock_the_account(pool: PgPool) {
    seed_user(&pool, "stephane", "right-password").await;

    // Five failed attempts trip the lockout.
    for _ in 0..5 {
        let app = common::build_test_app(pool.clone()).await;
        let response = post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({"username": "stephane", "password": "wrong"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is rejected while locked.
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "stephane", "password": "right-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_tokens(pool: PgPool) {
    seed_user(&pool, "stephane", "s3cret-enough").await;

    let app = common::build_test_app(pool.clone()).await;
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({"username": "stephane", "password": "s3cret-enough"}),
        )
        .await,
    )
    .await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    // Exchange the refresh token.
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert_ne!(refreshed["refresh_token"], login["refresh_token"]);

    // The old refresh token is now revoked.
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    seed_user(&pool, "stephane", "s3cret-enough").await;

    let app = common::build_test_app(pool.clone()).await;
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({"username": "stephane", "password": "s3cret-enough"}),
        )
        .await,
    )
    .await;
    let access_token = login["access_token"].as_str().unwrap().to_string();
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone()).await;
    let response = common::post_json_auth(
        app,
        "/api/v1/auth/logout",
        serde_json::json!({}),
        &access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Refreshing with the revoked session fails.
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_require_bearer_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/api/v1/admin/hero-videos").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool.clone()).await;
    let response = get_auth(app, "/api/v1/admin/hero-videos", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/admin/hero-videos", &common::auth_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_routes_need_no_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/hero-videos").await;
    assert_eq!(response.status(), StatusCode::OK);
}
