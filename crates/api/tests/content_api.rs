//! HTTP-level integration tests for the content entity endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    auth_token, body_json, delete_auth, get, get_auth, post_json, post_json_auth, put_json_auth,
};
use sqlx::PgPool;

/// A minimal valid hero video payload.
fn hero_video_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title_en": title,
        "title_fr": format!("{title} (fr)"),
        "url_en": "https://media.example.com/en/hero.mp4",
        "url_fr": "https://media.example.com/fr/hero.mp4",
    })
}

/// A minimal valid FAQ payload.
fn faq_payload(question: &str) -> serde_json::Value {
    serde_json::json!({
        "section": "pricing",
        "section_name_en": "Pricing",
        "section_name_fr": "Tarifs",
        "question_en": question,
        "question_fr": format!("{question} (fr)"),
        "answer_en": "It depends.",
        "answer_fr": "Ça dépend.",
    })
}

// ---------------------------------------------------------------------------
// Hero video CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_video_crud_cycle(pool: PgPool) {
    let token = auth_token();

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(
        app,
        "/api/v1/admin/hero-videos",
        hero_video_payload("Our story"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title_en"], "Our story");
    assert_eq!(created["is_active"], true);
    assert_eq!(created["order_index"], 0);

    // Read back.
    let app = common::build_test_app(pool.clone()).await;
    let response = get_auth(app, &format!("/api/v1/admin/hero-videos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Update just the title.
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/hero-videos/{id}"),
        serde_json::json!({"title_en": "Your story"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title_en"], "Your story");
    assert_eq!(updated["title_fr"], "Our story (fr)");

    // Delete, then 404.
    let app = common::build_test_app(pool.clone()).await;
    let response = delete_auth(app, &format!("/api/v1/admin/hero-videos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, &format!("/api/v1/admin/hero-videos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_video_rejects_non_http_url(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let mut payload = hero_video_payload("Bad URL");
    payload["url_en"] = serde_json::json!("file:///etc/passwd");

    let response = post_json_auth(app, "/api/v1/admin/hero-videos", payload, &auth_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Validation: blank/missing bilingual fields persist nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_required_field_is_rejected_and_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let mut payload = faq_payload("How long does it take?");
    payload["question_fr"] = serde_json::json!("   ");

    let response = post_json_auth(app, "/api/v1/admin/faqs", payload, &auth_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faqs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "a rejected create must persist no row");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_is_rejected_and_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let mut payload = faq_payload("How long does it take?");
    payload.as_object_mut().unwrap().remove("answer_fr");

    let response = post_json_auth(app, "/api/v1/admin/faqs", payload, &auth_token()).await;
    assert!(
        response.status().is_client_error(),
        "missing field must be a 4xx, got {}",
        response.status()
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faqs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Visibility: inactive rows hidden from public, visible to admin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_rows_hidden_from_public_visible_to_admin(pool: PgPool) {
    let token = auth_token();

    let app = common::build_test_app(pool.clone()).await;
    post_json_auth(
        app,
        "/api/v1/admin/faqs",
        faq_payload("Visible question"),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone()).await;
    let mut hidden = faq_payload("Hidden question");
    hidden["is_active"] = serde_json::json!(false);
    post_json_auth(app, "/api/v1/admin/faqs", hidden, &token).await;

    // Public list: only the active FAQ.
    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/api/v1/faqs").await;
    assert_eq!(response.status(), StatusCode::OK);
    let public = body_json(response).await;
    let public = public.as_array().unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["question_en"], "Visible question");

    // Admin list: both.
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/admin/faqs", &token).await;
    let admin = body_json(response).await;
    assert_eq!(admin.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivating_a_hero_video_hides_it_from_public(pool: PgPool) {
    let token = auth_token();

    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json_auth(
            app,
            "/api/v1/admin/hero-videos",
            hero_video_payload("Soon hidden"),
            &token,
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone()).await;
    put_json_auth(
        app,
        &format!("/api/v1/admin/hero-videos/{id}"),
        serde_json::json!({"is_active": false}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool).await;
    let public = body_json(get(app, "/api/v1/hero-videos").await).await;
    assert!(public.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_hero_videos_ordered_by_order_index(pool: PgPool) {
    let token = auth_token();

    for (title, order) in [("Second", 2), ("First", 1)] {
        let app = common::build_test_app(pool.clone()).await;
        let mut payload = hero_video_payload(title);
        payload["order_index"] = serde_json::json!(order);
        post_json_auth(app, "/api/v1/admin/hero-videos", payload, &token).await;
    }

    let app = common::build_test_app(pool).await;
    let list = body_json(get(app, "/api/v1/hero-videos").await).await;
    let titles: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title_en"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_form_is_public_and_inbox_is_not(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        "/api/v1/contacts",
        serde_json::json!({
            "name": "Claire",
            "email": "claire@example.com",
            "message": "I'd like a film of our wedding."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let contact = body_json(response).await;
    assert_eq!(contact["status"], "new");

    // Inbox requires a token.
    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/api/v1/admin/contacts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool).await;
    let inbox = body_json(get_auth(app, "/api/v1/admin/contacts", &auth_token()).await).await;
    assert_eq!(inbox.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_with_broken_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        "/api/v1/contacts",
        serde_json::json!({"name": "Claire", "email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Legal documents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_legal_document_type_slug_fetch(pool: PgPool) {
    let token = auth_token();

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(
        app,
        "/api/v1/admin/legal-documents",
        serde_json::json!({
            "doc_type": "privacy_policy",
            "title_en": "Privacy Policy",
            "title_fr": "Politique de confidentialité",
            "content_en": "We store very little.",
            "content_fr": "Nous stockons très peu."
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/api/v1/legal-documents/type/privacy_policy").await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert_eq!(doc["title_fr"], "Politique de confidentialité");

    // Unknown slug is a validation error, missing document a 404.
    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/api/v1/legal-documents/type/imprint").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/legal-documents/type/cookie_policy").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deployment history
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deployment_history_create_and_patch(pool: PgPool) {
    let token = auth_token();

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(
        app,
        "/api/v1/admin/deployment-history",
        serde_json::json!({"kind": "deployment", "status": "in_progress", "host": "vps-1"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let entry = body_json(response).await;
    let id = entry["id"].as_str().unwrap().to_string();

    // Unknown kind is rejected.
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(
        app,
        "/api/v1/admin/deployment-history",
        serde_json::json!({"kind": "rollback", "status": "success"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Patch the running entry to success.
    let request = axum::http::Request::builder()
        .method(axum::http::Method::PATCH)
        .uri(format!("/api/v1/admin/deployment-history/{id}"))
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .header(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {token}"),
        )
        .body(axum::body::Body::from(
            serde_json::json!({"status": "success", "duration_secs": 95}).to_string(),
        ))
        .unwrap();
    let app = common::build_test_app(pool).await;
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["status"], "success");
    assert_eq!(patched["duration_secs"], 95);
}
