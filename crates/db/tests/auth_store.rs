//! Repository tests for the user and session stores.

use chrono::{Duration, Utc};
use memopyk_db::models::session::CreateSession;
use memopyk_db::models::user::CreateUser;
use memopyk_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        role: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_create_and_find(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("stephane")).await.unwrap();
    assert_eq!(created.role, "admin");
    assert!(created.is_active);
    assert_eq!(created.failed_login_count, 0);

    let by_name = UserRepo::find_by_username(&pool, "stephane")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(by_name.id, created.id);

    assert!(UserRepo::find_by_username(&pool, "nobody")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("stephane")).await.unwrap();
    let result = UserRepo::create(&pool, &new_user("stephane")).await;
    assert!(result.is_err(), "unique constraint must reject duplicates");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_login_counter_and_lockout(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("stephane")).await.unwrap();

    UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
    UserRepo::increment_failed_login(&pool, user.id).await.unwrap();

    let fetched = UserRepo::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.failed_login_count, 2);

    let until = Utc::now() + Duration::minutes(15);
    UserRepo::lock_account(&pool, user.id, until).await.unwrap();
    let locked = UserRepo::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .unwrap();
    assert!(locked.locked_until.is_some());

    // A successful login clears everything.
    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let cleared = UserRepo::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.failed_login_count, 0);
    assert!(cleared.locked_until.is_none());
    assert!(cleared.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_lifecycle(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("stephane")).await.unwrap();

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "hash-a".to_string(),
            expires_at: Utc::now() + Duration::days(7),
        },
    )
    .await
    .unwrap();

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "hash-a")
        .await
        .unwrap();
    assert!(found.is_some());

    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(
        !SessionRepo::revoke(&pool, session.id).await.unwrap(),
        "revoking twice should report no change"
    );

    let gone = SessionRepo::find_by_refresh_token_hash(&pool, "hash-a")
        .await
        .unwrap();
    assert!(gone.is_none(), "revoked sessions must not resolve");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_session_does_not_resolve(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("stephane")).await.unwrap();

    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "hash-expired".to_string(),
            expires_at: Utc::now() - Duration::minutes(1),
        },
    )
    .await
    .unwrap();

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "hash-expired")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoke_all_for_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("stephane")).await.unwrap();

    for hash in ["hash-1", "hash-2", "hash-3"] {
        SessionRepo::create(
            &pool,
            &CreateSession {
                user_id: user.id,
                refresh_token_hash: hash.to_string(),
                expires_at: Utc::now() + Duration::days(7),
            },
        )
        .await
        .unwrap();
    }

    let revoked = SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap();
    assert_eq!(revoked, 3);

    for hash in ["hash-1", "hash-2", "hash-3"] {
        assert!(SessionRepo::find_by_refresh_token_hash(&pool, hash)
            .await
            .unwrap()
            .is_none());
    }
}
