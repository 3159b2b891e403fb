//! Startup bootstrap for the admin account.
//!
//! This is a single-operator system: if `ADMIN_USERNAME`/`ADMIN_PASSWORD` are
//! configured and no such user exists yet, one is created at startup. An
//! existing account is never modified (password changes go through the
//! database, not the environment).

use memopyk_db::models::user::CreateUser;
use memopyk_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Ensure the configured admin account exists.
pub async fn ensure_admin_user(pool: &PgPool, config: &ServerConfig) -> AppResult<()> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
    else {
        tracing::debug!("No admin bootstrap configured, skipping");
        return Ok(());
    };

    if UserRepo::find_by_username(pool, username).await?.is_some() {
        tracing::debug!(%username, "Admin account already exists");
        return Ok(());
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.clone(),
            password_hash,
            role: None,
        },
    )
    .await?;

    tracing::info!(%username, user_id = %user.id, "Bootstrapped admin account");
    Ok(())
}
