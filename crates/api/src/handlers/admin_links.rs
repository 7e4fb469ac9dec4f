//! Handlers pairing an admin record with a user account.
//!
//! Each handler first runs an ordered chain of lookups and checks that
//! short-circuits on the first failure, then performs the two-sided write.
//! The two writes go out concurrently and are not transactional: if one
//! fails after the other succeeded the pair is left half-linked. Retrying a
//! half-finished link rewrites both sides; a half-finished unlink is not
//! repaired automatically.

use axum::extract::State;
use axum::Json;
use keystone_core::error::CoreError;
use keystone_core::linking::{check_link, linked_user_id, LinkRef};
use keystone_db::models::admin::Admin;
use keystone_db::models::user::User;
use keystone_db::repositories::{AdminRepo, UserRepo};
use keystone_db::DbPool;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::RequireRootGroup;
use crate::path::AdminId;
use crate::state::AppState;
use crate::validation::{not_blank, validate_body};

/// Request body for `PUT /admins/{id}/user`.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkUserRequest {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
}

/// Admin and user resolved by the link preconditions.
#[derive(Debug)]
pub struct LinkContext {
    pub admin: Admin,
    pub user: User,
}

/// Outcome of the unlink preconditions.
#[derive(Debug)]
pub enum UnlinkPlan {
    /// The admin had no user; its reference was cleared and nothing else
    /// needs to happen.
    Done(Admin),
    /// Both sides must be cleared.
    Unlink { admin: Admin, user: User },
}

/// Fetch the admin and user to pair and check neither is already taken.
///
/// Order: admin by id (404), user by username (404), user's existing admin
/// (409), admin's existing user (409).
pub async fn resolve_link(pool: &DbPool, admin_id: &str, username: &str) -> AppResult<LinkContext> {
    let admin = AdminRepo::find_by_id(pool, admin_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Admin", admin_id))?;

    let user = UserRepo::find_by_username(pool, username)
        .await?
        .ok_or_else(|| CoreError::not_found("User", username))?;

    check_link(admin_id, admin.linked_user(), &user.id, user.linked_admin())?;

    Ok(LinkContext { admin, user })
}

/// Fetch the admin to unlink and, when it has a linked user, that user.
///
/// An admin without a linked user is cleared right away and returned as
/// [`UnlinkPlan::Done`]; no user lookup happens.
pub async fn plan_unlink(pool: &DbPool, admin_id: &str) -> AppResult<UnlinkPlan> {
    let admin = AdminRepo::find_by_id(pool, admin_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Admin", admin_id))?;

    let Some(user_id) = linked_user_id(admin.linked_user()) else {
        let admin = AdminRepo::unlink_user(pool, admin_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Admin", admin_id))?;
        return Ok(UnlinkPlan::Done(admin));
    };

    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", user_id))?;

    Ok(UnlinkPlan::Unlink { admin, user })
}

/// PUT /api/admins/{id}/user
///
/// Link the admin to the user named in the body. Relinking the pair that is
/// already linked is allowed and rewrites both references.
pub async fn link_user(
    State(state): State<AppState>,
    RequireRootGroup(caller): RequireRootGroup,
    AdminId(id): AdminId,
    Json(input): Json<LinkUserRequest>,
) -> AppResult<Json<Admin>> {
    validate_body(&input)?;
    let username = input.username.trim().to_lowercase();

    let LinkContext { admin, user } = resolve_link(&state.pool, &id, &username).await?;

    let user_ref = LinkRef {
        id: user.id.clone(),
        name: user.username.clone(),
    };
    let admin_ref = LinkRef {
        id: admin.id.clone(),
        name: admin.full_name(),
    };

    let (admin, _user) = tokio::try_join!(
        AdminRepo::link_user(&state.pool, &admin.id, &user_ref),
        UserRepo::link_admin(&state.pool, &user.id, &admin_ref),
    )?;
    let admin = admin.ok_or_else(|| CoreError::not_found("Admin", id))?;

    tracing::info!(
        admin_id = %admin.id,
        user_id = %user.id,
        linked_by = %caller.admin.id,
        "Admin linked to user"
    );
    Ok(Json(admin))
}

/// DELETE /api/admins/{id}/user
///
/// Clear the pairing on both sides. An admin with no linked user is
/// returned as-is (after an idempotent clear).
pub async fn unlink_user(
    State(state): State<AppState>,
    RequireRootGroup(caller): RequireRootGroup,
    AdminId(id): AdminId,
) -> AppResult<Json<Admin>> {
    let (admin, user) = match plan_unlink(&state.pool, &id).await? {
        UnlinkPlan::Done(admin) => return Ok(Json(admin)),
        UnlinkPlan::Unlink { admin, user } => (admin, user),
    };

    let (admin, _user) = tokio::try_join!(
        AdminRepo::unlink_user(&state.pool, &admin.id),
        UserRepo::unlink_admin(&state.pool, &user.id),
    )?;
    let admin = admin.ok_or_else(|| CoreError::not_found("Admin", id))?;

    tracing::info!(
        admin_id = %admin.id,
        user_id = %user.id,
        unlinked_by = %caller.admin.id,
        "Admin unlinked from user"
    );
    Ok(Json(admin))
}
