//! Scope and group based access control extractors.
//!
//! Admin routes are gated twice: the token must carry the `admin` scope and
//! the admin record behind the caller must belong to a required group. Both
//! checks run before any handler logic, so handlers can take the extractor
//! as proof of authorization.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use keystone_core::error::CoreError;
use keystone_core::groups::{require_admin_group, GROUP_ROOT};
use keystone_db::models::admin::Admin;
use keystone_db::models::user::User;
use keystone_db::repositories::{AdminRepo, UserRepo};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Token scope granting access to admin routes.
pub const SCOPE_ADMIN: &str = "admin";

/// The authenticated caller resolved to their user account and admin record.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub user: User,
    pub admin: Admin,
}

/// Requires the `admin` scope and a live admin record behind the caller.
///
/// - no `admin` scope on the token: 403
/// - user missing, inactive, or not linked to an existing admin: 401
pub struct RequireAdminScope(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireAdminScope {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if !auth.has_scope(SCOPE_ADMIN) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Insufficient scope.".into(),
            )));
        }

        let user = UserRepo::find_by_id(&state.pool, &auth.user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| CoreError::Unauthorized("Unknown or inactive user".into()))?;

        let admin_id = user
            .linked_admin()
            .map(|r| r.id.clone())
            .ok_or_else(|| CoreError::Unauthorized("User has no admin role".into()))?;

        let admin = AdminRepo::find_by_id(&state.pool, &admin_id)
            .await?
            .ok_or_else(|| CoreError::Unauthorized("Admin role no longer exists".into()))?;

        Ok(RequireAdminScope(AuthAdmin { user, admin }))
    }
}

/// Requires the `admin` scope plus membership in the `root` group.
/// Rejects with 403 `"Missing required group membership."` otherwise.
///
/// ```ignore
/// async fn root_only(RequireRootGroup(caller): RequireRootGroup) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = %caller.admin.id, "root access");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireRootGroup(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireRootGroup {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAdminScope(caller) = RequireAdminScope::from_request_parts(parts, state).await?;
        require_admin_group(&caller.admin.groups, GROUP_ROOT)?;
        Ok(RequireRootGroup(caller))
    }
}
