//! Handlers for the `/admins` resource.
//!
//! All handlers require the `admin` scope and `root` group membership via
//! [`RequireRootGroup`]. Every `{id}` goes through [`AdminId`], which
//! rejects the reserved placeholder id.

use axum::extract::{Query, State};
use axum::Json;
use keystone_core::error::CoreError;
use keystone_core::groups::{GroupMap, PermissionMap};
use keystone_core::naming::AdminName;
use keystone_core::paging::PagedResult;
use keystone_core::sorting::parse_sort;
use keystone_db::models::admin::{Admin, CreateAdmin};
use keystone_db::repositories::AdminRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::RequireRootGroup;
use crate::path::AdminId;
use crate::query::ListParams;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::validation::{not_blank, validate_body};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admins`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// Structured name in `PUT /admins/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct NameInput {
    #[validate(custom(function = "not_blank"))]
    pub first: String,
    #[serde(default)]
    pub middle: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub last: String,
}

/// Request body for `PUT /admins/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNameRequest {
    #[validate(nested)]
    pub name: NameInput,
}

/// Request body for `PUT /admins/{id}/groups`: group id -> group name.
#[derive(Debug, Deserialize)]
pub struct UpdateGroupsRequest {
    pub groups: GroupMap,
}

/// Request body for `PUT /admins/{id}/permissions`: permission -> granted.
#[derive(Debug, Deserialize)]
pub struct UpdatePermissionsRequest {
    pub permissions: PermissionMap,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admins
///
/// Paged admin listing. `sort` defaults to `_id`, `limit` to 20, `page` to 1.
pub async fn list_admins(
    State(state): State<AppState>,
    RequireRootGroup(_caller): RequireRootGroup,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PagedResult<Admin>>> {
    let sort = parse_sort(params.sort())?;
    let page = params.page();
    let limit = params.limit();

    let (admins, total) = AdminRepo::paged_find(&state.pool, &sort, page, limit).await?;
    Ok(Json(PagedResult::new(admins, page, limit, total)))
}

/// POST /api/admins
///
/// Create an admin from a free-form name. Groups and permissions start empty.
pub async fn create_admin(
    State(state): State<AppState>,
    RequireRootGroup(caller): RequireRootGroup,
    Json(input): Json<CreateAdminRequest>,
) -> AppResult<Json<Admin>> {
    validate_body(&input)?;

    let create_dto = CreateAdmin {
        name: AdminName::parse(&input.name),
    };
    let admin = AdminRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(admin_id = %admin.id, created_by = %caller.admin.id, "Admin created");
    Ok(Json(admin))
}

/// GET /api/admins/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireRootGroup(_caller): RequireRootGroup,
    AdminId(id): AdminId,
) -> AppResult<Json<Admin>> {
    let admin = AdminRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Admin", id))?;
    Ok(Json(admin))
}

/// PUT /api/admins/{id}
///
/// Replace the admin's structured name. `middle` may be omitted or empty.
pub async fn update_admin(
    State(state): State<AppState>,
    RequireRootGroup(_caller): RequireRootGroup,
    AdminId(id): AdminId,
    Json(input): Json<UpdateNameRequest>,
) -> AppResult<Json<Admin>> {
    validate_body(&input)?;

    let name = AdminName {
        first: input.name.first,
        middle: input.name.middle.unwrap_or_default(),
        last: input.name.last,
    };

    let admin = AdminRepo::update_name(&state.pool, &id, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Admin", id))?;
    Ok(Json(admin))
}

/// DELETE /api/admins/{id}
///
/// Hard delete. A linked user keeps its (now dangling) admin reference.
pub async fn delete_admin(
    State(state): State<AppState>,
    RequireRootGroup(caller): RequireRootGroup,
    AdminId(id): AdminId,
) -> AppResult<Json<MessageResponse>> {
    if !AdminRepo::delete(&state.pool, &id).await? {
        return Err(CoreError::not_found("Admin", id).into());
    }

    tracing::info!(admin_id = %id, deleted_by = %caller.admin.id, "Admin deleted");
    Ok(Json(MessageResponse::SUCCESS))
}

/// PUT /api/admins/{id}/groups
///
/// Replace the admin's group memberships wholesale.
pub async fn update_groups(
    State(state): State<AppState>,
    RequireRootGroup(caller): RequireRootGroup,
    AdminId(id): AdminId,
    Json(input): Json<UpdateGroupsRequest>,
) -> AppResult<Json<Admin>> {
    let admin = AdminRepo::update_groups(&state.pool, &id, &input.groups)
        .await?
        .ok_or_else(|| CoreError::not_found("Admin", id))?;

    tracing::info!(
        admin_id = %admin.id,
        groups = ?admin.groups.keys().collect::<Vec<_>>(),
        updated_by = %caller.admin.id,
        "Admin groups replaced"
    );
    Ok(Json(admin))
}

/// PUT /api/admins/{id}/permissions
///
/// Replace the admin's permission flags wholesale.
pub async fn update_permissions(
    State(state): State<AppState>,
    RequireRootGroup(caller): RequireRootGroup,
    AdminId(id): AdminId,
    Json(input): Json<UpdatePermissionsRequest>,
) -> AppResult<Json<Admin>> {
    let admin = AdminRepo::update_permissions(&state.pool, &id, &input.permissions)
        .await?
        .ok_or_else(|| CoreError::not_found("Admin", id))?;

    tracing::info!(admin_id = %admin.id, updated_by = %caller.admin.id, "Admin permissions replaced");
    Ok(Json(admin))
}
