//! Route definitions for the `/admins` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{admin_links, admins};
use crate::state::AppState;

/// Routes mounted at `/admins`.
///
/// All routes require the `admin` scope and `root` group membership
/// (enforced by handler extractors).
///
/// ```text
/// GET    /                   -> list_admins
/// POST   /                   -> create_admin
/// GET    /{id}               -> get_admin
/// PUT    /{id}               -> update_admin
/// DELETE /{id}               -> delete_admin
/// PUT    /{id}/groups        -> update_groups
/// PUT    /{id}/permissions   -> update_permissions
/// PUT    /{id}/user          -> link_user
/// DELETE /{id}/user          -> unlink_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admins::list_admins).post(admins::create_admin))
        .route(
            "/{id}",
            get(admins::get_admin)
                .put(admins::update_admin)
                .delete(admins::delete_admin),
        )
        .route("/{id}/groups", put(admins::update_groups))
        .route("/{id}/permissions", put(admins::update_permissions))
        .route(
            "/{id}/user",
            put(admin_links::link_user).delete(admin_links::unlink_user),
        )
}
