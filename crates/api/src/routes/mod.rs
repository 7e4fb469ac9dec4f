pub mod admins;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admins                     list, create
/// /admins/{id}                get, update name, delete
/// /admins/{id}/groups         replace groups
/// /admins/{id}/permissions    replace permissions
/// /admins/{id}/user           link (PUT), unlink (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/admins", admins::router())
}
