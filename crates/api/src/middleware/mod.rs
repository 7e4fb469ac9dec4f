//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdminScope`] -- Requires the `admin` scope and loads the caller's admin record.
//! - [`rbac::RequireRootGroup`] -- Additionally requires membership in the `root` group.

pub mod auth;
pub mod rbac;
