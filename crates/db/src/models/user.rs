//! User account model.
//!
//! Users are owned by the account subsystem; this service reads them and
//! maintains only the `roles.admin` back-reference.

use keystone_core::linking::LinkRef;
use keystone_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Role back-references held by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<LinkRef>,
}

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub roles: Json<UserRoles>,
    pub time_created: Timestamp,
}

impl User {
    /// The admin reference stored on this user, if any.
    pub fn linked_admin(&self) -> Option<&LinkRef> {
        self.roles.admin.as_ref()
    }
}

/// DTO for creating a new user. The username is lowercased on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
}
