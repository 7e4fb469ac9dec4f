//! Admin entity model and DTOs.

use keystone_core::groups::{is_member_of, GroupMap, PermissionMap};
use keystone_core::linking::LinkRef;
use keystone_core::naming::AdminName;
use keystone_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Serializes to the document shape returned by the API, with the linked
/// user reference exposed as `user`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub name: Json<AdminName>,
    pub groups: Json<GroupMap>,
    pub permissions: Json<PermissionMap>,
    #[sqlx(rename = "linked_user")]
    pub user: Option<Json<LinkRef>>,
    pub time_created: Timestamp,
}

impl Admin {
    /// `"{first} {last}"`, used as the display name stored on a linked user.
    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    pub fn is_member_of(&self, group: &str) -> bool {
        is_member_of(&self.groups, group)
    }

    /// The linked user reference, if any.
    pub fn linked_user(&self) -> Option<&LinkRef> {
        self.user.as_ref().map(|j| &j.0)
    }
}

/// DTO for creating a new admin. Groups and permissions start empty.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub name: AdminName,
}
