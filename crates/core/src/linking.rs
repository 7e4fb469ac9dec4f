//! One-to-one pairing rules between admin records and user accounts.
//!
//! Each side stores a back-reference to the other. Before linking, both
//! references are checked so that neither record is stolen from an existing
//! pairing; relinking an already-paired couple is allowed and simply rewrites
//! both references.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const USER_ALREADY_LINKED: &str = "User is linked to an admin. Unlink first.";
pub const ADMIN_ALREADY_LINKED: &str = "Admin is linked to a user. Unlink first.";

/// A back-reference stored on one side of a pairing.
///
/// On an admin it points at the user (`name` = username); on a user it
/// points at the admin (`name` = the admin's full name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub id: String,
    pub name: String,
}

/// Check that `admin_id` and `user_id` may be paired.
///
/// `user_admin` is the admin reference currently stored on the user,
/// `admin_user` the user reference currently stored on the admin. The user
/// side is checked first.
pub fn check_link(
    admin_id: &str,
    admin_user: Option<&LinkRef>,
    user_id: &str,
    user_admin: Option<&LinkRef>,
) -> Result<(), CoreError> {
    if let Some(existing) = user_admin {
        if existing.id != admin_id {
            return Err(CoreError::Conflict(USER_ALREADY_LINKED.into()));
        }
    }

    if let Some(existing) = admin_user {
        if existing.id != user_id {
            return Err(CoreError::Conflict(ADMIN_ALREADY_LINKED.into()));
        }
    }

    Ok(())
}

/// The user id an admin is linked to, if the reference is present and
/// non-empty. An admin without one needs no user-side cleanup on unlink.
pub fn linked_user_id(admin_user: Option<&LinkRef>) -> Option<&str> {
    admin_user
        .map(|r| r.id.as_str())
        .filter(|id| !id.is_empty())
}
