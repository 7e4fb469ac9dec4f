//! Admin group membership and the group-gated authorization check.
//!
//! An admin's `groups` map is keyed by group id; membership is simply
//! presence of the key. The display name stored as the value plays no part.

use std::collections::BTreeMap;

use crate::error::CoreError;

/// Group id of the highest-privilege group. Every admin-management route
/// requires it.
pub const GROUP_ROOT: &str = "root";

/// Message returned when the caller belongs to none of the required groups.
pub const MISSING_GROUP_MESSAGE: &str = "Missing required group membership.";

/// `group id -> group name` as stored on an admin.
pub type GroupMap = BTreeMap<String, String>;

/// `permission name -> granted` as stored on an admin.
pub type PermissionMap = BTreeMap<String, bool>;

/// One or more group ids, normalized to a list.
///
/// Built from a single id or any collection of ids:
///
/// ```
/// use keystone_core::groups::RequiredGroups;
///
/// assert_eq!(RequiredGroups::from("root").as_slice(), ["root"]);
/// assert_eq!(RequiredGroups::from(["root", "ops"]).as_slice(), ["root", "ops"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredGroups(Vec<String>);

impl RequiredGroups {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for RequiredGroups {
    fn from(group: &str) -> Self {
        Self(vec![group.to_string()])
    }
}

impl From<String> for RequiredGroups {
    fn from(group: String) -> Self {
        Self(vec![group])
    }
}

impl From<Vec<String>> for RequiredGroups {
    fn from(groups: Vec<String>) -> Self {
        Self(groups)
    }
}

impl From<&[&str]> for RequiredGroups {
    fn from(groups: &[&str]) -> Self {
        Self(groups.iter().map(|g| g.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RequiredGroups {
    fn from(groups: [&str; N]) -> Self {
        Self(groups.iter().map(|g| g.to_string()).collect())
    }
}

/// Whether the admin owning `groups` is a member of `group`.
pub fn is_member_of(groups: &GroupMap, group: &str) -> bool {
    groups.contains_key(group)
}

/// Succeed iff the admin owning `groups` belongs to at least one of
/// `required`. An empty requirement list never matches.
pub fn require_admin_group(
    groups: &GroupMap,
    required: impl Into<RequiredGroups>,
) -> Result<(), CoreError> {
    let required = required.into();
    let found = required
        .as_slice()
        .iter()
        .any(|group| is_member_of(groups, group));

    if !found {
        return Err(CoreError::Forbidden(MISSING_GROUP_MESSAGE.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn groups(ids: &[&str]) -> GroupMap {
        ids.iter()
            .map(|id| (id.to_string(), format!("{id} group")))
            .collect()
    }

    #[test]
    fn member_by_key_not_by_name() {
        let mut g = GroupMap::new();
        g.insert("root".into(), "Root".into());
        assert!(is_member_of(&g, "root"));
        assert!(!is_member_of(&g, "Root"));
    }

    #[test]
    fn single_group_match() {
        assert!(require_admin_group(&groups(&["root"]), GROUP_ROOT).is_ok());
    }

    #[test]
    fn single_group_miss_is_forbidden() {
        let err = require_admin_group(&groups(&["sales"]), GROUP_ROOT).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) if msg == MISSING_GROUP_MESSAGE);
    }

    #[test]
    fn any_group_in_list_suffices() {
        let g = groups(&["support"]);
        assert!(require_admin_group(&g, ["root", "support"]).is_ok());
        assert!(require_admin_group(&g, vec!["ops".to_string(), "support".to_string()]).is_ok());
    }

    #[test]
    fn no_overlap_with_list_is_forbidden() {
        let g = groups(&["support", "sales"]);
        assert_matches!(
            require_admin_group(&g, ["root", "ops"]),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn empty_memberships_never_pass() {
        assert_matches!(
            require_admin_group(&GroupMap::new(), GROUP_ROOT),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn empty_requirement_never_passes() {
        let empty: &[&str] = &[];
        assert_matches!(
            require_admin_group(&groups(&["root"]), empty),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn single_id_and_one_element_list_agree() {
        let g = groups(&["root"]);
        for probe in ["root", "ops"] {
            assert_eq!(
                require_admin_group(&g, probe).is_ok(),
                require_admin_group(&g, [probe]).is_ok(),
            );
        }
    }
}
