//! Admin display names.
//!
//! Admins are created from a single free-form name string and stored as a
//! structured `{first, middle, last}` triple.

use serde::{Deserialize, Serialize};

/// Structured admin name as stored on the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminName {
    pub first: String,
    #[serde(default)]
    pub middle: String,
    pub last: String,
}

impl AdminName {
    /// Split a free-form name into first / middle / last.
    ///
    /// - first token becomes `first`
    /// - when more than one token follows, the next one becomes `middle`
    /// - whatever remains, joined by single spaces, becomes `last`
    ///
    /// # Examples
    ///
    /// ```
    /// use keystone_core::naming::AdminName;
    ///
    /// let n = AdminName::parse("Ada King Lovelace");
    /// assert_eq!((n.first.as_str(), n.middle.as_str(), n.last.as_str()), ("Ada", "King", "Lovelace"));
    ///
    /// let n = AdminName::parse("Ada Lovelace");
    /// assert_eq!((n.first.as_str(), n.middle.as_str(), n.last.as_str()), ("Ada", "", "Lovelace"));
    /// ```
    pub fn parse(name: &str) -> Self {
        let mut parts: Vec<&str> = name.split_whitespace().collect();
        if parts.is_empty() {
            return Self::default();
        }

        let first = parts.remove(0).to_string();
        let middle = if parts.len() > 1 {
            parts.remove(0).to_string()
        } else {
            String::new()
        };
        let last = parts.join(" ");

        Self {
            first,
            middle,
            last,
        }
    }

    /// `"{first} {last}"`, trimmed. The middle name is not included.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_is_first_name() {
        let n = AdminName::parse("Ada");
        assert_eq!(n.first, "Ada");
        assert_eq!(n.middle, "");
        assert_eq!(n.last, "");
    }

    #[test]
    fn extra_tokens_fold_into_last_name() {
        let n = AdminName::parse("Juan Pablo de la Cruz");
        assert_eq!(n.first, "Juan");
        assert_eq!(n.middle, "Pablo");
        assert_eq!(n.last, "de la Cruz");
    }

    #[test]
    fn surrounding_and_repeated_whitespace_ignored() {
        let n = AdminName::parse("   Grace \t  Hopper  ");
        assert_eq!(n.first, "Grace");
        assert_eq!(n.middle, "");
        assert_eq!(n.last, "Hopper");
    }

    #[test]
    fn blank_name_is_empty() {
        assert_eq!(AdminName::parse("   "), AdminName::default());
    }

    #[test]
    fn full_name_skips_middle() {
        let n = AdminName::parse("Ada King Lovelace");
        assert_eq!(n.full_name(), "Ada Lovelace");
    }

    #[test]
    fn full_name_of_single_token_has_no_trailing_space() {
        assert_eq!(AdminName::parse("Ada").full_name(), "Ada");
    }

    #[test]
    fn middle_defaults_when_missing_from_json() {
        let n: AdminName = serde_json::from_str(r#"{"first":"Ada","last":"Lovelace"}"#).unwrap();
        assert_eq!(n.middle, "");
    }
}
