//! `?sort=` parameter parsing for admin listings.
//!
//! The parameter is a list of keys separated by spaces or commas. A leading
//! `-` sorts that key descending. Only whitelisted keys are accepted; each
//! maps to a fixed SQL expression, so the resulting `ORDER BY` clause never
//! contains caller-supplied text.

use crate::error::CoreError;

/// Default sort key.
pub const DEFAULT_SORT: &str = "_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    TimeCreated,
    FirstName,
    LastName,
}

impl SortField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "_id" | "id" => Some(SortField::Id),
            "time_created" | "timeCreated" => Some(SortField::TimeCreated),
            "name.first" => Some(SortField::FirstName),
            "name.last" => Some(SortField::LastName),
            _ => None,
        }
    }

    /// SQL expression for this field on the `admins` table.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::TimeCreated => "time_created",
            SortField::FirstName => "name->>'first'",
            SortField::LastName => "name->>'last'",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

/// Parse a `sort` parameter into an ordered list of keys.
///
/// A blank parameter yields the default (`_id` ascending).
pub fn parse_sort(raw: &str) -> Result<Vec<SortKey>, CoreError> {
    let mut keys = Vec::new();

    for token in raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let (descending, key) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token.strip_prefix('+').unwrap_or(token)),
        };

        let field = SortField::from_key(key)
            .ok_or_else(|| CoreError::Validation(format!("Unknown sort key: {key}")))?;

        if keys.iter().any(|k: &SortKey| k.field == field) {
            continue;
        }
        keys.push(SortKey { field, descending });
    }

    if keys.is_empty() {
        keys.push(SortKey {
            field: SortField::Id,
            descending: false,
        });
    }
    Ok(keys)
}

/// Render keys as the body of an `ORDER BY` clause.
///
/// `id` is appended as a final tie-breaker when not already present so that
/// paging is stable.
pub fn order_by_clause(keys: &[SortKey]) -> String {
    let mut parts: Vec<String> = keys
        .iter()
        .map(|k| {
            let dir = if k.descending { "DESC" } else { "ASC" };
            format!("{} {dir}", k.field.column())
        })
        .collect();

    if !keys.iter().any(|k| k.field == SortField::Id) {
        parts.push("id ASC".to_string());
    }
    parts.join(", ")
}
