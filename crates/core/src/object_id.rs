//! Record id generation and path-parameter checks.
//!
//! Ids are 12 bytes rendered as 24 lowercase hex characters: a 4-byte
//! big-endian seconds timestamp followed by 8 random bytes. Ids sort roughly
//! by creation time, so the default `_id` sort doubles as "oldest first".

use rand::Rng;

use crate::error::CoreError;
use crate::types::DbId;

/// Length of a rendered id.
pub const ID_LEN: usize = 24;

/// Placeholder id reserved for the built-in root records. Never addressable
/// through the admin endpoints.
pub const RESERVED_ID: &str = "111111111111111111111111";

/// Generate a fresh id.
pub fn new_object_id() -> DbId {
    let secs = chrono::Utc::now().timestamp().clamp(0, i64::from(u32::MAX)) as u32;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    rand::rng().fill(&mut bytes[4..]);

    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Whether `id` is the reserved placeholder id.
pub fn is_reserved_id(id: &str) -> bool {
    id == RESERVED_ID
}

/// Reject the reserved placeholder id in an `{id}` path parameter.
///
/// Other strings are passed through untouched; a malformed id simply will not
/// match any record and surfaces as a not-found later on.
pub fn validate_id_param(id: &str) -> Result<(), CoreError> {
    if is_reserved_id(id) {
        return Err(CoreError::Validation(format!(
            "\"id\" contains an invalid value: {id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn generated_ids_are_24_hex_chars() {
        let id = new_object_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(new_object_id(), new_object_id());
    }

    #[test]
    fn generated_ids_carry_timestamp_prefix() {
        let before = chrono::Utc::now().timestamp();
        let id = new_object_id();
        let secs = i64::from_str_radix(&id[..8], 16).unwrap();
        assert!(secs >= before && secs <= before + 5);
    }

    #[test]
    fn reserved_id_is_24_ones() {
        assert_eq!(RESERVED_ID.len(), ID_LEN);
        assert!(RESERVED_ID.chars().all(|c| c == '1'));
    }

    #[test]
    fn reserved_id_rejected() {
        assert_matches!(
            validate_id_param(RESERVED_ID),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn other_ids_accepted() {
        assert!(validate_id_param("5f1d7a3c9b8e4a2d1c0b9a87").is_ok());
        assert!(validate_id_param("11111111111111111111111").is_ok());
        assert!(validate_id_param("not-an-id").is_ok());
    }
}
