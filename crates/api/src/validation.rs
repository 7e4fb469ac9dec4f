//! Request body validation helpers.

use keystone_core::error::CoreError;
use validator::{Validate, ValidationError};

use crate::error::AppResult;

/// Run `validator` rules on a request body, mapping failures to a 400.
pub fn validate_body<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()).into())
}

/// Reject strings that are empty or whitespace only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
