//! Validated path parameters.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use keystone_core::object_id::validate_id_param;
use keystone_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of an admin route, with the reserved placeholder id
/// rejected up front (400).
#[derive(Debug, Clone)]
pub struct AdminId(pub DbId);

impl<S> FromRequestParts<S> for AdminId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        validate_id_param(&id)?;
        Ok(AdminId(id))
    }
}
