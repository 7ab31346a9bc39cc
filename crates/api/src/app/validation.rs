//! Request binding and validation.
//!
//! Every function returns a `Result`; handlers short-circuit with `?` so a
//! binding failure is rejected before any service call.

use userbase_core::UserId;
use userbase_users::{NewUser, UserPatch};

use crate::app::errors::ApiError;

/// Bind an `:id` path parameter.
///
/// Non-integer input is rejected with a 400, never coerced to zero.
pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>().map_err(ApiError::from)
}

/// Bind and validate a create-user body.
pub fn create_user(body: &[u8]) -> Result<NewUser, ApiError> {
    let new_user: NewUser =
        serde_json::from_slice(body).map_err(|e| ApiError::invalid_body(e.to_string()))?;
    new_user.validate()?;
    Ok(new_user)
}

/// Bind and validate an update-user body. Absent fields keep their values.
pub fn update_user(body: &[u8]) -> Result<UserPatch, ApiError> {
    let patch: UserPatch =
        serde_json::from_slice(body).map_err(|e| ApiError::invalid_body(e.to_string()))?;
    patch.validate()?;
    Ok(patch)
}
