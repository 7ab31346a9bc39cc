use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::Response;

use crate::app::envelope;
use crate::app::errors::ApiError;
use crate::app::services::UserService;
use crate::app::validation;

/// GET /users
pub async fn get_users(Extension(service): Extension<Arc<UserService>>) -> Response {
    let users = service.get_users();
    envelope::render(StatusCode::OK, "Success get all users", users)
}

/// GET /user/name
pub async fn get_name(Extension(service): Extension<Arc<UserService>>) -> Response {
    envelope::render(StatusCode::OK, "Success get name", service.owner_name())
}

/// GET /user/:id
pub async fn get_user(
    Extension(service): Extension<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validation::parse_user_id(&id)?;
    let user = service
        .get_user(id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(envelope::render(StatusCode::OK, "Success get user", user))
}

/// POST /user
pub async fn create_user(
    Extension(service): Extension<Arc<UserService>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let new_user = validation::create_user(&body)?;
    let user = service.create_user(new_user);

    Ok(envelope::render(StatusCode::CREATED, "Success create user", user))
}

/// PATCH /user/:id
pub async fn update_user(
    Extension(service): Extension<Arc<UserService>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = validation::parse_user_id(&id)?;
    let patch = validation::update_user(&body)?;
    let user = service
        .update_user(id, patch)
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(envelope::render(StatusCode::OK, "Success update user", user))
}

/// DELETE /user/:id
pub async fn delete_user(
    Extension(service): Extension<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validation::parse_user_id(&id)?;
    let user = service
        .delete_user(id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(envelope::render(StatusCode::OK, "Success delete user", user))
}
