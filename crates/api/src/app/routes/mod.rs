use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use crate::app::errors::ApiError;

pub mod system;
pub mod users;

/// Router for all user-resource endpoints.
///
/// `/user/name` is registered alongside `/user/:id`; the static segment
/// takes precedence in route matching.
pub fn router() -> Router {
    Router::new()
        .route("/users", get(users::get_users))
        .route("/user", post(users::create_user))
        .route("/user/name", get(users::get_name))
        .route(
            "/user/:id",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}

/// Enveloped 404 for paths outside the routing table.
pub async fn unknown_route() -> Response {
    ApiError::not_found("Route not found").into_response()
}
