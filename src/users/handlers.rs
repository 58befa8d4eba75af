//! Endpoint handlers for `/users`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::http::server::AppState;
use crate::users::error::ApiError;
use crate::users::model::{User, UserId, UserInput};

/// Reject payloads without a name before they reach the store.
fn validate(input: &UserInput) -> Result<(), ApiError> {
    if input.has_name() {
        Ok(())
    } else {
        Err(ApiError::NameRequired)
    }
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list())
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    state.store.get(id).map(Json).ok_or(ApiError::NotFound(id))
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    validate(&input)?;

    let created = state.store.add(input);
    tracing::debug!(user_id = created.id, "User created");

    let location = format!("/users/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// `PUT /users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    validate(&input)?;

    state
        .store
        .update(id, input)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<String, ApiError> {
    let Path(id) = id?;
    if state.store.delete(id) {
        tracing::debug!(user_id = id, "User deleted");
        Ok(format!("User {} deleted", id))
    } else {
        Err(ApiError::NotFound(id))
    }
}
