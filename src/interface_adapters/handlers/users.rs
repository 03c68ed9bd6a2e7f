use crate::domain::User;
use crate::interface_adapters::protocol::{CreateUserRequest, ErrorResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::roster::RosterError;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

// List every user currently held by the roster.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Full user list in insertion order", body = [User])
    )
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    let roster = state.roster.lock().await;
    Json(roster.list().to_vec())
}

// Look up a single user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "The matching user", body = User),
        (status = 404, description = "No user with that id", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    let roster = state.roster.lock().await;
    match roster.find(id) {
        Some(user) => Ok(Json(user.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "User not found".to_string(),
            }),
        )),
    }
}

// Register a new user and echo the stored record.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User stored", body = User),
        (status = 409, description = "A user with that id already exists", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<ErrorResponse>)> {
    let user = User::from(request);

    let mut roster = state.roster.lock().await;
    match roster.add(user.clone()) {
        Ok(()) => {
            info!(user_id = user.id, "user created");
            Ok((StatusCode::CREATED, Json(user)))
        }
        Err(RosterError::DuplicateId { id }) => Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("User {id} already exists"),
            }),
        )),
    }
}
