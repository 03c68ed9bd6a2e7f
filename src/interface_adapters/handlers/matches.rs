use crate::domain::SportsMatch;
use crate::interface_adapters::protocol::{CreateMatchRequest, ErrorResponse, ServerEvent};
use crate::interface_adapters::state::AppState;
use crate::use_cases::schedule::ScheduleError;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::info;

// Record a new match, push it to connected feed clients, and echo the stored record.
#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = CreateMatchRequest,
    responses(
        (status = 201, description = "Match stored and pushed to feed clients", body = SportsMatch),
        (status = 409, description = "A match with that id already exists", body = ErrorResponse)
    )
)]
pub async fn create_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<SportsMatch>), (StatusCode, Json<ErrorResponse>)> {
    let game = SportsMatch::from(request);

    {
        let mut schedule = state.schedule.lock().await;
        if let Err(ScheduleError::DuplicateId { id }) = schedule.add(game.clone()) {
            return Err((
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("Match {id} already exists"),
                }),
            ));
        }
    }

    info!(match_id = game.id, "match created");

    // Fan-out is best-effort; send only fails when no feed client is connected.
    let _ = state.events.send(ServerEvent::NewMatch(game.clone()));

    Ok((StatusCode::CREATED, Json(game)))
}
