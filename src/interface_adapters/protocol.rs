// Wire protocol DTOs for the REST endpoints and the live feed.

use crate::domain::{SportsMatch, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Request payload for registering a new user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub id: i64,
    pub name: String,
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
        }
    }
}

// Request payload for recording a new match.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMatchRequest {
    pub id: i64,
    pub team1: String,
    pub team2: String,
    pub score: String,
}

impl From<CreateMatchRequest> for SportsMatch {
    fn from(request: CreateMatchRequest) -> Self {
        Self {
            id: request.id,
            team1: request.team1,
            team2: request.team2,
            score: request.score,
        }
    }
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    // Human-readable error string for consistent JSON error payloads.
    pub error: String,
}

/// Events the server pushes to connected feed clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    // A match was just recorded via the REST API.
    NewMatch(SportsMatch),
}
