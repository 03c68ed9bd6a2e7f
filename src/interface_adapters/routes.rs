use crate::interface_adapters::docs;
use crate::interface_adapters::handlers::matches::create_match;
use crate::interface_adapters::handlers::users::{create_user, get_user, list_users};
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

// Build the HTTP router for the API, the docs, and the live feed.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
        .route("/api/matches", post(create_match))
        .route("/api-docs", get(docs::docs_page))
        .route("/api-docs/openapi.json", get(docs::openapi_document))
        .route("/ws", get(ws_handler))
        .layer(cors)
        // Outermost layer so foreign origins never reach a handler.
        .layer(middleware::from_fn_with_state(state.clone(), enforce_origin))
        .with_state(state)
}

// Reject any request whose Origin header differs from the configured one.
// Requests without an Origin header (non-browser clients) pass through.
async fn enforce_origin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if origin != &state.allowed_origin {
            return (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    error: "origin not allowed".to_string(),
                }),
            )
                .into_response();
        }
    }

    next.run(request).await
}
