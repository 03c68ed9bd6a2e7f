use crate::interface_adapters::protocol::ServerEvent;
use crate::use_cases::{Roster, Schedule};
use axum::http::HeaderValue;
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};

// Shared application state for the HTTP handlers and the live feed.
pub struct AppState {
    pub roster: Arc<Mutex<Roster>>,
    pub schedule: Arc<Mutex<Schedule>>,
    // Fan-out channel for events pushed to connected feed clients.
    pub events: broadcast::Sender<ServerEvent>,
    // Single origin allowed to call the API from a browser.
    pub allowed_origin: HeaderValue,
}
