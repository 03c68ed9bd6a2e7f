use std::env;

// Runtime/server constants.

pub fn http_port() -> u16 {
    env::var("SCOREBOARD_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3002)
}

// Single origin allowed to call the API from a browser, with credentials.
pub fn allowed_origin() -> String {
    env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

pub const FEED_CHANNEL_CAPACITY: usize = 128;
