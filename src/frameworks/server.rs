// Framework bootstrap for the scoreboard server runtime.

use crate::frameworks::config;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{Roster, Schedule};

use axum::http::HeaderValue;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn build_state() -> Result<Arc<AppState>> {
    let allowed_origin = config::allowed_origin();
    let allowed_origin = HeaderValue::from_str(&allowed_origin)
        .map_err(|e| std::io::Error::other(format!("invalid allowed origin: {e}")))?;

    // Senders hand out subscriptions; the initial receiver is not needed.
    let (events, _) = broadcast::channel(config::FEED_CHANNEL_CAPACITY);

    Ok(Arc::new(AppState {
        roster: Arc::new(Mutex::new(Roster::seeded())),
        schedule: Arc::new(Mutex::new(Schedule::seeded())),
        events,
        allowed_origin,
    }))
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;

    // Wire the HTTP routes, the docs, and the feed endpoint.
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}
