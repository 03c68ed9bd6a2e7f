use scoreboard_server::run_with_config;

#[tokio::main]
async fn main() {
    // Errors are logged inside the framework layer before bubbling up.
    let _ = run_with_config().await;
}
