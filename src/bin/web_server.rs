use route_graph::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Port from the first argument, ROUTE_GRAPH_PORT, or the default
    let config = ServerConfig::from_args(env::args());

    log::info!("Configuration:");
    log::info!("   Port: {}", config.port);
    log::info!("   Static files: {}", config.static_dir);
    log::info!("   CORS enabled: {}", config.enable_cors);
    log::info!("   Max sessions: {}", config.max_sessions);

    start_server(config).await?;

    Ok(())
}
