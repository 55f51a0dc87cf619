use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::env;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState};

/// Environment variable consulted for the port when none is given on the command line
pub const PORT_ENV_VAR: &str = "ROUTE_GRAPH_PORT";

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

impl ServerConfig {
    /// Resolves the port from the first argument, then `ROUTE_GRAPH_PORT`,
    /// then the default. Unparsable values are ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();

        let from_arg = args.into_iter().nth(1).and_then(|arg| arg.parse().ok());
        let from_env = env::var(PORT_ENV_VAR).ok().and_then(|v| v.parse().ok());
        if let Some(port) = from_arg.or(from_env) {
            config.port = port;
        }

        config
    }
}

/// Build the application router for the given configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_max_sessions(config.max_sessions);

    let app = Router::new()
        // API routes
        .merge(create_router())
        // Static file serving for the order form frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with custom configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Route graph server starting on http://{}", addr);
    info!("Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
