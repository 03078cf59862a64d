//! Dinonest auth proxy.
//!
//! Thin relay between the front end and the upstream authentication
//! backend: accepts the local login/logout calls, forwards them, and
//! translates transport failures into a generic 500.

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod routes;

use routes::AppState;

const DEFAULT_UPSTREAM: &str = "http://localhost:8080";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let upstream =
        std::env::var("DINONEST_API_BASE_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string());
    let addr: SocketAddr = std::env::var("DINONEST_PROXY_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let app = routes::router(AppState::new(upstream.clone())).layer(TraceLayer::new_for_http());

    tracing::info!("auth proxy listening on {addr}, upstream {upstream}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
