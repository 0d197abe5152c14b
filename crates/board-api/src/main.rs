//! # Driftboard Shop
//!
//! Development purchase endpoint for the driftboard storefront.
//!
//! ## Usage
//!
//! ```bash
//! # Optional environment variables
//! export DRIFTBOARD_HOST=127.0.0.1
//! export DRIFTBOARD_PORT=8080
//! export DRIFTBOARD_BASE_URL=http://localhost:8080
//!
//! # Run the server
//! driftboard-shop
//! ```

use board_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Finishes loaded: {}", state.catalog.len());

    let app = routes::create_router(state);

    info!("Driftboard shop starting on http://{}", addr);

    if !is_prod {
        info!("Checkout: POST http://{}/api/checkout/{{product_id}}", addr);
        info!("Catalog:  GET  http://{}/api/finishes", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
