//! # Application State
//!
//! Shared state for the axum application: the finish catalog, the session
//! source that mints purchase sessions, and server configuration.

use async_trait::async_trait;
use board_core::{FinishCatalog, PurchaseSession, StoreResult};
use std::sync::Arc;
use uuid::Uuid;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL used in minted session redirects
    pub base_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("DRIFTBOARD_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("DRIFTBOARD_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            base_url: std::env::var("DRIFTBOARD_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Mints purchase sessions for the checkout route.
///
/// The shipped stub stands in for the real payment provider in development;
/// a hosted-provider implementation would live behind the same seam.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Create a session for the given product and return its redirect URL
    async fn create_session(&self, product_id: &str) -> StoreResult<PurchaseSession>;
}

/// Type alias for a shared session source (dynamic dispatch)
pub type BoxedSessionSource = Arc<dyn SessionSource>;

/// Development session source: mints a session id and points the redirect at
/// the local success page.
pub struct StubSessionSource {
    base_url: String,
}

impl StubSessionSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SessionSource for StubSessionSource {
    async fn create_session(&self, product_id: &str) -> StoreResult<PurchaseSession> {
        let session_id = Uuid::new_v4();
        let url = format!(
            "{}/checkout/success?session_id={}",
            self.base_url, session_id
        );
        Ok(PurchaseSession::new(url, product_id))
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Finish catalog
    pub catalog: FinishCatalog,
    /// Session source
    pub sessions: BoxedSessionSource,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from the environment with the stub session source
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = load_finish_catalog()?;
        let sessions: BoxedSessionSource = Arc::new(StubSessionSource::new(&config.base_url));

        Ok(Self {
            catalog,
            sessions,
            config,
        })
    }

    /// Create state with explicit parts (for testing)
    pub fn with_parts(
        catalog: FinishCatalog,
        sessions: BoxedSessionSource,
        config: AppConfig,
    ) -> Self {
        Self {
            catalog,
            sessions,
            config,
        }
    }
}

/// Load the finish catalog from config
fn load_finish_catalog() -> anyhow::Result<FinishCatalog> {
    let config_paths = [
        "config/finishes.toml",
        "../config/finishes.toml",
        "../../config/finishes.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = FinishCatalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path, e))?;
            tracing::info!("Loaded {} finishes from {}", catalog.len(), path);
            return Ok(catalog);
        }
    }

    tracing::warn!("No finish catalog found, using empty catalog");
    Ok(FinishCatalog::new())
}
