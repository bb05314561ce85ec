//! TCP listener lifecycle.

use crate::router::build_router;
use log::{info, warn};
use mechanics_core::MemoryStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::net::TcpListener;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Listen address for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug)]
pub enum ServeError {
    Bind {
        addr: String,
        source: std::io::Error,
    },
    Serve(std::io::Error),
}

impl Display for ServeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bind { addr, source } => write!(f, "failed to bind `{addr}`: {source}"),
            Self::Serve(err) => write!(f, "server stopped with error: {err}"),
        }
    }
}

impl Error for ServeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bind { source, .. } => Some(source),
            Self::Serve(err) => Some(err),
        }
    }
}

/// Serves the API until Ctrl-C, then drains in-flight requests.
///
/// # Errors
/// - The address cannot be bound.
/// - The accept loop fails.
pub async fn serve(config: &ServerConfig, store: Arc<MemoryStore>) -> Result<(), ServeError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let local_addr = listener
        .local_addr()
        .map(|local| local.to_string())
        .unwrap_or(addr);
    info!(
        "event=server_start module=api status=ok addr={}",
        local_addr
    );

    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)?;

    info!("event=server_stop module=api status=ok addr={}", local_addr);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(
            "event=shutdown_signal module=api status=error error={}",
            err
        );
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn default_config_listens_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }
}
