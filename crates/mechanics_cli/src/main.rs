//! Server entry point.
//!
//! # Responsibility
//! - Parse configuration from flags and environment.
//! - Initialize logging, build and seed the store once, then serve the API
//!   until Ctrl-C.

use anyhow::Context;
use clap::Parser;
use log::info;
use mechanics_api::server::{DEFAULT_HOST, DEFAULT_PORT};
use mechanics_api::{serve, ServerConfig};
use mechanics_core::{default_log_level, init_logging, seed_demo_data, MemoryStore};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "mechanics")]
#[command(about = "PMO dashboard and blog API for Project Mechanics", version)]
struct Cli {
    /// Interface to bind
    #[arg(long, env = "MECHANICS_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// TCP port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// trace|debug|info|warn|error (defaults to debug in debug builds, info otherwise)
    #[arg(long, env = "MECHANICS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when unset
    #[arg(long, env = "MECHANICS_LOG_DIR")]
    log_dir: Option<String>,

    /// Start with an empty store instead of the demo records
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    /// `--log-level` when given, otherwise the build-mode default.
    fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.effective_log_level(), cli.log_dir.as_deref())
        .map_err(|err| anyhow::anyhow!("logging setup failed: {err}"))?;

    let store = Arc::new(MemoryStore::new());
    if cli.no_seed {
        info!("event=seed module=cli status=ok skipped=true");
    } else {
        seed_demo_data(&store);
    }

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };
    serve(&config, store)
        .await
        .with_context(|| format!("serving on {}", config.bind_addr()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use mechanics_core::default_log_level;

    #[test]
    fn seeding_is_on_by_default() {
        let cli = Cli::try_parse_from(["mechanics"]).unwrap();
        assert!(!cli.no_seed);
    }

    #[test]
    fn log_level_falls_back_to_build_mode_default() {
        let mut cli = Cli::try_parse_from(["mechanics"]).unwrap();
        cli.log_level = None;
        assert_eq!(cli.effective_log_level(), default_log_level());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "mechanics",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-level",
            "warn",
            "--no-seed",
        ])
        .unwrap();
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.effective_log_level(), "warn");
        assert!(cli.no_seed);
    }
}
