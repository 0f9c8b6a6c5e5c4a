use std::future::Future;
use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig, ServerConfig, UsersConfig, DEFAULT_STARTING_WALLET};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// config.toml when present, otherwise SERVER_HOST / SERVER_PORT /
/// DATABASE_URL / STARTING_WALLET with defaults.
fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            let defaults = ServerConfig::default();
            let mut cfg = AppConfig {
                server: ServerConfig {
                    host: common::env::var_or("SERVER_HOST", defaults.host),
                    port: common::env::var_or("SERVER_PORT", defaults.port),
                    worker_threads: defaults.worker_threads,
                },
                database: DatabaseConfig::from_url(models::db::DATABASE_URL.as_str()),
                users: UsersConfig { starting_wallet: common::env::var_or("STARTING_WALLET", DEFAULT_STARTING_WALLET) },
            };
            cfg.normalize_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            Ok(cfg)
        }
    }
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Run until the process is killed.
pub async fn run() -> anyhow::Result<()> {
    run_with_shutdown(std::future::pending()).await
}

/// Connect, migrate, build the app and serve until `shutdown` resolves.
pub async fn run_with_shutdown<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let cfg = load_config()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if common::env::flag("SKIP_MIGRATIONS") {
        info!("SKIP_MIGRATIONS set, not migrating");
    } else {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }

    let state = ServerState::from_db(db, &cfg.users);
    let app = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, "food delivery server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
