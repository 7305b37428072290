use bc_auth::{CredentialVault, SessionIssuer};
use bc_config::{Config, ConfigError};
use bc_identity::{BootstrapOutcome, BootstrapService, BootstrapSettings};
use bc_server::{AppState, build_router, logger};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Relative log files live in the config directory
    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let path = PathBuf::from(filename);
            if path.is_absolute() {
                Some(path)
            } else {
                Some(Config::config_dir()?.join(path))
            }
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_url = config
        .database
        .url
        .as_deref()
        .ok_or_else(|| ConfigError::database("database.url is required"))?;
    let pool = bc_db::connect(database_url, config.database.max_connections).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    bc_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Credentials and sessions
    let vault = CredentialVault::new(
        config.auth.hash_memory_kib,
        config.auth.hash_iterations,
        config.auth.hash_parallelism,
    )?;
    let issuer = Arc::new(SessionIssuer::with_hs256(
        config.auth.jwt_secret_bytes(),
        config.auth.token_ttl_secs,
    ));
    info!("JWT: HS256 sessions, ttl {}s", issuer.ttl_secs());

    // Make sure an administrator exists
    let bootstrap = BootstrapService::new(
        pool.clone(),
        vault.clone(),
        BootstrapSettings {
            username: config.bootstrap.admin_username.clone(),
            email: config.bootstrap.admin_email.clone(),
            password: config.bootstrap.admin_password.clone(),
        },
    );
    match bootstrap.ensure_admin().await? {
        BootstrapOutcome::Created => info!(
            "Bootstrap: administrator '{}' created",
            config.bootstrap.admin_username
        ),
        BootstrapOutcome::AlreadyPresent => info!("Bootstrap: administrator already present"),
    }

    // Build application state and router
    let app = build_router(AppState::new(pool, vault, issuer));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be stopped externally
            std::future::pending::<()>().await;
        }
    }
}
