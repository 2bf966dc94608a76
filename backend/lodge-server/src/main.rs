use lodge_auth::{AuthorizationGuard, TokenService, TokenSigner};
use lodge_db::{DeletionRetryRepository, UserRepository};
use lodge_remote::{AccommodationClient, ReservationClient, RoundRobin, build_http_client};
use lodge_saga::{DeletionSaga, DeletionSweeper};
use lodge_server::{AppState, build_router, demo_seed, error::ServerError, logger};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env file for local development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = lodge_config::Config::load()?;
    config.validate().map_err(ServerError::Config)?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting lodge-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    info!("Running database migrations...");
    lodge_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    if config.database.seed_demo_users {
        demo_seed::seed_demo_users(&pool).await;
    }

    // Signing key: configured secret, or a fresh one per process
    let signer = match config.auth.jwt_secret {
        Some(ref secret) => TokenSigner::from_secret(secret.as_bytes()),
        None => {
            warn!("No JWT secret configured; generated a key valid for this process only");
            TokenSigner::generate().map_err(ServerError::SigningKey)?
        }
    };
    let tokens = TokenService::new(
        signer,
        chrono::Duration::hours(i64::from(config.auth.token_ttl_hours)),
    );
    info!("Session tokens valid for {}h", tokens.ttl().num_hours());

    // Collaborating services
    let timeout = config.services.request_timeout();
    let http = build_http_client(timeout).map_err(ServerError::RemoteClient)?;
    let reservations = ReservationClient::new(
        http.clone(),
        Arc::new(RoundRobin::new(
            "reservation",
            vec![config.services.reservation_url.clone()],
        )?),
    );
    let accommodations = AccommodationClient::new(
        http,
        Arc::new(RoundRobin::new(
            "accommodation",
            vec![config.services.accommodation_url.clone()],
        )?),
    );
    info!(
        "Remote services: reservation={} accommodation={} (timeout {})",
        config.services.reservation_url,
        config.services.accommodation_url,
        humantime::format_duration(timeout)
    );

    let users = UserRepository::new(pool.clone());
    let retries = DeletionRetryRepository::new(pool.clone());

    let saga = DeletionSaga::new(
        users.clone(),
        retries.clone(),
        reservations,
        accommodations.clone(),
    );

    // Background cleanup of accommodation purges that failed after commit
    let sweeper_handle = if config.sweeper.enabled {
        let interval = config.sweeper.interval();
        info!(
            "Deletion sweeper enabled: every {}",
            humantime::format_duration(interval)
        );
        Some(
            DeletionSweeper::new(retries, accommodations)
                .with_interval(interval)
                .start(),
        )
    } else {
        warn!("Deletion sweeper DISABLED - failed accommodation purges will not be retried");
        None
    };

    // Build application state
    let app_state = AppState {
        pool,
        guard: AuthorizationGuard::new(tokens.clone(), users),
        tokens,
        saga,
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = sweeper_handle {
        handle.abort();
    }
    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
