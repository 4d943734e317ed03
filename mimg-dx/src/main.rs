//! Oral image diagnosis service (mimg-dx) - Main entry point
//!
//! Serves the diagnosis, patient and segmentation APIs and runs the
//! external Python inference scripts on uploaded images.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mimg_common::config::{load_toml_config, ServiceConfig};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mimg_dx::db::{
    init_database_pool, DiagnosisRepository, InMemoryPatientRepository, PatientRepository,
    SqliteDiagnosisRepository, SqlitePatientRepository,
};
use mimg_dx::invoker::{Invoker, PythonInvoker};
use mimg_dx::{build_router, AppState};

/// Command-line arguments for mimg-dx
#[derive(Parser, Debug)]
#[command(name = "mimg-dx")]
#[command(about = "Oral image diagnosis service")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Path to the TOML config file
    #[arg(short, long, env = "MIMG_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind (overrides config file)
    #[arg(short, long, env = "MIMG_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mimg_dx=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting mimg-dx v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let (toml_config, config_path) =
        load_toml_config(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(path) = &config_path {
        info!("Config file: {}", path.display());
    }

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let mut config = ServiceConfig::from_environment(&toml_config).anchored_at(&cwd);
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    info!("Python interpreters: {}", config.python.summary());
    info!("Workspace root: {}", config.scripts.workspace_root.display());
    info!("Uploads directory: {}", config.uploads_dir.display());

    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.uploads_dir.display()))?;

    let patients: Arc<dyn PatientRepository>;
    let diagnoses: Option<Arc<dyn DiagnosisRepository>>;
    if config.persistence_enabled {
        let pool = init_database_pool(&config.database_path)
            .await
            .context("Failed to initialize database")?;
        info!("Database: {}", config.database_path.display());
        patients = Arc::new(SqlitePatientRepository::new(pool.clone()));
        let repository: Arc<dyn DiagnosisRepository> = Arc::new(SqliteDiagnosisRepository::new(pool));
        diagnoses = Some(repository);
    } else {
        warn!("Persistence disabled (NO_DB): patients kept in memory, diagnoses not stored");
        patients = Arc::new(InMemoryPatientRepository::new());
        diagnoses = None;
    }

    let invoker: Arc<dyn Invoker> = Arc::new(PythonInvoker::from_config(&config));

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.bind, config.server.port
            )
        })?;

    let state = AppState::new(config, invoker, patients, diagnoses);
    let app = build_router(state);

    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
