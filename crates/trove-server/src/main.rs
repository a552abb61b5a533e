#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trove_server::{build_router, validate_startup_config, ApiConfig, AppState};
use trove_store::{ItemStore, JsonFileStore};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("TROVE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("TROVE_BIND").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
    let api = ApiConfig {
        data_path: PathBuf::from(
            env::var("TROVE_DATA_PATH").unwrap_or_else(|_| "data/items.json".to_string()),
        ),
        max_body_bytes: env_usize("TROVE_MAX_BODY_BYTES", 16 * 1024),
        stats_watch_interval: Duration::from_millis(env_u64(
            "TROVE_STATS_WATCH_INTERVAL_MS",
            2000,
        )),
    };
    validate_startup_config(&api)?;

    let store = JsonFileStore::new(api.data_path.clone());
    store
        .ensure_seeded()
        .map_err(|e| format!("failed to seed data file: {e}"))?;
    let store: Arc<dyn ItemStore> = Arc::new(store);

    let state = AppState::new(store, api.clone());
    state
        .stats
        .spawn_mtime_watcher(api.data_path.clone(), api.stats_watch_interval);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("trove-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
