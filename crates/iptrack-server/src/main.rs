//! iptrack server binary.
//!
//! Starts two independent listeners sharing one tracker: the ingestion
//! surface (`POST /logs`) and the metrics surface (`GET /metrics`). On
//! SIGINT/SIGTERM each listener gets a bounded grace window to drain
//! in-flight requests; tracker state is discarded with the process.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};

use iptrack_core::error::{IpTrackError, Result};
use iptrack_core::tracker::IpTracker;
use iptrack_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    // LOG_LEVEL picks the minimum severity; an explicit RUST_LOG still wins.
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::Config::from_env()?;

    let tracker = Arc::new(IpTracker::new());
    let state = AppState::new(Arc::clone(&tracker));

    let ingest_app = router::ingest_router(state.clone(), cfg.ingest.write_timeout);
    let metrics_app = router::metrics_router(state, cfg.metrics.write_timeout);

    let ingest_listener = bind(cfg.ingest.port, "log server").await?;
    let metrics_listener = bind(cfg.metrics.port, "metrics server").await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let ingest_task = tokio::spawn(serve_surface(
        "log server",
        ingest_listener,
        ingest_app,
        shutdown_rx.clone(),
    ));
    let metrics_task = tokio::spawn(serve_surface(
        "metrics server",
        metrics_listener,
        metrics_app,
        shutdown_rx,
    ));

    tracing::info!(
        log_port = cfg.ingest.port,
        metrics_port = cfg.metrics.port,
        "servers started successfully"
    );

    shutdown_signal().await;
    tracing::info!("shutting down servers");
    let _ = shutdown_tx.send(true);

    for (name, task) in [("log server", ingest_task), ("metrics server", metrics_task)] {
        match tokio::time::timeout(cfg.shutdown_grace, task).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!(server = name, error = %e, "server task failed"),
            Err(_) => tracing::error!(
                server = name,
                grace_secs = cfg.shutdown_grace.as_secs(),
                "server failed to drain within grace window"
            ),
        }
    }

    tracing::info!("servers stopped");
    Ok(())
}

async fn bind(port: u16, name: &str) -> Result<TcpListener> {
    TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| IpTrackError::Internal(format!("{name} bind failed on port {port}: {e}")))
}

async fn serve_surface(
    name: &'static str,
    listener: TcpListener,
    app: axum::Router,
    mut shutdown: watch::Receiver<bool>,
) {
    match listener.local_addr() {
        Ok(addr) => tracing::info!(server = name, %addr, "server starting"),
        Err(_) => tracing::info!(server = name, "server starting"),
    }

    let res = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
        })
        .await;

    if let Err(e) = res {
        tracing::error!(server = name, error = %e, "server failed");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
