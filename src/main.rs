use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use visajobs::{
    app_state::AppState,
    config::{Config, LogFormat},
    extractor::IndeedExtractor,
    refresh::{HttpPageSource, Pipeline, Scheduler, SchedulerConfig},
    snapshot::SnapshotStore,
    web,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format());

    let source = HttpPageSource::from_config(&config)?;
    info!("Scraping {}", source.url());
    let pipeline = Arc::new(Pipeline::new(
        Arc::new(source),
        Arc::new(IndeedExtractor::new()),
        Arc::new(SnapshotStore::new()),
    ));

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
            info!("Received shutdown signal, initiating graceful shutdown...");
            shutdown.cancel();
        });
    }

    // First refresh completes before the listener opens
    let scheduler = Scheduler::start(
        pipeline.clone(),
        SchedulerConfig::from(&config),
        shutdown.clone(),
    )
    .await;

    let app = web::router(AppState::new(pipeline));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    info!("Listening on {}", listener.local_addr()?);

    let server_shutdown = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { server_shutdown.cancelled().await })
        .await?;

    scheduler.shutdown().await;
    info!("Shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,visajobs=debug,tower_http=debug"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }
}
