use std::sync::Arc;

use anyhow::Result;
use visajobs::{
    config::Config,
    extractor::IndeedExtractor,
    refresh::{HttpPageSource, Pipeline},
    snapshot::SnapshotStore,
    web::dtos::JobsResponse,
};

/// Runs a single refresh against the configured search URL and prints the
/// resulting `/api/jobs` payload.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let pipeline = Pipeline::new(
        Arc::new(HttpPageSource::from_config(&config)?),
        Arc::new(IndeedExtractor::new()),
        Arc::new(SnapshotStore::new()),
    );

    let snapshot = pipeline.run().await;
    println!(
        "{}",
        serde_json::to_string_pretty(&JobsResponse::from(snapshot.as_ref()))?
    );

    Ok(())
}
