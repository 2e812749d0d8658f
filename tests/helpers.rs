#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{Router, body::Body, http::Request, response::Response};
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use url::Url;

use visajobs::{
    app_state::AppState,
    extractor::{Extractor, INDEED_SOURCE, IndeedExtractor},
    listings::{Listing, normalize, sample_listings},
    refresh::{HttpPageSource, Pipeline},
    snapshot::SnapshotStore,
    web,
};

pub const FIXTURE_RESULTS: &str = "src/extractor/tests/fixtures/search_results.html";
pub const FIXTURE_EMPTY: &str = "src/extractor/tests/fixtures/no_results.html";

pub fn fixture(path: &str) -> String {
    std::fs::read_to_string(path).expect("Failed to read test fixture")
}

pub fn pipeline_for(url: &str) -> Arc<Pipeline> {
    let source = HttpPageSource::new(Url::parse(url).unwrap(), Duration::from_secs(5))
        .expect("Failed to build page source");
    Arc::new(Pipeline::new(
        Arc::new(source),
        Arc::new(IndeedExtractor::new()),
        Arc::new(SnapshotStore::new()),
    ))
}

pub fn test_app(pipeline: Arc<Pipeline>) -> Router {
    web::router(AppState::new(pipeline))
}

/// What a run over `html` fetched from `page_url` must publish.
pub fn expected_listings(html: &str, page_url: &str) -> Vec<Listing> {
    let origin = Url::parse(page_url).unwrap();
    IndeedExtractor::new()
        .parse(html)
        .into_iter()
        .map(|raw| normalize(raw, INDEED_SOURCE, &origin))
        .chain(sample_listings())
        .collect()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
