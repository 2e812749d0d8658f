use std::time::Duration;

use chrono::Utc;
use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue},
};
use tracing::{debug, instrument};

use crate::fetcher::{
    decode::{decode_body, detect_encoding},
    errors::FetchError,
    types::PageResponse,
};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Job boards serve bot-looking clients a challenge page instead of results,
/// so requests go out with a desktop Chrome identity.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Builds a client with the browser identity and the given connect/request
/// timeout.
pub fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB,en;q=0.9"));

    ClientBuilder::new()
        .connect_timeout(timeout)
        .timeout(timeout)
        .user_agent(BROWSER_USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers(headers)
        .build()
        .map_err(|e| FetchError::Unknown(e.to_string()))
}

/// One GET of `url`. No retries: a failure here means no live results for the
/// current refresh cycle.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_with(client: &Client, url: &str) -> Result<PageResponse, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = client
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let url_final = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(FetchError::UnsupportedContentType(content_type));
    }

    let body_raw = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Content-Length may be absent or lie under compression
    if body_raw.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body_raw.len() as u64));
    }

    let encoding = detect_encoding(&content_type, &body_raw);
    let body = decode_body(&body_raw, encoding);
    debug!(
        status = %status,
        encoding = encoding.name(),
        bytes = body_raw.len(),
        "fetched search page"
    );

    Ok(PageResponse {
        url_final,
        status,
        body_raw,
        body,
        encoding,
        fetched_at: Utc::now(),
    })
}
