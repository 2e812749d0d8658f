use bytes::Bytes;
use chrono::{DateTime, Utc};
use encoding_rs::Encoding;
use reqwest::StatusCode;
use url::Url;

/// A successfully fetched HTML document.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// URL after redirects; relative links on the page resolve against it.
    pub url_final: Url,
    pub status: StatusCode,
    pub body_raw: Bytes,
    /// `body_raw` decoded to UTF-8.
    pub body: String,
    pub encoding: &'static Encoding,
    pub fetched_at: DateTime<Utc>,
}

impl PageResponse {
    /// Builds a response around an already-decoded UTF-8 document.
    pub fn from_html(url_final: Url, html: impl Into<String>) -> Self {
        let body: String = html.into();
        Self {
            url_final,
            status: StatusCode::OK,
            body_raw: Bytes::from(body.clone()),
            body,
            encoding: encoding_rs::UTF_8,
            fetched_at: Utc::now(),
        }
    }
}
