use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::{
    config::Config,
    fetcher::{FetchError, PageResponse, build_client, fetch_with},
};

/// Where the pipeline gets its search results page from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self) -> Result<PageResponse, FetchError>;

    /// Base that relative listing links are resolved against. Fixed by
    /// configuration, so a redirect during the fetch does not move it.
    fn site_origin(&self) -> Url;
}

/// Fetches a fixed search URL over HTTP.
#[derive(Clone)]
pub struct HttpPageSource {
    client: Client,
    url: Url,
}

impl HttpPageSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self::with_client(build_client(timeout)?, url))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(config.search_url().clone(), config.fetch_timeout())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Root of the site `url` belongs to, with path, query and fragment dropped.
fn origin_of(url: &Url) -> Url {
    let mut origin = url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    origin
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self) -> Result<PageResponse, FetchError> {
        fetch_with(&self.client, self.url.as_str()).await
    }

    fn site_origin(&self) -> Url {
        origin_of(&self.url)
    }
}
