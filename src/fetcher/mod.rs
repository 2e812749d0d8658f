pub mod client;
pub mod decode;
pub mod errors;
pub mod types;

pub use client::{BROWSER_USER_AGENT, DEFAULT_TIMEOUT, build_client, fetch_with};
pub use errors::FetchError;
pub use types::PageResponse;
