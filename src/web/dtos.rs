use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{listings::Listing, snapshot::Snapshot};

pub const REFRESH_MESSAGE: &str = "Jobs refreshed successfully";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JobsResponse {
    pub jobs: Vec<Listing>,
    /// `null` until the first refresh completes.
    pub last_updated: Option<String>,
    pub total_jobs: usize,
}

impl From<&Snapshot> for JobsResponse {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            jobs: snapshot.listings().to_vec(),
            last_updated: snapshot.last_updated(),
            total_jobs: snapshot.len(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshResponse {
    pub message: String,
    pub total_jobs: usize,
    pub last_updated: String,
}

impl From<&Snapshot> for RefreshResponse {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            message: REFRESH_MESSAGE.to_string(),
            total_jobs: snapshot.len(),
            last_updated: snapshot.last_updated().unwrap_or_default(),
        }
    }
}
