use std::sync::Arc;

use chrono::Local;
use tracing::{Instrument, debug, info, info_span, warn};
use url::Url;
use uuid::Uuid;

use crate::{
    extractor::Extractor,
    listings::{Listing, normalize, sample_listings},
    refresh::source::PageSource,
    snapshot::{Snapshot, SnapshotStore},
};

/// One fetch → extract → normalize → supplement → publish pass.
pub struct Pipeline {
    source: Arc<dyn PageSource>,
    extractor: Arc<dyn Extractor>,
    store: Arc<SnapshotStore>,
    origin: Url,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn PageSource>,
        extractor: Arc<dyn Extractor>,
        store: Arc<SnapshotStore>,
    ) -> Self {
        let origin = source.site_origin();
        Self {
            source,
            extractor,
            store,
            origin,
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Builds a new snapshot and publishes it. A failed fetch is logged and
    /// yields a snapshot holding only the sample listings.
    pub async fn run(&self) -> Arc<Snapshot> {
        let run_id = Uuid::new_v4();
        async {
            let mut listings = self.live_listings().await;
            let live = listings.len();
            listings.extend(sample_listings());

            let snapshot = Arc::new(Snapshot::new(listings, Local::now()));
            self.store.replace(snapshot.clone());

            info!(
                live,
                total = snapshot.len(),
                last_updated = snapshot.last_updated().as_deref().unwrap_or_default(),
                "snapshot published"
            );
            snapshot
        }
        .instrument(info_span!("refresh", run_id = %run_id))
        .await
    }

    async fn live_listings(&self) -> Vec<Listing> {
        let page = match self.source.fetch_page().await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, "fetch failed, continuing without live listings");
                return Vec::new();
            }
        };

        if page.url_final.host_str() != self.origin.host_str() {
            debug!(url_final = %page.url_final, "search page served from another host");
        }

        let label = self.extractor.source_label();
        self.extractor
            .parse(&page.body)
            .into_iter()
            .map(|raw| normalize(raw, label, &self.origin))
            .collect()
    }
}
