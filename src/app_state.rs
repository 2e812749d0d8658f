use std::sync::Arc;

use crate::{refresh::Pipeline, snapshot::SnapshotStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SnapshotStore>,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            store: pipeline.store().clone(),
            pipeline,
        }
    }
}
