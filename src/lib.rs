pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod listings;
pub mod refresh;
pub mod snapshot;
pub mod web;
