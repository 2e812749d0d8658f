pub mod dtos;
pub mod handlers;
pub mod pages;

use axum::{Json, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    app_state::AppState,
    health::{self, HealthResponse},
    listings::Listing,
    web::dtos::{JobsResponse, RefreshResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_jobs, handlers::refresh_jobs, health::health_check),
    components(schemas(Listing, JobsResponse, RefreshResponse, HealthResponse)),
    tags(
        (name = "jobs", description = "Visa sponsorship job listings"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/jobs", get(handlers::list_jobs))
        .route("/refresh", get(handlers::refresh_jobs))
        .route("/healthz", get(health::health_check))
        .route("/api/openapi.json", get(openapi))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
