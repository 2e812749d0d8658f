use askama::Template;
use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info};

use crate::{
    app_state::AppState,
    web::{
        dtos::{JobsResponse, RefreshResponse},
        pages::IndexPage,
    },
};

pub async fn home(State(state): State<AppState>) -> Response {
    let snapshot = state.store.read();
    let page = IndexPage {
        listings: snapshot.listings(),
        last_updated: snapshot.last_updated(),
        total_jobs: snapshot.len(),
    };

    render_or_fallback(&page)
}

/// Served in place of the listing page when the template fails to render.
pub const FALLBACK_PAGE: &str = "<!DOCTYPE html><html><head><title>Visa Sponsorship Jobs</title></head>\
<body><h1>Visa Sponsorship Jobs</h1><p>Listings are temporarily unavailable.</p>\
<p><a href=\"/api/jobs\">View as JSON</a></p></body></html>";

fn render_or_fallback<T: Template>(page: &T) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page, serving fallback: {}", e);
            Html(FALLBACK_PAGE).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    responses(
        (status = 200, description = "Listings from the latest refresh", body = JobsResponse)
    )
)]
pub async fn list_jobs(State(state): State<AppState>) -> Json<JobsResponse> {
    let snapshot = state.store.read();
    Json(JobsResponse::from(snapshot.as_ref()))
}

/// Runs a refresh on the request task. Always succeeds; a failed fetch just
/// means the response counts only the sample listings.
#[utoipa::path(
    get,
    path = "/refresh",
    tag = "jobs",
    responses(
        (status = 200, description = "Refresh completed", body = RefreshResponse)
    )
)]
pub async fn refresh_jobs(State(state): State<AppState>) -> Json<RefreshResponse> {
    info!("Manual refresh requested");
    let snapshot = state.pipeline.run().await;
    Json(RefreshResponse::from(snapshot.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use axum::http::StatusCode;

    use super::*;

    struct Unprintable;

    impl fmt::Display for Unprintable {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[derive(Template)]
    #[template(source = "<p>{{ value }}</p>", ext = "html")]
    struct BrokenPage {
        value: Unprintable,
    }

    #[derive(Template)]
    #[template(source = "<p>{{ value }}</p>", ext = "html")]
    struct PlainPage<'a> {
        value: &'a str,
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_render_failure_serves_fallback_page() {
        let response = render_or_fallback(&BrokenPage { value: Unprintable });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, FALLBACK_PAGE);
    }

    #[tokio::test]
    async fn test_rendered_page_is_escaped() {
        let response = render_or_fallback(&PlainPage { value: "Chef & <Cook>" });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<p>Chef &amp; &lt;Cook&gt;</p>");
    }
}
