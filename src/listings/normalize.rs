use url::Url;

use crate::{
    extractor::RawRecord,
    listings::model::{Listing, MISSING_LINK, MISSING_TEXT},
};

pub const SUMMARY_MAX_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";

/// Turns an extracted record into a published listing. Never fails: every
/// absent field has a placeholder.
pub fn normalize(raw: RawRecord, source: &str, origin: &Url) -> Listing {
    let link = raw
        .href
        .as_deref()
        .and_then(|href| resolve_link(href, origin))
        .unwrap_or_else(|| MISSING_LINK.to_string());

    Listing {
        title: raw.title.unwrap_or_else(placeholder),
        company: raw.company.unwrap_or_else(placeholder),
        location: raw.location.unwrap_or_else(placeholder),
        summary: raw
            .summary
            .map(|s| truncate_summary(&s))
            .unwrap_or_else(placeholder),
        source: source.to_string(),
        link,
        visa_sponsorship: true,
    }
}

fn placeholder() -> String {
    MISSING_TEXT.to_string()
}

/// Cuts `summary` to `SUMMARY_MAX_CHARS` characters plus an ellipsis. Shorter
/// input is returned unchanged.
pub fn truncate_summary(summary: &str) -> String {
    match summary.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &summary[..cut], ELLIPSIS),
        None => summary.to_string(),
    }
}

/// Resolves `href` against the site origin. The result must be an http(s) URL
/// on the origin's host; anything else (`javascript:`, `data:`, `//other.host`,
/// links off-site) is dropped.
pub fn resolve_link(href: &str, origin: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let url = origin.join(href).ok()?;
    let on_site = matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some()
        && url.host_str() == origin.host_str();
    on_site.then(|| String::from(url))
}
