use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Text used for any field the job board did not provide.
pub const MISSING_TEXT: &str = "N/A";
/// Link used when a listing has no usable URL.
pub const MISSING_LINK: &str = "#";

/// One normalized job posting as served by the API and the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub location: String,
    /// At most 200 characters, followed by `...` when cut.
    pub summary: String,
    /// Where the listing came from, e.g. `Indeed UK` or `Sample Data`.
    pub source: String,
    /// Absolute URL of the posting, or `#`.
    pub link: String,
    pub visa_sponsorship: bool,
}

impl Listing {
    pub fn has_link(&self) -> bool {
        self.link != MISSING_LINK
    }
}
