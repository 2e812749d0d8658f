use askama::Template;

use crate::listings::Listing;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub listings: &'a [Listing],
    pub last_updated: Option<String>,
    pub total_jobs: usize,
}
