pub mod errors;
pub mod indeed;
pub mod model;

#[cfg(test)]
mod tests;

pub use errors::RecordExtractionError;
pub use indeed::{INDEED_SOURCE, IndeedExtractor, MAX_CANDIDATES};
pub use model::RawRecord;

/// Site-specific parsing of a search results page.
///
/// Implementations must be total: a page they do not understand yields an
/// empty vector, and a malformed block is skipped rather than failing the
/// whole page.
pub trait Extractor: Send + Sync {
    /// Label stamped on every listing this extractor produces.
    fn source_label(&self) -> &str;

    /// Records found in `html`, in document order.
    fn parse(&self, html: &str) -> Vec<RawRecord>;
}
