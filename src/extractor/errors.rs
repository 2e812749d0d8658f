use thiserror::Error;

/// A single candidate block that could not be turned into a record. The block
/// is skipped; the rest of the page is still extracted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordExtractionError {
    #[error("candidate block {index} has no text and no link")]
    Blank { index: usize },
}
