pub mod model;
pub mod normalize;
pub mod samples;

pub use model::{Listing, MISSING_LINK, MISSING_TEXT};
pub use normalize::{normalize, truncate_summary};
pub use samples::{SAMPLE_SOURCE, sample_listings};
