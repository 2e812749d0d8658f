pub mod pipeline;
pub mod scheduler;
pub mod source;

pub use pipeline::*;
pub use scheduler::*;
pub use source::*;
