pub mod api;
pub mod error;
pub mod format;
pub mod model;

pub use error::TokTabError;
pub use model::{Capability, ModelRecord, SearchHit, SearchResults};
