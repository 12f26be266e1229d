//! CSV boundary for the compliance core.
//!
//! Everything structurally malformed (missing headers, ragged rows,
//! unreadable files) is rejected here; downstream crates assume well-typed
//! string columns.

mod dataset;
mod error;
mod terminology;

pub use dataset::{Dataset, load_dataset};
pub use error::{IngestError, Result};
pub use terminology::load_terminology;
