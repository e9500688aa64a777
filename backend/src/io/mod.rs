//! File I/O
//!
//! - **dataset**: reads the county dataset JSON
//! - **artifact**: writes the generated module atomically

pub mod artifact;
pub mod dataset;

// Re-exports
pub use artifact::write_artifact;
pub use dataset::{load_dataset, parse_dataset, UNKNOWN_COUNTY};
