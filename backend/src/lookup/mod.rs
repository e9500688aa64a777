//! Lookup table construction and resolution
//!
//! - **table**: the nested region → county → cost set structure
//! - **builder**: assembles the table from the dataset and fee templates
//! - **resolver**: fallback-aware read operations

pub mod builder;
pub mod resolver;
pub mod table;

// Re-exports
pub use builder::{build_lookup_table, build_region};
pub use resolver::label_for;
pub use table::{LookupTable, RegionCosts};
