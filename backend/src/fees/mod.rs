//! Fee Templates
//!
//! Per-state fee ranges for the nine closing cost categories, and the
//! lookup table that resolves a state code to its template.

pub mod range;
pub mod table;

// Re-exports
pub use range::{CostRange, FeeTemplate};
pub use table::{FeeTemplateTable, DEFAULT_TEMPLATE_REGION, STATE_FEE_TEMPLATES};
