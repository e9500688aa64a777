//! Domain models for the closing cost generator

pub mod category;
pub mod cost_set;
pub mod region;

// Re-exports
pub use category::{CostCategory, InvalidCategory};
pub use cost_set::{CostSet, CostValue, NATIONAL_AVERAGE};
pub use region::{Entity, Region, DEFAULT_ENTITY};
