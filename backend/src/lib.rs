//! Closing Cost Tables - Rust Core
//!
//! Generates a static Rust module of county-level third-party closing cost
//! estimates from a county dataset and per-state fee ranges.
//!
//! # Architecture
//!
//! - **models**: Domain types (CostCategory, CostSet, Region)
//! - **fees**: Static per-state fee template table
//! - **rng**: Deterministic per-county jitter source
//! - **synth**: Cost synthesis (midpoint / perturbed)
//! - **lookup**: Lookup table builder and resolver
//! - **emit**: Generated module renderer
//! - **io**: Dataset loading and artifact writing
//! - **generator**: End-to-end pipeline
//!
//! # Critical Invariants
//!
//! 1. Dollar amounts are i64 whole dollars; title insurance is an f64 rate
//! 2. All perturbation is deterministic (seeded from county names)
//! 3. Identical input always produces a byte-identical module

// Module declarations
pub mod config;
pub mod emit;
pub mod error;
pub mod fees;
pub mod generator;
pub mod io;
pub mod lookup;
pub mod models;
pub mod rng;
pub mod synth;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use fees::{CostRange, FeeTemplate, FeeTemplateTable};
pub use generator::{GenerationSummary, Generator};
pub use lookup::{build_lookup_table, label_for, LookupTable, RegionCosts};
pub use models::{
    CostCategory, CostSet, CostValue, Entity, InvalidCategory, Region, DEFAULT_ENTITY,
    NATIONAL_AVERAGE,
};
pub use synth::{midpoint, perturbed};
