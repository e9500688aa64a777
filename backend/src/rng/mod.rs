//! Deterministic per-county jitter
//!
//! Seeds are derived from county names with SHA-256 and expanded with
//! xorshift64*. CRITICAL: All perturbation in the generator MUST go through
//! this module so that output stays reproducible.

pub mod seed;
mod xorshift;

pub use seed::seed_from_key;
pub use xorshift::JitterRng;
