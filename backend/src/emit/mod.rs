//! Module Emitter
//!
//! Renders a [`crate::lookup::LookupTable`] as a self-contained Rust module:
//! the cost struct, the national average, the nested static table and the
//! three accessor functions.

pub mod escape;
pub mod module;

// Re-exports
pub use escape::string_literal;
pub use module::{render_module, GENERATED_STRUCT};
