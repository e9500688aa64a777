//! Generator configuration
//!
//! The binary always runs with [`GeneratorConfig::default`]: fixed input and
//! output paths relative to the working directory, Ohio as the fallback
//! fee template.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fees::DEFAULT_TEMPLATE_REGION;

/// Default location of the county dataset
pub const DEFAULT_INPUT_PATH: &str = "county_data.json";

/// Default location of the generated module
pub const DEFAULT_OUTPUT_PATH: &str = "third_party_costs_generated.rs";

/// Paths and fallback settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// County dataset (JSON object keyed by state code)
    pub input_path: PathBuf,

    /// Generated Rust module
    pub output_path: PathBuf,

    /// State whose fee template is used for states without one
    pub fallback_region: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            fallback_region: DEFAULT_TEMPLATE_REGION.to_string(),
        }
    }
}
