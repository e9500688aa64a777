//! Generation pipeline
//!
//! One deterministic pass: load dataset → build lookup table → render module
//! → write artifact. Any failure aborts the run before the output path is
//! touched, so a previous artifact is either fully replaced or left intact.

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::emit::render_module;
use crate::error::GeneratorError;
use crate::fees::{FeeTemplateTable, STATE_FEE_TEMPLATES};
use crate::io::{load_dataset, write_artifact};
use crate::lookup::{build_lookup_table, LookupTable};
use crate::models::Region;

/// Counts reported after a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// States present in the dataset
    pub regions: usize,
    /// States listing at least one county in the dataset
    pub populated_regions: usize,
    /// County entries listed in the dataset
    ///
    /// Counts raw entries, so duplicates and a county named "Default" are
    /// included even though the table stores them once or not at all.
    pub entities: usize,
    /// Where the module was written
    pub output_path: PathBuf,
}

impl GenerationSummary {
    pub fn new(dataset: &[Region], table: &LookupTable, output_path: PathBuf) -> Self {
        Self {
            regions: table.region_count(),
            populated_regions: dataset.iter().filter(|region| !region.is_empty()).count(),
            entities: dataset.iter().map(|region| region.entities.len()).sum(),
            output_path,
        }
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Generated {}", self.output_path.display())?;
        writeln!(
            f,
            "  - States: {} ({} with counties)",
            self.regions, self.populated_regions
        )?;
        write!(f, "  - Total counties: {}", self.entities)
    }
}

/// Drives a generation run
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fee templates with the configured fallback region
    pub fn templates(&self) -> FeeTemplateTable<'static> {
        FeeTemplateTable::new(STATE_FEE_TEMPLATES, &self.config.fallback_region)
    }

    /// Build the table and render the module without touching the disk
    pub fn render(&self, regions: &[Region]) -> Result<(LookupTable, String), GeneratorError> {
        let table = build_lookup_table(regions, &self.templates());
        let module = render_module(&table)?;
        Ok((table, module))
    }

    /// Run the full pipeline
    pub fn run(&self) -> Result<GenerationSummary, GeneratorError> {
        info!(
            input = %self.config.input_path.display(),
            output = %self.config.output_path.display(),
            "Starting generation"
        );

        let regions = load_dataset(&self.config.input_path)?;
        let (table, module) = self.render(&regions)?;
        write_artifact(&self.config.output_path, &module)?;

        Ok(GenerationSummary::new(
            &regions,
            &table,
            self.config.output_path.clone(),
        ))
    }
}
