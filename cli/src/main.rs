//! `generate-county-costs`
//!
//! Reads `county_data.json` from the working directory and writes
//! `third_party_costs_generated.rs` next to it. Takes no arguments.

use anyhow::Result;
use closing_costs_core::{Generator, GeneratorConfig};
use tracing::Level;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let summary = Generator::new(GeneratorConfig::default()).run()?;
    println!("{summary}");
    Ok(())
}
