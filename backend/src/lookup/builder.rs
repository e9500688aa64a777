//! Lookup Builder
//!
//! Walks the region dataset and assembles the [`LookupTable`]:
//!
//! 1. Resolve each region's fee template (explicit or fallback)
//! 2. Perturb the template midpoint for every county, in dataset order
//! 3. Add the unperturbed midpoint as the region's default
//!
//! Regions with zero counties get only the default. Duplicate region codes
//! and duplicate county names are not errors: the later one wins.

use tracing::{debug, info, warn};

use super::table::{LookupTable, RegionCosts};
use crate::fees::FeeTemplateTable;
use crate::models::{Region, DEFAULT_ENTITY};
use crate::synth::{midpoint_costs, perturbed_costs};

/// Build the lookup table for `regions` using `templates`
pub fn build_lookup_table(regions: &[Region], templates: &FeeTemplateTable<'_>) -> LookupTable {
    let mut table = LookupTable::new();

    for region in regions {
        if !templates.contains(&region.code) {
            debug!(region = %region.code, "No fee template, using fallback");
        }

        let costs = build_region(region, templates);
        if table.insert_region(region.code.clone(), costs).is_some() {
            warn!(region = %region.code, "Duplicate region code, keeping the later entry");
        }
    }

    info!(
        regions = table.region_count(),
        counties = table.entity_count(),
        "Built lookup table"
    );
    table
}

/// Cost sets for a single region
pub fn build_region(region: &Region, templates: &FeeTemplateTable<'_>) -> RegionCosts {
    let template = templates.template_for(&region.code);
    let mut costs = RegionCosts::new(region.display_name.clone(), midpoint_costs(template));

    for entity in &region.entities {
        if entity.name == DEFAULT_ENTITY {
            warn!(
                region = %region.code,
                "County named \"{}\" is shadowed by the region default", DEFAULT_ENTITY
            );
            continue;
        }

        let entity_costs = perturbed_costs(template, &entity.name);
        if costs.insert_entity(entity.name.clone(), entity_costs).is_some() {
            debug!(region = %region.code, county = %entity.name, "Duplicate county name");
        }
    }

    costs
}
