//! Resolver API
//!
//! Read operations over a built [`LookupTable`]. Lookups never fail: a
//! missing county falls back to the region default, and a missing region
//! falls back to [`NATIONAL_AVERAGE`].

use super::table::LookupTable;
use crate::models::{CostCategory, CostSet, InvalidCategory, NATIONAL_AVERAGE};

impl LookupTable {
    /// Best-matching cost set for a region and optional county
    ///
    /// Fallback chain: exact county → region default → national average.
    /// A blank county (after trimming) selects the region default. County
    /// names are matched exactly; there is no fuzzy matching.
    pub fn resolve(&self, region: &str, entity: Option<&str>) -> CostSet {
        let Some(region_costs) = self.region(region) else {
            return NATIONAL_AVERAGE;
        };

        match entity {
            Some(name) if !name.trim().is_empty() => region_costs
                .entity(name)
                .copied()
                .unwrap_or(*region_costs.default_costs()),
            _ => *region_costs.default_costs(),
        }
    }

    /// County names of a region, sorted ascending and deduplicated
    ///
    /// Never contains the reserved `"Default"` key. Unknown regions yield
    /// an empty list.
    pub fn list_entities(&self, region: &str) -> Vec<&str> {
        let Some(region_costs) = self.region(region) else {
            return Vec::new();
        };

        let mut names: Vec<&str> = region_costs.entities().map(|(name, _)| name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Display label for a cost field identifier (e.g. `lawyerFee`)
pub fn label_for(category: &str) -> Result<&'static str, InvalidCategory> {
    category.parse::<CostCategory>().map(CostCategory::label)
}
