//! Lookup table
//!
//! Region code → (county name → cost set, plus the region's "Default").
//!
//! # Critical Invariants
//!
//! - Every region carries a default cost set, even with zero counties
//! - County names never include the reserved `"Default"` key
//! - Re-inserting a county or region replaces its value (last write wins)
//!   and keeps its original position

use std::collections::BTreeMap;

use crate::models::{CostSet, DEFAULT_ENTITY};

/// Cost sets for one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCosts {
    display_name: String,
    entities: Vec<(String, CostSet)>,
    default: CostSet,
}

impl RegionCosts {
    pub fn new(display_name: impl Into<String>, default: CostSet) -> Self {
        Self {
            display_name: display_name.into(),
            entities: Vec::new(),
            default,
        }
    }

    /// Insert or replace a county's cost set
    ///
    /// Returns the previous value when the name was already present. The
    /// reserved `"Default"` name is rejected and returns `None` without
    /// storing anything; use [`RegionCosts::default_costs`] for it.
    pub fn insert_entity(&mut self, name: impl Into<String>, costs: CostSet) -> Option<CostSet> {
        let name = name.into();
        if name == DEFAULT_ENTITY {
            return None;
        }

        match self.entities.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, costs)),
            None => {
                self.entities.push((name, costs));
                None
            }
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Cost set of a county by exact name
    pub fn entity(&self, name: &str) -> Option<&CostSet> {
        self.entities
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, costs)| costs)
    }

    /// Counties in insertion order (excluding the default)
    pub fn entities(&self) -> impl Iterator<Item = (&str, &CostSet)> {
        self.entities.iter().map(|(name, costs)| (name.as_str(), costs))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// The region's unperturbed default cost set
    pub fn default_costs(&self) -> &CostSet {
        &self.default
    }
}

/// Immutable nested lookup built once per generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTable {
    regions: BTreeMap<String, RegionCosts>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a region, returning the replaced entry
    pub fn insert_region(
        &mut self,
        code: impl Into<String>,
        costs: RegionCosts,
    ) -> Option<RegionCosts> {
        self.regions.insert(code.into(), costs)
    }

    pub fn region(&self, code: &str) -> Option<&RegionCosts> {
        self.regions.get(code)
    }

    /// Regions in ascending code order
    pub fn regions(&self) -> impl Iterator<Item = (&str, &RegionCosts)> {
        self.regions.iter().map(|(code, costs)| (code.as_str(), costs))
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Regions with at least one county
    pub fn populated_region_count(&self) -> usize {
        self.regions
            .values()
            .filter(|region| region.entity_count() > 0)
            .count()
    }

    /// Total counties across all regions (defaults excluded)
    pub fn entity_count(&self) -> usize {
        self.regions.values().map(RegionCosts::entity_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
