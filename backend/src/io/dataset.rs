//! County dataset loader
//!
//! The dataset is a JSON object keyed by state code:
//!
//! ```json
//! {
//!   "OH": { "state_name": "Ohio", "counties": [ { "name": "Franklin" } ] },
//!   "GU": { "counties": [] }
//! }
//! ```
//!
//! Missing or null `state_name` falls back to the code, missing or null
//! `counties` means no counties, and a county without a name is called
//! "Unknown". Extra fields are ignored. Regions come back in ascending code
//! order; a code repeated in the JSON object keeps its last value.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::GeneratorError;
use crate::models::Region;

/// Name given to counties that have none in the dataset
pub const UNKNOWN_COUNTY: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct StateRecord {
    #[serde(default)]
    state_name: Option<String>,
    #[serde(default)]
    counties: Option<Vec<CountyRecord>>,
}

#[derive(Debug, Deserialize)]
struct CountyRecord {
    #[serde(default)]
    name: Option<String>,
}

/// Parse a dataset from JSON text
pub fn parse_dataset(json: &str) -> Result<Vec<Region>, serde_json::Error> {
    let states: BTreeMap<String, StateRecord> = serde_json::from_str(json)?;

    Ok(states
        .into_iter()
        .map(|(code, record)| {
            let counties = record.counties.unwrap_or_default().into_iter().map(|county| {
                county
                    .name
                    .unwrap_or_else(|| UNKNOWN_COUNTY.to_string())
            });
            Region::new(code, record.state_name, counties)
        })
        .collect())
}

/// Read and parse the dataset at `path`
pub fn load_dataset(path: &Path) -> Result<Vec<Region>, GeneratorError> {
    let json = fs::read_to_string(path).map_err(|source| GeneratorError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let regions = parse_dataset(&json).map_err(|source| GeneratorError::InputMalformed {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        regions = regions.len(),
        "Loaded county dataset"
    );
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let regions = parse_dataset(
            r#"{"OH": {"state_name": "Ohio", "fips": "39",
                       "counties": [{"name": "Franklin", "fips": "049"}, {"name": "Summit"}]}}"#,
        )
        .unwrap();

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].code, "OH");
        assert_eq!(regions[0].display_name, "Ohio");
        let names: Vec<_> = regions[0].entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Franklin", "Summit"]);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let regions =
            parse_dataset(r#"{"GU": {}, "PR": {"state_name": null, "counties": [{}]}}"#).unwrap();

        assert_eq!(regions[0].code, "GU");
        assert_eq!(regions[0].display_name, "GU");
        assert!(regions[0].entities.is_empty());
        assert_eq!(regions[1].display_name, "PR");
        assert_eq!(regions[1].entities[0].name, UNKNOWN_COUNTY);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(parse_dataset("{}").unwrap().is_empty());
    }

    #[test]
    fn test_regions_sorted_by_code() {
        let regions = parse_dataset(r#"{"TX": {}, "AK": {}, "OH": {}}"#).unwrap();
        let codes: Vec<_> = regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["AK", "OH", "TX"]);
    }

    #[test]
    fn test_wrong_shape_is_error() {
        assert!(parse_dataset(r#"["OH"]"#).is_err());
        assert!(parse_dataset(r#"{"OH": {"counties": "Franklin"}}"#).is_err());
    }
}
