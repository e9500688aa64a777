//! Generated module renderer
//!
//! Output layout:
//!
//! - header doc comment (contents and jitter hash)
//! - `CountyLevelCosts` struct and `InvalidCostCategory` error
//! - `NATIONAL_AVERAGE` constant
//! - `COUNTY_THIRD_PARTY_COSTS`: states in ascending code order, counties
//!   in dataset order, each state's "Default" entry last
//! - `get_county_third_party_costs`, `get_counties_for_state`,
//!   `get_cost_label`
//!
//! Rendering is a pure function of the table, so identical tables always
//! render to identical bytes.

use std::fmt::Write;

use super::escape::string_literal;
use crate::lookup::LookupTable;
use crate::models::{CostCategory, CostSet, CostValue, DEFAULT_ENTITY, NATIONAL_AVERAGE};

/// Name of the cost struct in the generated module
pub const GENERATED_STRUCT: &str = "CountyLevelCosts";

/// Fields per line inside an emitted struct literal
const FIELDS_PER_LINE: usize = 5;

const HEADER: &str = "\
//! County-level third-party closing cost estimates
//!
//! Includes: inspection, appraisal, survey, pest, lawyer fees, title
//! insurance, recording, credit report, flood determination.
//!
//! Generated by `generate-county-costs` from the county dataset. Do not edit
//! by hand; re-run the generator instead.
//!
//! Each state's \"Default\" entry is the midpoint of its fee ranges. County
//! entries scale those midpoints by a jitter factor seeded from the county
//! name: `seed = first 8 bytes (big-endian) of SHA-256(name)`, expanded with
//! xorshift64*. Draw 1 gives `0.95 + (d % 100) / 1000` for dollar amounts
//! (truncated); draw 2 gives `0.95 + (d % 65) / 1000` for the title rate
//! (rounded to 4 places).
";

const ACCESSORS: &str = r#"
fn state_costs(state: &str) -> Option<&'static [(&'static str, CountyLevelCosts)]> {
    COUNTY_THIRD_PARTY_COSTS
        .binary_search_by(|(code, _)| (*code).cmp(state))
        .ok()
        .map(|index| COUNTY_THIRD_PARTY_COSTS[index].1)
}

fn county_costs(counties: &[(&str, CountyLevelCosts)], county: &str) -> Option<CountyLevelCosts> {
    counties
        .iter()
        .find(|(name, _)| *name == county)
        .map(|(_, costs)| *costs)
}

/// Third-party costs for a county
///
/// Falls back to the state default when the county is blank or unknown, and
/// to the national average when the state is unknown. Names match exactly.
pub fn get_county_third_party_costs(state: &str, county: Option<&str>) -> CountyLevelCosts {
    let Some(counties) = state_costs(state) else {
        return NATIONAL_AVERAGE;
    };
    let default = county_costs(counties, "Default").unwrap_or(NATIONAL_AVERAGE);

    match county {
        Some(name) if !name.trim().is_empty() => county_costs(counties, name).unwrap_or(default),
        _ => default,
    }
}

/// Counties available for a state, sorted, without "Default"
pub fn get_counties_for_state(state: &str) -> Vec<&'static str> {
    let Some(counties) = state_costs(state) else {
        return Vec::new();
    };

    let mut names: Vec<&'static str> = counties
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| *name != "Default")
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}
"#;

/// Render the full generated module for `table`
pub fn render_module(table: &LookupTable) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    out.push_str(HEADER);
    writeln!(out)?;
    write_struct(&mut out)?;
    write_error_type(&mut out)?;

    writeln!(out, "/// National average fallback (all 9 fields)")?;
    write!(out, "pub const NATIONAL_AVERAGE: {GENERATED_STRUCT} = ")?;
    write_cost_literal(&mut out, &NATIONAL_AVERAGE, "")?;
    writeln!(out, ";")?;
    writeln!(out)?;

    write_table(&mut out, table)?;
    out.push_str(ACCESSORS);
    writeln!(out)?;
    write_label_fn(&mut out)?;

    Ok(out)
}

fn write_struct(out: &mut String) -> std::fmt::Result {
    writeln!(out, "/// Third-party closing costs for one county (or state default)")?;
    writeln!(out, "///")?;
    writeln!(
        out,
        "/// Dollar amounts are whole dollars; `title_insurance_cost` is a fraction"
    )?;
    writeln!(out, "/// of the property value (e.g. 0.006 = 0.6%).")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq)]")?;
    writeln!(out, "pub struct {GENERATED_STRUCT} {{")?;
    for category in CostCategory::ALL {
        let ty = if category.is_rate() { "f64" } else { "i64" };
        writeln!(out, "    /// {}", category.label())?;
        writeln!(out, "    pub {}: {ty},", category.rust_field_name())?;
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_error_type(out: &mut String) -> std::fmt::Result {
    out.push_str(
        "\
/// Returned by [`get_cost_label`] for an unknown field identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCostCategory(pub String);

impl std::fmt::Display for InvalidCostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, \"Invalid cost category: '{}'\", self.0)
    }
}

impl std::error::Error for InvalidCostCategory {}
",
    );
    writeln!(out)
}

fn write_table(out: &mut String, table: &LookupTable) -> std::fmt::Result {
    writeln!(
        out,
        "/// County-level costs by state code (sorted); each state's \"Default\" is last"
    )?;
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(
        out,
        "pub static COUNTY_THIRD_PARTY_COSTS: &[(&str, &[(&str, {GENERATED_STRUCT})])] = &["
    )?;

    for (code, region) in table.regions() {
        writeln!(out, "    // {}", comment_text(&region.display_name().to_uppercase()))?;
        writeln!(out, "    ({}, &[", string_literal(code))?;
        for (name, costs) in region.entities() {
            write_entry(out, name, costs)?;
        }
        write_entry(out, DEFAULT_ENTITY, region.default_costs())?;
        writeln!(out, "    ]),")?;
    }

    writeln!(out, "];")
}

fn write_entry(out: &mut String, name: &str, costs: &CostSet) -> std::fmt::Result {
    write!(out, "        ({}, ", string_literal(name))?;
    write_cost_literal(out, costs, "        ")?;
    writeln!(out, "),")
}

fn write_cost_literal(out: &mut String, costs: &CostSet, indent: &str) -> std::fmt::Result {
    writeln!(out, "{GENERATED_STRUCT} {{")?;
    for line in CostCategory::ALL.chunks(FIELDS_PER_LINE) {
        write!(out, "{indent}   ")?;
        for category in line {
            write!(out, " {}: ", category.rust_field_name())?;
            match costs.get(*category) {
                CostValue::Amount(v) => write!(out, "{v},")?,
                CostValue::Rate(r) => write!(out, "{r:?},")?,
            }
        }
        writeln!(out)?;
    }
    write!(out, "{indent}}}")
}

fn write_label_fn(out: &mut String) -> std::fmt::Result {
    writeln!(out, "/// Display label for a cost field identifier (e.g. \"lawyerFee\")")?;
    writeln!(
        out,
        "pub fn get_cost_label(key: &str) -> Result<&'static str, InvalidCostCategory> {{"
    )?;
    writeln!(out, "    match key {{")?;
    for category in CostCategory::ALL {
        writeln!(
            out,
            "        {} => Ok({}),",
            string_literal(category.field_name()),
            string_literal(category.label())
        )?;
    }
    writeln!(out, "        _ => Err(InvalidCostCategory(key.to_string())),")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")
}

/// Single-line comment text: control characters (line breaks included)
/// become spaces
fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
