//! County-level third-party closing cost estimates
//!
//! Includes: inspection, appraisal, survey, pest, lawyer fees, title
//! insurance, recording, credit report, flood determination.
//!
//! Generated by `generate-county-costs` from the county dataset. Do not edit
//! by hand; re-run the generator instead.
//!
//! Each state's "Default" entry is the midpoint of its fee ranges. County
//! entries scale those midpoints by a jitter factor seeded from the county
//! name: `seed = first 8 bytes (big-endian) of SHA-256(name)`, expanded with
//! xorshift64*. Draw 1 gives `0.95 + (d % 100) / 1000` for dollar amounts
//! (truncated); draw 2 gives `0.95 + (d % 65) / 1000` for the title rate
//! (rounded to 4 places).

/// Third-party closing costs for one county (or state default)
///
/// Dollar amounts are whole dollars; `title_insurance_cost` is a fraction
/// of the property value (e.g. 0.006 = 0.6%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountyLevelCosts {
    /// Home Inspection
    pub inspection_cost: i64,
    /// Appraisal
    pub appraisal_cost: i64,
    /// Survey
    pub survey_fee: i64,
    /// Pest Inspection
    pub pest_inspection_cost: i64,
    /// Attorney/Closing
    pub lawyer_fee: i64,
    /// Title Insurance (%)
    pub title_insurance_cost: f64,
    /// Recording Fees
    pub recording_fees: i64,
    /// Credit Report
    pub credit_report_fee: i64,
    /// Flood Determination
    pub flood_determination_fee: i64,
}

/// Returned by [`get_cost_label`] for an unknown field identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCostCategory(pub String);

impl std::fmt::Display for InvalidCostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid cost category: '{}'", self.0)
    }
}

impl std::error::Error for InvalidCostCategory {}

/// National average fallback (all 9 fields)
pub const NATIONAL_AVERAGE: CountyLevelCosts = CountyLevelCosts {
    inspection_cost: 360, appraisal_cost: 460, survey_fee: 420, pest_inspection_cost: 120, lawyer_fee: 500,
    title_insurance_cost: 0.0052, recording_fees: 140, credit_report_fee: 45, flood_determination_fee: 24,
};

/// County-level costs by state code (sorted); each state's "Default" is last
#[rustfmt::skip]
pub static COUNTY_THIRD_PARTY_COSTS: &[(&str, &[(&str, CountyLevelCosts)])] = &[
    // GU
    ("GU", &[
        ("Default", CountyLevelCosts {
            inspection_cost: 375, appraisal_cost: 465, survey_fee: 365, pest_inspection_cost: 140, lawyer_fee: 625,
            title_insurance_cost: 0.0055, recording_fees: 155, credit_report_fee: 46, flood_determination_fee: 24,
        }),
    ]),
    // OHIO
    ("OH", &[
        ("Franklin", CountyLevelCosts {
            inspection_cost: 359, appraisal_cost: 445, survey_fee: 350, pest_inspection_cost: 134, lawyer_fee: 599,
            title_insurance_cost: 0.0055, recording_fees: 148, credit_report_fee: 44, flood_determination_fee: 23,
        }),
        ("O\"Brien", CountyLevelCosts {
            inspection_cost: 392, appraisal_cost: 486, survey_fee: 382, pest_inspection_cost: 146, lawyer_fee: 654,
            title_insurance_cost: 0.0054, recording_fees: 162, credit_report_fee: 48, flood_determination_fee: 25,
        }),
        ("back\\slash", CountyLevelCosts {
            inspection_cost: 376, appraisal_cost: 466, survey_fee: 366, pest_inspection_cost: 140, lawyer_fee: 626,
            title_insurance_cost: 0.0055, recording_fees: 155, credit_report_fee: 46, flood_determination_fee: 24,
        }),
        ("Default", CountyLevelCosts {
            inspection_cost: 375, appraisal_cost: 465, survey_fee: 365, pest_inspection_cost: 140, lawyer_fee: 625,
            title_insurance_cost: 0.0055, recording_fees: 155, credit_report_fee: 46, flood_determination_fee: 24,
        }),
    ]),
];

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

/// Display label for a cost field identifier (e.g. "lawyerFee")
pub fn get_cost_label(key: &str) -> Result<&'static str, InvalidCostCategory> {
    match key {
        "inspectionCost" => Ok("Home Inspection"),
        "appraisalCost" => Ok("Appraisal"),
        "surveyFee" => Ok("Survey"),
        "pestInspectionCost" => Ok("Pest Inspection"),
        "lawyerFee" => Ok("Attorney/Closing"),
        "titleInsuranceCost" => Ok("Title Insurance (%)"),
        "recordingFees" => Ok("Recording Fees"),
        "creditReportFee" => Ok("Credit Report"),
        "floodDeterminationFee" => Ok("Flood Determination"),
        _ => Err(InvalidCostCategory(key.to_string())),
    }
}
