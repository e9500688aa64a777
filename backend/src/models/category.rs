//! Cost categories
//!
//! The nine third-party closing cost categories carried by every cost set.
//! Eight are currency amounts (whole dollars); title insurance is a rate
//! expressed as a fraction of the purchase price (e.g. 0.0055 = 0.55%).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a category identifier is not one of the nine known fields
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid cost category: '{0}'")]
pub struct InvalidCategory(pub String);

/// One of the nine fixed closing cost categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CostCategory {
    Inspection,
    Appraisal,
    Survey,
    Pest,
    Lawyer,
    Title,
    Recording,
    Credit,
    Flood,
}

impl CostCategory {
    /// All categories in emission order
    pub const ALL: [CostCategory; 9] = [
        CostCategory::Inspection,
        CostCategory::Appraisal,
        CostCategory::Survey,
        CostCategory::Pest,
        CostCategory::Lawyer,
        CostCategory::Title,
        CostCategory::Recording,
        CostCategory::Credit,
        CostCategory::Flood,
    ];

    /// Field identifier used in cost sets and the generated module
    /// (e.g. `lawyerFee`)
    pub fn field_name(self) -> &'static str {
        match self {
            CostCategory::Inspection => "inspectionCost",
            CostCategory::Appraisal => "appraisalCost",
            CostCategory::Survey => "surveyFee",
            CostCategory::Pest => "pestInspectionCost",
            CostCategory::Lawyer => "lawyerFee",
            CostCategory::Title => "titleInsuranceCost",
            CostCategory::Recording => "recordingFees",
            CostCategory::Credit => "creditReportFee",
            CostCategory::Flood => "floodDeterminationFee",
        }
    }

    /// Rust field name of the generated `CountyLevelCosts` struct
    pub fn rust_field_name(self) -> &'static str {
        match self {
            CostCategory::Inspection => "inspection_cost",
            CostCategory::Appraisal => "appraisal_cost",
            CostCategory::Survey => "survey_fee",
            CostCategory::Pest => "pest_inspection_cost",
            CostCategory::Lawyer => "lawyer_fee",
            CostCategory::Title => "title_insurance_cost",
            CostCategory::Recording => "recording_fees",
            CostCategory::Credit => "credit_report_fee",
            CostCategory::Flood => "flood_determination_fee",
        }
    }

    /// Human-readable label for breakdown displays
    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Inspection => "Home Inspection",
            CostCategory::Appraisal => "Appraisal",
            CostCategory::Survey => "Survey",
            CostCategory::Pest => "Pest Inspection",
            CostCategory::Lawyer => "Attorney/Closing",
            CostCategory::Title => "Title Insurance (%)",
            CostCategory::Recording => "Recording Fees",
            CostCategory::Credit => "Credit Report",
            CostCategory::Flood => "Flood Determination",
        }
    }

    /// Title insurance is the only rate; everything else is a dollar amount
    pub fn is_rate(self) -> bool {
        matches!(self, CostCategory::Title)
    }
}

impl FromStr for CostCategory {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostCategory::ALL
            .into_iter()
            .find(|category| category.field_name() == s)
            .ok_or_else(|| InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
