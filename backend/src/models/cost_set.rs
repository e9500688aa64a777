//! Cost set model
//!
//! A concrete set of nine third-party closing costs for one county (or for a
//! state as its default).
//!
//! CRITICAL: Currency fields are whole dollars (i64). Title insurance is a
//! fractional rate (f64, 0 < v < 1) and is never treated as a dollar amount.

use serde::{Deserialize, Serialize};

use super::category::CostCategory;

/// A single synthesized value, tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostValue {
    /// Whole-dollar amount
    Amount(i64),
    /// Fraction of purchase price (e.g. 0.0055)
    Rate(f64),
}

impl CostValue {
    /// Dollar amount, or `None` for a rate
    pub fn as_amount(self) -> Option<i64> {
        match self {
            CostValue::Amount(v) => Some(v),
            CostValue::Rate(_) => None,
        }
    }

    /// Rate, or `None` for a dollar amount
    pub fn as_rate(self) -> Option<f64> {
        match self {
            CostValue::Rate(r) => Some(r),
            CostValue::Amount(_) => None,
        }
    }
}

/// Nine concrete closing cost values
///
/// Serializes with the camelCase field identifiers exposed by
/// [`CostCategory::field_name`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSet {
    /// Professional home inspection
    pub inspection_cost: i64,
    /// Appraisal fee
    pub appraisal_cost: i64,
    /// Property survey
    pub survey_fee: i64,
    /// Termite/pest inspection
    pub pest_inspection_cost: i64,
    /// Attorney/closing agent fee
    pub lawyer_fee: i64,
    /// Title insurance as a fraction of property value (0.006 = 0.6%)
    pub title_insurance_cost: f64,
    /// Recording deed and mortgage documents
    pub recording_fees: i64,
    /// Credit check/report fee
    pub credit_report_fee: i64,
    /// Flood zone determination
    pub flood_determination_fee: i64,
}

/// National average fallback used when a state is not in the table
pub const NATIONAL_AVERAGE: CostSet = CostSet {
    inspection_cost: 360,
    appraisal_cost: 460,
    survey_fee: 420,
    pest_inspection_cost: 120,
    lawyer_fee: 500,
    title_insurance_cost: 0.0052,
    recording_fees: 140,
    credit_report_fee: 45,
    flood_determination_fee: 24,
};

impl CostSet {
    /// Assemble a cost set by evaluating `value_for` once per category
    ///
    /// # Panics
    ///
    /// Panics if `value_for` returns a value whose unit does not match the
    /// category (a rate for a dollar field or an amount for the title rate).
    pub fn from_fn(mut value_for: impl FnMut(CostCategory) -> CostValue) -> Self {
        let [inspection, appraisal, survey, pest, lawyer, title, recording, credit, flood] =
            CostCategory::ALL.map(|category| (category, value_for(category)));

        Self {
            inspection_cost: amount(inspection),
            appraisal_cost: amount(appraisal),
            survey_fee: amount(survey),
            pest_inspection_cost: amount(pest),
            lawyer_fee: amount(lawyer),
            title_insurance_cost: rate(title),
            recording_fees: amount(recording),
            credit_report_fee: amount(credit),
            flood_determination_fee: amount(flood),
        }
    }

    /// Value of one category
    pub fn get(&self, category: CostCategory) -> CostValue {
        match category {
            CostCategory::Inspection => CostValue::Amount(self.inspection_cost),
            CostCategory::Appraisal => CostValue::Amount(self.appraisal_cost),
            CostCategory::Survey => CostValue::Amount(self.survey_fee),
            CostCategory::Pest => CostValue::Amount(self.pest_inspection_cost),
            CostCategory::Lawyer => CostValue::Amount(self.lawyer_fee),
            CostCategory::Title => CostValue::Rate(self.title_insurance_cost),
            CostCategory::Recording => CostValue::Amount(self.recording_fees),
            CostCategory::Credit => CostValue::Amount(self.credit_report_fee),
            CostCategory::Flood => CostValue::Amount(self.flood_determination_fee),
        }
    }
}

fn amount((category, value): (CostCategory, CostValue)) -> i64 {
    match value.as_amount() {
        Some(v) => v,
        None => panic!("{category} is a dollar amount, got {value:?}"),
    }
}

fn rate((category, value): (CostCategory, CostValue)) -> f64 {
    match value.as_rate() {
        Some(r) => r,
        None => panic!("{category} is a rate, got {value:?}"),
    }
}
