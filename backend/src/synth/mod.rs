//! Cost Synthesizer
//!
//! Turns fee ranges into concrete values.
//!
//! - **midpoint**: centre of the range (state defaults)
//! - **perturbed**: centre of the range scaled by a per-county jitter
//!   factor, so counties in one state do not all show identical numbers
//!
//! # Rounding
//!
//! Midpoints round half to even, to whole dollars for amounts and to four
//! decimal places for rates. Perturbed amounts are truncated toward zero;
//! perturbed rates are rounded to four decimal places.
//!
//! # Jitter
//!
//! A county name seeds a [`JitterRng`]. The first draw gives the amount
//! factor `0.95 + (d % 100) / 1000`, in [0.950, 1.049]. The second draw
//! gives the title rate factor `0.95 + (d % 65) / 1000`, in [0.950, 1.014].

use crate::fees::{CostRange, FeeTemplate};
use crate::models::{CostSet, CostValue};
use crate::rng::JitterRng;

/// Decimal places kept for title insurance rates
pub const RATE_DECIMALS: i32 = 4;

/// Multiplicative jitter factors derived from one seed key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    /// Applied to every dollar amount
    pub amount_factor: f64,
    /// Applied to the title insurance rate
    pub rate_factor: f64,
}

impl Jitter {
    /// Derive both factors from a seed key (a county name)
    pub fn from_key(key: &str) -> Self {
        let mut rng = JitterRng::from_key(key);
        let amount_step = rng.range(0, 100);
        let rate_step = rng.range(0, 65);

        Self {
            amount_factor: 0.95 + amount_step as f64 / 1000.0,
            rate_factor: 0.95 + rate_step as f64 / 1000.0,
        }
    }

    /// Scale a midpoint value by the matching factor
    pub fn apply(&self, value: CostValue) -> CostValue {
        match value {
            CostValue::Amount(v) => {
                CostValue::Amount((v as f64 * self.amount_factor).trunc() as i64)
            }
            CostValue::Rate(r) => CostValue::Rate(round_rate(r * self.rate_factor)),
        }
    }
}

/// Centre of a range
pub fn midpoint(range: CostRange) -> CostValue {
    match range {
        CostRange::Amount { low, high } => {
            CostValue::Amount(((low + high) as f64 / 2.0).round_ties_even() as i64)
        }
        CostRange::Rate { low, high } => CostValue::Rate(round_rate((low + high) / 2.0)),
    }
}

/// Centre of a range, jittered by the factors derived from `seed_key`
pub fn perturbed(range: CostRange, seed_key: &str) -> CostValue {
    Jitter::from_key(seed_key).apply(midpoint(range))
}

/// Unperturbed cost set for a template (a state default)
pub fn midpoint_costs(template: &FeeTemplate) -> CostSet {
    CostSet::from_fn(|category| midpoint(template.range(category)))
}

/// Perturbed cost set for one county
///
/// Equivalent to calling [`perturbed`] for every category, with the seed
/// hashed only once.
pub fn perturbed_costs(template: &FeeTemplate, seed_key: &str) -> CostSet {
    let jitter = Jitter::from_key(seed_key);
    CostSet::from_fn(|category| jitter.apply(midpoint(template.range(category))))
}

fn round_rate(value: f64) -> f64 {
    let scale = 10f64.powi(RATE_DECIMALS);
    (value * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CostCategory;

    fn ohio() -> FeeTemplate {
        *crate::fees::FeeTemplateTable::standard().template_for("OH")
    }

    #[test]
    fn test_amount_midpoint() {
        let value = midpoint(CostRange::Amount { low: 500, high: 750 });
        assert_eq!(value, CostValue::Amount(625));
    }

    #[test]
    fn test_amount_midpoint_rounds_half_to_even() {
        // 46.5 -> 46, 47.5 -> 48
        assert_eq!(
            midpoint(CostRange::Amount { low: 38, high: 55 }),
            CostValue::Amount(46)
        );
        assert_eq!(
            midpoint(CostRange::Amount { low: 40, high: 55 }),
            CostValue::Amount(48)
        );
    }

    #[test]
    fn test_rate_midpoint_four_places() {
        let value = midpoint(CostRange::Rate {
            low: 0.0045,
            high: 0.0065,
        });
        assert_eq!(value, CostValue::Rate(0.0055));
    }

    #[test]
    fn test_jitter_factor_bounds() {
        for name in ["Franklin", "Cuyahoga", "O'Brien", "", "Default", "Prince George's"] {
            let jitter = Jitter::from_key(name);
            assert!(jitter.amount_factor >= 0.95 && jitter.amount_factor < 1.05);
            assert!(jitter.rate_factor >= 0.95 && jitter.rate_factor < 1.015);
        }
    }

    #[test]
    fn test_perturbed_matches_perturbed_costs() {
        let template = ohio();
        let costs = perturbed_costs(&template, "Franklin");

        for category in CostCategory::ALL {
            assert_eq!(
                costs.get(category),
                perturbed(template.range(category), "Franklin"),
                "mismatch for {}",
                category
            );
        }
    }

    #[test]
    fn test_midpoint_costs_for_ohio() {
        let costs = midpoint_costs(&ohio());
        assert_eq!(costs.inspection_cost, 375);
        assert_eq!(costs.appraisal_cost, 465);
        assert_eq!(costs.lawyer_fee, 625);
        assert_eq!(costs.title_insurance_cost, 0.0055);
        assert_eq!(costs.credit_report_fee, 46);
        assert_eq!(costs.flood_determination_fee, 24);
    }
}
