//! Cost ranges and fee templates

use crate::models::CostCategory;

/// Low/high bounds for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostRange {
    /// Whole-dollar bounds
    Amount { low: i64, high: i64 },
    /// Fractional-rate bounds (title insurance)
    Rate { low: f64, high: f64 },
}

/// Fee ranges for all nine categories of one state
///
/// Built with [`FeeTemplate::new`] so the static table stays one entry per
/// line. Arguments follow [`CostCategory::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeTemplate {
    pub inspection: (i64, i64),
    pub appraisal: (i64, i64),
    pub survey: (i64, i64),
    pub pest: (i64, i64),
    pub lawyer: (i64, i64),
    pub title: (f64, f64),
    pub recording: (i64, i64),
    pub credit: (i64, i64),
    pub flood: (i64, i64),
}

impl FeeTemplate {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        inspection: (i64, i64),
        appraisal: (i64, i64),
        survey: (i64, i64),
        pest: (i64, i64),
        lawyer: (i64, i64),
        title: (f64, f64),
        recording: (i64, i64),
        credit: (i64, i64),
        flood: (i64, i64),
    ) -> Self {
        Self {
            inspection,
            appraisal,
            survey,
            pest,
            lawyer,
            title,
            recording,
            credit,
            flood,
        }
    }

    /// Range for one category
    pub fn range(&self, category: CostCategory) -> CostRange {
        let (low, high) = match category {
            CostCategory::Title => {
                let (low, high) = self.title;
                return CostRange::Rate { low, high };
            }
            CostCategory::Inspection => self.inspection,
            CostCategory::Appraisal => self.appraisal,
            CostCategory::Survey => self.survey,
            CostCategory::Pest => self.pest,
            CostCategory::Lawyer => self.lawyer,
            CostCategory::Recording => self.recording,
            CostCategory::Credit => self.credit,
            CostCategory::Flood => self.flood,
        };
        CostRange::Amount { low, high }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_range_is_rate() {
        let template = FeeTemplate::new(
            (1, 2),
            (3, 4),
            (5, 6),
            (7, 8),
            (500, 750),
            (0.0045, 0.0065),
            (9, 10),
            (11, 12),
            (13, 14),
        );

        assert_eq!(
            template.range(CostCategory::Title),
            CostRange::Rate {
                low: 0.0045,
                high: 0.0065
            }
        );
        assert_eq!(
            template.range(CostCategory::Lawyer),
            CostRange::Amount { low: 500, high: 750 }
        );
        assert_eq!(
            template.range(CostCategory::Flood),
            CostRange::Amount { low: 13, high: 14 }
        );
    }
}
