use serde::{Deserialize, Serialize};

/// Monetary ceilings, age bounds and residence minimums shared by the
/// requirement resolver and the rule tables.
///
/// Income ceilings are exclusive (an income equal to the ceiling disqualifies);
/// GIS income limits are inclusive (an income equal to the limit still qualifies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityThresholds {
    pub oas_income_ceiling: u64,
    pub oas_minimum_age: i64,
    pub oas_years_living_in_canada: u64,
    pub oas_years_living_abroad: u64,
    pub gis_single_income_limit: u64,
    pub gis_partner_without_oas_income_limit: u64,
    pub gis_partner_with_oas_income_limit: u64,
    pub allowance_income_ceiling: u64,
    pub survivor_income_ceiling: u64,
    pub allowance_minimum_age: i64,
    pub allowance_maximum_age: i64,
    pub allowance_years_in_canada: u64,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            oas_income_ceiling: 129_757,
            oas_minimum_age: 65,
            oas_years_living_in_canada: 10,
            oas_years_living_abroad: 20,
            gis_single_income_limit: 18_216,
            gis_partner_without_oas_income_limit: 43_680,
            gis_partner_with_oas_income_limit: 24_048,
            allowance_income_ceiling: 35_616,
            survivor_income_ceiling: 25_920,
            allowance_minimum_age: 60,
            allowance_maximum_age: 64,
            allowance_years_in_canada: 10,
        }
    }
}
