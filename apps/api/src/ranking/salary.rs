use serde::Serialize;

use crate::catalog::SalaryBand;

const RAISE_PER_YEAR: f64 = 0.08;
/// Up to +30% at a perfect skill match.
const RAISE_PER_SKILL_POINT: f64 = 0.003;

/// Salary band scaled for tenure and qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustedSalary {
    pub min: u64,
    pub max: u64,
    pub currency: &'static str,
}

/// `floor(base * (1 + 0.08*years) * (1 + 0.003*skill%))` on both ends.
pub fn adjust_salary(base: SalaryBand, experience_years: u32, skill_match: f64) -> AdjustedSalary {
    let multiplier = (1.0 + RAISE_PER_YEAR * experience_years as f64)
        * (1.0 + RAISE_PER_SKILL_POINT * skill_match);

    AdjustedSalary {
        min: (base.min as f64 * multiplier).floor() as u64,
        max: (base.max as f64 * multiplier).floor() as u64,
        currency: "USD",
    }
}
