//! Per-quarter timing and growth factors

use crate::assumptions::GrowthRates;

/// Timing and scaling factors for one quarter of the horizon
///
/// Every factor is a closed-form function of the quarter index, so building
/// the state for quarter `q` never depends on earlier quarters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterState {
    /// Quarter index within the whole horizon (0-based)
    pub quarter_index: u32,

    /// Projection year (1-indexed)
    pub year: u32,

    /// Quarter within the year (1-4)
    pub quarter_in_year: u32,

    /// Compounded headcount at the end of this quarter
    pub projected_employees: f64,

    /// Cost inflation, stepped once per year
    pub inflation_factor: f64,

    /// Projected headcount relative to the baseline
    pub employee_factor: f64,
}

impl QuarterState {
    /// Build the state for a quarter. `baseline_employees` must be positive.
    pub fn at(quarter_index: u32, baseline_employees: f64, growth: &GrowthRates) -> Self {
        let year_index = quarter_index / 4;

        // Exponents in f64 so indices near u32::MAX do not wrap
        let projected_employees = baseline_employees
            * (1.0 + growth.quarterly_headcount_growth).powf(quarter_index as f64 + 1.0);
        let inflation_factor = (1.0 + growth.annual_inflation).powf(year_index as f64 + 1.0);
        let employee_factor = projected_employees / baseline_employees;

        Self {
            quarter_index,
            year: year_index + 1,
            quarter_in_year: quarter_index % 4 + 1,
            projected_employees,
            inflation_factor,
            employee_factor,
        }
    }

    /// Combined multiplier applied to scaled categories
    pub fn scale(&self) -> f64 {
        self.inflation_factor * self.employee_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timing_labels() {
        let growth = GrowthRates::default();
        let q0 = QuarterState::at(0, 3.0, &growth);
        let q7 = QuarterState::at(7, 3.0, &growth);

        assert_eq!((q0.quarter_in_year, q0.year), (1, 1));
        assert_eq!((q7.quarter_in_year, q7.year), (4, 2));
    }

    #[test]
    fn test_first_quarter_already_grown() {
        let growth = GrowthRates::default();
        let q0 = QuarterState::at(0, 10.0, &growth);

        assert_relative_eq!(q0.projected_employees, 11.0, max_relative = 1e-12);
        assert_relative_eq!(q0.employee_factor, 1.1, max_relative = 1e-12);
        assert_relative_eq!(q0.inflation_factor, 1.09, max_relative = 1e-12);
        assert_relative_eq!(q0.scale(), 1.09 * 1.1, max_relative = 1e-12);
    }

    #[test]
    fn test_inflation_steps_at_year_boundary() {
        let growth = GrowthRates::default();
        let factors: Vec<f64> = (0..8).map(|q| QuarterState::at(q, 1.0, &growth).inflation_factor).collect();

        assert!(factors[..4].iter().all(|&f| f == factors[0]));
        assert!(factors[4..].iter().all(|&f| f == factors[4]));
        assert!(factors[4] > factors[3]);
        assert_relative_eq!(factors[4], 1.09 * 1.09, max_relative = 1e-12);
    }

    #[test]
    fn test_last_representable_quarter() {
        let growth = GrowthRates::default();
        let q = QuarterState::at(u32::MAX - 1, 1.0, &growth);
        let previous = QuarterState::at(u32::MAX - 2, 1.0, &growth);

        assert_eq!(q.year, (u32::MAX - 1) / 4 + 1);
        assert_eq!(q.quarter_in_year, 3);
        assert!(q.projected_employees >= previous.projected_employees);
        assert!(q.projected_employees > 1.0);
        assert!(q.employee_factor > 1.0);
        assert!(q.inflation_factor > 1.0);

        let last = QuarterState::at(u32::MAX, 1.0, &growth);
        assert!(last.projected_employees > 1.0);
    }
}
