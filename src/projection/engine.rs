//! Quarterly growth projector

use crate::assumptions::GrowthRates;
use crate::error::{ExpenseError, Result};
use crate::expenses::{ExpenseCategory, ExpenseSnapshot, ScalingPolicy};
use super::periods::{ProjectedPeriod, ProjectionResult};
use super::state::QuarterState;

/// Default projection horizon in years
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub years: u32,
}

impl ProjectionConfig {
    pub fn with_years(years: u32) -> Self {
        Self { years }
    }

    /// Number of quarters in the horizon, or `None` if it does not fit in a `u32`
    pub fn quarters(&self) -> Option<u32> {
        self.years.checked_mul(4)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

/// Projects a snapshot forward under compounding inflation and headcount growth
#[derive(Debug, Clone)]
pub struct GrowthProjector {
    growth: GrowthRates,
    config: ProjectionConfig,
}

impl GrowthProjector {
    pub fn new(growth: GrowthRates, config: ProjectionConfig) -> Self {
        Self { growth, config }
    }

    /// Run the projection for a snapshot
    ///
    /// A snapshot with no engineers has no growth baseline and is rejected
    /// regardless of the horizon.
    pub fn project(&self, snapshot: &ExpenseSnapshot) -> Result<ProjectionResult> {
        if snapshot.total_employees == 0 {
            return Err(ExpenseError::DegenerateBaseline);
        }

        let quarters = self.config.quarters().ok_or_else(|| ExpenseError::InvalidAssumption {
            key: "years".to_string(),
            message: format!("horizon of {} years has too many quarters", self.config.years),
        })?;

        let baseline_employees = snapshot.total_employees as f64;
        let mut result = ProjectionResult::new(snapshot.cost_model, self.config.years);
        result.periods.reserve(quarters as usize);

        log::debug!(
            "Projecting {} engineers over {} years ({})",
            snapshot.total_employees, self.config.years, snapshot.cost_model
        );

        for quarter_index in 0..quarters {
            let state = QuarterState::at(quarter_index, baseline_employees, &self.growth);
            result.add_period(self.calculate_quarter(snapshot, &state));
        }

        Ok(result)
    }

    /// Calculate category contributions for a single quarter
    fn calculate_quarter(&self, snapshot: &ExpenseSnapshot, state: &QuarterState) -> ProjectedPeriod {
        let model = snapshot.cost_model;

        let mut period = ProjectedPeriod {
            quarter_index: state.quarter_index,
            quarter_in_year: state.quarter_in_year,
            year: state.year,
            projected_employees: state.projected_employees,
            inflation_factor: state.inflation_factor,
            employee_factor: state.employee_factor,
            salary: 0.0,
            office: 0.0,
            legal: 0.0,
            accounting: 0.0,
            onboarding: 0.0,
            total_expense: 0.0,
        };

        for line in snapshot.category_lines() {
            let contribution = match line.scaling {
                ScalingPolicy::InflationAndHeadcount => {
                    line.baseline * state.scale() * model.quarter_share()
                }
                ScalingPolicy::Fixed => model.onboarding_in_quarter(state.quarter_index, line.baseline),
            };

            match line.category {
                ExpenseCategory::Salary => period.salary = contribution,
                ExpenseCategory::Office => period.office = contribution,
                ExpenseCategory::Legal => period.legal = contribution,
                ExpenseCategory::Accounting => period.accounting = contribution,
                ExpenseCategory::Onboarding => period.onboarding = contribution,
            }
        }

        period.total_expense =
            period.salary + period.office + period.legal + period.accounting + period.onboarding;

        period
    }
}

/// Project a snapshot with the default growth rates of its cost model
pub fn project_growth(snapshot: &ExpenseSnapshot, years: u32) -> Result<ProjectionResult> {
    GrowthProjector::new(
        GrowthRates::for_model(snapshot.cost_model),
        ProjectionConfig::with_years(years),
    )
    .project(snapshot)
}
