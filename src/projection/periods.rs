//! Projected period records and horizon summaries

use serde::{Deserialize, Serialize};

use crate::assumptions::CostModel;
use crate::expenses::ExpenseCategory;

/// Number of leading years included in the headline multi-year total
pub const HEADLINE_YEARS: usize = 3;

/// One quarter of projected expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPeriod {
    // Timing
    pub quarter_index: u32,
    pub quarter_in_year: u32,
    pub year: u32,

    // Growth
    pub projected_employees: f64,
    pub inflation_factor: f64,
    pub employee_factor: f64,

    // Category contributions
    pub salary: f64,
    pub office: f64,
    pub legal: f64,
    pub accounting: f64,
    pub onboarding: f64,

    pub total_expense: f64,
}

impl ProjectedPeriod {
    /// Label such as "Q3 Y2"
    pub fn label(&self) -> String {
        format!("Q{} Y{}", self.quarter_in_year, self.year)
    }

    /// Contribution of one category to this quarter
    pub fn category_value(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Salary => self.salary,
            ExpenseCategory::Office => self.office,
            ExpenseCategory::Legal => self.legal,
            ExpenseCategory::Accounting => self.accounting,
            ExpenseCategory::Onboarding => self.onboarding,
        }
    }
}

/// Complete projection over a horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Cost model of the snapshot the projection was built from
    pub cost_model: CostModel,

    /// Horizon length in years
    pub years: u32,

    /// Quarterly periods in chronological order
    pub periods: Vec<ProjectedPeriod>,
}

impl ProjectionResult {
    pub fn new(cost_model: CostModel, years: u32) -> Self {
        Self {
            cost_model,
            years,
            periods: Vec::new(),
        }
    }

    /// Add a period
    pub fn add_period(&mut self, period: ProjectedPeriod) {
        self.periods.push(period);
    }

    /// Series of one category across all quarters
    pub fn category_series(&self, category: ExpenseCategory) -> Vec<f64> {
        self.periods.iter().map(|p| p.category_value(category)).collect()
    }

    /// Year-end quarters (Q4 of each year)
    pub fn year_end_periods(&self) -> impl Iterator<Item = &ProjectedPeriod> {
        self.periods.iter().filter(|p| p.quarter_in_year == 4)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let year_end: Vec<&ProjectedPeriod> = self.year_end_periods().collect();
        let year_end_totals: Vec<f64> = year_end.iter().map(|p| p.total_expense).collect();

        // Year 1 growth is measured from the first quarter, later years from
        // the previous year end
        let mut team_growth_pct = Vec::with_capacity(year_end.len());
        let mut previous = self.periods.first().map(|p| p.projected_employees);
        for period in &year_end {
            if let Some(prev) = previous {
                team_growth_pct.push((period.projected_employees / prev - 1.0) * 100.0);
            }
            previous = Some(period.projected_employees);
        }

        let headline_total: f64 = year_end_totals.iter().take(HEADLINE_YEARS).sum();
        let sum_of_periods: f64 = self.periods.iter().map(|p| p.total_expense).sum();
        let final_employees = self.periods.last().map(|p| p.projected_employees).unwrap_or(0.0);

        ProjectionSummary {
            total_quarters: self.periods.len() as u32,
            year_end_totals,
            team_growth_pct,
            headline_total,
            sum_of_periods,
            final_employees,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_quarters: u32,
    /// Q4 total expense of each year
    pub year_end_totals: Vec<f64>,
    /// Headcount growth per year in percent
    pub team_growth_pct: Vec<f64>,
    /// Sum of the first three year-end totals
    pub headline_total: f64,
    pub sum_of_periods: f64,
    pub final_employees: f64,
}
