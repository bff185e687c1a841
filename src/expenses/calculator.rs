//! Current-period expense calculator

use crate::assumptions::Assumptions;
use crate::headcount::{HeadcountInput, Tier};
use super::snapshot::{ExpenseSnapshot, SalaryByTier};

/// Computes expense snapshots from headcounts under a fixed set of assumptions
#[derive(Debug, Clone, Default)]
pub struct ExpenseCalculator {
    assumptions: Assumptions,
}

impl ExpenseCalculator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Compute the current-period snapshot
    ///
    /// Any headcount is valid; an all-zero input yields only the costs that do
    /// not depend on headcount.
    pub fn compute_snapshot(&self, input: &HeadcountInput) -> ExpenseSnapshot {
        let model = self.assumptions.cost_model;
        let salary = &self.assumptions.salary;
        let overhead = &self.assumptions.overhead;

        let salary_by_tier = SalaryByTier {
            junior: input.count(Tier::Junior) as f64 * salary.annual_rate(Tier::Junior),
            mid: input.count(Tier::Mid) as f64 * salary.annual_rate(Tier::Mid),
            senior: input.count(Tier::Senior) as f64 * salary.annual_rate(Tier::Senior),
        };

        let total_employees = input.total();
        let n = total_employees as f64;

        let office_expense = n * overhead.office_monthly_per_head * 12.0;
        let legal_expense = n * overhead.legal_rate * model.overhead_months();
        let accounting_expense = n * overhead.accounting_rate * model.overhead_months();
        let onboarding_expense = if model.onboarding_per_head() {
            overhead.onboarding_rate * n
        } else {
            overhead.onboarding_rate
        };

        let total_expense = salary_by_tier.total()
            + office_expense
            + legal_expense
            + accounting_expense
            + onboarding_expense;

        log::debug!(
            "Snapshot ({}): {} engineers, total expense {:.2}",
            model, total_employees, total_expense
        );

        ExpenseSnapshot {
            cost_model: model,
            salary_by_tier,
            office_expense,
            legal_expense,
            accounting_expense,
            onboarding_expense,
            total_employees,
            total_expense,
        }
    }
}

/// Compute a snapshot under default run-rate pricing
pub fn compute_snapshot(junior: u32, mid: u32, senior: u32) -> ExpenseSnapshot {
    ExpenseCalculator::default().compute_snapshot(&HeadcountInput::new(junior, mid, senior))
}
