//! Current-period expense snapshot and its category view

use serde::{Deserialize, Serialize};

use crate::assumptions::CostModel;
use crate::headcount::Tier;

/// Annual salary cost per tier
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalaryByTier {
    pub junior: f64,
    pub mid: f64,
    pub senior: f64,
}

impl SalaryByTier {
    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Junior => self.junior,
            Tier::Mid => self.mid,
            Tier::Senior => self.senior,
        }
    }

    pub fn total(&self) -> f64 {
        self.junior + self.mid + self.senior
    }
}

/// Expense categories tracked by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Salary,
    Office,
    Legal,
    Accounting,
    /// Device and training cost for new engineers
    Onboarding,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Salary,
        ExpenseCategory::Office,
        ExpenseCategory::Legal,
        ExpenseCategory::Accounting,
        ExpenseCategory::Onboarding,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Salary => "Salary",
            ExpenseCategory::Office => "Office",
            ExpenseCategory::Legal => "Legal",
            ExpenseCategory::Accounting => "Accounting",
            ExpenseCategory::Onboarding => "Device & Training",
        }
    }

    pub fn scaling(&self) -> ScalingPolicy {
        match self {
            ExpenseCategory::Onboarding => ScalingPolicy::Fixed,
            _ => ScalingPolicy::InflationAndHeadcount,
        }
    }
}

/// How a category's baseline moves over the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalingPolicy {
    /// Scaled by the yearly inflation factor and the headcount growth factor
    InflationAndHeadcount,
    /// Never scaled
    Fixed,
}

/// One category's baseline value with its scaling policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryLine {
    pub category: ExpenseCategory,
    pub baseline: f64,
    pub scaling: ScalingPolicy,
}

/// Current-period expense breakdown computed from headcounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSnapshot {
    /// Formula lineage the snapshot was computed under
    pub cost_model: CostModel,
    pub salary_by_tier: SalaryByTier,
    pub office_expense: f64,
    pub legal_expense: f64,
    pub accounting_expense: f64,
    pub onboarding_expense: f64,
    pub total_employees: u64,
    pub total_expense: f64,
}

impl ExpenseSnapshot {
    /// Baseline value for a category
    pub fn category_value(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Salary => self.salary_by_tier.total(),
            ExpenseCategory::Office => self.office_expense,
            ExpenseCategory::Legal => self.legal_expense,
            ExpenseCategory::Accounting => self.accounting_expense,
            ExpenseCategory::Onboarding => self.onboarding_expense,
        }
    }

    /// Every category with its baseline and scaling policy
    pub fn category_lines(&self) -> Vec<CategoryLine> {
        ExpenseCategory::ALL
            .iter()
            .map(|&category| CategoryLine {
                category,
                baseline: self.category_value(category),
                scaling: category.scaling(),
            })
            .collect()
    }

    /// Labelled values for a breakdown chart
    pub fn breakdown(&self) -> Vec<(&'static str, f64)> {
        ExpenseCategory::ALL
            .iter()
            .map(|c| (c.label(), self.category_value(*c)))
            .collect()
    }
}
