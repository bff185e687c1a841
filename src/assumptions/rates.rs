//! Salary, overhead, and growth rate tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExpenseError, Result};
use crate::headcount::Tier;

/// Paired formula lineage for overhead costs and quarterly aggregation
///
/// The calculator formulas and the projector's aggregation were designed
/// together, so one value selects both and they can never be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostModel {
    /// Monthly per-head legal and accounting rates annualised, flat onboarding,
    /// 10% quarterly growth. Each quarter reports the annualised run-rate and
    /// carries the full onboarding cost.
    #[default]
    RunRate,
    /// Flat per-head legal and accounting rates, per-head onboarding,
    /// 1.5% quarterly growth. Each quarter reports a quarter of the annual
    /// figure and onboarding is charged once at the start of the horizon.
    QuarterlySpend,
}

impl CostModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostModel::RunRate => "run-rate",
            CostModel::QuarterlySpend => "quarterly-spend",
        }
    }

    /// Months each legal/accounting rate is charged for per year
    pub fn overhead_months(&self) -> f64 {
        match self {
            CostModel::RunRate => 12.0,
            CostModel::QuarterlySpend => 1.0,
        }
    }

    /// Whether onboarding is charged per engineer rather than as a flat amount
    pub fn onboarding_per_head(&self) -> bool {
        matches!(self, CostModel::QuarterlySpend)
    }

    /// Share of a scaled annual figure reported in one quarter
    pub fn quarter_share(&self) -> f64 {
        match self {
            CostModel::RunRate => 1.0,
            CostModel::QuarterlySpend => 0.25,
        }
    }

    /// Onboarding contribution charged in the given horizon quarter (0-based)
    pub fn onboarding_in_quarter(&self, quarter_index: u32, onboarding: f64) -> f64 {
        match self {
            CostModel::RunRate => onboarding,
            CostModel::QuarterlySpend if quarter_index == 0 => onboarding,
            CostModel::QuarterlySpend => 0.0,
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostModel {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "run-rate" | "runrate" | "a" => Ok(CostModel::RunRate),
            "quarterly-spend" | "quarterlyspend" | "b" => Ok(CostModel::QuarterlySpend),
            other => Err(ExpenseError::InvalidAssumption {
                key: "cost_model".to_string(),
                message: format!("unknown cost model '{}'", other),
            }),
        }
    }
}

/// Annual salary per engineer by tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRates {
    pub junior: f64,
    pub mid: f64,
    pub senior: f64,
}

impl SalaryRates {
    pub fn annual_rate(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Junior => self.junior,
            Tier::Mid => self.mid,
            Tier::Senior => self.senior,
        }
    }

    pub fn set_annual_rate(&mut self, tier: Tier, rate: f64) {
        match tier {
            Tier::Junior => self.junior = rate,
            Tier::Mid => self.mid = rate,
            Tier::Senior => self.senior = rate,
        }
    }
}

impl Default for SalaryRates {
    fn default() -> Self {
        Self {
            junior: 1_500_000.0,
            mid: 3_000_000.0,
            senior: 6_000_000.0,
        }
    }
}

/// Per-head overhead rates, interpreted through a [`CostModel`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadRates {
    /// Office cost per engineer per month
    pub office_monthly_per_head: f64,
    /// Legal cost per engineer (monthly under run-rate, one-off otherwise)
    pub legal_rate: f64,
    /// Accounting cost per engineer (monthly under run-rate, one-off otherwise)
    pub accounting_rate: f64,
    /// Device and training cost (flat under run-rate, per engineer otherwise)
    pub onboarding_rate: f64,
}

impl OverheadRates {
    pub fn for_model(model: CostModel) -> Self {
        match model {
            CostModel::RunRate => Self {
                office_monthly_per_head: 15_000.0,
                legal_rate: 5_000.0,
                accounting_rate: 3_000.0,
                onboarding_rate: 200_000.0,
            },
            CostModel::QuarterlySpend => Self {
                office_monthly_per_head: 15_000.0,
                legal_rate: 5_000.0,
                accounting_rate: 5_000.0,
                onboarding_rate: 200_000.0,
            },
        }
    }

    /// Set a rate by its table key
    pub fn set(&mut self, key: &str, rate: f64) -> Result<()> {
        match key {
            "office_monthly_per_head" => self.office_monthly_per_head = rate,
            "legal_rate" => self.legal_rate = rate,
            "accounting_rate" => self.accounting_rate = rate,
            "onboarding_rate" => self.onboarding_rate = rate,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

/// Inflation and headcount growth assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRates {
    /// Annual cost inflation, compounded once per year
    pub annual_inflation: f64,
    /// Headcount growth per quarter, compounded quarterly
    pub quarterly_headcount_growth: f64,
}

impl GrowthRates {
    pub fn for_model(model: CostModel) -> Self {
        Self {
            annual_inflation: 0.09,
            quarterly_headcount_growth: match model {
                CostModel::RunRate => 0.10,
                CostModel::QuarterlySpend => 0.015,
            },
        }
    }

    /// Set a rate by its table key
    pub fn set(&mut self, key: &str, rate: f64) -> Result<()> {
        match key {
            "annual_inflation" => self.annual_inflation = rate,
            "quarterly_headcount_growth" => self.quarterly_headcount_growth = rate,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self::for_model(CostModel::default())
    }
}

fn unknown_key(key: &str) -> ExpenseError {
    ExpenseError::InvalidAssumption {
        key: key.to_string(),
        message: "unknown rate".to_string(),
    }
}
