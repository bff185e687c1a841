//! Cost assumptions: salary rates, overhead rates, and growth rates

mod rates;
pub mod loader;

pub use rates::{CostModel, SalaryRates, OverheadRates, GrowthRates};
pub use loader::LoadedAssumptions;

use std::path::Path;

use crate::error::{ExpenseError, Result};

/// Container for all calculation and projection assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub cost_model: CostModel,
    pub salary: SalaryRates,
    pub overhead: OverheadRates,
    pub growth: GrowthRates,
}

impl Assumptions {
    /// Default pricing under the run-rate model
    pub fn default_pricing() -> Self {
        Self::for_model(CostModel::default())
    }

    /// Default rates for the given cost model
    pub fn for_model(cost_model: CostModel) -> Self {
        Self {
            cost_model,
            salary: SalaryRates::default(),
            overhead: OverheadRates::for_model(cost_model),
            growth: GrowthRates::for_model(cost_model),
        }
    }

    /// Load overrides from CSV files in the default location (data/assumptions/)
    pub fn from_csv(cost_model: CostModel) -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH), cost_model)
    }

    /// Load overrides from CSV files in a specific directory
    pub fn from_csv_path(path: &Path, cost_model: CostModel) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        let mut assumptions = Self::for_model(cost_model);

        for (tier, rate) in loaded.salary_rates {
            assumptions.salary.set_annual_rate(tier, rate);
        }
        for (key, rate) in &loaded.overhead_rates {
            assumptions.overhead.set(key, *rate)?;
        }
        for (key, rate) in &loaded.growth_rates {
            assumptions.growth.set(key, *rate)?;
        }

        assumptions.validate()?;
        log::debug!("Loaded {} assumptions from {}", cost_model, path.display());
        Ok(assumptions)
    }

    /// Reject negative or non-finite rates
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("salary.junior", self.salary.junior),
            ("salary.mid", self.salary.mid),
            ("salary.senior", self.salary.senior),
            ("office_monthly_per_head", self.overhead.office_monthly_per_head),
            ("legal_rate", self.overhead.legal_rate),
            ("accounting_rate", self.overhead.accounting_rate),
            ("onboarding_rate", self.overhead.onboarding_rate),
            ("annual_inflation", self.growth.annual_inflation),
            ("quarterly_headcount_growth", self.growth.quarterly_headcount_growth),
        ];

        for (key, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ExpenseError::InvalidAssumption {
                    key: key.to_string(),
                    message: format!("rate must be a non-negative number, got {}", rate),
                });
            }
        }
        Ok(())
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}
