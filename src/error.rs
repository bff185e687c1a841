//! Error types for expense calculation and projection

use thiserror::Error;

use crate::headcount::Tier;

#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Invalid headcount for {tier} engineers: {value} (must be a non-negative whole number)")]
    InvalidInput { tier: Tier, value: i64 },

    #[error("Cannot project growth from a zero-headcount baseline")]
    DegenerateBaseline,

    #[error("Invalid assumption '{key}': {message}")]
    InvalidAssumption { key: String, message: String },

    #[error("Parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
