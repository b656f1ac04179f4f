//! # Error Types
//!
//! Invalid inputs are rejected at the point of entry and reported to the
//! caller; nothing in this crate retries or silently substitutes defaults.
//! Batch operations collect these per facility instead of aborting.

use serde::Serialize;
use thiserror::Error;

/// Invalid numeric input to a calculator or simulation.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum DomainError {
    #[error("throughput must be positive (got {value} tonnes)")]
    NonPositiveThroughput { value: f64 },

    #[error("capacity must be positive (got {value} MMTPA)")]
    NonPositiveCapacity { value: f64 },

    #[error("exchange rate must be positive (got {value} INR/USD)")]
    NonPositiveFxRate { value: f64 },

    #[error("{field} must be positive (got {value} MMBTU/tonne)")]
    NonPositiveSec { field: &'static str, value: f64 },

    #[error("cycle entry is 1-based (got 0)")]
    InvalidCycleEntry,

    #[error("simulation needs at least one draw")]
    NoDraws,

    #[error("standard error must not be negative (got {value})")]
    NegativeStdError { value: f64 },

    #[error("facility list is empty")]
    EmptyFacilitySet,
}

/// Malformed model coefficients, rejected when the model is built.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ConfigurationError {
    #[error("fitted model must have a positive sample size")]
    ZeroSampleSize,

    #[error("fitted standard error must be positive (got {value})")]
    NonPositiveStdError { value: f64 },
}

/// Umbrella error for entry points that can fail either way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    Domain(#[from] DomainError),

    #[error("invalid model configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}
