//! # Causal-Effect Modeling
//!
//! The fitted coefficient set and the step-function predictor built on it.
//! There is no process-wide model instance; callers construct one from the
//! coefficient set they trust and pass it down.

pub mod coefficients;
pub mod effect;

pub use coefficients::*;
pub use effect::*;
