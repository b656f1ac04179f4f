//! # Compliance Simulation Module
//!
//! Monte Carlo machinery for compliance forecasting: the achieved reduction
//! is drawn from the fitted effect distribution, each draw is mapped to a
//! simulated SEC, and the empirical distribution is summarized into a
//! compliance probability with a 95% interval.
//!
//! ## Usage
//!
//! ```rust
//! use escert_engine::config::SimulationParams;
//! use escert_engine::simulation::simulate_compliance;
//!
//! let params = SimulationParams {
//!     draws: 5_000,
//!     std_error_pct: 17.1,
//!     seed: Some(42),
//! };
//!
//! let run = simulate_compliance(8.33, 7.9135, 24.1, &params).unwrap();
//! assert!(run.compliance_probability >= 0.0 && run.compliance_probability <= 100.0);
//! assert!(run.ci_lower <= run.ci_upper);
//! ```

pub mod compliance;

pub use compliance::{simulate_compliance, ComplianceOutlook, ComplianceSimulation};
