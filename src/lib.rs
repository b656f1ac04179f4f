//! # ESCert Engine
//!
//! Compliance analytics for tradable energy-efficiency certificate schemes:
//! specific-energy-consumption assessment, certificate position pricing, a
//! fitted treatment-effect model, Monte Carlo compliance forecasting, and
//! portfolio-level aggregation over a facility population.
//!
//! ## Components
//!
//! - **calculator**: SEC assessment and certificate position arithmetic
//! - **model**: fitted difference-in-differences coefficients and the step
//!   predictor built on them
//! - **simulation**: seeded Monte Carlo compliance runs with empirical
//!   intervals
//! - **portfolio**: batch aggregation, per-facility forecasts and fleet
//!   statistics with collect-and-report failure handling
//! - **config**: scheme parameters with file and environment overrides
//!
//! ## Usage
//!
//! ```rust
//! use escert_engine::config::EngineConfig;
//! use escert_engine::domain::FacilityRecord;
//! use escert_engine::model::EffectCoefficients;
//! use escert_engine::portfolio::assess_portfolio;
//!
//! let fleet = vec![FacilityRecord {
//!     id: "Coastal Refinery".into(),
//!     capacity_mmtpa: 12.0,
//!     cycle_entry: 1,
//!     baseline_sec: 8.1,
//!     current_sec: 6.6,
//!     target_sec: 7.7,
//!     commissioning_year: 1998,
//! }];
//!
//! let mut config = EngineConfig::default();
//! config.simulation.draws = 2_000;
//! config.simulation.seed = Some(42);
//!
//! let assessment = assess_portfolio(&fleet, EffectCoefficients::default(), &config)
//!     .expect("valid fleet and coefficients");
//! assert_eq!(assessment.forecasts.forecasts.len(), 1);
//! assert!(assessment.summary.is_surplus);
//! ```

pub mod calculator;
pub mod config;
pub mod domain;
pub mod error;
pub mod model;
pub mod portfolio;
pub mod simulation;
pub mod utils;

pub use calculator::{EscertPosition, SecResult};
pub use config::{EngineConfig, MarketParams, SecParams, SimulationParams};
pub use domain::{EntryCohort, FacilityRecord};
pub use error::{ConfigurationError, DomainError, EngineError};
pub use model::{EffectCoefficients, EffectModel};
pub use portfolio::{
    aggregate_portfolio, assess_portfolio, batch_forecast, forecast_facility, BatchForecast,
    ComplianceForecast, FacilityFailure, FacilityPosition, FleetStats, PortfolioAssessment,
    PortfolioSummary,
};
pub use simulation::{simulate_compliance, ComplianceOutlook, ComplianceSimulation};
