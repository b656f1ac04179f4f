//! # Portfolio Aggregation
//!
//! Batch operations over a facility population: the market-wide certificate
//! balance, per-facility compliance forecasts, and fleet descriptive
//! statistics. Facilities are processed in input order. A facility whose
//! record fails a precondition is reported in the batch's failure list and
//! the rest of the batch proceeds; nothing is dropped silently and nothing
//! aborts the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::calculator::EscertPosition;
use crate::config::{EngineConfig, MarketParams, SimulationParams};
use crate::domain::constants::INR_PER_CRORE;
use crate::domain::FacilityRecord;
use crate::error::{DomainError, EngineError};
use crate::model::{EffectCoefficients, EffectModel};
use crate::simulation::{simulate_compliance, ComplianceOutlook};
use crate::utils::round_to;

/// One facility's line in the market-wide position table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityPosition {
    pub facility_id: String,

    /// Signed certificate quantity (TOE)
    pub escerts_toe: f64,

    /// Position value at the configured price (INR crore)
    pub value_inr_crore: f64,
}

/// A facility whose record failed a precondition during a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityFailure {
    pub facility_id: String,
    pub error: DomainError,
}

/// Market-wide certificate balance over a facility population.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub generated_at: DateTime<Utc>,

    /// Certificates earned by facilities beating their targets (TOE)
    pub total_generated_toe: f64,

    /// Purchase obligation of facilities missing their targets (TOE)
    pub total_required_toe: f64,

    /// Generated minus required (TOE)
    pub net_balance_toe: f64,

    /// Absolute net position valued at the configured price (INR crore)
    pub market_value_inr_crore: f64,

    /// True when the market as a whole is long certificates
    pub is_surplus: bool,

    /// Per-facility positions, in input order
    pub positions: Vec<FacilityPosition>,

    /// Facilities excluded from the totals, in input order
    pub failures: Vec<FacilityFailure>,
}

/// Net the whole population's certificate positions.
pub fn aggregate_portfolio(
    facilities: &[FacilityRecord],
    params: &MarketParams,
) -> PortfolioSummary {
    let mut total_generated = 0.0;
    let mut total_required = 0.0;
    let mut positions = Vec::with_capacity(facilities.len());
    let mut failures = Vec::new();

    for facility in facilities {
        let position = facility.validate().and_then(|_| {
            EscertPosition::calculate(
                facility.current_sec,
                facility.target_sec,
                facility.capacity_mmtpa,
                params,
            )
        });
        match position {
            Ok(position) => {
                if position.is_generator {
                    total_generated += position.escerts_toe;
                } else {
                    total_required += position.escerts_toe.abs();
                }
                debug!(
                    facility = %facility.id,
                    escerts_toe = position.escerts_toe,
                    "position computed"
                );
                positions.push(FacilityPosition {
                    facility_id: facility.id.clone(),
                    escerts_toe: position.escerts_toe,
                    value_inr_crore: position.value_inr / INR_PER_CRORE,
                });
            }
            Err(error) => {
                warn!(facility = %facility.id, %error, "facility excluded from portfolio");
                failures.push(FacilityFailure {
                    facility_id: facility.id.clone(),
                    error,
                });
            }
        }
    }

    let net_balance = total_generated - total_required;
    PortfolioSummary {
        generated_at: Utc::now(),
        total_generated_toe: total_generated,
        total_required_toe: total_required,
        net_balance_toe: net_balance,
        market_value_inr_crore: net_balance.abs() * params.escert_price_inr / INR_PER_CRORE,
        is_surplus: net_balance > 0.0,
        positions,
        failures,
    }
}

/// Flat per-facility forecast record, one row per facility in exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceForecast {
    pub facility_id: String,

    /// Notified baseline SEC (MMBTU/tonne)
    pub baseline_sec: f64,

    /// Mandated target SEC (MMBTU/tonne)
    pub target_sec: f64,

    /// Model-predicted SEC after the policy effect (MMBTU/tonne)
    pub predicted_sec: f64,

    /// Model-predicted reduction (percent)
    pub predicted_reduction_pct: f64,

    /// Share of simulated outcomes strictly below target (percent)
    pub compliance_probability: f64,

    /// 2.5th percentile of simulated SEC (MMBTU/tonne)
    pub ci_lower: f64,

    /// 97.5th percentile of simulated SEC (MMBTU/tonne)
    pub ci_upper: f64,

    pub status: ComplianceOutlook,
}

/// Forecast rows for a facility population.
#[derive(Debug, Clone, Serialize)]
pub struct BatchForecast {
    pub generated_at: DateTime<Utc>,

    /// One row per valid facility, in input order
    pub forecasts: Vec<ComplianceForecast>,

    /// Facilities that could not be forecast, in input order
    pub failures: Vec<FacilityFailure>,
}

/// Forecast compliance for every facility in the population.
///
/// Each facility simulates under its own derived seed, so a row depends
/// only on the facility and the base seed, not on batch order or size.
/// Without a base seed each run draws a fresh one.
pub fn batch_forecast(
    facilities: &[FacilityRecord],
    model: &EffectModel,
    params: &SimulationParams,
) -> BatchForecast {
    let base_seed = params.seed.unwrap_or_else(rand::random);

    let mut forecasts = Vec::with_capacity(facilities.len());
    let mut failures = Vec::new();

    for facility in facilities {
        let run_params = SimulationParams {
            seed: Some(facility_seed(&facility.id, base_seed)),
            ..params.clone()
        };
        match forecast_facility(facility, model, &run_params) {
            Ok(forecast) => forecasts.push(forecast),
            Err(error) => {
                warn!(facility = %facility.id, %error, "compliance forecast failed");
                failures.push(FacilityFailure {
                    facility_id: facility.id.clone(),
                    error,
                });
            }
        }
    }

    BatchForecast {
        generated_at: Utc::now(),
        forecasts,
        failures,
    }
}

/// Forecast a single facility.
pub fn forecast_facility(
    facility: &FacilityRecord,
    model: &EffectModel,
    params: &SimulationParams,
) -> Result<ComplianceForecast, DomainError> {
    facility.validate()?;

    let predicted_reduction_pct =
        model.predicted_reduction_pct(facility.cycle_entry, facility.capacity_mmtpa);
    let predicted_sec =
        model.predicted_sec(facility.baseline_sec, facility.cycle_entry, facility.capacity_mmtpa);

    let simulation = simulate_compliance(
        facility.baseline_sec,
        facility.target_sec,
        predicted_reduction_pct,
        params,
    )?;

    debug!(
        facility = %facility.id,
        probability = simulation.compliance_probability,
        "forecast complete"
    );

    Ok(ComplianceForecast {
        facility_id: facility.id.clone(),
        baseline_sec: facility.baseline_sec,
        target_sec: facility.target_sec,
        predicted_sec: round_to(predicted_sec, 2),
        predicted_reduction_pct: round_to(predicted_reduction_pct, 1),
        compliance_probability: round_to(simulation.compliance_probability, 1),
        ci_lower: round_to(simulation.ci_lower, 2),
        ci_upper: round_to(simulation.ci_upper, 2),
        status: simulation.outlook(),
    })
}

/// Stable per-facility seed: a keyed hash of the identifier, so the stream
/// a facility simulates under never depends on where it sits in the batch.
fn facility_seed(facility_id: &str, base_seed: u64) -> u64 {
    xxh3_64_with_seed(facility_id.as_bytes(), base_seed)
}

/// Fleet-level descriptive statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetStats {
    pub facility_count: usize,

    /// Mean achieved SEC reduction (percent)
    pub avg_sec_reduction_pct: f64,

    /// Fleet-wide emissions avoided at capacity-based throughput
    /// (million tonnes CO2)
    pub total_co2_avoided_mt: f64,

    /// Share of facilities strictly below target (percent)
    pub compliance_rate_pct: f64,

    pub avg_baseline_sec: f64,
    pub avg_current_sec: f64,

    /// Lowest audited SEC in the fleet (MMBTU/tonne)
    pub best_sec: f64,

    /// Highest audited SEC in the fleet (MMBTU/tonne)
    pub worst_sec: f64,
}

impl FleetStats {
    pub fn calculate(
        facilities: &[FacilityRecord],
        capacity_utilization: f64,
    ) -> Result<Self, DomainError> {
        if facilities.is_empty() {
            return Err(DomainError::EmptyFacilitySet);
        }
        let count = facilities.len() as f64;

        Ok(Self {
            facility_count: facilities.len(),
            avg_sec_reduction_pct: facilities
                .iter()
                .map(|f| f.sec_reduction_pct())
                .sum::<f64>()
                / count,
            total_co2_avoided_mt: facilities
                .iter()
                .map(|f| f.co2_avoided_mt(capacity_utilization))
                .sum(),
            compliance_rate_pct: facilities.iter().filter(|f| f.is_compliant()).count() as f64
                / count
                * 100.0,
            avg_baseline_sec: facilities.iter().map(|f| f.baseline_sec).sum::<f64>() / count,
            avg_current_sec: facilities.iter().map(|f| f.current_sec).sum::<f64>() / count,
            best_sec: facilities
                .iter()
                .map(|f| f.current_sec)
                .fold(f64::INFINITY, f64::min),
            worst_sec: facilities
                .iter()
                .map(|f| f.current_sec)
                .fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

/// Everything a reporting run needs in one pass: fleet statistics, the
/// market balance, and per-facility forecasts.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioAssessment {
    pub stats: FleetStats,
    pub summary: PortfolioSummary,
    pub forecasts: BatchForecast,
}

/// Run the full assessment over a facility population.
pub fn assess_portfolio(
    facilities: &[FacilityRecord],
    coefficients: EffectCoefficients,
    config: &EngineConfig,
) -> Result<PortfolioAssessment, EngineError> {
    let model = EffectModel::new(coefficients)?;
    let stats = FleetStats::calculate(facilities, config.market.capacity_utilization)?;

    Ok(PortfolioAssessment {
        stats,
        summary: aggregate_portfolio(facilities, &config.market),
        forecasts: batch_forecast(facilities, &model, &config.simulation),
    })
}
