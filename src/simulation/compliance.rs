//! # Monte Carlo Compliance Simulation
//!
//! Draws achieved reductions from the fitted effect distribution and maps
//! each draw to a simulated SEC. The reported probability is the share of
//! draws landing strictly below target; the interval bounds are empirical
//! percentiles of the simulated SECs, not a parametric approximation.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::config::SimulationParams;
use crate::error::DomainError;

/// Outcome of one Monte Carlo compliance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSimulation {
    /// Share of draws strictly below target (percent)
    pub compliance_probability: f64,

    /// 2.5th percentile of simulated SEC (MMBTU/tonne)
    pub ci_lower: f64,

    /// 97.5th percentile of simulated SEC (MMBTU/tonne)
    pub ci_upper: f64,

    /// Every simulated SEC, in draw order
    pub simulated_secs: Vec<f64>,
}

impl ComplianceSimulation {
    /// Qualitative band for the run's probability.
    pub fn outlook(&self) -> ComplianceOutlook {
        ComplianceOutlook::from_probability(self.compliance_probability)
    }
}

/// Run the compliance simulation for one facility.
///
/// A seeded run is fully reproducible: the same inputs and seed produce the
/// same draws on every platform. With `seed: None` each run draws fresh
/// entropy.
pub fn simulate_compliance(
    baseline_sec: f64,
    target_sec: f64,
    predicted_reduction_pct: f64,
    params: &SimulationParams,
) -> Result<ComplianceSimulation, DomainError> {
    if params.draws == 0 {
        return Err(DomainError::NoDraws);
    }
    if params.std_error_pct < 0.0 {
        return Err(DomainError::NegativeStdError {
            value: params.std_error_pct,
        });
    }

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let effect_dist = Normal::new(predicted_reduction_pct, params.std_error_pct).map_err(|_| {
        DomainError::NegativeStdError {
            value: params.std_error_pct,
        }
    })?;

    let simulated_secs: Vec<f64> = (0..params.draws)
        .map(|_| baseline_sec * (1.0 - effect_dist.sample(&mut rng) / 100.0))
        .collect();

    let below_target = simulated_secs.iter().filter(|sec| **sec < target_sec).count();
    let compliance_probability = below_target as f64 / params.draws as f64 * 100.0;

    let mut sorted = simulated_secs.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Ok(ComplianceSimulation {
        compliance_probability,
        ci_lower: percentile(&sorted, 2.5),
        ci_upper: percentile(&sorted, 97.5),
        simulated_secs,
    })
}

/// Empirical percentile with linear interpolation between closest ranks.
///
/// `sorted` must be ascending and non-empty; a single element is every
/// percentile of itself.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] + weight * (sorted[upper] - sorted[lower])
}

/// Qualitative banding of a compliance probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceOutlook {
    High, // probability >= 70%
    Medium, // probability >= 40%
    #[serde(rename = "At Risk")]
    AtRisk, // below 40%
}

impl ComplianceOutlook {
    /// Bands are inclusive on their lower edge.
    pub fn from_probability(probability_pct: f64) -> Self {
        if probability_pct >= 70.0 {
            ComplianceOutlook::High
        } else if probability_pct >= 40.0 {
            ComplianceOutlook::Medium
        } else {
            ComplianceOutlook::AtRisk
        }
    }
}

impl fmt::Display for ComplianceOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceOutlook::High => write!(f, "High"),
            ComplianceOutlook::Medium => write!(f, "Medium"),
            ComplianceOutlook::AtRisk => write!(f, "At Risk"),
        }
    }
}
