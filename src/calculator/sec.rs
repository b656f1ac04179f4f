//! # SEC Assessment
//!
//! Turns one period's raw energy and throughput totals into the scheme's
//! headline figures: specific energy consumption against baseline and
//! target, the achieved reduction, and the energy and emissions saved.

use serde::{Deserialize, Serialize};

use crate::config::SecParams;
use crate::domain::constants::CO2_TONNES_PER_MMBTU;
use crate::error::DomainError;
use crate::utils::round_to;

/// Outcome of a specific-energy-consumption assessment for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecResult {
    /// Audited SEC for the period (MMBTU/tonne)
    pub current_sec: f64,

    /// Notified baseline SEC (MMBTU/tonne)
    pub baseline_sec: f64,

    /// Mandated target SEC (MMBTU/tonne)
    pub target_sec: f64,

    /// Achieved reduction versus baseline (percent, negative when
    /// consumption rose)
    pub reduction_pct: f64,

    /// Strict rule: audited SEC below target
    pub is_compliant: bool,

    /// Energy saved versus baseline over the period (MMBTU)
    pub energy_savings_mmbtu: f64,

    /// Emissions avoided by those savings (tonnes CO2)
    pub co2_avoided_tonnes: f64,
}

impl SecResult {
    /// Assess one facility-period from raw totals.
    ///
    /// The compliance flag is decided on unrounded values; reported figures
    /// are rounded once on the way out.
    pub fn calculate(
        total_energy_mmbtu: f64,
        throughput_tonnes: f64,
        params: &SecParams,
    ) -> Result<Self, DomainError> {
        if throughput_tonnes <= 0.0 {
            return Err(DomainError::NonPositiveThroughput {
                value: throughput_tonnes,
            });
        }

        let baseline_sec = params.baseline_sec;
        let current_sec = total_energy_mmbtu / throughput_tonnes;
        let target_sec = baseline_sec * (1.0 - params.target_reduction_pct / 100.0);
        let reduction_pct = (baseline_sec - current_sec) / baseline_sec * 100.0;
        let energy_savings = (baseline_sec - current_sec) * throughput_tonnes;

        Ok(Self {
            current_sec: round_to(current_sec, 3),
            baseline_sec,
            target_sec: round_to(target_sec, 3),
            reduction_pct: round_to(reduction_pct, 2),
            is_compliant: current_sec < target_sec,
            energy_savings_mmbtu: round_to(energy_savings, 0),
            co2_avoided_tonnes: round_to(energy_savings * CO2_TONNES_PER_MMBTU, 0),
        })
    }
}
