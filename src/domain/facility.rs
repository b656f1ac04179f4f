//! # Facility Records
//!
//! One record per covered facility: identity, rated capacity, enrollment
//! cycle and the three SEC figures (baseline, current, target) that every
//! downstream calculation keys off. Records arrive from audits or reporting
//! feeds; [`FacilityRecord::validate`] is the single gate that batch
//! operations run before touching a record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::constants::{CO2_TONNES_PER_MMBTU, EARLY_ENTRY_MAX_CYCLE, TONNES_PER_MMTPA};
use crate::error::DomainError;

/// A covered facility's audited state for one compliance period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Registry identifier, unique within a portfolio
    pub id: String,

    /// Rated processing capacity (MMTPA)
    pub capacity_mmtpa: f64,

    /// Regulatory cycle in which the facility was enrolled, 1-based
    pub cycle_entry: u32,

    /// Notified baseline SEC (MMBTU/tonne)
    pub baseline_sec: f64,

    /// Latest audited SEC (MMBTU/tonne)
    pub current_sec: f64,

    /// Mandated target SEC (MMBTU/tonne)
    pub target_sec: f64,

    /// Year the facility was commissioned
    pub commissioning_year: i32,
}

impl FacilityRecord {
    /// Check the record invariants every calculation relies on.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.capacity_mmtpa <= 0.0 {
            return Err(DomainError::NonPositiveCapacity {
                value: self.capacity_mmtpa,
            });
        }
        if self.cycle_entry == 0 {
            return Err(DomainError::InvalidCycleEntry);
        }
        for (field, value) in [
            ("baseline_sec", self.baseline_sec),
            ("current_sec", self.current_sec),
            ("target_sec", self.target_sec),
        ] {
            if value <= 0.0 {
                return Err(DomainError::NonPositiveSec { field, value });
            }
        }
        Ok(())
    }

    /// Achieved SEC reduction versus baseline (percent).
    pub fn sec_reduction_pct(&self) -> f64 {
        (self.baseline_sec - self.current_sec) / self.baseline_sec * 100.0
    }

    /// Reduction the mandate demands, implied by the notified target (percent).
    pub fn target_reduction_pct(&self) -> f64 {
        (self.baseline_sec - self.target_sec) / self.baseline_sec * 100.0
    }

    /// Achieved reduction beyond the mandate (percentage points).
    pub fn overachievement_pct(&self) -> f64 {
        self.sec_reduction_pct() - self.target_reduction_pct()
    }

    /// Strict compliance rule: audited SEC below target. Landing exactly on
    /// target does not comply.
    pub fn is_compliant(&self) -> bool {
        self.current_sec < self.target_sec
    }

    /// Enrollment-timing cohort used by the treatment-effect model.
    pub fn entry_cohort(&self) -> EntryCohort {
        EntryCohort::from_cycle(self.cycle_entry)
    }

    /// Facility age in years as of the given calendar year.
    pub fn age(&self, as_of_year: i32) -> i32 {
        as_of_year - self.commissioning_year
    }

    /// Tonnes processed per year at the given utilization factor.
    pub fn annual_throughput_tonnes(&self, utilization: f64) -> f64 {
        self.capacity_mmtpa * TONNES_PER_MMTPA * utilization
    }

    /// Annual energy saved versus baseline at capacity-based throughput (MMBTU).
    pub fn energy_savings_mmbtu(&self, utilization: f64) -> f64 {
        (self.baseline_sec - self.current_sec) * self.annual_throughput_tonnes(utilization)
    }

    /// Annual emissions avoided versus baseline (million tonnes CO2).
    pub fn co2_avoided_mt(&self, utilization: f64) -> f64 {
        self.energy_savings_mmbtu(utilization) * CO2_TONNES_PER_MMBTU / 1e6
    }
}

/// Enrollment-timing cohorts recognized by the effect model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryCohort {
    /// Enrolled in the first two cycles
    Early,
    /// Enrolled in cycle three or later
    Late,
}

impl EntryCohort {
    pub fn from_cycle(cycle_entry: u32) -> Self {
        if cycle_entry <= EARLY_ENTRY_MAX_CYCLE {
            EntryCohort::Early
        } else {
            EntryCohort::Late
        }
    }
}

impl fmt::Display for EntryCohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryCohort::Early => write!(f, "Early"),
            EntryCohort::Late => write!(f, "Late"),
        }
    }
}
