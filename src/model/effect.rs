//! # Treatment-Effect Model
//!
//! Deterministic point prediction of the SEC reduction the scheme induces
//! for a facility, given when it enrolled and how large it is. The fitted
//! interaction surface is collapsed to two cohort tiers plus a single size
//! offset; the tiers and the strict capacity gate are part of the published
//! model and must not be smoothed into a continuous fit.

use crate::domain::constants::{EARLY_ENTRY_MAX_CYCLE, LARGE_FACILITY_MMTPA};
use crate::error::ConfigurationError;
use crate::model::coefficients::EffectCoefficients;

#[derive(Debug, Clone, PartialEq)]
pub struct EffectModel {
    coefficients: EffectCoefficients,
}

impl EffectModel {
    /// Build a model from a coefficient set, rejecting malformed fits.
    pub fn new(coefficients: EffectCoefficients) -> Result<Self, ConfigurationError> {
        coefficients.validate()?;
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &EffectCoefficients {
        &self.coefficients
    }

    /// Predicted SEC reduction (percent).
    ///
    /// Cycles 1-2 take the early-entrant effect, later cycles the late one.
    /// Capacities strictly above the threshold are penalized by the size
    /// adjustment; a facility exactly at the threshold is not.
    pub fn predicted_reduction_pct(&self, cycle_entry: u32, capacity_mmtpa: f64) -> f64 {
        let base_effect = if cycle_entry <= EARLY_ENTRY_MAX_CYCLE {
            self.coefficients.early_entrant_effect.abs() * 100.0
        } else {
            self.coefficients.late_entrant_effect.abs() * 100.0
        };

        let size_adj = if capacity_mmtpa > LARGE_FACILITY_MMTPA {
            -self.coefficients.large_facility_adj * 100.0
        } else {
            0.0
        };

        base_effect + size_adj
    }

    /// SEC the model expects once the policy effect is applied to a baseline.
    pub fn predicted_sec(&self, baseline_sec: f64, cycle_entry: u32, capacity_mmtpa: f64) -> f64 {
        baseline_sec * (1.0 - self.predicted_reduction_pct(cycle_entry, capacity_mmtpa) / 100.0)
    }
}

impl Default for EffectModel {
    /// Model over the published fit; infallible because the published
    /// coefficients validate.
    fn default() -> Self {
        Self {
            coefficients: EffectCoefficients::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::round_to;

    #[test]
    fn test_early_entrants_predict_deeper_cuts() {
        let model = EffectModel::default();
        let early = model.predicted_reduction_pct(1, 5.0);
        let late = model.predicted_reduction_pct(3, 5.0);

        assert!(early > late);
        // |-0.518| * 100 and |-0.022| * 100
        assert_eq!(round_to(early, 1), 51.8);
        assert_eq!(round_to(late, 1), 2.2);
    }

    #[test]
    fn test_cohort_tier_breakpoint() {
        let model = EffectModel::default();
        assert_eq!(
            model.predicted_reduction_pct(2, 5.0),
            model.predicted_reduction_pct(1, 5.0)
        );
        assert!(model.predicted_reduction_pct(3, 5.0) < model.predicted_reduction_pct(2, 5.0));
    }

    #[test]
    fn test_size_adjustment_above_threshold_only() {
        let model = EffectModel::default();
        let c = model.coefficients().clone();

        // Exactly at the threshold: no adjustment.
        assert_eq!(
            model.predicted_reduction_pct(1, LARGE_FACILITY_MMTPA),
            c.early_entrant_effect.abs() * 100.0
        );

        // Strictly above: penalized by 8.5 points.
        let large = model.predicted_reduction_pct(1, 15.0);
        assert_eq!(
            large,
            c.early_entrant_effect.abs() * 100.0 - c.large_facility_adj * 100.0
        );
        assert_eq!(round_to(large, 1), 43.3);
        assert!(large < model.predicted_reduction_pct(1, 5.0));
    }

    #[test]
    fn test_late_large_facility_can_regress() {
        // 2.2 - 8.5: the model predicts late large facilities get worse.
        let model = EffectModel::default();
        assert!(model.predicted_reduction_pct(3, 10.1) < 0.0);
    }

    #[test]
    fn test_predicted_sec_applies_reduction() {
        let model = EffectModel::default();
        let predicted = model.predicted_sec(8.1, 1, 15.0);
        assert_eq!(round_to(predicted, 2), 4.59);
        assert_eq!(
            predicted,
            8.1 * (1.0 - model.predicted_reduction_pct(1, 15.0) / 100.0)
        );
    }

    #[test]
    fn test_new_rejects_invalid_coefficients() {
        let bad = EffectCoefficients {
            std_error: -0.1,
            ..EffectCoefficients::default()
        };
        assert!(EffectModel::new(bad).is_err());
        assert!(EffectModel::new(EffectCoefficients::default()).is_ok());
    }
}
