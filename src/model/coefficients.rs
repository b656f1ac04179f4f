//! Fitted coefficients behind the treatment-effect model.
//!
//! Values come from a staggered difference-in-differences fit of log SEC on
//! scheme participation across the covered fleet. They are data, not code:
//! a refreshed fit ships as a new coefficient set, and consumers pass the
//! set they want instead of relying on a process-wide default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectCoefficients {
    /// Average treatment effect on log SEC (log points)
    pub avg_treatment_effect: f64,

    /// Standard error of the average effect (log points)
    pub std_error: f64,

    /// Effect for facilities enrolled in the first two cycles
    pub early_entrant_effect: f64,

    /// Effect for facilities enrolled from cycle three on
    pub late_entrant_effect: f64,

    /// Offset applied above the large-facility capacity threshold
    pub large_facility_adj: f64,

    /// Goodness of fit
    pub r_squared: f64,

    /// Facility-year observations behind the fit
    pub n_observations: u32,
}

impl Default for EffectCoefficients {
    /// The published fit (117 facility-year observations).
    fn default() -> Self {
        Self {
            avg_treatment_effect: -0.241,
            std_error: 0.171,
            early_entrant_effect: -0.518,
            late_entrant_effect: -0.022,
            large_facility_adj: 0.085,
            r_squared: 0.843,
            n_observations: 117,
        }
    }
}

impl EffectCoefficients {
    /// Standard error expressed in percentage points of SEC reduction.
    pub fn std_error_pct(&self) -> f64 {
        self.std_error * 100.0
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.n_observations == 0 {
            return Err(ConfigurationError::ZeroSampleSize);
        }
        if self.std_error <= 0.0 {
            return Err(ConfigurationError::NonPositiveStdError {
                value: self.std_error,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_fit_validates() {
        assert!(EffectCoefficients::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_sample_size() {
        let coefficients = EffectCoefficients {
            n_observations: 0,
            ..EffectCoefficients::default()
        };
        assert_eq!(
            coefficients.validate(),
            Err(ConfigurationError::ZeroSampleSize)
        );
    }

    #[test]
    fn test_rejects_non_positive_std_error() {
        let coefficients = EffectCoefficients {
            std_error: 0.0,
            ..EffectCoefficients::default()
        };
        assert_eq!(
            coefficients.validate(),
            Err(ConfigurationError::NonPositiveStdError { value: 0.0 })
        );
    }

    #[test]
    fn test_std_error_in_percentage_points() {
        let coefficients = EffectCoefficients::default();
        assert_eq!(coefficients.std_error_pct(), 0.171 * 100.0);
    }
}
