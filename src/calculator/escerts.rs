//! # Certificate Positions
//!
//! Converts a facility's over- or under-achievement against target into a
//! tradable certificate position: quantity in tonnes of oil equivalent,
//! plus its value at the configured market terms.

use serde::{Deserialize, Serialize};

use crate::config::MarketParams;
use crate::domain::constants::{MMBTU_PER_TOE, TONNES_PER_MMTPA};
use crate::error::DomainError;
use crate::utils::round_to;

/// A facility's certificate position for one compliance period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscertPosition {
    /// True when the facility beat its target and earns certificates
    pub is_generator: bool,

    /// Signed certificate quantity (TOE); negative is a purchase obligation
    pub escerts_toe: f64,

    /// Position value at the configured price (INR)
    pub value_inr: f64,

    /// Position value at the configured conversion rate (USD)
    pub value_usd: f64,

    /// SEC a net buyer must reach to clear its obligation; `None` unless the
    /// facility is short
    pub breakeven_sec: Option<f64>,
}

impl EscertPosition {
    /// Price one facility's position from its audited and target SEC.
    ///
    /// Certificate quantity scales with annual throughput at the configured
    /// utilization; the sign follows the overachievement.
    pub fn calculate(
        current_sec: f64,
        target_sec: f64,
        capacity_mmtpa: f64,
        params: &MarketParams,
    ) -> Result<Self, DomainError> {
        if capacity_mmtpa <= 0.0 {
            return Err(DomainError::NonPositiveCapacity {
                value: capacity_mmtpa,
            });
        }
        if params.usd_fx_rate <= 0.0 {
            return Err(DomainError::NonPositiveFxRate {
                value: params.usd_fx_rate,
            });
        }

        let overachievement = target_sec - current_sec;
        let annual_throughput = capacity_mmtpa * TONNES_PER_MMTPA * params.capacity_utilization;
        let escerts_toe = overachievement * annual_throughput / MMBTU_PER_TOE;
        let value_inr = escerts_toe * params.escert_price_inr;

        Ok(Self {
            is_generator: overachievement > 0.0,
            escerts_toe: round_to(escerts_toe, 0),
            value_inr: round_to(value_inr, 0),
            value_usd: round_to(value_inr / params.usd_fx_rate, 0),
            breakeven_sec: (overachievement < 0.0).then_some(target_sec),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_position() {
        let position =
            EscertPosition::calculate(6.5, 7.5, 10.0, &MarketParams::default()).unwrap();

        assert!(position.is_generator);
        assert_eq!(position.escerts_toe, 203_019.0);
        assert_eq!(position.value_inr, 812_076_049.0);
        assert_eq!(position.value_usd, 9_784_049.0);
        assert_eq!(position.breakeven_sec, None);
    }

    #[test]
    fn test_buyer_position_carries_breakeven() {
        let position =
            EscertPosition::calculate(8.0, 7.6, 5.0, &MarketParams::default()).unwrap();

        assert!(!position.is_generator);
        assert_eq!(position.escerts_toe, -40_604.0);
        assert_eq!(position.value_inr, -162_415_210.0);
        assert_eq!(position.value_usd, -1_956_810.0);
        assert_eq!(position.breakeven_sec, Some(7.6));
    }

    #[test]
    fn test_exactly_on_target_is_not_a_generator() {
        let position =
            EscertPosition::calculate(7.5, 7.5, 10.0, &MarketParams::default()).unwrap();

        assert!(!position.is_generator);
        assert_eq!(position.escerts_toe, 0.0);
        assert_eq!(position.value_inr, 0.0);
        assert_eq!(position.breakeven_sec, None);
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let result = EscertPosition::calculate(6.5, 7.5, 0.0, &MarketParams::default());
        assert_eq!(
            result,
            Err(DomainError::NonPositiveCapacity { value: 0.0 })
        );
    }

    #[test]
    fn test_rejects_non_positive_fx_rate() {
        let params = MarketParams {
            usd_fx_rate: 0.0,
            ..MarketParams::default()
        };
        let result = EscertPosition::calculate(6.5, 7.5, 10.0, &params);
        assert_eq!(result, Err(DomainError::NonPositiveFxRate { value: 0.0 }));
    }

    #[test]
    fn test_quantity_scales_with_capacity() {
        let params = MarketParams::default();
        let small = EscertPosition::calculate(6.5, 7.5, 5.0, &params).unwrap();
        let large = EscertPosition::calculate(6.5, 7.5, 20.0, &params).unwrap();
        assert!(large.escerts_toe > small.escerts_toe);
    }
}
