//! Burdened-rate cascade calculation.
//!
//! This module derives the government-compliant reference rate for a
//! labor category: clearance premium, then overhead, then G&A, then fee,
//! each layer applied to the cumulative total of all prior layers.

use rust_decimal::Decimal;

use crate::models::{CascadeBreakdown, ClearanceLevel};

/// Per-project indirect rates applied by the cascade.
///
/// Supplied by the persistence/project layer as the pricing envelope.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricingSettings {
    /// Overhead rate, fractional (0.30 = 30%).
    pub overhead_rate: Decimal,
    /// General & administrative rate, fractional.
    pub ga_rate: Decimal,
    /// Fee (profit) rate, fractional.
    pub fee_rate: Decimal,
}

/// Computes the full burden cascade for one labor category.
///
/// The cascade is strictly sequential: overhead applies to the
/// clearance-adjusted rate, G&A applies to the overhead-loaded rate, and
/// fee applies to the G&A-loaded rate. Each dollar amount is therefore
/// the increment its layer adds over the period of performance, and the
/// amounts reconstruct the burdened total exactly.
///
/// This function never fails; negative or zero rates and hours simply
/// propagate through the arithmetic. Range gating belongs to
/// [`crate::models::LaborCategoryInput::validate`] and the validator.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::{cascade, PricingSettings};
/// use pricing_engine::models::ClearanceLevel;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let settings = PricingSettings {
///     overhead_rate: dec("0.30"),
///     ga_rate: dec("0.08"),
///     fee_rate: dec("0.07"),
/// };
/// let breakdown = cascade(
///     dec("100.00"),
///     ClearanceLevel::None,
///     dec("1000"),
///     dec("100"),
///     settings,
/// );
/// assert_eq!(breakdown.burdened_rate, dec("150.228"));
/// ```
pub fn cascade(
    base_rate: Decimal,
    clearance_level: ClearanceLevel,
    hours: Decimal,
    fte_percentage: Decimal,
    settings: PricingSettings,
) -> CascadeBreakdown {
    let effective_hours = hours * fte_percentage / Decimal::ONE_HUNDRED;

    let clearance_premium = clearance_level.premium();
    let clearance_adjusted_rate = base_rate * (Decimal::ONE + clearance_premium);

    let overhead_loaded = clearance_adjusted_rate * (Decimal::ONE + settings.overhead_rate);
    let ga_loaded = overhead_loaded * (Decimal::ONE + settings.ga_rate);

    let overhead_amount = clearance_adjusted_rate * settings.overhead_rate * effective_hours;
    let ga_amount = overhead_loaded * settings.ga_rate * effective_hours;
    let fee_amount = ga_loaded * settings.fee_rate * effective_hours;

    let burdened_rate = ga_loaded * (Decimal::ONE + settings.fee_rate);
    let reference_total_cost = burdened_rate * effective_hours;

    CascadeBreakdown {
        effective_hours,
        clearance_premium,
        clearance_adjusted_rate,
        overhead_amount,
        ga_amount,
        fee_amount,
        burdened_rate,
        reference_total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings(overhead: &str, ga: &str, fee: &str) -> PricingSettings {
        PricingSettings {
            overhead_rate: dec(overhead),
            ga_rate: dec(ga),
            fee_rate: dec(fee),
        }
    }

    /// RC-001: clearance-adjusted rate for all four levels
    #[test]
    fn test_clearance_adjusted_rate_all_levels() {
        let cases = [
            (ClearanceLevel::None, "100.00"),
            (ClearanceLevel::PublicTrust, "105.00"),
            (ClearanceLevel::Secret, "110.00"),
            (ClearanceLevel::TopSecret, "120.00"),
        ];

        for (level, expected) in cases {
            let breakdown = cascade(
                dec("100"),
                level,
                dec("1000"),
                dec("100"),
                settings("0", "0", "0"),
            );
            assert_eq!(
                breakdown.clearance_adjusted_rate,
                dec(expected),
                "level {:?}",
                level
            );
        }
    }

    /// RC-002: effective hours scale by FTE percentage
    #[test]
    fn test_effective_hours_scaled_by_fte() {
        let breakdown = cascade(
            dec("100"),
            ClearanceLevel::None,
            dec("1920"),
            dec("50"),
            settings("0", "0", "0"),
        );
        assert_eq!(breakdown.effective_hours, dec("960"));
    }

    /// RC-003: worked sequential cascade
    #[test]
    fn test_sequential_cascade_worked_example() {
        // 100 base, Secret (+10%), OH 30%, G&A 8%, fee 7%, 1000 hrs @ 100% FTE
        let breakdown = cascade(
            dec("100"),
            ClearanceLevel::Secret,
            dec("1000"),
            dec("100"),
            settings("0.30", "0.08", "0.07"),
        );

        assert_eq!(breakdown.clearance_adjusted_rate, dec("110.00"));
        // overhead: 110 * 0.30 * 1000
        assert_eq!(breakdown.overhead_amount, dec("33000.000"));
        // G&A: 110 * 1.30 * 0.08 * 1000
        assert_eq!(breakdown.ga_amount, dec("11440.0000"));
        // fee: 110 * 1.30 * 1.08 * 0.07 * 1000
        assert_eq!(breakdown.fee_amount, dec("10810.80000"));
        // burdened: 110 * 1.30 * 1.08 * 1.07
        assert_eq!(breakdown.burdened_rate, dec("165.250800"));
        assert_eq!(breakdown.reference_total_cost, dec("165250.800000"));
    }

    /// RC-004: cascade is the identity when all burdens are zero
    #[test]
    fn test_identity_when_burdens_zero() {
        let breakdown = cascade(
            dec("155.00"),
            ClearanceLevel::None,
            dec("800"),
            dec("100"),
            settings("0", "0", "0"),
        );
        assert_eq!(breakdown.burdened_rate, dec("155.00"));
        assert_eq!(breakdown.overhead_amount, dec("0"));
        assert_eq!(breakdown.ga_amount, dec("0"));
        assert_eq!(breakdown.fee_amount, dec("0"));
        assert_eq!(breakdown.reference_total_cost, dec("124000.0000"));
    }

    /// RC-005: amounts reconstruct the burdened total
    #[test]
    fn test_amounts_reconstruct_total() {
        let breakdown = cascade(
            dec("85.50"),
            ClearanceLevel::TopSecret,
            dec("1880"),
            dec("75"),
            settings("0.35", "0.10", "0.06"),
        );

        let reconstructed = breakdown.overhead_amount
            + breakdown.ga_amount
            + breakdown.fee_amount
            + breakdown.clearance_adjusted_rate * breakdown.effective_hours;
        assert_eq!(reconstructed, breakdown.reference_total_cost);
    }

    /// RC-006: negative inputs propagate instead of failing
    #[test]
    fn test_negative_inputs_propagate() {
        let breakdown = cascade(
            dec("-50"),
            ClearanceLevel::None,
            dec("100"),
            dec("100"),
            settings("0.30", "0.08", "0.07"),
        );
        assert!(breakdown.burdened_rate < Decimal::ZERO);
        assert!(breakdown.reference_total_cost < Decimal::ZERO);
    }

    /// RC-007: zero hours yield zero amounts but a nonzero burdened rate
    #[test]
    fn test_zero_hours() {
        let breakdown = cascade(
            dec("100"),
            ClearanceLevel::Secret,
            dec("0"),
            dec("100"),
            settings("0.30", "0.08", "0.07"),
        );
        assert_eq!(breakdown.effective_hours, Decimal::ZERO);
        assert_eq!(breakdown.overhead_amount, Decimal::ZERO);
        assert_eq!(breakdown.reference_total_cost, Decimal::ZERO);
        assert!(breakdown.burdened_rate > Decimal::ZERO);
    }

    proptest! {
        /// RC-P01: burdened rate is monotonically non-decreasing in each
        /// burden rate for non-negative inputs.
        #[test]
        fn prop_burdened_rate_monotonic(
            base in 0u32..500,
            overhead in 0u32..100,
            ga in 0u32..50,
            fee in 0u32..20,
            bump in 1u32..10,
        ) {
            let base = Decimal::from(base);
            let s = PricingSettings {
                overhead_rate: Decimal::new(overhead as i64, 2),
                ga_rate: Decimal::new(ga as i64, 2),
                fee_rate: Decimal::new(fee as i64, 2),
            };
            let hours = dec("1000");
            let fte = dec("100");
            let baseline = cascade(base, ClearanceLevel::None, hours, fte, s);

            let bumped_overhead = PricingSettings {
                overhead_rate: s.overhead_rate + Decimal::new(bump as i64, 2),
                ..s
            };
            let bumped_ga = PricingSettings {
                ga_rate: s.ga_rate + Decimal::new(bump as i64, 2),
                ..s
            };
            let bumped_fee = PricingSettings {
                fee_rate: s.fee_rate + Decimal::new(bump as i64, 2),
                ..s
            };

            prop_assert!(
                cascade(base, ClearanceLevel::None, hours, fte, bumped_overhead).burdened_rate
                    >= baseline.burdened_rate
            );
            prop_assert!(
                cascade(base, ClearanceLevel::None, hours, fte, bumped_ga).burdened_rate
                    >= baseline.burdened_rate
            );
            prop_assert!(
                cascade(base, ClearanceLevel::None, hours, fte, bumped_fee).burdened_rate
                    >= baseline.burdened_rate
            );
            // Clearance premium ordering
            prop_assert!(
                cascade(base, ClearanceLevel::TopSecret, hours, fte, s).burdened_rate
                    >= cascade(base, ClearanceLevel::Secret, hours, fte, s).burdened_rate
            );
        }

        /// RC-P02: layer amounts always reconstruct the reference total.
        #[test]
        fn prop_amounts_reconstruct(
            base in 0u32..500,
            hours in 0u32..10_000,
            fte in 1u32..10_000,
            overhead in 0u32..100,
            ga in 0u32..50,
            fee in 0u32..20,
        ) {
            let s = PricingSettings {
                overhead_rate: Decimal::new(overhead as i64, 2),
                ga_rate: Decimal::new(ga as i64, 2),
                fee_rate: Decimal::new(fee as i64, 2),
            };
            let breakdown = cascade(
                Decimal::from(base),
                ClearanceLevel::PublicTrust,
                Decimal::from(hours),
                Decimal::new(fte as i64, 2),
                s,
            );
            let reconstructed = breakdown.overhead_amount
                + breakdown.ga_amount
                + breakdown.fee_amount
                + breakdown.clearance_adjusted_rate * breakdown.effective_hours;
            prop_assert_eq!(reconstructed, breakdown.reference_total_cost);
        }
    }
}
