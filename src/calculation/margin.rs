//! Company-internal margin reconciliation.
//!
//! This module computes the minimum viable rate for a labor category
//! (wrap plus minimum profit layered on the pay-band salary) and the
//! actual cost/profit/discount metrics driven by the negotiated final
//! rate. The burdened reference rate never enters these formulas.

use rust_decimal::Decimal;

use crate::models::MarginBreakdown;
use crate::settings::SystemSettings;

/// Computes the margin reconciliation for one labor category.
///
/// `company_role_rate` is the staffing role's annual pay-band salary;
/// `final_rate` is the negotiated hourly rate actually billed;
/// `lcat_rate` is the catalog ceiling rate (zero when unlinked).
///
/// Settings are taken as an explicit snapshot so callers re-read the
/// store on every pass instead of memoizing across an admin update.
///
/// Arithmetic edge cases never fail: zero effective hours yield a zero
/// company minimum rate, a zero actual cost yields a zero profit
/// percentage, and a non-positive catalog rate yields a zero discount.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::margin;
/// use pricing_engine::settings::SystemSettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let settings = SystemSettings::new(dec("55"), dec("10"));
/// let breakdown = margin(
///     dec("120000"),
///     dec("1920"),
///     dec("1"),
///     dec("150.00"),
///     dec("165.00"),
///     &settings,
/// );
/// assert_eq!(breakdown.wrap_amount, dec("66000"));
/// assert_eq!(breakdown.minimum_annual_revenue, dec("204600"));
/// ```
pub fn margin(
    company_role_rate: Decimal,
    effective_hours: Decimal,
    capacity: Decimal,
    final_rate: Decimal,
    lcat_rate: Decimal,
    settings: &SystemSettings,
) -> MarginBreakdown {
    let annual_salary = company_role_rate;
    let wrap_amount = annual_salary * settings.wrap_rate / Decimal::ONE_HUNDRED;
    let minimum_profit_amount =
        (annual_salary + wrap_amount) * settings.minimum_profit_rate / Decimal::ONE_HUNDRED;
    let minimum_annual_revenue = annual_salary + wrap_amount + minimum_profit_amount;

    let company_minimum_rate = if effective_hours > Decimal::ZERO {
        minimum_annual_revenue / effective_hours
    } else {
        Decimal::ZERO
    };

    let billed_total_cost = final_rate * effective_hours * capacity;
    let actual_cost = (annual_salary + wrap_amount) * capacity;
    let actual_profit = billed_total_cost - actual_cost;

    let actual_profit_percentage = if actual_cost != Decimal::ZERO {
        actual_profit / actual_cost * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let final_rate_discount = if lcat_rate > Decimal::ZERO {
        (lcat_rate - final_rate) / lcat_rate * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    MarginBreakdown {
        annual_salary,
        wrap_amount,
        minimum_profit_amount,
        minimum_annual_revenue,
        company_minimum_rate,
        billed_total_cost,
        actual_cost,
        actual_profit,
        actual_profit_percentage,
        final_rate_discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn default_settings() -> SystemSettings {
        SystemSettings::new(dec("55"), dec("10"))
    }

    /// MM-001: wrap and minimum-profit layering
    #[test]
    fn test_wrap_and_minimum_profit_layering() {
        let breakdown = margin(
            dec("120000"),
            dec("1920"),
            dec("1"),
            dec("150.00"),
            dec("0"),
            &default_settings(),
        );

        assert_eq!(breakdown.annual_salary, dec("120000"));
        // 120000 * 55%
        assert_eq!(breakdown.wrap_amount, dec("66000"));
        // (120000 + 66000) * 10%
        assert_eq!(breakdown.minimum_profit_amount, dec("18600"));
        assert_eq!(breakdown.minimum_annual_revenue, dec("204600"));
        // 204600 / 1920
        assert_eq!(breakdown.company_minimum_rate, dec("106.5625"));
    }

    /// MM-002: company minimum rate is zero when effective hours are zero
    #[test]
    fn test_company_minimum_rate_zero_hours() {
        let breakdown = margin(
            dec("120000"),
            dec("0"),
            dec("1"),
            dec("150.00"),
            dec("0"),
            &default_settings(),
        );
        assert_eq!(breakdown.company_minimum_rate, Decimal::ZERO);
    }

    /// MM-003: billed cost uses the final rate, not the burdened rate
    #[test]
    fn test_billed_cost_from_final_rate_and_capacity() {
        let breakdown = margin(
            dec("120000"),
            dec("1000"),
            dec("3"),
            dec("150.00"),
            dec("0"),
            &default_settings(),
        );
        // 150 * 1000 * 3
        assert_eq!(breakdown.billed_total_cost, dec("450000"));
        // (120000 + 66000) * 3
        assert_eq!(breakdown.actual_cost, dec("558000"));
        assert_eq!(breakdown.actual_profit, dec("-108000"));
    }

    /// MM-004: actual profit percentage against actual cost
    #[test]
    fn test_actual_profit_percentage() {
        let breakdown = margin(
            dec("100000"),
            dec("2000"),
            dec("1"),
            dec("100.00"),
            dec("0"),
            &default_settings(),
        );
        // billed 200000, actual cost 155000, profit 45000
        assert_eq!(breakdown.billed_total_cost, dec("200000"));
        assert_eq!(breakdown.actual_cost, dec("155000"));
        assert_eq!(breakdown.actual_profit, dec("45000"));
        // 45000 / 155000 * 100
        let expected = dec("45000") / dec("155000") * dec("100");
        assert_eq!(breakdown.actual_profit_percentage, expected);
    }

    /// MM-005: profit percentage guard when actual cost is zero
    #[test]
    fn test_profit_percentage_zero_when_cost_zero() {
        let breakdown = margin(
            dec("0"),
            dec("1000"),
            dec("0"),
            dec("150.00"),
            dec("0"),
            &default_settings(),
        );
        assert_eq!(breakdown.actual_cost, Decimal::ZERO);
        assert_eq!(breakdown.actual_profit_percentage, Decimal::ZERO);
    }

    /// MM-006: discount sign convention against the catalog rate
    #[test]
    fn test_final_rate_discount_signs() {
        let settings = default_settings();

        // Final rate undercuts the catalog: positive discount
        let under = margin(
            dec("120000"),
            dec("1920"),
            dec("1"),
            dec("148.50"),
            dec("165.00"),
            &settings,
        );
        assert_eq!(under.final_rate_discount, dec("10"));

        // Final rate exceeds the catalog: negative discount
        let over = margin(
            dec("120000"),
            dec("1920"),
            dec("1"),
            dec("181.50"),
            dec("165.00"),
            &settings,
        );
        assert_eq!(over.final_rate_discount, dec("-10"));
    }

    /// MM-007: discount guard when the catalog rate is zero or negative
    #[test]
    fn test_discount_zero_when_lcat_rate_not_positive() {
        let settings = default_settings();

        let unlinked = margin(
            dec("120000"),
            dec("1920"),
            dec("1"),
            dec("150.00"),
            dec("0"),
            &settings,
        );
        assert_eq!(unlinked.final_rate_discount, Decimal::ZERO);

        let negative = margin(
            dec("120000"),
            dec("1920"),
            dec("1"),
            dec("150.00"),
            dec("-5"),
            &settings,
        );
        assert_eq!(negative.final_rate_discount, Decimal::ZERO);
    }

    /// MM-008: settings snapshot drives the wrap figures
    #[test]
    fn test_updated_settings_change_wrap() {
        let before = margin(
            dec("100000"),
            dec("2000"),
            dec("1"),
            dec("100.00"),
            dec("0"),
            &SystemSettings::new(dec("55"), dec("10")),
        );
        let after = margin(
            dec("100000"),
            dec("2000"),
            dec("1"),
            dec("100.00"),
            dec("0"),
            &SystemSettings::new(dec("60"), dec("12")),
        );

        assert_eq!(before.wrap_amount, dec("55000"));
        assert_eq!(after.wrap_amount, dec("60000"));
        assert_eq!(after.minimum_profit_amount, dec("19200"));
    }
}
