//! Multi-year rate escalation projection.
//!
//! This module projects a base rate forward across a period of
//! performance at a compounding annual escalation percentage, producing
//! one point per calendar year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ContractVehicle;

/// One projected year in an escalation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRate {
    /// The calendar year this point applies to.
    pub year: i32,
    /// The escalated rate for the year.
    pub rate: Decimal,
    /// The dollar increase over the previous year (zero for year 0).
    pub escalation_amount: Decimal,
}

/// A complete escalation projection over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationProjection {
    /// One point per calendar year, base year first.
    pub yearly_rates: Vec<YearlyRate>,
    /// Final-year rate minus the base rate.
    pub total_escalation: Decimal,
    /// The rate in the final projected year.
    pub final_rate: Decimal,
}

/// Projects a rate across the calendar years spanned by a date range.
///
/// Compounding is strictly year over year: each year's escalation is a
/// percentage of the previous year's rate, not of the original base.
/// The range is inclusive of both endpoint years; a range whose end year
/// precedes its start year degenerates to the single base-year point
/// rather than erroring.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::project;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let projection = project(
///     dec("100"),
///     dec("0.02"),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// );
/// assert_eq!(projection.yearly_rates.len(), 3);
/// assert_eq!(projection.final_rate, dec("104.04"));
/// ```
pub fn project(
    base_rate: Decimal,
    annual_escalation_rate: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> EscalationProjection {
    let start_year = start_date.year();
    let years = (end_date.year() - start_year).max(0);

    let mut yearly_rates = Vec::with_capacity(years as usize + 1);
    yearly_rates.push(YearlyRate {
        year: start_year,
        rate: base_rate,
        escalation_amount: Decimal::ZERO,
    });

    let mut previous_rate = base_rate;
    for i in 1..=years {
        let escalation_amount = previous_rate * annual_escalation_rate;
        let rate = previous_rate + escalation_amount;
        yearly_rates.push(YearlyRate {
            year: start_year + i,
            rate,
            escalation_amount,
        });
        previous_rate = rate;
    }

    let final_rate = previous_rate;
    EscalationProjection {
        yearly_rates,
        total_escalation: final_rate - base_rate,
        final_rate,
    }
}

/// Projects a rate using a contract vehicle's escalation rate over its
/// active window.
pub fn project_with_vehicle(base_rate: Decimal, vehicle: &ContractVehicle) -> EscalationProjection {
    project(
        base_rate,
        vehicle.escalation_rate,
        vehicle.start_date,
        vehicle.end_date,
    )
}
