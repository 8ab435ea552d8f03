use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures shown on the results page, derived from a completed [`SavingsInput`].
///
/// Currency amounts are whole pesos. A fresh result is produced for every
/// calculation; it is never written back into the input.
///
/// [`SavingsInput`]: super::SavingsInput
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Part of the monthly gas bill spent on hot water.
    pub monthly_water_heating_cost: Decimal,

    /// Yearly hot water cost with gas only.
    pub annual_water_heating_cost: Decimal,

    pub annual_savings: Decimal,
    pub monthly_savings: Decimal,

    /// Share of the hot water need covered by the solar heater, in percent.
    pub solar_coverage_percent: Decimal,

    /// Installed price of the recommended system.
    pub equipment_cost: Decimal,

    /// Years until the equipment pays for itself, to one decimal.
    /// `None` when there are no savings to recover the cost from.
    pub roi_years: Option<Decimal>,

    /// Net position after five years (negative while still paying back).
    pub savings_5_years: Decimal,

    /// Net position after ten years.
    pub savings_10_years: Decimal,

    /// Kilograms of CO2 avoided per year.
    pub co2_avoided_kg: Decimal,

    /// Yearly gas spend on hot water that remains with the solar heater.
    pub remaining_gas_cost: Decimal,

    /// Radiation index used for the region, in kWh/m²/day.
    pub solar_index: Decimal,
}
