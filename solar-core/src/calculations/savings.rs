//! Solar water heating savings estimate.
//!
//! Converts a completed [`SavingsInput`] into the figures shown on the results
//! page. The calculation is pure: the same input and radiation table always
//! produce the same [`SavingsResult`].
//!
//! # Formula
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Monthly hot water cost = gas bill × water heating share |
//! | 2    | Annual hot water cost = step 1 × 12 |
//! | 3    | Solar index = radiation table lookup (default when unknown) |
//! | 4    | Coverage = min(0.70 + (index − 5.0) × 0.05, 0.90) |
//! | 5    | Annual savings = step 2 × coverage |
//! | 6    | Equipment cost by household size (18,000 when unknown) |
//! | 7    | Payback years = equipment cost ÷ annual savings |
//! | 8    | 5 and 10 year net = annual savings × years − equipment cost |
//! | 9    | CO2 avoided = annual savings × 0.45 kg |
//! | 10   | Remaining gas cost = step 2 − annual savings |
//!
//! Coverage has a ceiling but no floor.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::calculations::SavingsCalculator;
//! use solar_core::{RadiationTable, SavingsInput};
//!
//! let input = SavingsInput {
//!     region: "Sonora".to_string(),
//!     ..SavingsInput::default()
//! };
//!
//! let calculator = SavingsCalculator::new(RadiationTable::builtin());
//! let result = calculator.calculate(&input);
//!
//! assert_eq!(result.annual_savings, dec!(3648));
//! assert_eq!(result.solar_coverage_percent, dec!(76));
//! assert_eq!(result.roi_years, Some(dec!(4.9)));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{min, round_tenth, round_whole};
use crate::models::{SavingsInput, SavingsResult, equipment_cost};
use crate::radiation::RadiationTable;

const MONTHS_PER_YEAR: i64 = 12;

/// Coverage at the reference radiation index.
const BASE_COVERAGE: Decimal = Decimal::from_parts(70, 0, 0, false, 2);

/// Radiation index at which coverage equals [`BASE_COVERAGE`].
const REFERENCE_INDEX: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

/// Coverage gained per kWh/m²/day above the reference index.
const COVERAGE_PER_INDEX: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

const MAX_COVERAGE: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// Kilograms of CO2 per peso of gas saved.
const CO2_KG_PER_PESO: Decimal = Decimal::from_parts(45, 0, 0, false, 2);

/// Calculator for the solar savings estimate.
///
/// Holds the radiation table used to resolve the input's region.
#[derive(Debug, Clone, Copy)]
pub struct SavingsCalculator<'a> {
    radiation: &'a RadiationTable,
}

impl<'a> SavingsCalculator<'a> {
    pub fn new(radiation: &'a RadiationTable) -> Self {
        Self { radiation }
    }

    /// Calculates the complete savings estimate.
    ///
    /// Contact fields are ignored. Unknown regions and household sizes fall
    /// back to their documented defaults. When annual savings come out as
    /// zero, `roi_years` is `None`.
    pub fn calculate(
        &self,
        input: &SavingsInput,
    ) -> SavingsResult {
        let monthly_cost = self.monthly_water_heating_cost(
            input.monthly_gas_bill,
            input.water_heat_share.fraction(),
        );
        let annual_cost = self.annual_water_heating_cost(monthly_cost);

        let solar_index = self.radiation.lookup(&input.region);
        let coverage = solar_coverage(solar_index);

        let annual_savings = self.annual_savings(annual_cost, coverage);
        let monthly_savings = annual_savings / Decimal::from(MONTHS_PER_YEAR);

        let equipment_cost = equipment_cost(input.household_size);
        let roi_years = self.roi_years(equipment_cost, annual_savings);

        let savings_5_years = self.net_savings(annual_savings, equipment_cost, 5);
        let savings_10_years = self.net_savings(annual_savings, equipment_cost, 10);

        let co2_avoided = annual_savings * CO2_KG_PER_PESO;
        let remaining_gas_cost = annual_cost - annual_savings;

        debug!(
            region = %input.region,
            %solar_index,
            %coverage,
            %annual_savings,
            "calculated savings estimate"
        );

        SavingsResult {
            monthly_water_heating_cost: round_whole(monthly_cost),
            annual_water_heating_cost: round_whole(annual_cost),
            annual_savings: round_whole(annual_savings),
            monthly_savings: round_whole(monthly_savings),
            solar_coverage_percent: round_whole(coverage * Decimal::ONE_HUNDRED),
            equipment_cost,
            roi_years,
            savings_5_years: round_whole(savings_5_years),
            savings_10_years: round_whole(savings_10_years),
            co2_avoided_kg: round_whole(co2_avoided),
            remaining_gas_cost: round_whole(remaining_gas_cost),
            solar_index,
        }
    }

    fn monthly_water_heating_cost(
        &self,
        gas_bill: Decimal,
        share: Decimal,
    ) -> Decimal {
        gas_bill * share
    }

    fn annual_water_heating_cost(
        &self,
        monthly_cost: Decimal,
    ) -> Decimal {
        monthly_cost * Decimal::from(MONTHS_PER_YEAR)
    }

    fn annual_savings(
        &self,
        annual_cost: Decimal,
        coverage: Decimal,
    ) -> Decimal {
        annual_cost * coverage
    }

    /// Payback period to one decimal, `None` when nothing is saved.
    fn roi_years(
        &self,
        equipment_cost: Decimal,
        annual_savings: Decimal,
    ) -> Option<Decimal> {
        match equipment_cost.checked_div(annual_savings) {
            Some(years) => Some(round_tenth(years)),
            None => {
                warn!(%equipment_cost, "annual savings are zero, payback period not computable");
                None
            }
        }
    }

    fn net_savings(
        &self,
        annual_savings: Decimal,
        equipment_cost: Decimal,
        years: i64,
    ) -> Decimal {
        annual_savings * Decimal::from(years) - equipment_cost
    }
}

/// Fraction of the hot water need a solar heater covers at `solar_index`.
///
/// Grows by 5 points per kWh/m²/day from 70% at an index of 5.0 and is capped
/// at 90%. There is no lower bound.
pub fn solar_coverage(solar_index: Decimal) -> Decimal {
    min(
        BASE_COVERAGE + (solar_index - REFERENCE_INDEX) * COVERAGE_PER_INDEX,
        MAX_COVERAGE,
    )
}

/// Calculates a savings estimate against the built-in radiation table.
pub fn calculate(input: &SavingsInput) -> SavingsResult {
    SavingsCalculator::new(RadiationTable::builtin()).calculate(input)
}
