//! Text rendering of estimates and the radiation table.

use std::fmt;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use solar_core::{
    EquipmentTier, RadiationQuality, RadiationTable, SavingsResult, calculations::common,
};

use crate::{
    app::Estimate,
    utils::{format_currency, format_grouped},
};

/// Number of cells in a full-width bar.
pub const BAR_WIDTH: u32 = 40;

/// The solar bar never shrinks below this percentage so it stays visible.
pub const MIN_SOLAR_BAR_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Relative widths of the gas-only and with-solar yearly cost bars, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonBars {
    pub gas_percent: Decimal,
    pub solar_percent: Decimal,
}

impl ComparisonBars {
    pub fn from_result(result: &SavingsResult) -> Self {
        let solar_percent = result
            .remaining_gas_cost
            .checked_div(result.annual_water_heating_cost)
            .map(|share| (share * HUNDRED).max(MIN_SOLAR_BAR_PERCENT))
            .unwrap_or(HUNDRED);

        Self {
            gas_percent: HUNDRED,
            solar_percent,
        }
    }
}

/// Number of filled cells for `percent` of [`BAR_WIDTH`], clamped to the bar.
fn filled_cells(percent: Decimal) -> usize {
    let cells = common::round_whole(percent * Decimal::from(BAR_WIDTH) / HUNDRED);
    cells
        .clamp(Decimal::ZERO, Decimal::from(BAR_WIDTH))
        .to_usize()
        .unwrap_or(0)
}

fn bar(percent: Decimal) -> String {
    "█".repeat(filled_cells(percent))
}

/// A bar padded to full width, used for the coverage gauge.
fn gauge(percent: Decimal) -> String {
    let filled = filled_cells(percent);
    let empty = BAR_WIDTH as usize - filled;
    format!("[{}{}]", "█".repeat(filled), "·".repeat(empty))
}

/// Results page for a completed estimate.
pub struct Report<'a> {
    estimate: &'a Estimate,
}

impl<'a> Report<'a> {
    pub fn new(estimate: &'a Estimate) -> Self {
        Self { estimate }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let estimate = self.estimate;
        let r = &estimate.result;
        let quality = RadiationQuality::classify(r.solar_index);

        writeln!(f, "Resultados para {}", estimate.name)?;
        writeln!(
            f,
            "Radiación solar en {}: {} kWh/m²/día {} {}",
            estimate.region,
            r.solar_index,
            quality.icon(),
            quality.label()
        )?;
        writeln!(f)?;

        writeln!(f, "  {:<24}{} MXN", "Ahorro anual", format_currency(r.annual_savings))?;
        writeln!(f, "  {:<24}{} MXN", "Ahorro mensual", format_currency(r.monthly_savings))?;
        writeln!(
            f,
            "  {:<24}{}%  {}",
            "Cobertura solar",
            r.solar_coverage_percent,
            gauge(r.solar_coverage_percent)
        )?;
        writeln!(f, "  {:<24}{} MXN", "Ahorro neto a 5 años", format_currency(r.savings_5_years))?;
        writeln!(f, "  {:<24}{} MXN", "Ahorro neto a 10 años", format_currency(r.savings_10_years))?;
        match r.roi_years {
            Some(years) => writeln!(f, "  {:<24}{} años", "Retorno de inversión", years)?,
            None => writeln!(f, "  {:<24}N/A", "Retorno de inversión")?,
        }
        writeln!(f, "  {:<24}{} kg/año", "CO2 evitado", format_grouped(r.co2_avoided_kg))?;
        writeln!(f)?;

        let bars = ComparisonBars::from_result(r);
        writeln!(f, "Gasto anual en agua caliente")?;
        writeln!(
            f,
            "  {:<12} {} {}",
            "Solo gas",
            bar(bars.gas_percent),
            format_currency(r.annual_water_heating_cost)
        )?;
        writeln!(
            f,
            "  {:<12} {} {}",
            "Con solar",
            bar(bars.solar_percent),
            format_currency(r.remaining_gas_cost)
        )?;
        writeln!(f)?;

        // Unknown sizes are priced as the medium system and labelled as one.
        match EquipmentTier::for_household(estimate.household_size) {
            Some(tier) => {
                writeln!(f, "Equipo recomendado: {}", tier.label())?;
                writeln!(f, "  {}", tier.description())?;
            }
            None => writeln!(
                f,
                "Equipo recomendado: {}",
                EquipmentTier::Medium.label()
            )?,
        }
        write!(f, "  Precio: {} MXN", format_currency(r.equipment_cost))
    }
}

/// Every region of a radiation table with its index and quality band.
pub struct RegionList<'a> {
    table: &'a RadiationTable,
}

impl<'a> RegionList<'a> {
    pub fn new(table: &'a RadiationTable) -> Self {
        Self { table }
    }
}

impl fmt::Display for RegionList<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rows = self
            .table
            .regions()
            .chain(std::iter::once(("(otra)", self.table.default_index())));

        for (region, index) in rows {
            let quality = RadiationQuality::classify(index);
            writeln!(
                f,
                "{:<24}{:>4} kWh/m²/día  {} {}",
                region,
                index,
                quality.icon(),
                quality.label()
            )?;
        }
        Ok(())
    }
}
