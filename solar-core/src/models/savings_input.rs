use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WaterHeatShare;

/// Values collected across the calculator steps.
///
/// Built up field by field while the user moves through the wizard. Nothing
/// here is validated on write; each step checks its own fields when the user
/// tries to leave it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsInput {
    /// Monthly gas bill in whole pesos.
    pub monthly_gas_bill: Decimal,

    /// Portion of the gas bill that goes to heating water.
    pub water_heat_share: WaterHeatShare,

    /// Household size category (1 = 1-2 people, 2 = 3-4, 3 = 5+).
    pub household_size: u8,

    /// Region key into the radiation table. Empty until a state is selected.
    pub region: String,

    pub name: String,
    pub email: String,
}

impl SavingsInput {
    pub const DEFAULT_GAS_BILL: u32 = 800;
    pub const DEFAULT_HOUSEHOLD_SIZE: u8 = 2;
}

impl Default for SavingsInput {
    fn default() -> Self {
        Self {
            monthly_gas_bill: Decimal::from(Self::DEFAULT_GAS_BILL),
            water_heat_share: WaterHeatShare::default(),
            household_size: Self::DEFAULT_HOUSEHOLD_SIZE,
            region: String::new(),
            name: String::new(),
            email: String::new(),
        }
    }
}
