mod equipment_tier;
mod savings_input;
mod savings_result;
mod water_heat_share;

pub use equipment_tier::{EquipmentTier, equipment_cost};
pub use savings_input::SavingsInput;
pub use savings_result::SavingsResult;
pub use water_heat_share::{ParseWaterHeatShareError, WaterHeatShare};
