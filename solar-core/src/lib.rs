pub mod calculations;
pub mod models;
pub mod radiation;
pub mod wizard;

pub use calculations::{SavingsCalculator, calculate};
pub use models::*;
pub use radiation::{RadiationQuality, RadiationTable, RadiationTableError, RegionRadiation};
pub use wizard::{InputField, ValidationError, Wizard, WizardError, WizardPosition, WizardStep};
