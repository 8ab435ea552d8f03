use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Solar water heater size recommended for a household category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentTier {
    Small,
    Medium,
    Large,
}

impl EquipmentTier {
    /// Installed cost used when the household size has no tier.
    pub const FALLBACK_COST: Decimal = Decimal::from_parts(18000, 0, 0, false, 0);

    /// Tier for a household size category (1, 2 or 3).
    pub fn for_household(size: u8) -> Option<Self> {
        match size {
            1 => Some(Self::Small),
            2 => Some(Self::Medium),
            3 => Some(Self::Large),
            _ => None,
        }
    }

    pub fn cost(&self) -> Decimal {
        match self {
            Self::Small => Decimal::from(14000),
            Self::Medium => Decimal::from(18000),
            Self::Large => Decimal::from(24000),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Sistema pequeño",
            Self::Medium => "Sistema mediano",
            Self::Large => "Sistema grande",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Small => "Ideal para 1-2 personas",
            Self::Medium => "Ideal para 3-4 personas",
            Self::Large => "Ideal para 5+ personas",
        }
    }
}

/// Installed equipment cost for a household size, falling back to the
/// medium system price for sizes outside 1..=3.
pub fn equipment_cost(household_size: u8) -> Decimal {
    EquipmentTier::for_household(household_size)
        .map(|tier| tier.cost())
        .unwrap_or_else(|| {
            tracing::debug!(household_size, "unknown household size, using fallback cost");
            EquipmentTier::FALLBACK_COST
        })
}
