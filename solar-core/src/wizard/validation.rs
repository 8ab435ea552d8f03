//! Step-local field validation.
//!
//! Each check covers exactly one field and reports the field that failed so
//! the view can highlight it. Later steps never re-check earlier fields.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

pub const MIN_GAS_BILL: u32 = 100;
pub const MAX_GAS_BILL: u32 = 10_000;
pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// Input fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    MonthlyGasBill,
    Region,
    Name,
    Email,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MonthlyGasBill => "monthly_gas_bill",
            Self::Region => "region",
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

/// A field that does not satisfy its step's constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("monthly gas bill must be between {min} and {max}, got {0}", min = MIN_GAS_BILL, max = MAX_GAS_BILL)]
    GasBillOutOfRange(Decimal),

    #[error("a region must be selected")]
    MissingRegion,

    #[error("name must be at least {min} characters", min = MIN_NAME_CHARS)]
    NameTooShort,

    #[error("email address is not valid")]
    InvalidEmail,
}

impl ValidationError {
    /// The field the view should highlight.
    pub fn field(&self) -> InputField {
        match self {
            Self::GasBillOutOfRange(_) => InputField::MonthlyGasBill,
            Self::MissingRegion => InputField::Region,
            Self::NameTooShort => InputField::Name,
            Self::InvalidEmail => InputField::Email,
        }
    }
}

pub fn validate_gas_bill(amount: Decimal) -> Result<(), ValidationError> {
    if amount >= Decimal::from(MIN_GAS_BILL) && amount <= Decimal::from(MAX_GAS_BILL) {
        Ok(())
    } else {
        Err(ValidationError::GasBillOutOfRange(amount))
    }
}

pub fn validate_region(region: &str) -> Result<(), ValidationError> {
    if region.trim().is_empty() {
        Err(ValidationError::MissingRegion)
    } else {
        Ok(())
    }
}

/// Checks an already trimmed name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < MIN_NAME_CHARS {
        Err(ValidationError::NameTooShort)
    } else {
        Ok(())
    }
}

/// Checks an already trimmed email address against a `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn gas_bill_bounds_are_inclusive() {
        assert_eq!(validate_gas_bill(dec!(100)), Ok(()));
        assert_eq!(validate_gas_bill(dec!(10000)), Ok(()));
    }

    #[test]
    fn gas_bill_outside_bounds_fails() {
        assert_eq!(
            validate_gas_bill(dec!(99)),
            Err(ValidationError::GasBillOutOfRange(dec!(99)))
        );
        assert_eq!(
            validate_gas_bill(dec!(10001)),
            Err(ValidationError::GasBillOutOfRange(dec!(10001)))
        );
    }

    #[test]
    fn blank_region_fails() {
        assert_eq!(validate_region("  "), Err(ValidationError::MissingRegion));
        assert_eq!(validate_region("Sonora"), Ok(()));
    }

    #[test]
    fn name_needs_two_characters() {
        assert_eq!(validate_name("A"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name(""), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name("Al"), Ok(()));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert_eq!(validate_name("Ñ"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn email_shape() {
        assert_eq!(validate_email("ana@example.com"), Ok(()));
        assert_eq!(validate_email("a.b@mail.example.mx"), Ok(()));
        assert_eq!(validate_email("bad-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("ana@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("ana @example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("ana@@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn errors_name_their_field() {
        assert_eq!(ValidationError::MissingRegion.field(), InputField::Region);
        assert_eq!(ValidationError::InvalidEmail.field().as_str(), "email");
    }
}
