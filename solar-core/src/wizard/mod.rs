//! Multi-step calculator wizard.
//!
//! The wizard owns the [`SavingsInput`] being collected and the user's
//! position in the form. The view writes field values through the setters
//! and moves between steps with [`Wizard::advance`] and [`Wizard::retreat`].
//! Forward moves are gated by the step being left; backward moves are free.
//! [`Wizard::submit`], accepted only on the contact step, runs the calculation and ends in
//! the terminal [`WizardPosition::Results`] position, which only
//! [`Wizard::reset`] leaves.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::RadiationTable;
//! use solar_core::wizard::{Wizard, WizardPosition, WizardStep};
//!
//! let mut wizard = Wizard::new(RadiationTable::builtin());
//!
//! wizard.set_monthly_gas_bill(800);
//! wizard.advance(WizardStep::WaterHeating).unwrap();
//! wizard.advance(WizardStep::Household).unwrap();
//! wizard.advance(WizardStep::Region).unwrap();
//! wizard.set_region("Sonora");
//! wizard.advance(WizardStep::Contact).unwrap();
//!
//! let result = wizard.submit("Ana", "ana@example.com").unwrap();
//!
//! assert_eq!(result.annual_savings, dec!(3648));
//! assert_eq!(wizard.position(), WizardPosition::Results);
//! ```

pub mod validation;

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::calculations::SavingsCalculator;
use crate::models::{SavingsInput, SavingsResult, WaterHeatShare};
use crate::radiation::{RadiationTable, RegionRadiation};

pub use validation::{InputField, ValidationError};

/// The five input steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WizardStep {
    /// Step 1: monthly gas bill.
    GasBill,
    /// Step 2: share of the bill spent on hot water.
    WaterHeating,
    /// Step 3: household size.
    Household,
    /// Step 4: state / region.
    Region,
    /// Step 5: name and email.
    Contact,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::GasBill,
            WizardStep::WaterHeating,
            WizardStep::Household,
            WizardStep::Region,
            WizardStep::Contact,
        ]
    }

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            Self::GasBill => 1,
            Self::WaterHeating => 2,
            Self::Household => 3,
            Self::Region => 4,
            Self::Contact => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|step| step.number() == number)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "step {}", self.number())
    }
}

/// Where the user is in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WizardPosition {
    Step(WizardStep),
    /// Results are on screen. Only a reset leaves this position.
    Results,
}

/// Progress dot state for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

/// Errors returned by wizard commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Contact details can only be submitted from the last step.
    #[error("cannot submit from {0}; contact details belong to step 5")]
    NotOnContactStep(WizardStep),

    /// The wizard already shows results and must be reset first.
    #[error("the estimate is already complete; reset to start again")]
    Finished,
}

impl WizardError {
    /// The field to highlight, if the error came from validation.
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::Validation(err) => Some(err.field()),
            Self::NotOnContactStep(_) | Self::Finished => None,
        }
    }
}

/// Owned copy of the wizard state for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub position: WizardPosition,
    pub input: SavingsInput,
    pub progress_percent: u8,
}

/// State machine for one calculator session.
#[derive(Debug, Clone)]
pub struct Wizard<'a> {
    radiation: &'a RadiationTable,
    position: WizardPosition,
    input: SavingsInput,
    result: Option<SavingsResult>,
}

impl<'a> Wizard<'a> {
    /// Creates a wizard on step 1 with default input.
    pub fn new(radiation: &'a RadiationTable) -> Self {
        Self {
            radiation,
            position: WizardPosition::Step(WizardStep::GasBill),
            input: SavingsInput::default(),
            result: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn position(&self) -> WizardPosition {
        self.position
    }

    /// Current input step, `None` once results are shown.
    pub fn current_step(&self) -> Option<WizardStep> {
        match self.position {
            WizardPosition::Step(step) => Some(step),
            WizardPosition::Results => None,
        }
    }

    pub fn input(&self) -> &SavingsInput {
        &self.input
    }

    /// The result of the last successful submission, until reset.
    pub fn result(&self) -> Option<&SavingsResult> {
        self.result.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.position == WizardPosition::Results
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            position: self.position,
            input: self.input.clone(),
            progress_percent: self.progress_percent(),
        }
    }

    /// Width of the progress bar: 20% per step reached.
    pub fn progress_percent(&self) -> u8 {
        match self.position {
            WizardPosition::Step(step) => step.number() * 20,
            WizardPosition::Results => 100,
        }
    }

    /// Status of the progress dot for `step`.
    pub fn step_status(
        &self,
        step: WizardStep,
    ) -> StepStatus {
        match self.position {
            WizardPosition::Step(current) if step < current => StepStatus::Done,
            WizardPosition::Step(current) if step == current => StepStatus::Active,
            WizardPosition::Step(_) => StepStatus::Pending,
            WizardPosition::Results => StepStatus::Done,
        }
    }

    /// Radiation details for the selected region, `None` until one is set.
    pub fn region_preview(&self) -> Option<RegionRadiation> {
        if self.input.region.is_empty() {
            None
        } else {
            Some(self.radiation.describe(&self.input.region))
        }
    }

    // -------------------------------------------------------------------------
    // Field setters
    // -------------------------------------------------------------------------

    pub fn set_monthly_gas_bill(
        &mut self,
        amount: u32,
    ) {
        self.input.monthly_gas_bill = Decimal::from(amount);
    }

    pub fn set_water_heat_share(
        &mut self,
        share: WaterHeatShare,
    ) {
        self.input.water_heat_share = share;
    }

    pub fn set_household_size(
        &mut self,
        size: u8,
    ) {
        self.input.household_size = size;
    }

    pub fn set_region(
        &mut self,
        region: &str,
    ) {
        self.input.region = region.trim().to_string();
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Moves forward to `target` if the current step's fields are valid.
    ///
    /// Leaving step 1 checks the gas bill range. Entering the contact step
    /// requires a region. On failure the position is unchanged.
    ///
    /// # Errors
    ///
    /// * [`WizardError::Validation`] naming the failing field.
    /// * [`WizardError::Finished`] when results are already shown.
    pub fn advance(
        &mut self,
        target: WizardStep,
    ) -> Result<(), WizardError> {
        let current = self.active_step()?;

        self.validate_leaving(current, target).inspect_err(|err| {
            debug!(
                from = %current,
                to = %target,
                field = err.field().as_str(),
                "step validation failed"
            );
        })?;

        debug!(from = %current, to = %target, "advancing");
        self.position = WizardPosition::Step(target);
        Ok(())
    }

    /// Moves back to `target` without validation.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Finished`] when results are already shown.
    pub fn retreat(
        &mut self,
        target: WizardStep,
    ) -> Result<(), WizardError> {
        let current = self.active_step()?;

        debug!(from = %current, to = %target, "retreating");
        self.position = WizardPosition::Step(target);
        Ok(())
    }

    /// Validates the contact details, calculates the estimate and shows it.
    ///
    /// Both values are trimmed. The name is checked before the email.
    ///
    /// # Errors
    ///
    /// * [`WizardError::NotOnContactStep`] before step 5 is reached, so the
    ///   step 1 and region checks cannot be skipped.
    /// * [`WizardError::Validation`] with [`ValidationError::NameTooShort`]
    ///   or [`ValidationError::InvalidEmail`]; nothing is stored.
    /// * [`WizardError::Finished`] when results are already shown.
    pub fn submit(
        &mut self,
        name: &str,
        email: &str,
    ) -> Result<SavingsResult, WizardError> {
        let current = self.active_step()?;
        if current != WizardStep::Contact {
            debug!(from = %current, "submit before contact step");
            return Err(WizardError::NotOnContactStep(current));
        }

        let name = name.trim();
        let email = email.trim();
        validation::validate_name(name)?;
        validation::validate_email(email)?;

        self.input.name = name.to_string();
        self.input.email = email.to_string();

        let result = SavingsCalculator::new(self.radiation).calculate(&self.input);
        info!(
            region = %self.input.region,
            annual_savings = %result.annual_savings,
            "estimate complete"
        );

        self.position = WizardPosition::Results;
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Discards all input and returns to step 1. Safe to call at any time.
    pub fn reset(&mut self) {
        debug!("resetting wizard");
        self.position = WizardPosition::Step(WizardStep::GasBill);
        self.input = SavingsInput::default();
        self.result = None;
    }

    fn active_step(&self) -> Result<WizardStep, WizardError> {
        self.current_step().ok_or(WizardError::Finished)
    }

    fn validate_leaving(
        &self,
        current: WizardStep,
        target: WizardStep,
    ) -> Result<(), ValidationError> {
        if current == WizardStep::GasBill {
            validation::validate_gas_bill(self.input.monthly_gas_bill)?;
        }
        if target == WizardStep::Contact {
            validation::validate_region(&self.input.region)?;
        }
        Ok(())
    }
}
