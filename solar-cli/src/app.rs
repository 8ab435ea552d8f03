//! Drives the calculator wizard from a set of [`Answers`].
//!
//! The terminal front end plays the part of the web page: it writes each
//! answer into the wizard, advances one step at a time exactly as the
//! "next" buttons would, and submits the contact details at the end.

use std::{borrow::Cow, fs::File, path::Path};

use anyhow::Context;
use solar_core::{
    InputField, ParseWaterHeatShareError, RadiationTable, SavingsResult, WaterHeatShare, Wizard,
    WizardError, WizardStep,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::answers::Answers;

/// Reasons the wizard could not be completed.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error(transparent)]
    WaterHeating(#[from] ParseWaterHeatShareError),

    #[error("{step}: {source}")]
    Step {
        step: WizardStep,
        #[source]
        source: WizardError,
    },
}

impl EstimateError {
    /// The input field to point the user at.
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::WaterHeating(_) => None,
            Self::Step { source, .. } => source.field(),
        }
    }
}

/// A completed estimate with the details the report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub name: String,
    pub region: String,
    pub household_size: u8,
    pub result: SavingsResult,
}

/// Loads the radiation table from `path`, or uses the built-in table.
pub fn load_radiation_table(path: Option<&Path>) -> anyhow::Result<Cow<'static, RadiationTable>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(RadiationTable::builtin()));
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open radiation table: {}", path.display()))?;
    let table = RadiationTable::from_csv(file)
        .with_context(|| format!("Failed to load radiation table: {}", path.display()))?;

    info!(path = %path.display(), regions = table.len(), "loaded radiation table");
    Ok(Cow::Owned(table))
}

/// Walks a fresh wizard through all five steps and submits it.
///
/// # Errors
///
/// * [`EstimateError::WaterHeating`] if the water heating answer is not one
///   of the offered options.
/// * [`EstimateError::Step`] naming the step whose validation failed.
pub fn run_wizard(
    table: &RadiationTable,
    answers: &Answers,
) -> Result<Estimate, EstimateError> {
    let mut wizard = Wizard::new(table);

    if let Some(bill) = answers.gas_bill {
        wizard.set_monthly_gas_bill(bill);
    }
    advance(&mut wizard, WizardStep::WaterHeating)?;

    if let Some(share) = &answers.water_heating {
        wizard.set_water_heat_share(share.parse::<WaterHeatShare>()?);
    }
    advance(&mut wizard, WizardStep::Household)?;

    if let Some(size) = answers.household {
        wizard.set_household_size(size);
    }
    advance(&mut wizard, WizardStep::Region)?;

    if let Some(region) = &answers.region {
        wizard.set_region(region);
        if let Some(preview) = wizard.region_preview() {
            debug!(
                region = %preview.region,
                index = %preview.index,
                quality = preview.quality.label(),
                known = preview.known,
                "region selected"
            );
        }
    }
    advance(&mut wizard, WizardStep::Contact)?;

    let result = wizard
        .submit(
            answers.name.as_deref().unwrap_or_default(),
            answers.email.as_deref().unwrap_or_default(),
        )
        .map_err(|source| EstimateError::Step {
            step: WizardStep::Contact,
            source,
        })?;

    let input = wizard.input();
    Ok(Estimate {
        name: input.name.clone(),
        region: input.region.clone(),
        household_size: input.household_size,
        result,
    })
}

fn advance(
    wizard: &mut Wizard<'_>,
    target: WizardStep,
) -> Result<(), EstimateError> {
    let step = wizard.current_step().unwrap_or(target);
    wizard
        .advance(target)
        .map_err(|source| EstimateError::Step { step, source })
}
