//! Savings calculations for the solar water heater estimate.
//!
//! This module provides the pure calculation that turns the collected
//! wizard input into the figures shown on the results page, plus the
//! rounding helpers it shares.

pub mod common;
pub mod savings;

pub use savings::{SavingsCalculator, calculate, solar_coverage};
