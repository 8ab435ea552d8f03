//! End-to-end tests that drive the wizard the way the view layer does,
//! including a radiation table read from an on-disk fixture.

use std::fs::File;
use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use solar_core::wizard::StepStatus;
use solar_core::{
    InputField, RadiationQuality, RadiationTable, SavingsInput, WaterHeatShare, Wizard,
    WizardError, WizardPosition, WizardStep,
};

fn fixture_table() -> RadiationTable {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("radiation_northwest.csv");
    let file = File::open(path).expect("fixture file should open");
    RadiationTable::from_csv(file).expect("fixture should parse")
}

#[test]
fn test_fixture_table_loads() {
    let table = fixture_table();

    assert_eq!(table.len(), 4);
    assert_eq!(table.lookup("Sinaloa"), dec!(5.6));
    assert_eq!(table.default_index(), dec!(5.5));
}

#[test]
fn test_full_flow_with_back_navigation() {
    let table = RadiationTable::builtin();
    let mut wizard = Wizard::new(table);

    wizard.set_monthly_gas_bill(1200);
    wizard.advance(WizardStep::WaterHeating).unwrap();
    wizard.set_water_heat_share(WaterHeatShare::High);
    wizard.advance(WizardStep::Household).unwrap();
    wizard.set_household_size(1);
    wizard.advance(WizardStep::Region).unwrap();

    // Change of mind on household size.
    wizard.retreat(WizardStep::Household).unwrap();
    assert_eq!(wizard.step_status(WizardStep::Region), StepStatus::Pending);
    wizard.set_household_size(3);
    wizard.advance(WizardStep::Region).unwrap();

    wizard.set_region("Chihuahua");
    assert_eq!(
        wizard.region_preview().map(|p| p.quality),
        Some(RadiationQuality::Excellent)
    );
    wizard.advance(WizardStep::Contact).unwrap();

    let result = wizard.submit("Luis", "luis@example.mx").unwrap();

    // 1200 × 0.70 = 840 per month, 10080 per year
    assert_eq!(result.monthly_water_heating_cost, dec!(840));
    assert_eq!(result.annual_water_heating_cost, dec!(10080));
    // 0.70 + 0.8 × 0.05 = 0.74
    assert_eq!(result.solar_coverage_percent, dec!(74));
    // 10080 × 0.74 = 7459.2
    assert_eq!(result.annual_savings, dec!(7459));
    assert_eq!(result.monthly_savings, dec!(622));
    assert_eq!(result.equipment_cost, dec!(24000));
    // 24000 / 7459.2 = 3.217
    assert_eq!(result.roi_years, Some(dec!(3.2)));
    // 37296 − 24000 = 13296
    assert_eq!(result.savings_5_years, dec!(13296));
    // 74592 − 24000 = 50592
    assert_eq!(result.savings_10_years, dec!(50592));
    // 7459.2 × 0.45 = 3356.64
    assert_eq!(result.co2_avoided_kg, dec!(3357));
    // 10080 − 7459.2 = 2620.8
    assert_eq!(result.remaining_gas_cost, dec!(2621));
    assert_eq!(wizard.progress_percent(), 100);
}

#[test]
fn test_flow_with_loaded_table_uses_its_default() {
    let table = fixture_table();
    let mut wizard = Wizard::new(&table);

    wizard.advance(WizardStep::Region).unwrap();
    wizard.set_region("Yucatán");
    wizard.advance(WizardStep::Contact).unwrap();

    let result = wizard.submit("Ana", "ana@example.com").unwrap();

    // Yucatán is not in the fixture, so its DEFAULT row applies.
    assert_eq!(result.solar_index, dec!(5.5));
    assert_eq!(result.solar_coverage_percent, dec!(73));
}

#[test]
fn test_independent_wizards_do_not_share_state() {
    let table = RadiationTable::builtin();
    let mut first = Wizard::new(table);
    let mut second = Wizard::new(table);

    first.set_monthly_gas_bill(3000);
    first.advance(WizardStep::WaterHeating).unwrap();
    second.set_monthly_gas_bill(42);

    assert_eq!(first.current_step(), Some(WizardStep::WaterHeating));
    assert_eq!(
        second.advance(WizardStep::WaterHeating).unwrap_err().field(),
        Some(InputField::MonthlyGasBill)
    );
    assert_eq!(second.current_step(), Some(WizardStep::GasBill));
}

/// Walks `wizard` from step 1 to the contact step with `region` selected.
fn walk_to_contact(
    wizard: &mut Wizard<'_>,
    region: &str,
) {
    wizard.advance(WizardStep::WaterHeating).unwrap();
    wizard.advance(WizardStep::Household).unwrap();
    wizard.advance(WizardStep::Region).unwrap();
    wizard.set_region(region);
    wizard.advance(WizardStep::Contact).unwrap();
}

#[test]
fn test_results_only_after_validated_steps() {
    let mut wizard = Wizard::new(RadiationTable::builtin());
    wizard.set_monthly_gas_bill(50);

    // Step 1 cannot be skipped by submitting early.
    assert_eq!(
        wizard.submit("Ana", "ana@example.com"),
        Err(WizardError::NotOnContactStep(WizardStep::GasBill))
    );
    assert_eq!(
        wizard.advance(WizardStep::WaterHeating).unwrap_err().field(),
        Some(InputField::MonthlyGasBill)
    );

    wizard.set_monthly_gas_bill(500);
    wizard.advance(WizardStep::WaterHeating).unwrap();
    wizard.advance(WizardStep::Household).unwrap();
    wizard.advance(WizardStep::Region).unwrap();

    // Nor can the region requirement.
    assert_eq!(
        wizard.submit("Ana", "ana@example.com"),
        Err(WizardError::NotOnContactStep(WizardStep::Region))
    );
    assert_eq!(
        wizard.advance(WizardStep::Contact).unwrap_err().field(),
        Some(InputField::Region)
    );

    wizard.set_region("Jalisco");
    wizard.advance(WizardStep::Contact).unwrap();
    let result = wizard.submit("Ana", "ana@example.com").unwrap();

    assert_eq!(result.monthly_water_heating_cost, dec!(250));
    assert_eq!(result.solar_index, dec!(5.3));
    assert_eq!(wizard.position(), WizardPosition::Results);
}

#[test]
fn test_reset_after_results_allows_new_estimate() {
    let mut wizard = Wizard::new(RadiationTable::builtin());
    walk_to_contact(&mut wizard, "Tabasco");
    wizard.submit("Ana", "ana@example.com").unwrap();
    assert_eq!(
        wizard.retreat(WizardStep::Contact),
        Err(WizardError::Finished)
    );

    wizard.reset();

    assert_eq!(wizard.position(), WizardPosition::Step(WizardStep::GasBill));
    assert_eq!(wizard.input(), &SavingsInput::default());
    walk_to_contact(&mut wizard, "Tabasco");
    assert!(wizard.submit("Ana", "ana@example.com").is_ok());
}

#[test]
fn test_free_calculate_matches_wizard_result() {
    let mut wizard = Wizard::new(RadiationTable::builtin());
    walk_to_contact(&mut wizard, "Oaxaca");
    let from_wizard = wizard.submit("Ana", "ana@example.com").unwrap();

    let from_fn = solar_core::calculate(wizard.input());

    assert_eq!(from_wizard, from_fn);
}
