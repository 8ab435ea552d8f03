use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use solar_cli::{
    answers::Answers,
    app, logging,
    report::{RegionList, Report},
    utils::parse_gas_bill,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Solar water heater savings calculator.
///
/// Walks the five calculator steps with the given answers and prints the
/// estimated savings of replacing gas water heating with a solar heater.
#[derive(Debug, Parser)]
#[command(name = "solar-estimator", version)]
struct Cli {
    /// Monthly gas bill in pesos (100 to 10,000). Default 800.
    #[arg(long, value_parser = parse_gas_bill)]
    gas_bill: Option<u32>,

    /// Share of the gas bill spent heating water.
    /// One of `low`, `typical`, `high` or `0.3`, `0.5`, `0.7`. Default typical.
    #[arg(long)]
    water_heating: Option<String>,

    /// Household size category: 1 = 1-2 people, 2 = 3-4, 3 = 5+. Default 2.
    #[arg(long)]
    household: Option<u8>,

    /// State the home is in, e.g. `Sonora`.
    #[arg(long)]
    region: Option<String>,

    /// Contact name.
    #[arg(long)]
    name: Option<String>,

    /// Contact email.
    #[arg(long)]
    email: Option<String>,

    /// TOML file with answers. Flags given on the command line win.
    #[arg(long, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// CSV file (`region,radiation`) replacing the built-in radiation table.
    #[arg(long, value_name = "FILE")]
    radiation_table: Option<PathBuf>,

    /// Print the radiation table and exit.
    #[arg(long)]
    list_regions: bool,

    /// Log filter, e.g. `debug` or `solar_core=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn flag_answers(&self) -> Answers {
        Answers {
            gas_bill: self.gas_bill,
            water_heating: self.water_heating.clone(),
            household: self.household,
            region: self.region.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let table = app::load_radiation_table(cli.radiation_table.as_deref())?;

    if cli.list_regions {
        print!("{}", RegionList::new(&table));
        return Ok(());
    }

    let file_answers = match &cli.answers {
        Some(path) => Answers::load(path)
            .with_context(|| format!("Failed to read answers: {}", path.display()))?,
        None => Answers::default(),
    };
    let answers = file_answers.overridden_by(cli.flag_answers());
    debug!("answers:\n{answers}");

    let estimate = app::run_wizard(&table, &answers)?;

    println!("{}", Report::new(&estimate));

    Ok(())
}
