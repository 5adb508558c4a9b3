//! Interactive calculator command handler.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::Config;
use crate::ui::calculator_tui::run_calculator_app;

/// Execute the interactive form
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let location = super::location_from_args(matches, &config)?;

    run_calculator_app(location, config.grouping_separator).context("Failed to run calculator")
}
