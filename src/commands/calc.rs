use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::{Aggregator, Config, MemoryLocation, RawTriple};
use crate::ui::formatters::format_metrics;

/// Compute and print the outputs for a single monitor
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let width = *matches
        .get_one::<f64>("width")
        .context("Width argument is required")?;
    let height = *matches
        .get_one::<f64>("height")
        .context("Height argument is required")?;
    let diagonal = *matches
        .get_one::<f64>("diagonal")
        .context("Diagonal argument is required")?;

    let config = Config::load()?;
    let mut aggregator = Aggregator::new(
        MemoryLocation::new(config.share_base()?),
        config.grouping_separator,
    );
    let id = aggregator.add_entry(Some(RawTriple::new(width, height, diagonal)));
    let entry = aggregator
        .entry(id)
        .context("Entry disappeared right after being added")?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    println!(
        "{} {} × {} @ {}\"",
        "Monitor:".white().bold(),
        width,
        height,
        diagonal
    );

    if entry.metrics.is_none() {
        println!(
            "{}",
            "Width, height and diagonal must all be finite and greater than zero.".yellow()
        );
    }

    let [ppi, ppi2, dot_pitch, pixels] =
        format_metrics(entry.metrics.as_ref(), config.grouping_separator);
    println!("  {:<16}{}", "PPI", ppi.cyan().bold());
    println!("  {:<16}{}", "PPI²", ppi2);
    println!("  {:<16}{}", "Dot Pitch (mm)", dot_pitch);
    println!("  {:<16}{}", "Total Pixels", pixels);

    if entry.metrics.is_some() {
        println!();
        println!("{} {}", "Share:".dimmed(), aggregator.share_url());
    }

    Ok(())
}
