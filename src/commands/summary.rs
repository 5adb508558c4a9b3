use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use crate::core::{Aggregator, Config, Summary};
use crate::ui::{prompts, table};

#[derive(Serialize)]
struct SummaryOutput<'a> {
    share_url: String,
    summary: &'a Summary,
}

/// Decode a share link and print its summary table
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let location = super::location_from_args(matches, &config)?;

    let mut aggregator = Aggregator::new(location, config.grouping_separator);
    let decoded = aggregator.decode_url();

    if matches.get_flag("json") {
        let output = SummaryOutput {
            share_url: aggregator.share_url().to_string(),
            summary: aggregator.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if decoded == 0 {
        prompts::warn("No monitors found in the share link");
        println!();
    }

    table::print_summary(aggregator.summary());

    if decoded > 0 {
        println!();
        prompts::dimmed(&format!("Share: {}", aggregator.share_url()));
    }

    Ok(())
}
