use anyhow::{anyhow, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::clipboard::copy_to_clipboard;
use crate::core::{find_preset, Aggregator, Config, MemoryLocation, RawTriple};
use crate::ui::prompts;

/// Build a share link from presets and explicit monitors, then copy it
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let mut aggregator = Aggregator::new(
        MemoryLocation::new(config.share_base()?),
        config.grouping_separator,
    );

    if let Some(presets) = matches.get_many::<String>("preset") {
        for query in presets {
            let preset = find_preset(query).ok_or_else(|| {
                anyhow!(
                    "Unknown preset '{}'. Use 'ppicalc presets' to list them.",
                    query
                )
            })?;
            aggregator.add_entry(Some(preset.triple));
        }
    }

    if let Some(monitors) = matches.get_many::<RawTriple>("monitor") {
        for triple in monitors {
            aggregator.add_entry(Some(*triple));
        }
    }

    if aggregator.entries().is_empty() {
        prompts::warn("Nothing to share. Pass --preset or --monitor.");
        return Ok(());
    }

    let url = aggregator.share_url().to_string();
    println!("{}", url);

    if matches.get_flag("no-copy") {
        return Ok(());
    }

    match copy_to_clipboard(&url) {
        Ok(()) => prompts::success("✓ Copied!"),
        Err(e) => {
            log::error!("Failed to copy link: {}", e);
            println!("{}", "Link not copied to the clipboard.".dimmed());
        }
    }

    Ok(())
}
