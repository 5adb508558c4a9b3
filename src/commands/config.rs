use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn handle_config(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set", sub_matches)) => handle_set(sub_matches),
        Some(("reset", _)) => reset(),
        _ => {
            println!("Use 'ppicalc config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    let path = Config::get_config_path()?;

    println!("{}", "Configuration".white().bold());
    println!("  {:<20}{}", "share base URL", config.share_base_url.cyan());
    println!(
        "  {:<20}'{}'",
        "grouping separator", config.grouping_separator
    );
    println!("  {:<20}{}", "file", path.display().to_string().dimmed());
    Ok(())
}

fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let mut config = Config::load()?;

    match matches.subcommand() {
        Some(("base-url", sub_matches)) => {
            let url = sub_matches
                .get_one::<String>("url")
                .context("URL argument is required")?;
            config.set_share_base_url(url)?;
            config.save()?;
            println!(
                "{} {}",
                "✓ Share base URL set to:".green(),
                config.share_base_url
            );
        }
        Some(("separator", sub_matches)) => {
            let separator = *sub_matches
                .get_one::<char>("separator")
                .context("Separator argument is required")?;
            config.set_grouping_separator(separator)?;
            config.save()?;
            println!(
                "{} '{}'",
                "✓ Grouping separator set to:".green(),
                config.grouping_separator
            );
        }
        _ => println!("Use 'ppicalc config set --help' for more information."),
    }

    Ok(())
}

fn reset() -> Result<()> {
    Config::default().save()?;
    println!("{}", "✓ Configuration reset to defaults".green());
    Ok(())
}
