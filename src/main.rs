use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use ppicalc::commands;
use ppicalc::core::RawTriple;

/// `--url` / `--monitors` pair shared by the commands that start from a share link
fn share_source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Share link to load (defaults to the configured base URL)"),
        )
        .arg(
            Arg::new("monitors")
                .short('m')
                .long("monitors")
                .value_name("LIST")
                .help(
                    "Monitors as WxHxD triples, comma separated \
                     (e.g. 1920x1080x24,2560x1440x27)",
                ),
        )
}

fn build_cli() -> Command {
    share_source_args(
        Command::new("ppicalc")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Monitor pixel-density (PPI) calculator")
            .long_about(
                "Monitor pixel-density (PPI) calculator\n\n\
                 Run without a subcommand to open the interactive calculator.",
            )
            .disable_version_flag(true)
            .arg(
                Arg::new("version")
                    .short('v')
                    .short_alias('V')
                    .long("version")
                    .help("Print version information")
                    .action(ArgAction::SetTrue),
            ),
    )
    .subcommand(
        Command::new("version")
            .about("Shows version information"),
    )
    .subcommand(share_source_args(
        Command::new("tui").about("Open the interactive calculator"),
    ))
    .subcommand(
        Command::new("calc")
            .about("Compute PPI, dot pitch and pixel count for one monitor")
            .arg(
                Arg::new("width")
                    .help("Horizontal resolution in pixels")
                    .required(true)
                    .value_parser(clap::value_parser!(f64))
                    .allow_negative_numbers(true)
                    .index(1),
            )
            .arg(
                Arg::new("height")
                    .help("Vertical resolution in pixels")
                    .required(true)
                    .value_parser(clap::value_parser!(f64))
                    .allow_negative_numbers(true)
                    .index(2),
            )
            .arg(
                Arg::new("diagonal")
                    .help("Diagonal size in inches")
                    .required(true)
                    .value_parser(clap::value_parser!(f64))
                    .allow_negative_numbers(true)
                    .index(3),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the entry as JSON")
                    .action(ArgAction::SetTrue),
            ),
    )
    .subcommand(share_source_args(
        Command::new("summary")
            .about("Print the summary table for a share link")
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the summary as JSON")
                    .action(ArgAction::SetTrue),
            ),
    ))
    .subcommand(
        Command::new("presets")
            .about("List common monitor presets"),
    )
    .subcommand(
        Command::new("share")
            .about("Build a share link and copy it to the clipboard")
            .arg(
                Arg::new("preset")
                    .short('p')
                    .long("preset")
                    .value_name("PRESET")
                    .help("Preset label or value (repeatable), e.g. '27\" 4K' or 3840x2160x27")
                    .action(ArgAction::Append),
            )
            .arg(
                Arg::new("monitor")
                    .short('m')
                    .long("monitor")
                    .value_name("WxHxD")
                    .help("Monitor dimensions (repeatable), e.g. 2560x1440x27")
                    .value_parser(clap::value_parser!(RawTriple))
                    .action(ArgAction::Append),
            )
            .arg(
                Arg::new("no-copy")
                    .long("no-copy")
                    .help("Only print the link")
                    .action(ArgAction::SetTrue),
            ),
    )
    .subcommand(
        Command::new("config")
            .about("Show or change settings (use 'ppicalc config --help' for subcommands)")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Command::new("show").about("Show current settings"))
            .subcommand(
                Command::new("set")
                    .about("Change a setting")
                    .subcommand_required(true)
                    .arg_required_else_help(true)
                    .subcommand(
                        Command::new("base-url")
                            .about("Page address share links are built on")
                            .arg(
                                Arg::new("url")
                                    .help("Base URL, e.g. https://example.com/ppi/")
                                    .required(true)
                                    .index(1),
                            ),
                    )
                    .subcommand(
                        Command::new("separator")
                            .about("Digit group separator for total pixel counts")
                            .arg(
                                Arg::new("separator")
                                    .help("Single character, e.g. ',' '.' or ' '")
                                    .required(true)
                                    .value_parser(clap::value_parser!(char))
                                    .index(1),
                            ),
                    ),
            )
            .subcommand(Command::new("reset").about("Restore default settings")),
    )
}

fn main() -> Result<()> {
    ppicalc::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("version", _)) => commands::version(),
        Some(("tui", sub_matches)) => commands::tui::execute(sub_matches),
        Some(("calc", sub_matches)) => commands::calc::execute(sub_matches),
        Some(("summary", sub_matches)) => commands::summary::execute(sub_matches),
        Some(("presets", _)) => commands::presets::execute(),
        Some(("share", sub_matches)) => commands::share::execute(sub_matches),
        Some(("config", sub_matches)) => commands::config::handle_config(sub_matches),
        _ => commands::tui::execute(&matches),
    }
}
