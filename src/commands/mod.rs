// Command handlers module
pub mod calc;
pub mod config;
pub mod presets;
pub mod share;
pub mod summary;
pub mod tui;
pub mod version;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::share_url::{self, decode_value, encode_value};
use crate::core::{Config, MemoryLocation};

// Re-exports for cleaner imports
pub use version::execute as version;

/// Location to start from: `--url` when given, otherwise the configured base.
/// `--monitors` replaces whatever share state that location carries.
pub(crate) fn location_from_args(matches: &ArgMatches, config: &Config) -> Result<MemoryLocation> {
    let mut url = match matches.get_one::<String>("url") {
        Some(raw) => url::Url::parse(raw).with_context(|| format!("Invalid URL: {}", raw))?,
        None => config.share_base()?,
    };

    if let Some(value) = matches.get_one::<String>("monitors") {
        let triples = decode_value(value);
        url = share_url::write_param(&url, encode_value(&triples).as_deref());
    }

    Ok(MemoryLocation::new(url))
}
