use anyhow::Result;
use colored::Colorize;

use crate::core::{DerivedMetrics, PRESETS};
use crate::ui::formatters::format_fixed;

/// List the preset catalog
pub fn execute() -> Result<()> {
    println!("{}", "Quick Add Common Monitors".white().bold());
    println!();

    for (i, preset) in PRESETS.iter().enumerate() {
        let t = preset.triple;
        let ppi = DerivedMetrics::compute(t.width, t.height, t.diagonal)
            .map(|m| format!("{} PPI", format_fixed(m.ppi, 2)))
            .unwrap_or_default();

        println!(
            "  {:>2}. {:<16} {:<16} {}",
            i + 1,
            preset.label,
            t.to_string().cyan(),
            ppi.dimmed()
        );
    }

    Ok(())
}
