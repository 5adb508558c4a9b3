// Summary table projection of the monitor collection

use serde::Serialize;

use super::entry::MonitorEntry;
use crate::ui::formatters::{format_fixed, format_grouped};

/// Shown in every cell whose value is unset
pub const PLACEHOLDER: &str = "-";

/// Text of the single row shown when there are no entries
pub const EMPTY_MESSAGE: &str = "No monitors added yet";

pub const HEADERS: [&str; 7] = [
    "Monitor",
    "Resolution",
    "Diagonal",
    "PPI",
    "PPI²",
    "Dot Pitch",
    "Total Pixels",
];

/// One display row, already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub monitor: String,
    pub resolution: String,
    pub diagonal: String,
    pub ppi: String,
    pub ppi2: String,
    pub dot_pitch: String,
    pub total_pixels: String,
}

impl SummaryRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            self.monitor.as_str(),
            self.resolution.as_str(),
            self.diagonal.as_str(),
            self.ppi.as_str(),
            self.ppi2.as_str(),
            self.dot_pitch.as_str(),
            self.total_pixels.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Summary {
    #[default]
    Empty,
    Rows(Vec<SummaryRow>),
}

impl Summary {
    /// Project entries in display order. Labels are 1-based positions, not ids.
    pub fn project(entries: &[MonitorEntry], grouping_separator: char) -> Self {
        if entries.is_empty() {
            return Summary::Empty;
        }

        let rows = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| summary_row(index + 1, entry, grouping_separator))
            .collect();

        Summary::Rows(rows)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }

    pub fn rows(&self) -> &[SummaryRow] {
        match self {
            Summary::Empty => &[],
            Summary::Rows(rows) => rows,
        }
    }
}

fn summary_row(position: usize, entry: &MonitorEntry, grouping_separator: char) -> SummaryRow {
    let resolution = match (entry.width, entry.height) {
        (Some(w), Some(h)) => format!("{} × {}", w, h),
        _ => PLACEHOLDER.to_string(),
    };
    let diagonal = entry
        .diagonal
        .map(|d| format!("{}\"", d))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let (ppi, ppi2, dot_pitch, total_pixels) = match entry.metrics {
        Some(m) => (
            format_fixed(m.ppi, 2),
            format_fixed(m.ppi2, 0),
            format!("{} mm", format_fixed(m.dot_pitch, 3)),
            format_grouped(m.total_pixels, grouping_separator),
        ),
        None => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ),
    };

    SummaryRow {
        monitor: format!("Monitor {}", position),
        resolution,
        diagonal,
        ppi,
        ppi2,
        dot_pitch,
        total_pixels,
    }
}
