// Plain-terminal rendering of the summary table
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::summary::{Summary, EMPTY_MESSAGE, HEADERS};

const COLUMN_GAP: usize = 2;

/// Pad with spaces to `width` display columns (`×` and `²` count as one each)
fn pad(text: &str, width: usize) -> String {
    let pad_spaces = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad_spaces))
}

/// Lines of the summary table without colors, header first
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    let rows: Vec<[&str; 7]> = summary.rows().iter().map(|r| r.cells()).collect();

    let mut widths: [usize; 7] = HEADERS.map(|h| h.width());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let render = |cells: &[&str; 7]| -> String {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad(cell, width + COLUMN_GAP))
            .collect();
        line.concat().trim_end().to_string()
    };

    let mut lines = vec![render(&HEADERS)];
    let total_width: usize = widths.iter().map(|w| w + COLUMN_GAP).sum();
    lines.push("─".repeat(total_width.saturating_sub(COLUMN_GAP)));

    if summary.is_empty() {
        lines.push(EMPTY_MESSAGE.to_string());
    } else {
        lines.extend(rows.iter().map(render));
    }

    lines
}

/// Print the summary table to stdout
pub fn print_summary(summary: &Summary) {
    for (i, line) in summary_lines(summary).iter().enumerate() {
        match i {
            0 => println!("{}", line.white().bold()),
            1 => println!("{}", line.dimmed()),
            _ if summary.is_empty() => println!("{}", line.dimmed()),
            _ => println!("{}", line),
        }
    }
}
