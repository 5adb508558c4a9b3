use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::summary::PLACEHOLDER;

/// Color for a pixel density, from coarse desktop panels to dense laptop screens
pub fn ppi_color(ppi: f64) -> Color {
    match ppi {
        p if p < 90.0 => Color::LightRed,
        p if p < 110.0 => Color::LightYellow,
        p if p < 160.0 => Color::Cyan,
        _ => Color::LightMagenta,
    }
}

/// Bordered single-line input; the focused one gets a highlighted border and a cursor mark
pub fn input_box<'a>(label: &'a str, text: &'a str, focused: bool) -> Paragraph<'a> {
    let border_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::raw(text)];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(border_style),
    )
}

/// `label ......... value` line of the outputs panel
pub fn metric_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    let value_style = if value == PLACEHOLDER {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}
