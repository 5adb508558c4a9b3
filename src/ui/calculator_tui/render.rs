use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table},
};

use super::app::CalculatorApp;
use super::widgets::{input_box, metric_line, ppi_color};
use crate::core::summary::{Summary, EMPTY_MESSAGE, HEADERS};
use crate::core::{EntryState, Field, PRESETS};
use crate::ui::formatters::format_metrics;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &CalculatorApp) {
    let area = frame.area();

    let summary_rows = app.aggregator.summary().rows().len().max(1) as u16;
    let summary_height = (summary_rows + 3).min(area.height / 3).max(4);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header with share link
            Constraint::Min(16),                // Entries
            Constraint::Length(summary_height), // Summary table
            Constraint::Length(1),              // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_entries(frame, chunks[1], app);
    render_summary(frame, chunks[2], app);
    render_footer(frame, chunks[3]);

    if app.show_presets {
        render_presets_overlay(frame, area);
    }
    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let mut spans = vec![
        Span::styled("Share: ", Style::default().fg(Color::Gray)),
        Span::raw(app.aggregator.share_url().to_string()),
    ];
    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("  ✓ {}", status.text),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .title(" PPI Calculator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_entries(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_entry_list(frame, columns[0], app);
    render_entry_card(frame, columns[1], app);
}

fn render_entry_list(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let items: Vec<ListItem> = app
        .widgets
        .iter()
        .enumerate()
        .map(|(i, widget)| {
            let entry = widget.entry();
            let detail = match entry.metrics {
                Some(m) => Span::styled(
                    format!("{:.2} PPI", m.ppi),
                    Style::default().fg(ppi_color(m.ppi)),
                ),
                None => Span::styled("incomplete", Style::default().fg(Color::DarkGray)),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("Monitor {:<3}", i + 1)),
                detail,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Monitors ({}) [a:add p:presets d:remove] ", app.widgets.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.widgets.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_entry_card(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let Some(widget) = app.selected_widget() else {
        let text = format!(
            "{}\n\nPress 'a' to add a monitor or 'p' for presets.",
            EMPTY_MESSAGE
        );
        let hint = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(hint, area);
        return;
    };

    let entry = widget.entry();
    let border_color = match entry.state() {
        EntryState::Complete => Color::Green,
        EntryState::Incomplete => Color::Yellow,
    };
    let block = Block::default()
        .title(format!(" Monitor {} ", app.selected + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(inner);

    for (i, field) in Field::ALL.iter().enumerate() {
        let focused = *field == app.focused_field;
        frame.render_widget(input_box(field.label(), widget.input(*field), focused), rows[i]);
    }

    let [ppi, ppi2, dot_pitch, pixels] =
        format_metrics(entry.metrics.as_ref(), app.aggregator.grouping_separator());
    let color = entry.metrics.map(|m| ppi_color(m.ppi)).unwrap_or(Color::White);

    let outputs = Paragraph::new(vec![
        metric_line("PPI", ppi, color),
        metric_line("PPI²", ppi2, Color::White),
        metric_line("Dot Pitch (mm)", dot_pitch, Color::White),
        metric_line("Total Pixels", pixels, Color::White),
    ])
    .block(Block::default().borders(Borders::TOP).title(" Outputs "));
    frame.render_widget(outputs, rows[3]);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let block = Block::default().title(" Summary ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return; // Not enough space for header + at least one row
    }

    let header = Row::new(
        HEADERS
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)))
            .collect::<Vec<_>>(),
    )
    .height(1);

    let rows: Vec<Row> = match app.aggregator.summary() {
        Summary::Empty => vec![Row::new(vec![Cell::from(EMPTY_MESSAGE)])
            .style(Style::default().fg(Color::DarkGray))],
        Summary::Rows(rows) => rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if i == app.selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(row.cells().map(|c| Cell::from(c.to_string()))).style(style)
            })
            .collect(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(12),
        ],
    )
    .header(header);

    frame.render_widget(table, inner);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = concat!(
        " q: Quit │ ?: Help │ Tab: Next field │ ↑↓: Select │ a: Add │",
        " p: Presets │ d: Remove │ c: Copy link ",
    );
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_presets_overlay(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = PRESETS
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            Line::from(vec![
                Span::styled(
                    format!(" {}  ", (i + 1) % 10),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<16}", preset.label)),
                Span::styled(preset.triple.to_string(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Quick Add Common Monitors [1-0 pick, Esc close] ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let popup_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    PPI Calculator - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc       Quit (prints the share link)
    ? / h         Toggle this help screen
    Tab / Enter   Next field
    Shift+Tab     Previous field
    ↑ / ↓         Select monitor
    0-9 . -       Edit the focused field
    Backspace     Delete last character
    x             Clear the focused field
    a             Add an empty monitor
    p             Pick a preset monitor
    d / Delete    Remove the selected monitor
    c             Copy the share link

    Press any key to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    // Center the help popup
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryLocation;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &CalculatorApp) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_ui(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_share_link_and_summary() {
        let location =
            MemoryLocation::parse("http://localhost/ppi/?monitors=1920x1080x24").unwrap();
        let app = CalculatorApp::new(location, ',');
        let screen = draw(&app);

        assert!(screen.contains("monitors=1920x1080x24"));
        assert!(screen.contains("91.79"));
        assert!(screen.contains("2,073,600"));
    }

    #[test]
    fn test_renders_empty_state() {
        let location = MemoryLocation::parse("http://localhost/ppi/").unwrap();
        let mut app = CalculatorApp::new(location, ',');
        app.handle_event(crate::ui::calculator_tui::CalculatorEvent::RemoveEntry);

        let screen = draw(&app);
        assert!(screen.contains(EMPTY_MESSAGE));
    }
}
