use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::clipboard::copy_to_clipboard;
use crate::core::{Aggregator, EntryWidget, Field, MemoryLocation, PRESETS};

use super::event_handler::CalculatorEvent;
use super::render::render_ui;

const COPIED_FEEDBACK: Duration = Duration::from_secs(2);
const TICK_RATE: Duration = Duration::from_millis(250);

/// Transient message shown in the header
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// Calculator application state
pub struct CalculatorApp {
    pub aggregator: Aggregator<MemoryLocation>,
    pub widgets: Vec<EntryWidget>,
    pub selected: usize,
    pub focused_field: Field,
    pub should_quit: bool,
    pub show_help: bool,
    pub show_presets: bool,
    pub status: Option<StatusMessage>,
}

impl CalculatorApp {
    /// Start from the share link in `location`, or a single empty entry
    pub fn new(location: MemoryLocation, grouping_separator: char) -> Self {
        let aggregator = Aggregator::bootstrap(location, grouping_separator);
        let widgets = aggregator
            .entries()
            .iter()
            .cloned()
            .map(EntryWidget::new)
            .collect();

        Self {
            aggregator,
            widgets,
            selected: 0,
            focused_field: Field::Width,
            should_quit: false,
            show_help: false,
            show_presets: false,
            status: None,
        }
    }

    pub fn selected_widget(&self) -> Option<&EntryWidget> {
        self.widgets.get(self.selected)
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: CalculatorEvent) {
        if self.show_help && event != CalculatorEvent::None {
            self.show_help = false;
            if event == CalculatorEvent::ToggleHelp {
                return;
            }
        }

        match event {
            CalculatorEvent::Quit => self.should_quit = true,
            CalculatorEvent::ToggleHelp => self.show_help = true,
            CalculatorEvent::TogglePresets => self.show_presets = !self.show_presets,
            CalculatorEvent::NextField => self.focused_field = self.focused_field.next(),
            CalculatorEvent::PrevField => self.focused_field = self.focused_field.prev(),
            CalculatorEvent::PrevEntry => {
                self.selected = self.selected.saturating_sub(1);
            }
            CalculatorEvent::NextEntry => {
                if self.selected + 1 < self.widgets.len() {
                    self.selected += 1;
                }
            }
            CalculatorEvent::Input(c) => {
                let field = self.focused_field;
                self.edit_selected(|w| w.push_char(field, c));
            }
            CalculatorEvent::Backspace => {
                let field = self.focused_field;
                self.edit_selected(|w| w.pop_char(field));
            }
            CalculatorEvent::ClearField => {
                let field = self.focused_field;
                self.edit_selected(|w| w.clear_field(field));
            }
            CalculatorEvent::AddEntry => self.add_entry(None),
            CalculatorEvent::AddPreset(index) => {
                if let Some(preset) = PRESETS.get(index) {
                    log::debug!("Adding preset {}", preset.label);
                    self.add_entry(Some(preset.triple));
                }
                self.show_presets = false;
            }
            CalculatorEvent::RemoveEntry => self.remove_selected(),
            CalculatorEvent::CopyLink => self.copy_link(),
            CalculatorEvent::None => {}
        }
    }

    /// Drop the status message once it has been shown long enough
    pub fn on_tick(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
        }
    }

    fn edit_selected<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut EntryWidget) -> crate::core::EntryMessage,
    {
        if let Some(widget) = self.widgets.get_mut(self.selected) {
            let msg = edit(widget);
            self.aggregator.update(msg);
        }
    }

    fn add_entry(&mut self, initial: Option<crate::core::RawTriple>) {
        let id = self.aggregator.add_entry(initial);
        if let Some(entry) = self.aggregator.entry(id) {
            self.widgets.push(EntryWidget::new(entry.clone()));
            self.selected = self.widgets.len() - 1;
            self.focused_field = Field::Width;
        }
    }

    fn remove_selected(&mut self) {
        let Some(widget) = self.widgets.get(self.selected) else {
            return;
        };

        let msg = widget.request_removal();
        self.aggregator.update(msg);

        let aggregator = &self.aggregator;
        self.widgets.retain(|w| aggregator.entry(w.id()).is_some());
        self.selected = self.selected.min(self.widgets.len().saturating_sub(1));
    }

    fn copy_link(&mut self) {
        let url = self.aggregator.share_url().to_string();
        match copy_to_clipboard(&url) {
            Ok(()) => {
                self.status = Some(StatusMessage {
                    text: "Copied!".to_string(),
                    expires_at: Instant::now() + COPIED_FEEDBACK,
                });
            }
            Err(e) => log::error!("Failed to copy link: {}", e),
        }
    }
}

/// Run the calculator TUI application
pub fn run_calculator_app(location: MemoryLocation, grouping_separator: char) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = restore_on_error(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut app = CalculatorApp::new(location, grouping_separator);
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result?;
    println!("{}", app.aggregator.share_url());
    Ok(())
}

/// Run `setup`, calling `restore` before returning its error
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut CalculatorApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        if event::poll(TICK_RATE).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                app.handle_event(CalculatorEvent::from_key(key, app.show_presets));
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.on_tick(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_terminal_setup_is_restored() {
        let restored = Cell::new(false);
        let result: Result<()> =
            restore_on_error(|| Err(anyhow::anyhow!("no tty")), || restored.set(true));

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_terminal_setup_is_not_restored() {
        let restored = Cell::new(false);
        let result = restore_on_error(|| Ok(7), || restored.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
    use crate::core::share_url::read_param;

    fn app(query: &str) -> CalculatorApp {
        let location =
            MemoryLocation::parse(&format!("http://localhost/ppi/{}", query)).unwrap();
        CalculatorApp::new(location, ',')
    }

    fn type_text(app: &mut CalculatorApp, text: &str) {
        for c in text.chars() {
            app.handle_event(CalculatorEvent::Input(c));
        }
    }

    #[test]
    fn test_starts_with_one_empty_entry() {
        let app = app("");
        assert_eq!(app.widgets.len(), 1);
        assert_eq!(app.aggregator.entries().len(), 1);
    }

    #[test]
    fn test_typing_updates_summary_and_url() {
        let mut app = app("");
        type_text(&mut app, "1920");
        app.handle_event(CalculatorEvent::NextField);
        type_text(&mut app, "1080");
        app.handle_event(CalculatorEvent::NextField);
        type_text(&mut app, "24");

        assert_eq!(app.aggregator.summary().rows()[0].ppi, "91.79");
        assert_eq!(
            read_param(app.aggregator.share_url()).as_deref(),
            Some("1920x1080x24")
        );

        app.handle_event(CalculatorEvent::ClearField);
        assert_eq!(app.aggregator.summary().rows()[0].ppi, "-");
        assert_eq!(read_param(app.aggregator.share_url()), None);
    }

    #[test]
    fn test_preset_adds_and_selects_entry() {
        let mut app = app("");
        app.handle_event(CalculatorEvent::TogglePresets);
        app.handle_event(CalculatorEvent::AddPreset(1));

        assert!(!app.show_presets);
        assert_eq!(app.widgets.len(), 2);
        assert_eq!(app.selected, 1);
        assert_eq!(app.selected_widget().unwrap().input(Field::Width), "2560");
    }

    #[test]
    fn test_remove_keeps_widgets_in_sync() {
        let mut app = app("?monitors=1920x1080x24,2560x1440x27");
        app.handle_event(CalculatorEvent::NextEntry);
        app.handle_event(CalculatorEvent::RemoveEntry);

        assert_eq!(app.widgets.len(), 1);
        assert_eq!(app.selected, 0);
        assert_eq!(
            read_param(app.aggregator.share_url()).as_deref(),
            Some("1920x1080x24")
        );

        app.handle_event(CalculatorEvent::RemoveEntry);
        assert!(app.widgets.is_empty());
        assert!(app.aggregator.summary().is_empty());

        // Editing with nothing selected is ignored
        app.handle_event(CalculatorEvent::Input('1'));
        assert!(app.aggregator.entries().is_empty());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app("");
        app.handle_event(CalculatorEvent::ToggleHelp);
        assert!(app.show_help);
        app.handle_event(CalculatorEvent::ToggleHelp);
        assert!(!app.show_help);
    }

    #[test]
    fn test_status_expires() {
        let mut app = app("");
        let now = Instant::now();
        app.status = Some(StatusMessage {
            text: "Copied!".to_string(),
            expires_at: now,
        });
        app.on_tick(now + Duration::from_millis(1));
        assert!(app.status.is_none());
    }
}
