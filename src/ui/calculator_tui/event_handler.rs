use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Events that can occur in the calculator TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Open or close the preset picker
    TogglePresets,
    /// Focus the next input field of the selected entry
    NextField,
    /// Focus the previous input field
    PrevField,
    /// Select the entry above
    PrevEntry,
    /// Select the entry below
    NextEntry,
    /// Type a character into the focused field
    Input(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Empty the focused field
    ClearField,
    /// Append an empty entry
    AddEntry,
    /// Append an entry from the preset catalog
    AddPreset(usize),
    /// Remove the selected entry
    RemoveEntry,
    /// Copy the share link to the clipboard
    CopyLink,
    /// No action
    None,
}

impl CalculatorEvent {
    /// Map a key press. While the preset picker is open, digits pick a preset
    /// (`1` is the first, `0` the tenth) instead of editing a field.
    pub fn from_key(key: KeyEvent, presets_open: bool) -> Self {
        if key.kind != KeyEventKind::Press {
            return CalculatorEvent::None;
        }

        if presets_open {
            return match key.code {
                KeyCode::Char(c @ '0'..='9') => {
                    let digit = c as usize - '0' as usize;
                    CalculatorEvent::AddPreset((digit + 9) % 10)
                }
                KeyCode::Esc | KeyCode::Char('p') => CalculatorEvent::TogglePresets,
                KeyCode::Char('q') => CalculatorEvent::Quit,
                _ => CalculatorEvent::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => CalculatorEvent::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => CalculatorEvent::ToggleHelp,
            KeyCode::Char('p') => CalculatorEvent::TogglePresets,
            KeyCode::Char('a') => CalculatorEvent::AddEntry,
            KeyCode::Char('d') | KeyCode::Delete => CalculatorEvent::RemoveEntry,
            KeyCode::Char('c') => CalculatorEvent::CopyLink,
            KeyCode::Char('x') => CalculatorEvent::ClearField,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                CalculatorEvent::Input(c)
            }
            KeyCode::Backspace => CalculatorEvent::Backspace,
            KeyCode::Tab | KeyCode::Enter => CalculatorEvent::NextField,
            KeyCode::BackTab => CalculatorEvent::PrevField,
            KeyCode::Up | KeyCode::Char('k') => CalculatorEvent::PrevEntry,
            KeyCode::Down | KeyCode::Char('j') => CalculatorEvent::NextEntry,
            _ => CalculatorEvent::None,
        }
    }
}
