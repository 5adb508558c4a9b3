// UI and formatting module

pub mod calculator_tui;
pub mod formatters;
pub mod prompts;
pub mod table;
