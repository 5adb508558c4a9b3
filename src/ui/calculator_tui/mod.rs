//! Terminal User Interface for the PPI calculator.
//!
//! An editable form per monitor, a live summary table and the share link,
//! drawn with ratatui.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_calculator_app, CalculatorApp, StatusMessage};
pub use event_handler::CalculatorEvent;
