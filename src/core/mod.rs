// Core calculator logic

pub mod aggregator;
pub mod clipboard;
pub mod config;
pub mod entry;
pub mod formulas;
pub mod presets;
pub mod share_url;
pub mod summary;

// Re-export commonly used items
pub use aggregator::{Aggregator, AggregatorMessage, Location, MemoryLocation};
pub use config::Config;
pub use entry::{EntryId, EntryMessage, EntryState, EntryWidget, Field, MonitorEntry};
pub use formulas::{compute_dot_pitch, compute_ppi, compute_total_pixels, DerivedMetrics};
pub use presets::{find_preset, Preset, PRESETS};
pub use share_url::RawTriple;
pub use summary::{Summary, SummaryRow};
