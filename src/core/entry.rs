//! One monitor's inputs and derived outputs.
//!
//! [`MonitorEntry`] is the snapshot the aggregator stores. [`EntryWidget`] is
//! the editable form around it: every field update recomputes the snapshot
//! and produces an [`EntryMessage`] for the aggregator to consume.

use serde::Serialize;
use std::fmt;

use super::formulas::{is_usable, DerivedMetrics};
use super::share_url::RawTriple;

/// Opaque identifier of an entry, unique within one aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId(pub(crate) u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Raw input fields of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
    Diagonal,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Width, Field::Height, Field::Diagonal];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Width => "Resolution Width (px)",
            Field::Height => "Resolution Height (px)",
            Field::Diagonal => "Diagonal Size (inches)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Width => Field::Height,
            Field::Height => Field::Diagonal,
            Field::Diagonal => Field::Width,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Width => Field::Diagonal,
            Field::Height => Field::Width,
            Field::Diagonal => Field::Height,
        }
    }
}

/// Whether an entry has enough input to derive its outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryState {
    Incomplete,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorEntry {
    pub id: EntryId,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub diagonal: Option<f64>,
    /// Set only while width, height and diagonal are all positive
    pub metrics: Option<DerivedMetrics>,
}

impl MonitorEntry {
    pub fn new(id: EntryId, initial: Option<RawTriple>) -> Self {
        let mut entry = Self {
            id,
            width: initial.map(|t| t.width),
            height: initial.map(|t| t.height),
            diagonal: initial.map(|t| t.diagonal),
            metrics: None,
        };
        entry.recompute();
        entry
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
            Field::Diagonal => self.diagonal,
        }
    }

    /// Store a raw value and immediately recompute the derived outputs
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
            Field::Diagonal => &mut self.diagonal,
        };
        *slot = value;
        self.recompute();
    }

    pub fn state(&self) -> EntryState {
        if self.metrics.is_some() {
            EntryState::Complete
        } else {
            EntryState::Incomplete
        }
    }

    /// Raw values for a share link. Only entries whose three fields are
    /// finite and positive can be shared, since nothing else survives decoding.
    pub fn share_triple(&self) -> Option<RawTriple> {
        match (self.width, self.height, self.diagonal) {
            (Some(w), Some(h), Some(d)) if is_usable(w) && is_usable(h) && is_usable(d) => {
                Some(RawTriple::new(w, h, d))
            }
            _ => None,
        }
    }

    fn recompute(&mut self) {
        self.metrics = match (self.width, self.height, self.diagonal) {
            (Some(w), Some(h), Some(d)) => DerivedMetrics::compute(w, h, d),
            _ => None,
        };
    }
}

/// Notifications an entry widget sends to its aggregator
#[derive(Debug, Clone, PartialEq)]
pub enum EntryMessage {
    /// Emitted after every recompute, carrying the full snapshot
    Changed { id: EntryId, snapshot: MonitorEntry },
    /// The user asked for this entry to be removed
    RemoveRequested { id: EntryId },
}

/// Parse user input into a raw value. Empty, non-numeric and non-finite text
/// all mean "unset".
pub fn parse_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Editable form state for one entry
#[derive(Debug, Clone)]
pub struct EntryWidget {
    entry: MonitorEntry,
    inputs: [String; 3],
}

impl EntryWidget {
    pub fn new(entry: MonitorEntry) -> Self {
        let inputs = Field::ALL.map(|field| {
            entry
                .get(field)
                .map(|v| v.to_string())
                .unwrap_or_default()
        });
        Self { entry, inputs }
    }

    pub fn id(&self) -> EntryId {
        self.entry.id
    }

    pub fn entry(&self) -> &MonitorEntry {
        &self.entry
    }

    /// Text currently typed into a field
    pub fn input(&self, field: Field) -> &str {
        &self.inputs[field_index(field)]
    }

    /// Replace a field's text, recompute, and report the new snapshot
    pub fn set_field(&mut self, field: Field, text: &str) -> EntryMessage {
        self.inputs[field_index(field)] = text.to_string();
        self.entry.set(field, parse_input(text));
        log::debug!(
            "Entry {} {:?} = {:?} -> {:?}",
            self.entry.id,
            field,
            self.entry.get(field),
            self.entry.state()
        );
        self.changed()
    }

    pub fn push_char(&mut self, field: Field, c: char) -> EntryMessage {
        let mut text = self.input(field).to_string();
        text.push(c);
        self.set_field(field, &text)
    }

    pub fn pop_char(&mut self, field: Field) -> EntryMessage {
        let mut text = self.input(field).to_string();
        text.pop();
        self.set_field(field, &text)
    }

    pub fn clear_field(&mut self, field: Field) -> EntryMessage {
        self.set_field(field, "")
    }

    /// Ask the aggregator to remove this entry. The widget stays intact until
    /// the aggregator drops it.
    pub fn request_removal(&self) -> EntryMessage {
        EntryMessage::RemoveRequested { id: self.entry.id }
    }

    fn changed(&self) -> EntryMessage {
        EntryMessage::Changed {
            id: self.entry.id,
            snapshot: self.entry.clone(),
        }
    }
}

fn field_index(field: Field) -> usize {
    match field {
        Field::Width => 0,
        Field::Height => 1,
        Field::Diagonal => 2,
    }
}
