//! Owner of the monitor collection.
//!
//! Every lifecycle change (add, remove, entry update) rebuilds the summary
//! projection and rewrites the `monitors` parameter of the current location.

use url::Url;

use super::entry::{EntryId, EntryMessage, MonitorEntry};
use super::share_url::{self, RawTriple};
use super::summary::Summary;

/// Where the shareable state lives. Writing replaces the current location
/// instead of recording a new one.
pub trait Location {
    fn current(&self) -> &Url;
    fn replace(&mut self, url: Url);
}

/// In-process location, seeded from the configured base URL or a pasted link
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    url: Url,
}

impl MemoryLocation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(url: &str) -> crate::Result<Self> {
        Ok(Self::new(Url::parse(url)?))
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> &Url {
        &self.url
    }

    fn replace(&mut self, url: Url) {
        self.url = url;
    }
}

/// Lifecycle operations the aggregator's reducer accepts
#[derive(Debug, Clone, PartialEq)]
pub enum AggregatorMessage {
    AddEntry(Option<RawTriple>),
    RemoveEntry(EntryId),
    Entry(EntryMessage),
}

impl From<EntryMessage> for AggregatorMessage {
    fn from(msg: EntryMessage) -> Self {
        AggregatorMessage::Entry(msg)
    }
}

pub struct Aggregator<L: Location> {
    entries: Vec<MonitorEntry>,
    next_id: u64,
    summary: Summary,
    location: L,
    grouping_separator: char,
}

impl<L: Location> Aggregator<L> {
    pub fn new(location: L, grouping_separator: char) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            summary: Summary::Empty,
            location,
            grouping_separator,
        }
    }

    /// Decode the location and make sure at least one entry exists
    pub fn bootstrap(location: L, grouping_separator: char) -> Self {
        let mut aggregator = Self::new(location, grouping_separator);
        let decoded = aggregator.decode_url();
        log::info!("Loaded {} monitor(s) from share link", decoded);

        if aggregator.entries.is_empty() {
            aggregator.add_entry(None);
        }
        aggregator
    }

    pub fn entries(&self) -> &[MonitorEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&MonitorEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Full shareable URL as currently written to the location
    pub fn share_url(&self) -> &Url {
        self.location.current()
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// Reducer entry point. Returns the id of a newly added entry.
    pub fn update(&mut self, msg: impl Into<AggregatorMessage>) -> Option<EntryId> {
        match msg.into() {
            AggregatorMessage::AddEntry(initial) => Some(self.add_entry(initial)),
            AggregatorMessage::RemoveEntry(id)
            | AggregatorMessage::Entry(EntryMessage::RemoveRequested { id }) => {
                self.remove_entry(id);
                None
            }
            AggregatorMessage::Entry(EntryMessage::Changed { id, snapshot }) => {
                self.on_entry_changed(id, snapshot);
                None
            }
        }
    }

    pub fn add_entry(&mut self, initial: Option<RawTriple>) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        self.entries.push(MonitorEntry::new(id, initial));
        log::debug!("Added entry {} ({:?})", id, initial);

        self.refresh();
        id
    }

    pub fn remove_entry(&mut self, id: EntryId) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);

        if self.entries.len() == before {
            log::debug!("Remove ignored, no entry {}", id);
            return;
        }

        log::debug!("Removed entry {}", id);
        self.refresh();
    }

    pub fn on_entry_changed(&mut self, id: EntryId, mut snapshot: MonitorEntry) {
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == id) else {
            log::debug!("Change ignored, no entry {}", id);
            return;
        };

        snapshot.id = id;
        *slot = snapshot;
        self.refresh();
    }

    pub fn rebuild_summary(&mut self) {
        self.summary = Summary::project(&self.entries, self.grouping_separator);
    }

    /// Write the shareable entries into the location, dropping the parameter
    /// when none qualify
    pub fn encode_url(&mut self) {
        let triples: Vec<RawTriple> = self
            .entries
            .iter()
            .filter_map(MonitorEntry::share_triple)
            .collect();

        let value = share_url::encode_value(&triples);
        let url = share_url::write_param(self.location.current(), value.as_deref());
        log::debug!("Share URL: {}", url);
        self.location.replace(url);
    }

    /// Add an entry for every valid triple in the location. Returns how many
    /// were added.
    pub fn decode_url(&mut self) -> usize {
        let Some(value) = share_url::read_param(self.location.current()) else {
            return 0;
        };

        let triples = share_url::decode_value(&value);
        for triple in &triples {
            self.add_entry(Some(*triple));
        }
        triples.len()
    }

    fn refresh(&mut self) {
        self.rebuild_summary();
        self.encode_url();
    }
}
