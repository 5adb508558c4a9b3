use ppicalc::core::summary::{Summary, EMPTY_MESSAGE, PLACEHOLDER};
use ppicalc::core::{
    Aggregator, AggregatorMessage, EntryState, EntryWidget, Field, MemoryLocation, RawTriple,
};

fn aggregator() -> Aggregator<MemoryLocation> {
    Aggregator::new(MemoryLocation::parse("http://localhost/ppi/").unwrap(), ',')
}

#[test]
fn test_removing_only_entry_leaves_empty_summary_and_no_param() {
    let mut agg = Aggregator::bootstrap(
        MemoryLocation::parse("http://localhost/ppi/?monitors=1920x1080x24").unwrap(),
        ',',
    );
    let id = agg.entries()[0].id;

    agg.update(AggregatorMessage::RemoveEntry(id));

    assert_eq!(agg.summary(), &Summary::Empty);
    assert_eq!(agg.share_url().query(), None);
    assert!(!EMPTY_MESSAGE.is_empty());
}

#[test]
fn test_clearing_diagonal_resets_derived_fields() {
    let mut agg = aggregator();
    let id = agg.add_entry(Some(RawTriple::new(1920.0, 1080.0, 24.0)));
    let mut widget = EntryWidget::new(agg.entry(id).unwrap().clone());
    assert_eq!(agg.entry(id).unwrap().state(), EntryState::Complete);

    agg.update(widget.set_field(Field::Diagonal, ""));

    let entry = agg.entry(id).unwrap();
    assert_eq!(entry.state(), EntryState::Incomplete);
    assert!(entry.metrics.is_none());

    let row = &agg.summary().rows()[0];
    assert_eq!(row.ppi, PLACEHOLDER);
    assert_eq!(row.ppi2, PLACEHOLDER);
    assert_eq!(row.dot_pitch, PLACEHOLDER);
    assert_eq!(row.total_pixels, PLACEHOLDER);
}

#[test]
fn test_summary_labels_renumber_after_removal() {
    let mut agg = aggregator();
    let first = agg.add_entry(Some(RawTriple::new(1920.0, 1080.0, 24.0)));
    agg.add_entry(Some(RawTriple::new(2560.0, 1440.0, 27.0)));

    agg.remove_entry(first);

    let rows = agg.summary().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].monitor, "Monitor 1");
    assert_eq!(rows[0].ppi, "108.79");
}

#[test]
fn test_add_via_reducer_returns_id() {
    let mut agg = aggregator();
    let id = agg
        .update(AggregatorMessage::AddEntry(Some(RawTriple::new(3840.0, 2160.0, 27.0))))
        .unwrap();
    assert_eq!(agg.entry(id).unwrap().width, Some(3840.0));
    assert_eq!(agg.summary().rows()[0].ppi, "163.18");
}

#[test]
fn test_grouping_separator_is_applied() {
    let mut agg = Aggregator::new(MemoryLocation::parse("http://localhost/").unwrap(), '.');
    agg.add_entry(Some(RawTriple::new(3840.0, 2160.0, 32.0)));
    assert_eq!(agg.summary().rows()[0].total_pixels, "8.294.400");
}
