use ppicalc::core::share_url::{decode_value, encode_value, read_param, PARAM};
use ppicalc::core::{Aggregator, EntryWidget, Field, MemoryLocation, RawTriple, PRESETS};

fn location(query: &str) -> MemoryLocation {
    MemoryLocation::parse(&format!("https://example.com/tools/ppi{}", query)).unwrap()
}

#[test]
fn test_decode_two_monitors() {
    let agg = Aggregator::bootstrap(location("?monitors=1920x1080x24,2560x1440x27"), ',');

    let entries = agg.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        (entries[0].width, entries[0].height, entries[0].diagonal),
        (Some(1920.0), Some(1080.0), Some(24.0))
    );
    assert_eq!(
        (entries[1].width, entries[1].height, entries[1].diagonal),
        (Some(2560.0), Some(1440.0), Some(27.0))
    );
    assert_eq!(format!("{:.2}", entries[0].metrics.unwrap().ppi), "91.79");
    assert_eq!(format!("{:.2}", entries[1].metrics.unwrap().ppi), "108.79");
}

#[test]
fn test_decode_skips_malformed_segment() {
    let agg = Aggregator::bootstrap(location("?monitors=bad,1920x1080x24"), ',');
    assert_eq!(agg.entries().len(), 1);
    assert_eq!(agg.entries()[0].width, Some(1920.0));
}

#[test]
fn test_all_segments_malformed_falls_back_to_empty_entry() {
    let agg = Aggregator::bootstrap(location("?monitors=foo,1x2,0x1080x24"), ',');
    assert_eq!(agg.entries().len(), 1);
    assert!(agg.entries()[0].metrics.is_none());
    assert_eq!(read_param(agg.share_url()), None);
}

#[test]
fn test_round_trip_is_lossy_for_incomplete_entries() {
    let mut agg = Aggregator::new(location(""), ',');
    for preset in PRESETS.iter().take(3) {
        agg.add_entry(Some(preset.triple));
    }
    let incomplete = agg.add_entry(None);
    let mut widget = EntryWidget::new(agg.entry(incomplete).unwrap().clone());
    agg.update(widget.set_field(Field::Width, "1280"));

    let shared = agg.share_url().clone();
    let restored = Aggregator::bootstrap(MemoryLocation::new(shared), ',');

    let original: Vec<RawTriple> = agg.entries().iter().filter_map(|e| e.share_triple()).collect();
    let decoded: Vec<RawTriple> = restored
        .entries()
        .iter()
        .filter_map(|e| e.share_triple())
        .collect();

    assert_eq!(agg.entries().len(), 4);
    assert_eq!(restored.entries().len(), 3);
    assert_eq!(original, decoded);
}

#[test]
fn test_decimal_diagonal_survives_encoding() {
    let value = encode_value(&[RawTriple::new(1366.0, 768.0, 15.6)]).unwrap();
    assert_eq!(value, "1366x768x15.6");
    assert_eq!(decode_value(&value), vec![RawTriple::new(1366.0, 768.0, 15.6)]);
}

#[test]
fn test_param_name() {
    let mut agg = Aggregator::new(location(""), ',');
    agg.add_entry(Some(RawTriple::new(1920.0, 1080.0, 24.0)));
    let query = agg.share_url().query().unwrap();
    assert!(query.starts_with(&format!("{}=", PARAM)));
}
