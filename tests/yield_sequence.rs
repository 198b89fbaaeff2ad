use approx::assert_relative_eq;
use corn_yield_mapper::{
    MapError,
    app::App,
    attributes::extract_attributes,
    data::{Dataset, Feature, load_dataset},
    sequence::SequenceIndex,
    summary::summarize,
    symbols::radius_for,
};
use serde_json::json;
use std::path::Path;

fn three_states() -> Dataset {
    let rows = [
        ("Iowa", 90, 100),
        ("Illinois", 120, 110),
        ("Nebraska", 150, 130),
    ];
    Dataset::new(
        rows.iter()
            .map(|(name, yr07, yr12)| {
                let properties = json!({ "StateName": name, "yr07": yr07, "yr12": yr12 })
                    .as_object()
                    .cloned()
                    .unwrap();
                Feature::new(properties, None)
            })
            .collect(),
    )
}

#[test]
fn steps_through_years_with_fresh_summaries() {
    let dataset = three_states();
    let attributes = extract_attributes(dataset.sample_properties().unwrap());
    assert_eq!(attributes, ["yr07", "yr12"]);

    let mut sequence = SequenceIndex::new(attributes.len());
    let first = &attributes[sequence.current().unwrap()];
    let s = summarize(&dataset.features, first).unwrap();
    assert_relative_eq!(s.min, 90.0);
    assert_relative_eq!(s.max, 150.0);
    assert_relative_eq!(s.mean, 120.0);

    let next = &attributes[sequence.advance().unwrap()];
    assert_eq!(next, "yr12");
    let s = summarize(&dataset.features, next).unwrap();
    assert_relative_eq!(s.min, 100.0);
    assert_relative_eq!(s.max, 130.0);
    assert_relative_eq!(s.mean, 115.0);
}

#[test]
fn summary_bounds_always_have_radii_above_baseline() {
    let dataset = three_states();
    let attributes = extract_attributes(dataset.sample_properties().unwrap());
    let mut sequence = SequenceIndex::new(attributes.len());

    for index in 0..attributes.len() {
        sequence.set_index(index).unwrap();
        let s = summarize(&dataset.features, &attributes[index]).unwrap();
        for bound in [s.min, s.mean, s.max] {
            assert!(radius_for(bound).unwrap() >= 0.0);
        }
    }
}

#[test]
fn empty_collection_fails_fast() {
    let dataset = Dataset::default();
    assert!(dataset.sample_properties().is_none());
    assert!(matches!(
        summarize(&dataset.features, "yr07"),
        Err(MapError::EmptyDataset)
    ));
}

#[test]
fn bundled_dataset_drives_the_app() {
    let data = load_dataset(Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/corn_yield.geojson"
    )))
    .unwrap();
    assert_eq!(data.info.feature_count, 10);
    assert!(data.info.bbox.is_some());

    let mut app = App::new();
    app.load(data);
    assert_eq!(app.attributes.len(), 10);
    assert_eq!(app.sequence.max(), Some(9));
    assert_eq!(app.current_attribute(), Some("yr07"));
    assert_eq!(app.visible_markers().len(), 10);

    app.step_back();
    assert_eq!(app.current_attribute(), Some("yr16"));
    for _ in 0..10 {
        app.step_forward();
    }
    assert_eq!(app.current_attribute(), Some("yr16"));

    let legend = app.legend.as_ref().unwrap();
    assert_eq!(legend.title, "Avg. Yield in 16");
    assert!(legend.entries.iter().all(|e| e.radius.is_some()));
}
