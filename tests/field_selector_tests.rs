use chrono::{DateTime, TimeZone, Utc};
use rating_chart_rs::api::FieldSelector;
use rating_chart_rs::core::{RatingPoint, ResourceInfo};
use rating_chart_rs::error::ChartError;

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap()
}

fn resource_with_fields() -> ResourceInfo {
    let series: Vec<RatingPoint> = (1..=4)
        .map(|d| {
            RatingPoint::new(date(d), 1400.0 + d as f64)
                .with_value("solving", d as f64 * 10.0)
                .with_value("flat", 1.0)
        })
        .collect();
    let mut resource = ResourceInfo::new("example.com", vec![series], 1400.0, 1410.0);
    resource.fields = vec!["solving".to_owned(), "flat".to_owned()];
    resource
}

fn dates() -> Vec<DateTime<Utc>> {
    (1..=4).map(date).collect()
}

#[test]
fn selector_is_inactive_without_fields() {
    let resource = ResourceInfo::new("example.com", vec![vec![]], 0.0, 1.0);
    let selector = FieldSelector::new(resource, dates());
    assert!(!selector.is_active());
}

#[test]
fn selecting_a_field_spawns_an_addition_chart() {
    let mut selector = FieldSelector::new(resource_with_fields(), dates());
    assert!(selector.is_active());
    assert_eq!(selector.fields(), ["solving", "flat"]);

    let config = selector.select("solving").expect("chart");
    assert_eq!(config.options.title.text, "example.com (solving)");
    assert_eq!(config.options.scales.y.min, Some(9.0));
    assert_eq!(config.options.scales.y.max, Some(41.0));

    assert_eq!(selector.spawned_fields().collect::<Vec<_>>(), ["solving"]);
    assert!(selector.chart("solving").is_some());
}

#[test]
fn reselecting_a_field_replaces_its_chart() {
    let mut selector = FieldSelector::new(resource_with_fields(), dates());
    selector.select("solving").expect("chart");
    selector.select("solving").expect("chart");

    assert_eq!(selector.spawned_fields().count(), 1);
}

#[test]
fn degenerate_fields_are_skipped_without_spawning() {
    let mut selector = FieldSelector::new(resource_with_fields(), dates());

    let err = selector.select("flat").unwrap_err();
    assert!(matches!(err, ChartError::DegenerateFieldRange { .. }));
    assert!(selector.chart("flat").is_none());
    assert_eq!(selector.spawned_fields().count(), 0);
}

#[test]
fn closing_a_chart_drops_it() {
    let mut selector = FieldSelector::new(resource_with_fields(), dates());
    selector.select("solving").expect("chart");

    assert!(selector.close("solving"));
    assert!(selector.chart("solving").is_none());
    assert!(!selector.close("solving"));
}
