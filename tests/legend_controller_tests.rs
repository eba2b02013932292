use chrono::{DateTime, TimeZone, Utc};
use rating_chart_rs::api::legend_controller::{
    generate_labels, hover_highlight, leave_highlight, toggle_visibility,
};
use rating_chart_rs::api::{ChartHandle, ChartModel, build_rating_chart_config};
use rating_chart_rs::core::{DatasetStyles, RatingPoint, ResourceInfo, Viewport};

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap()
}

fn two_series_resource(outline: bool) -> ResourceInfo {
    let series = |offset: f64| -> Vec<RatingPoint> {
        (1..=3)
            .map(|d| RatingPoint::new(date(d), 1400.0 + offset + d as f64))
            .collect()
    };
    let mut resource = ResourceInfo::new(
        "example.com",
        vec![series(0.0), series(100.0)],
        1400.0,
        1600.0,
    );
    resource.datasets = DatasetStyles {
        colors: vec!["#ff0000".to_owned(), "#0000ff".to_owned()],
        labels: vec!["alice".to_owned(), "bob".to_owned()],
    };
    resource.outline = outline;
    resource
}

fn model(outline: bool) -> (ChartModel, DatasetStyles) {
    let resource = two_series_resource(outline);
    let styles = resource.datasets.clone();
    let dates: Vec<_> = (1..=3).map(date).collect();
    let config = build_rating_chart_config(&resource, &dates).expect("config");
    let chart = ChartModel::new(config, Viewport::new(1000, 500)).expect("model");
    (chart, styles)
}

#[test]
fn labels_reflect_styles_and_visibility() {
    let (chart, styles) = model(false);
    let entries = generate_labels(&chart, &styles);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "alice");
    assert_eq!(entries[0].fill_style, "#ff0000");
    assert_eq!(entries[0].dataset_index, 0);
    assert!(!entries[0].hidden);
    assert_eq!(entries[1].text, "bob");
    assert!(!entries[1].hidden);
}

#[test]
fn toggle_hides_and_releases_the_override() {
    let (mut chart, styles) = model(false);

    toggle_visibility(&mut chart, "alice");
    assert_eq!(chart.dataset_hidden(0), Some(true));
    assert_eq!(chart.dataset_hidden(1), Some(false));
    assert!(generate_labels(&chart, &styles)[0].hidden);
    assert_eq!(chart.update_count(), 1);

    toggle_visibility(&mut chart, "alice");
    assert_eq!(chart.dataset_hidden(0), Some(false));
    assert_eq!(chart.update_count(), 2);
}

#[test]
fn toggle_covers_outline_twins_sharing_the_label() {
    let (mut chart, _) = model(true);
    assert_eq!(chart.dataset_count(), 4);

    toggle_visibility(&mut chart, "alice");
    // Both the series and its halo twin flip together.
    assert_eq!(chart.dataset_hidden(0), Some(true));
    assert_eq!(chart.dataset_hidden(1), Some(true));
    assert_eq!(chart.dataset_hidden(2), Some(false));
    assert_eq!(chart.dataset_hidden(3), Some(false));
}

#[test]
fn hover_thickens_and_leave_restores_the_border() {
    let (mut chart, _) = model(false);
    assert_eq!(chart.dataset_border_width(0), Some(1.0));

    hover_highlight(&mut chart, "alice", 1.0);
    assert_eq!(chart.dataset_border_width(0), Some(5.0));
    assert_eq!(chart.dataset_border_width(1), Some(1.0));
    assert_eq!(chart.update_count(), 1);

    leave_highlight(&mut chart, "alice", 1.0);
    assert_eq!(chart.dataset_border_width(0), Some(1.0));
    assert_eq!(chart.update_count(), 2);
}

#[test]
fn hover_on_an_unknown_label_is_a_no_op() {
    let (mut chart, _) = model(false);
    hover_highlight(&mut chart, "nobody", 1.0);
    assert_eq!(chart.update_count(), 0);
}
