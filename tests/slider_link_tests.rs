use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use rating_chart_rs::api::{AxisRangeOptions, ChartModel, PlotInsets, build_rating_chart_config};
use rating_chart_rs::core::{RatingPoint, ResourceInfo, Viewport};
use rating_chart_rs::interaction::{RangeSelection, SelectionTuning, SliderLink, SliderSink};

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
}

fn test_chart() -> ChartModel {
    let resource = ResourceInfo::new(
        "example.com",
        vec![(1..=5).map(|d| RatingPoint::new(date(d), 1200.0 + d as f64)).collect()],
        1200.0,
        1210.0,
    );
    let dates: Vec<_> = (1..=5).map(date).collect();
    let mut config = build_rating_chart_config(&resource, &dates).expect("config");
    config.options.scales.x = AxisRangeOptions::fixed(0.0, 1000.0);
    config.options.scales.y = AxisRangeOptions::fixed(0.0, 400.0);
    ChartModel::with_insets(
        config,
        Viewport::new(1050, 450),
        PlotInsets {
            left: 40.0,
            right: 10.0,
            top: 20.0,
            bottom: 30.0,
        },
    )
    .expect("model")
}

#[derive(Debug)]
struct RecordingSlider {
    low: f64,
    high: f64,
}

impl SliderSink for RecordingSlider {
    fn values(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    fn set_values(&mut self, low: f64, high: f64) {
        self.low = low;
        self.high = high;
    }
}

fn linked_selection() -> RangeSelection {
    let link = SliderLink::new(
        Box::new(RecordingSlider {
            low: 0.0,
            high: 100.0,
        }),
        0.0,
        100.0,
    );
    RangeSelection::new(SelectionTuning::default())
        .expect("selection")
        .with_slider_link(link)
}

#[test]
fn projection_maps_alphas_onto_the_slider_domain() {
    let link = SliderLink::new(
        Box::new(RecordingSlider {
            low: 0.0,
            high: 100.0,
        }),
        200.0,
        400.0,
    );
    assert_relative_eq!(link.project(0.0), 200.0);
    assert_relative_eq!(link.project(0.5), 300.0);
    assert_relative_eq!(link.project(1.0), 400.0);
}

#[test]
fn horizontal_commit_mirrors_onto_the_slider() {
    let mut chart = test_chart();
    let mut sel = linked_selection();

    sel.pointer_down(&chart, 140.0, 200.0);
    sel.pointer_move(&chart, 340.0, 200.0).expect("move");
    sel.pointer_up(&mut chart, 340.0, 200.0).expect("up");

    let link = sel.slider_link().expect("link");
    let (low, high) = link.sink().values();
    assert_relative_eq!(low, 10.0, epsilon = 1e-9);
    assert_relative_eq!(high, 30.0, epsilon = 1e-9);
    assert_eq!(link.history_len(), 1);
}

#[test]
fn leftward_commit_keeps_slider_values_ordered() {
    let mut chart = test_chart();
    let mut sel = linked_selection();

    sel.pointer_down(&chart, 340.0, 200.0);
    sel.pointer_move(&chart, 140.0, 200.0).expect("move");
    sel.pointer_up(&mut chart, 140.0, 200.0).expect("up");

    let (low, high) = sel.slider_link().expect("link").sink().values();
    assert!(low < high);
    assert_relative_eq!(low, 10.0, epsilon = 1e-9);
    assert_relative_eq!(high, 30.0, epsilon = 1e-9);
}

#[test]
fn zoom_out_restores_slider_history_in_lockstep() {
    let mut chart = test_chart();
    let mut sel = linked_selection();

    sel.pointer_down(&chart, 140.0, 200.0);
    sel.pointer_move(&chart, 340.0, 200.0).expect("move");
    sel.pointer_up(&mut chart, 340.0, 200.0).expect("up");

    sel.pointer_down(&chart, 540.0, 200.0);
    sel.pointer_move(&chart, 1040.0, 200.0).expect("move");
    sel.pointer_up(&mut chart, 1040.0, 200.0).expect("up");

    assert_eq!(sel.slider_link().expect("link").history_len(), 2);
    let (low, high) = sel.slider_link().expect("link").sink().values();
    assert_relative_eq!(low, 50.0, epsilon = 1e-9);
    assert_relative_eq!(high, 100.0, epsilon = 1e-9);

    sel.zoom_out(&mut chart).expect("zoom out");
    let (low, high) = sel.slider_link().expect("link").sink().values();
    assert_relative_eq!(low, 10.0, epsilon = 1e-9);
    assert_relative_eq!(high, 30.0, epsilon = 1e-9);

    sel.zoom_out(&mut chart).expect("zoom out");
    let (low, high) = sel.slider_link().expect("link").sink().values();
    assert_relative_eq!(low, 0.0, epsilon = 1e-9);
    assert_relative_eq!(high, 100.0, epsilon = 1e-9);
    assert_eq!(sel.slider_link().expect("link").history_len(), 0);
}

#[test]
fn vertical_commit_leaves_the_slider_untouched() {
    let mut chart = test_chart();
    let mut sel = linked_selection();

    sel.pointer_down(&chart, 200.0, 120.0);
    sel.pointer_move(&chart, 200.0, 270.0).expect("move");
    sel.pointer_up(&mut chart, 200.0, 270.0).expect("up");

    let link = sel.slider_link().expect("link");
    let (low, high) = link.sink().values();
    assert_relative_eq!(low, 0.0);
    assert_relative_eq!(high, 100.0);
    // The stack still mirrors the zoom stack so a pop stays aligned.
    assert_eq!(link.history_len(), 1);
}
