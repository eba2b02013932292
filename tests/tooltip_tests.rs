use chrono::{TimeZone, Utc};
use rating_chart_rs::core::{BandColorResolver, ColorBand, RatingPoint};
use rating_chart_rs::extensions::{
    CanvasBox, RatingTooltipRenderer, TooltipItem, TooltipRenderer, place_tooltip,
};

fn bands() -> Vec<ColorBand> {
    vec![
        ColorBand::new(0.0, 1199.0, "gray", [0.0, 0.0, 0.5]),
        ColorBand::new(1200.0, 1399.0, "green", [0.25, 0.5, 0.5]),
    ]
}

fn point() -> RatingPoint {
    RatingPoint::new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(), 1250.0)
        .with_name("Codeforces Round 123")
        .with_when("1 June 2024")
}

fn renderer(multi: bool) -> RatingTooltipRenderer {
    RatingTooltipRenderer::new(BandColorResolver::new(bands(), "new_rating"), multi)
}

#[test]
fn title_is_the_point_name_for_a_single_series() {
    let p = point();
    let items = [TooltipItem {
        series_label: "alice",
        point: &p,
    }];

    let title = renderer(false).title_html(&items).expect("title");
    assert_eq!(
        title,
        "<div style=\"font-weight: bold\">Codeforces Round 123</div>"
    );
}

#[test]
fn multi_series_title_prepends_the_series_label() {
    let p = point();
    let items = [TooltipItem {
        series_label: "alice",
        point: &p,
    }];

    let title = renderer(true).title_html(&items).expect("title");
    assert!(title.starts_with("<div style=\"font-weight: bold\">alice</div>"));
    assert!(title.ends_with("<div style=\"font-weight: bold\">Codeforces Round 123</div>"));
}

#[test]
fn addition_mode_title_leads_with_the_field_value() {
    let mut p = point();
    p.values.insert("solving".to_owned(), 42.0);
    let items = [TooltipItem {
        series_label: "alice",
        point: &p,
    }];

    let title = renderer(false)
        .with_addition_field("solving")
        .title_html(&items)
        .expect("title");
    assert!(title.starts_with("<div style=\"font-weight: bold\">solving = 42</div>"));
}

#[test]
fn positive_delta_renders_a_green_up_arrow() {
    let mut p = point();
    p.old_rating = Some(1200.0);
    let item = TooltipItem {
        series_label: "alice",
        point: &p,
    };

    let label = renderer(false).label_html(&item).expect("label");
    assert!(label.contains("<div>1 June 2024</div>"));
    assert!(label.contains("color: hsl(90,50%,75%)\">1250</span>"));
    assert!(label.contains("color: #0f0\"><i class=\"fas fa-angle-up\"></i>50</span>"));
}

#[test]
fn negative_delta_renders_a_red_down_arrow_with_magnitude() {
    let mut p = point();
    p.old_rating = Some(1330.0);
    let item = TooltipItem {
        series_label: "alice",
        point: &p,
    };

    let label = renderer(false).label_html(&item).expect("label");
    assert!(label.contains("color: #f00\"><i class=\"fas fa-angle-down\"></i>80</span>"));
}

#[test]
fn zero_delta_renders_an_equals_sign() {
    let mut p = point();
    p.rating_change = Some(0.0);
    let item = TooltipItem {
        series_label: "alice",
        point: &p,
    };

    let label = renderer(false).label_html(&item).expect("label");
    assert!(label.contains("color: #fff\">=0</span>"));
}

#[test]
fn no_delta_information_omits_the_arrow() {
    let p = point();
    let item = TooltipItem {
        series_label: "alice",
        point: &p,
    };

    let label = renderer(false).label_html(&item).expect("label");
    assert!(!label.contains("fa-angle-up"));
    assert!(!label.contains("fa-angle-down"));
}

#[test]
fn rank_score_and_solved_lines_appear_when_present() {
    let mut p = point();
    p.place = Some(17);
    p.total = Some(2_000);
    p.score = Some(3_456.5);
    p.solved = Some(5);
    p.n_problems = Some(8);
    let item = TooltipItem {
        series_label: "alice",
        point: &p,
    };

    let label = renderer(false).label_html(&item).expect("label");
    assert!(label.contains("<div class=\"small\">Rank: 17 of 2000</div>"));
    assert!(label.contains("<div class=\"small\">Score: 3456.5</div>"));
    assert!(label.contains("<div class=\"small\">Solved: 5 of 8</div>"));
}

#[test]
fn compose_collects_title_and_one_body_line_per_item() {
    let p1 = point();
    let mut p2 = point().with_name("Another Round");
    p2.place = Some(3);
    let items = [
        TooltipItem {
            series_label: "alice",
            point: &p1,
        },
        TooltipItem {
            series_label: "bob",
            point: &p2,
        },
    ];

    let model = renderer(true).compose(&items);
    assert!(!model.is_empty());
    assert!(model.title.is_some());
    assert_eq!(model.body.len(), 2);
    assert!(model.body[1].contains("Rank: 3"));
}

#[test]
fn tooltip_placement_flips_near_the_edges() {
    let canvas = CanvasBox {
        left: 100.0,
        top: 50.0,
        width: 800.0,
        height: 600.0,
    };

    // Plenty of room: the tooltip sits at the caret.
    let at = place_tooltip(canvas, 200.0, 100.0, 120.0, 80.0);
    assert_eq!(at.left, 300.0);
    assert_eq!(at.top, 150.0);

    // Close to the right edge: it flips left of the caret.
    let at = place_tooltip(canvas, 700.0, 100.0, 120.0, 80.0);
    assert_eq!(at.left, 100.0 + 700.0 - 120.0);
    assert_eq!(at.top, 150.0);

    // Close to the bottom edge: it flips above the caret.
    let at = place_tooltip(canvas, 200.0, 550.0, 120.0, 80.0);
    assert_eq!(at.left, 300.0);
    assert_eq!(at.top, 50.0 + 550.0 - 80.0);
}
