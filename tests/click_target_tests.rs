use chrono::{DateTime, TimeZone, Utc};
use rating_chart_rs::api::click_controller::{
    ChartHit, HoverCursor, click_target, hover_cursor, resolve_click_target,
};
use rating_chart_rs::api::build_rating_chart_config;
use rating_chart_rs::core::{RatingPoint, ResourceInfo};

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap()
}

fn point(day: u32) -> RatingPoint {
    RatingPoint::new(date(day), 1500.0)
}

#[test]
fn direct_url_wins_over_derived_standings() {
    let mut p = point(1);
    p.url = Some("https://example.com/contest/42".to_owned());
    p.slug = Some("round-1".to_owned());
    p.cid = Some(42);

    let target = resolve_click_target(&p).expect("target");
    assert_eq!(target.url, "https://example.com/contest/42");
}

#[test]
fn slug_and_contest_id_derive_a_standings_url() {
    let mut p = point(1);
    p.slug = Some("spring-finals".to_owned());
    p.cid = Some(1234);

    let target = resolve_click_target(&p).expect("target");
    assert_eq!(target.url, "/standings/spring-finals-1234/");
}

#[test]
fn division_and_find_me_params_are_appended_in_order() {
    let mut p = point(1);
    p.slug = Some("spring-finals".to_owned());
    p.cid = Some(1234);
    p.division = Some("div1".to_owned());
    p.sid = Some(777);

    let target = resolve_click_target(&p).expect("target");
    assert_eq!(
        target.url,
        "/standings/spring-finals-1234/?division=div1&find_me=777"
    );
}

#[test]
fn params_apply_to_direct_urls_too() {
    let mut p = point(1);
    p.url = Some("https://example.com/contest/42".to_owned());
    p.sid = Some(9);

    let target = resolve_click_target(&p).expect("target");
    assert_eq!(target.url, "https://example.com/contest/42?find_me=9");
}

#[test]
fn slug_without_contest_id_yields_no_target() {
    let mut p = point(1);
    p.slug = Some("orphan".to_owned());
    assert!(resolve_click_target(&p).is_none());
}

#[test]
fn click_scans_hits_until_a_target_is_found() {
    let mut first = point(1);
    first.name = "no target".to_owned();
    let mut second = point(2);
    second.url = Some("https://example.com/a".to_owned());

    let resource = ResourceInfo::new("example.com", vec![vec![first, second]], 1000.0, 2000.0);
    let dates = vec![date(1), date(2)];
    let config = build_rating_chart_config(&resource, &dates).expect("config");

    let hits = [
        ChartHit {
            dataset_index: 0,
            point_index: 0,
        },
        ChartHit {
            dataset_index: 0,
            point_index: 1,
        },
    ];
    let target = click_target(&config, &hits).expect("target");
    assert_eq!(target.url, "https://example.com/a");
}

#[test]
fn outline_twins_are_skipped_when_resolving_clicks() {
    let mut p = point(1);
    p.url = Some("https://example.com/a".to_owned());
    let mut resource = ResourceInfo::new("example.com", vec![vec![p]], 1000.0, 2000.0);
    resource.outline = true;

    let config = build_rating_chart_config(&resource, &[date(1)]).expect("config");
    assert_eq!(config.datasets.len(), 2);

    // Hit on the history-less twin resolves nothing.
    let twin_hit = [ChartHit {
        dataset_index: 1,
        point_index: 0,
    }];
    assert!(click_target(&config, &twin_hit).is_none());

    let main_hit = [ChartHit {
        dataset_index: 0,
        point_index: 0,
    }];
    assert!(click_target(&config, &main_hit).is_some());
}

#[test]
fn without_url_disables_navigation_and_cursor() {
    let mut p = point(1);
    p.url = Some("https://example.com/a".to_owned());
    let mut resource = ResourceInfo::new("example.com", vec![vec![p]], 1000.0, 2000.0);
    resource.without_url = true;

    let config = build_rating_chart_config(&resource, &[date(1)]).expect("config");
    let hits = [ChartHit {
        dataset_index: 0,
        point_index: 0,
    }];
    assert!(click_target(&config, &hits).is_none());
    assert_eq!(hover_cursor(&config, true), HoverCursor::Default);
}

#[test]
fn cursor_reflects_hit_and_url_availability() {
    let resource = ResourceInfo::new("example.com", vec![vec![point(1)]], 1000.0, 2000.0);
    let config = build_rating_chart_config(&resource, &[date(1)]).expect("config");

    assert_eq!(hover_cursor(&config, true), HoverCursor::Pointer);
    assert_eq!(hover_cursor(&config, false), HoverCursor::Default);
}
