use crate::api::chart_config::ChartConfig;
use crate::core::RatingPoint;

/// Navigation target resolved from a clicked point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    pub url: String,
}

/// One engine hit-test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHit {
    pub dataset_index: usize,
    pub point_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverCursor {
    Pointer,
    Default,
}

/// Resolves the navigation target a single point carries, if any.
///
/// A direct URL wins; otherwise a standings page is derived from the
/// contest slug and id. Division and find-me parameters are appended to
/// either form.
#[must_use]
pub fn resolve_click_target(point: &RatingPoint) -> Option<ClickTarget> {
    let mut url = match (&point.url, &point.slug, point.cid) {
        (Some(url), _, _) => url.clone(),
        (None, Some(slug), Some(cid)) => format!("/standings/{slug}-{cid}/"),
        _ => return None,
    };

    let mut params = String::new();
    if let Some(division) = &point.division {
        params.push_str(&format!("&division={division}"));
    }
    if let Some(sid) = point.sid {
        params.push_str(&format!("&find_me={sid}"));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params[1..]);
    }

    Some(ClickTarget { url })
}

/// Scans hit-test results in order and returns the first point that carries
/// a navigation target. Outline twins have no history and are skipped.
#[must_use]
pub fn click_target(config: &ChartConfig, hits: &[ChartHit]) -> Option<ClickTarget> {
    if !config.with_url {
        return None;
    }
    hits.iter().find_map(|hit| {
        let history = config.datasets.get(hit.dataset_index)?.history.as_ref()?;
        resolve_click_target(history.get(hit.point_index)?)
    })
}

/// Cursor shown while hovering the chart.
#[must_use]
pub fn hover_cursor(config: &ChartConfig, has_hit: bool) -> HoverCursor {
    if has_hit && config.with_url {
        HoverCursor::Pointer
    } else {
        HoverCursor::Default
    }
}
