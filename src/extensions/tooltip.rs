use smallvec::SmallVec;

use crate::api::chart_config::ChartConfig;
use crate::api::click_controller::ChartHit;
use crate::api::label_format::format_number;
use crate::core::{BandColorResolver, ColorResolver, ColorSpace, RatingPoint};

/// Distance from the canvas edge at which the tooltip flips to the other
/// side of the caret.
const FLIP_EDGE_PAD_PX: f64 = 10.0;

/// One hovered point presented to a tooltip renderer.
#[derive(Debug, Clone, Copy)]
pub struct TooltipItem<'a> {
    pub series_label: &'a str,
    pub point: &'a RatingPoint,
}

/// Composed tooltip content as HTML fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipModel {
    pub title: Option<String>,
    pub body: SmallVec<[String; 4]>,
}

impl TooltipModel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_empty()
    }
}

/// Strategy composing tooltip content from hovered points.
pub trait TooltipRenderer {
    fn title_html(&self, items: &[TooltipItem<'_>]) -> Option<String>;
    fn label_html(&self, item: &TooltipItem<'_>) -> Option<String>;

    fn compose(&self, items: &[TooltipItem<'_>]) -> TooltipModel {
        TooltipModel {
            title: self.title_html(items),
            body: items.iter().filter_map(|item| self.label_html(item)).collect(),
        }
    }
}

/// Collects the history-backed points behind a set of hit-test results.
///
/// Outline twins carry no history and drop out here.
#[must_use]
pub fn tooltip_items<'a>(config: &'a ChartConfig, hits: &[ChartHit]) -> Vec<TooltipItem<'a>> {
    hits.iter()
        .filter_map(|hit| {
            let dataset = config.datasets.get(hit.dataset_index)?;
            let point = dataset.history.as_ref()?.get(hit.point_index)?;
            Some(TooltipItem {
                series_label: &dataset.label,
                point,
            })
        })
        .collect()
}

/// Default tooltip: bold name/series title and a colored rating line with a
/// directional delta arrow, rank, score, and solved count.
#[derive(Debug, Clone)]
pub struct RatingTooltipRenderer {
    resolver: BandColorResolver,
    multi_series: bool,
    addition_field: Option<String>,
}

impl RatingTooltipRenderer {
    #[must_use]
    pub fn new(resolver: BandColorResolver, multi_series: bool) -> Self {
        Self {
            resolver,
            multi_series,
            addition_field: None,
        }
    }

    #[must_use]
    pub fn with_addition_field(mut self, field: impl Into<String>) -> Self {
        self.addition_field = Some(field.into());
        self
    }

    fn rating_html(&self, point: &RatingPoint) -> String {
        let style = match self.resolver.resolve(point, ColorSpace::Hsl) {
            Some(color) => format!("font-weight: bold; color: {color}"),
            None => "font-weight: bold".to_owned(),
        };
        let mut rating = format!(
            "<span style=\"{style}\">{}</span>",
            format_number(point.new_rating)
        );

        if let Some(change) = point.rating_delta() {
            if change > 0.0 {
                rating.push_str(&format!(
                    " <span style=\"font-weight: bold; color: #0f0\"><i class=\"fas fa-angle-up\"></i>{}</span>",
                    format_number(change)
                ));
            } else if change < 0.0 {
                rating.push_str(&format!(
                    " <span style=\"font-weight: bold; color: #f00\"><i class=\"fas fa-angle-down\"></i>{}</span>",
                    format_number(-change)
                ));
            } else {
                rating.push_str(&format!(
                    " <span style=\"font-weight: bold; color: #fff\">={}</span>",
                    format_number(change)
                ));
            }
        }

        rating
    }
}

impl TooltipRenderer for RatingTooltipRenderer {
    fn title_html(&self, items: &[TooltipItem<'_>]) -> Option<String> {
        let item = items.first()?;
        let mut title = format!("<div style=\"font-weight: bold\">{}</div>", item.point.name);
        if self.multi_series {
            title = format!(
                "<div style=\"font-weight: bold\">{}</div>{title}",
                item.series_label
            );
        }
        if let Some(field) = &self.addition_field {
            let value = item
                .point
                .values
                .get(field)
                .copied()
                .map_or_else(String::new, format_number);
            title = format!("<div style=\"font-weight: bold\">{field} = {value}</div>{title}");
        }
        Some(title)
    }

    fn label_html(&self, item: &TooltipItem<'_>) -> Option<String> {
        let point = item.point;
        let mut label = format!("<div>{}</div>", point.when);
        label.push_str(&format!("<div>{}</div>", self.rating_html(point)));

        if let Some(place) = point.place {
            label.push_str(&format!("<div class=\"small\">Rank: {place}"));
            if let Some(total) = point.total {
                label.push_str(&format!(" of {total}"));
            }
            label.push_str("</div>");
        }
        if let Some(score) = point.score {
            label.push_str(&format!(
                "<div class=\"small\">Score: {}</div>",
                format_number(score)
            ));
        }
        if let Some(solved) = point.solved {
            label.push_str(&format!("<div class=\"small\">Solved: {solved}"));
            if let Some(total) = point.n_problems {
                label.push_str(&format!(" of {total}"));
            }
            label.push_str("</div>");
        }

        Some(label)
    }
}

/// Canvas bounding box in page coordinates, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Final tooltip position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

/// Positions the tooltip at the caret, flipping to the opposite side of the
/// pointer when it would overflow the canvas box.
///
/// The host adds its own page scroll offsets on top.
#[must_use]
pub fn place_tooltip(
    canvas: CanvasBox,
    caret_x: f64,
    caret_y: f64,
    tooltip_width: f64,
    tooltip_height: f64,
) -> TooltipPlacement {
    let flip_x = caret_x >= canvas.width - tooltip_width - FLIP_EDGE_PAD_PX;
    let flip_y = caret_y >= canvas.height - tooltip_height - FLIP_EDGE_PAD_PX;
    TooltipPlacement {
        left: canvas.left + caret_x + if flip_x { -tooltip_width } else { 0.0 },
        top: canvas.top + caret_y + if flip_y { -tooltip_height } else { 0.0 },
    }
}
