use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::api::chart_config::{
    AxisRangeOptions, ChartConfig, ChartOptions, ChartPoint, Dataset, DecorationOptions,
    LegendOptions, ScaleOptions, TitleOptions, TooltipOptions,
};
use crate::core::{BandColorResolver, ColorResolver, ColorSpace, RatingPoint, ResourceInfo};
use crate::error::{ChartError, ChartResult};

/// Symmetric widening applied to the y range after data limits.
pub const Y_AXIS_GRACE_RATIO: f64 = 0.05;

/// Border color forced onto outline twin datasets.
const OUTLINE_BORDER_COLOR: &str = "black";

/// Builds the standard rating-progression configuration for a resource.
pub fn build_rating_chart_config(
    resource: &ResourceInfo,
    dates: &[DateTime<Utc>],
) -> ChartResult<ChartConfig> {
    build_chart_config(resource, dates, "new_rating", false)
}

/// Builds a chart configuration from a resource's history.
///
/// In addition mode the chart plots one per-field statistic instead of the
/// rating progression; a field whose values are absent or constant cannot
/// span an axis and yields [`ChartError::DegenerateFieldRange`].
pub fn build_chart_config(
    resource: &ResourceInfo,
    dates: &[DateTime<Utc>],
    field: &str,
    addition: bool,
) -> ChartResult<ChartConfig> {
    let y_limits = if addition {
        let min = resource.field_values(field).map(OrderedFloat).min();
        let max = resource.field_values(field).map(OrderedFloat).max();
        match (min, max) {
            (Some(min), Some(max)) if min != max => (min.into_inner(), max.into_inner()),
            _ => {
                return Err(ChartError::DegenerateFieldRange {
                    field: field.to_owned(),
                    min: min.map(OrderedFloat::into_inner),
                    max: max.map(OrderedFloat::into_inner),
                });
            }
        }
    } else {
        (resource.min, resource.max)
    };

    let resolver = BandColorResolver::new(resource.colors.clone(), resource.coloring_field.clone());
    let mut datasets = Vec::with_capacity(resource.data.len());
    for (index, series) in resource.data.iter().enumerate() {
        let dataset = derive_dataset(resource, &resolver, index, series, field, addition);
        if resource.outline {
            let outline = outline_twin(&dataset);
            datasets.push(dataset);
            datasets.push(outline);
        } else {
            datasets.push(dataset);
        }
    }

    let highest = (!addition).then_some(resource.highest).flatten();
    let decorations = DecorationOptions {
        band_background: !addition && !resource.without_before_draw && !resource.colors.is_empty(),
        highest_line: !addition && !resource.without_before_draw && highest.is_some(),
        highest_callout: !addition && !resource.without_highest && highest.is_some(),
    };

    let config = ChartConfig {
        labels: dates.to_vec(),
        datasets,
        options: ChartOptions {
            interaction_mode: resource.interaction_mode,
            hover_mode: resource.hover_mode(),
            line_tension: 0.0,
            cubic_interpolation_mode: resource.cubic_interpolation_mode,
            scales: ScaleOptions {
                x: AxisRangeOptions::auto(),
                y: AxisRangeOptions::fixed(y_limits.0 - 1.0, y_limits.1 + 1.0)
                    .with_grace_ratio(Y_AXIS_GRACE_RATIO),
                x_unit: resource.x_axes_unit,
            },
            title: TitleOptions {
                display: resource.title_display,
                text: title_text(resource, field, addition),
                font_size_px: 16.0,
            },
            legend: LegendOptions {
                display: resource.data.len() > 1,
                position: resource.legend_position,
                use_point_style: true,
            },
            tooltip: TooltipOptions {
                mode: resource.tooltip_mode,
                ..TooltipOptions::default()
            },
        },
        decorations,
        highest,
        with_url: !resource.without_url,
    };

    debug!(
        host = %resource.host,
        field,
        addition,
        datasets = config.datasets.len(),
        "built chart config"
    );
    Ok(config)
}

fn derive_dataset(
    resource: &ResourceInfo,
    resolver: &BandColorResolver,
    index: usize,
    series: &[RatingPoint],
    field: &str,
    addition: bool,
) -> Dataset {
    let border_color = resource.datasets.color(index).to_owned();

    let data = series
        .iter()
        .map(|point| {
            let y = if addition {
                point.values.get(field).copied()
            } else {
                Some(point.new_rating)
            };
            ChartPoint::new(point.x_millis(), y)
        })
        .collect();

    let point_background_colors = series
        .iter()
        .map(|point| {
            if resolver.has_bands() {
                resolver.resolve(point, ColorSpace::Rgb)
            } else {
                Some(border_color.clone())
            }
        })
        .collect();

    Dataset {
        data,
        label: resource.datasets.label(index).to_owned(),
        label_index: index,
        history: Some(series.to_vec()),
        border_width: resource.border_width,
        border_color,
        hover_border_width: resource.hover_border_width,
        point_radius: resource.point_radius,
        point_hit_radius: resource.point_hit_radius(),
        point_hover_radius: resource.point_hover_radius,
        fill: false,
        hidden: false,
        point_background_colors,
    }
}

/// Halo duplicate drawn behind a series: one pixel wider, black, and without
/// the per-point history payload.
fn outline_twin(dataset: &Dataset) -> Dataset {
    let mut twin = dataset.clone();
    twin.border_width += 1.0;
    twin.border_color = OUTLINE_BORDER_COLOR.to_owned();
    twin.history = None;
    twin
}

fn title_text(resource: &ResourceInfo, field: &str, addition: bool) -> String {
    let mut text = resource.host.clone();
    if addition {
        text.push_str(&format!(" ({field})"));
    }
    if let Some(kind) = &resource.kind {
        text.push_str(&format!(" ({kind})"));
    }
    text
}
