use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{
    CubicInterpolationMode, HighestMark, HitMode, LegendPosition, RatingPoint, TimeUnit,
};
use crate::error::{ChartError, ChartResult};

/// One rendered sample: time-axis position in unix milliseconds plus an
/// optional value. `None` leaves a gap in the line, mirroring points whose
/// per-field statistic is absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: Option<f64>,
}

impl ChartPoint {
    #[must_use]
    pub const fn new(x: f64, y: Option<f64>) -> Self {
        Self { x, y }
    }
}

/// One drawable series derived from a resource data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub data: Vec<ChartPoint>,
    pub label: String,
    /// Index into the resource's dataset styles; outline twins share it with
    /// their source series.
    pub label_index: usize,
    /// Source observations backing tooltips and click targets. Outline twins
    /// drop it to avoid doubling the payload.
    #[serde(default)]
    pub history: Option<Vec<RatingPoint>>,
    pub border_width: f64,
    pub border_color: String,
    #[serde(default)]
    pub hover_border_width: Option<f64>,
    pub point_radius: f64,
    pub point_hit_radius: f64,
    pub point_hover_radius: f64,
    #[serde(default)]
    pub fill: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Per-point fill colors; `None` defers to the engine default.
    pub point_background_colors: Vec<Option<String>>,
}

/// Configured bounds for one axis. `None` means the engine derives the bound
/// from data; the grace ratio widens the effective range symmetrically after
/// data limits are computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisRangeOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(default)]
    pub grace_ratio: f64,
}

impl AxisRangeOptions {
    #[must_use]
    pub fn fixed(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            grace_ratio: 0.0,
        }
    }

    #[must_use]
    pub fn auto() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grace_ratio(mut self, grace_ratio: f64) -> Self {
        self.grace_ratio = grace_ratio;
        self
    }

    /// Effective range after falling back to data limits and applying grace.
    #[must_use]
    pub fn grace_applied(self, data_limits: (f64, f64)) -> (f64, f64) {
        let min = self.min.unwrap_or(data_limits.0);
        let max = self.max.unwrap_or(data_limits.1);
        let grace = (max - min) * self.grace_ratio;
        (min - grace, max + grace)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub x: AxisRangeOptions,
    pub y: AxisRangeOptions,
    pub x_unit: TimeUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    pub font_size_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
    pub use_point_style: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub display_colors: bool,
    pub body_font_size_px: f64,
    pub padding_px: f64,
    pub caret_padding_px: f64,
    pub caret_size_px: f64,
    pub mode: HitMode,
    pub intersect: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            display_colors: false,
            body_font_size_px: 14.0,
            padding_px: 6.0,
            caret_padding_px: 0.0,
            caret_size_px: 0.0,
            mode: HitMode::Index,
            intersect: false,
        }
    }
}

/// Which decoration scenes the host should draw for this chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DecorationOptions {
    pub band_background: bool,
    pub highest_line: bool,
    pub highest_callout: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub interaction_mode: HitMode,
    pub hover_mode: HitMode,
    pub line_tension: f64,
    pub cubic_interpolation_mode: CubicInterpolationMode,
    pub scales: ScaleOptions,
    pub title: TitleOptions,
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

/// Declarative chart configuration handed to the rendering engine.
///
/// After creation only the axis-range fields are mutated, and only through a
/// `ChartHandle`; everything else is fixed at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub labels: Vec<DateTime<Utc>>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
    pub decorations: DecorationOptions,
    /// Peak mark backing the dashed line and callout decorations.
    #[serde(default)]
    pub highest: Option<HighestMark>,
    /// Whether point clicks resolve navigation targets.
    pub with_url: bool,
}

impl ChartConfig {
    /// Serializes the configuration to pretty JSON for host persistence.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }

    /// Minimum and maximum time-axis values across all datasets.
    #[must_use]
    pub fn data_x_limits(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for dataset in &self.datasets {
            for point in &dataset.data {
                min = min.min(point.x);
                max = max.max(point.x);
            }
        }
        (min <= max).then_some((min, max))
    }
}
