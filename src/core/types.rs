use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::bands::ColorBand;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One historical observation in a resource's rating history.
///
/// Supplied by the host and never mutated by this crate. `values` carries
/// per-field statistics for addition-mode charts, in host-listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingPoint {
    pub date: DateTime<Utc>,
    /// Preformatted display date shown in tooltips.
    #[serde(default)]
    pub when: String,
    #[serde(default)]
    pub name: String,
    pub new_rating: f64,
    #[serde(default)]
    pub old_rating: Option<f64>,
    #[serde(default)]
    pub rating_change: Option<f64>,
    #[serde(default)]
    pub place: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub solved: Option<u64>,
    #[serde(default)]
    pub n_problems: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub cid: Option<u64>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub sid: Option<u64>,
    #[serde(default)]
    pub values: IndexMap<String, f64>,
}

impl RatingPoint {
    #[must_use]
    pub fn new(date: DateTime<Utc>, new_rating: f64) -> Self {
        Self {
            date,
            when: String::new(),
            name: String::new(),
            new_rating,
            old_rating: None,
            rating_change: None,
            place: None,
            total: None,
            score: None,
            solved: None,
            n_problems: None,
            url: None,
            slug: None,
            cid: None,
            division: None,
            sid: None,
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_when(mut self, when: impl Into<String>) -> Self {
        self.when = when.into();
        self
    }

    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: f64) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    /// X coordinate on the time axis, in unix milliseconds.
    #[must_use]
    pub fn x_millis(&self) -> f64 {
        self.date.timestamp_millis() as f64
    }

    /// Signed rating delta, preferring explicit old rating over a
    /// host-precomputed change.
    #[must_use]
    pub fn rating_delta(&self) -> Option<f64> {
        match self.old_rating {
            Some(old) => Some(self.new_rating - old),
            None => self.rating_change,
        }
    }

    /// Value of a named field as used for point coloring.
    ///
    /// Well-known rating fields resolve from the point itself; anything else
    /// falls back to the per-field `values` map.
    #[must_use]
    pub fn field_value(&self, field: &str) -> Option<f64> {
        match field {
            "new_rating" => Some(self.new_rating),
            "old_rating" => self.old_rating,
            "rating_change" => self.rating_change,
            "score" => self.score,
            _ => self.values.get(field).copied(),
        }
    }
}

/// Peak achieved value and the time it was reached, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighestMark {
    pub value: f64,
    pub timestamp: i64,
}

impl HighestMark {
    #[must_use]
    pub fn new(value: f64, timestamp: i64) -> Self {
        Self { value, timestamp }
    }

    /// Position on the time axis, in unix milliseconds.
    #[must_use]
    pub fn x_millis(self) -> f64 {
        self.timestamp as f64 * 1_000.0
    }
}

/// Parallel per-series styling arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyles {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl DatasetStyles {
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        self.colors.get(index).map_or("black", String::as_str)
    }

    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    #[default]
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

/// Engine hit-testing mode for hover/tooltip resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HitMode {
    #[default]
    Nearest,
    Index,
    Point,
    Dataset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CubicInterpolationMode {
    #[default]
    Default,
    Monotone,
}

/// Read-only chart input: rating history plus display options.
///
/// Serde defaults mirror the host-side fallbacks, so sparse host payloads
/// deserialize into a fully populated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub host: String,
    #[serde(default)]
    pub kind: Option<String>,
    pub data: Vec<Vec<RatingPoint>>,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub highest: Option<HighestMark>,
    #[serde(default)]
    pub colors: Vec<ColorBand>,
    #[serde(default)]
    pub datasets: DatasetStyles,
    #[serde(default = "default_coloring_field")]
    pub coloring_field: String,
    #[serde(default)]
    pub fields: Vec<String>,

    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    /// `None` falls back to `5 - point_radius`.
    #[serde(default)]
    pub point_hit_radius: Option<f64>,
    #[serde(default = "default_point_hover_radius")]
    pub point_hover_radius: f64,
    #[serde(default)]
    pub hover_border_width: Option<f64>,
    #[serde(default)]
    pub outline: bool,
    #[serde(default)]
    pub without_url: bool,
    #[serde(default)]
    pub without_before_draw: bool,
    #[serde(default)]
    pub without_highest: bool,
    #[serde(default)]
    pub x_axes_unit: TimeUnit,
    #[serde(default)]
    pub legend_position: LegendPosition,
    #[serde(default)]
    pub interaction_mode: HitMode,
    /// `None` falls back to `interaction_mode`.
    #[serde(default)]
    pub hover_mode: Option<HitMode>,
    #[serde(default = "default_tooltip_mode")]
    pub tooltip_mode: HitMode,
    #[serde(default)]
    pub cubic_interpolation_mode: CubicInterpolationMode,
    #[serde(default = "default_true")]
    pub title_display: bool,
}

impl ResourceInfo {
    #[must_use]
    pub fn new(host: impl Into<String>, data: Vec<Vec<RatingPoint>>, min: f64, max: f64) -> Self {
        Self {
            host: host.into(),
            kind: None,
            data,
            min,
            max,
            highest: None,
            colors: Vec::new(),
            datasets: DatasetStyles::default(),
            coloring_field: default_coloring_field(),
            fields: Vec::new(),
            border_width: default_border_width(),
            point_radius: default_point_radius(),
            point_hit_radius: None,
            point_hover_radius: default_point_hover_radius(),
            hover_border_width: None,
            outline: false,
            without_url: false,
            without_before_draw: false,
            without_highest: false,
            x_axes_unit: TimeUnit::default(),
            legend_position: LegendPosition::default(),
            interaction_mode: HitMode::default(),
            hover_mode: None,
            tooltip_mode: default_tooltip_mode(),
            cubic_interpolation_mode: CubicInterpolationMode::default(),
            title_display: true,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse resource info: {e}")))
    }

    #[must_use]
    pub fn point_hit_radius(&self) -> f64 {
        self.point_hit_radius
            .unwrap_or(5.0 - self.point_radius)
    }

    #[must_use]
    pub fn hover_mode(&self) -> HitMode {
        self.hover_mode.unwrap_or(self.interaction_mode)
    }

    /// Iterates every recorded value of one per-field statistic across all
    /// series.
    pub fn field_values<'a>(&'a self, field: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.data
            .iter()
            .flatten()
            .filter_map(move |point| point.values.get(field).copied())
    }
}

fn default_coloring_field() -> String {
    "new_rating".to_owned()
}

fn default_border_width() -> f64 {
    1.0
}

fn default_point_radius() -> f64 {
    3.0
}

fn default_point_hover_radius() -> f64 {
    5.0
}

fn default_tooltip_mode() -> HitMode {
    HitMode::Index
}

fn default_true() -> bool {
    true
}
