use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::chart_config::ChartConfig;
use crate::core::{AxisScale, PlotArea, Viewport, normalize_range};
use crate::error::{ChartError, ChartResult};

/// Engine-maintained per-dataset state.
///
/// `hidden` is tri-state: `None` defers to the dataset's own flag, matching
/// legend toggle semantics where a toggle overrides and a second toggle
/// releases the override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub hidden: Option<bool>,
}

/// Collaborator contract a rendering engine exposes to this crate.
///
/// The overlay mutates axis ranges exclusively through this surface; `None`
/// bounds mean "derive from data".
pub trait ChartHandle {
    fn viewport(&self) -> Viewport;
    fn x_scale(&self) -> ChartResult<AxisScale>;
    fn y_scale(&self) -> ChartResult<AxisScale>;
    fn plot_area(&self) -> PlotArea;

    fn x_range(&self) -> (Option<f64>, Option<f64>);
    fn y_range(&self) -> (Option<f64>, Option<f64>);
    fn set_x_range(&mut self, min: Option<f64>, max: Option<f64>);
    fn set_y_range(&mut self, min: Option<f64>, max: Option<f64>);

    /// Asks the engine to re-render from the current configuration.
    fn request_update(&mut self);

    fn dataset_count(&self) -> usize;
    fn dataset_label(&self, index: usize) -> Option<&str>;
    fn dataset_meta(&self, index: usize) -> Option<DatasetMeta>;
    fn set_dataset_meta_hidden(&mut self, index: usize, hidden: Option<bool>);
    fn dataset_base_hidden(&self, index: usize) -> Option<bool>;
    fn dataset_border_width(&self, index: usize) -> Option<f64>;
    fn set_dataset_border_width(&mut self, index: usize, width: f64);

    /// Effective visibility after the meta override.
    fn dataset_hidden(&self, index: usize) -> Option<bool> {
        let meta = self.dataset_meta(index)?;
        let base = self.dataset_base_hidden(index)?;
        Some(meta.hidden.unwrap_or(base))
    }
}

/// Pixel insets reserved for axis labels around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            left: 40.0,
            right: 12.0,
            top: 24.0,
            bottom: 32.0,
        }
    }
}

/// Headless chart: derives scales from a configuration and a viewport the
/// way a rendering engine would, without drawing anything.
///
/// Serves as the test rig for every interactive behavior and as a reference
/// implementation of [`ChartHandle`] for real engine adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    config: ChartConfig,
    viewport: Viewport,
    insets: PlotInsets,
    area: PlotArea,
    metas: Vec<DatasetMeta>,
    update_count: usize,
}

impl ChartModel {
    pub fn new(config: ChartConfig, viewport: Viewport) -> ChartResult<Self> {
        Self::with_insets(config, viewport, PlotInsets::default())
    }

    pub fn with_insets(
        config: ChartConfig,
        viewport: Viewport,
        insets: PlotInsets,
    ) -> ChartResult<Self> {
        let area = plot_area_for(viewport, insets)?;
        let metas = vec![DatasetMeta::default(); config.datasets.len()];
        Ok(Self {
            config,
            viewport,
            insets,
            area,
            metas,
            update_count: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Number of re-renders the overlay and controllers have requested.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.area = plot_area_for(viewport, self.insets)?;
        self.viewport = viewport;
        Ok(())
    }

    fn data_x_limits(&self) -> (f64, f64) {
        if let Some(limits) = self.config.data_x_limits() {
            return limits;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for label in &self.config.labels {
            let x = label.timestamp_millis() as f64;
            min = min.min(x);
            max = max.max(x);
        }
        if min <= max { (min, max) } else { (0.0, 1.0) }
    }

    fn data_y_limits(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for dataset in &self.config.datasets {
            for point in &dataset.data {
                if let Some(y) = point.y {
                    min = min.min(y);
                    max = max.max(y);
                }
            }
        }
        if min <= max { (min, max) } else { (0.0, 1.0) }
    }
}

impl ChartHandle for ChartModel {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn x_scale(&self) -> ChartResult<AxisScale> {
        let limits = self.config.options.scales.x.grace_applied(self.data_x_limits());
        let (min, max) = normalize_range(limits.0, limits.1, 1.0)?;
        AxisScale::horizontal(self.area.left, self.area.right, min, max)
    }

    fn y_scale(&self) -> ChartResult<AxisScale> {
        let limits = self.config.options.scales.y.grace_applied(self.data_y_limits());
        let (min, max) = normalize_range(limits.0, limits.1, 1.0)?;
        AxisScale::vertical(self.area.top, self.area.bottom, min, max)
    }

    fn plot_area(&self) -> PlotArea {
        self.area
    }

    fn x_range(&self) -> (Option<f64>, Option<f64>) {
        let x = self.config.options.scales.x;
        (x.min, x.max)
    }

    fn y_range(&self) -> (Option<f64>, Option<f64>) {
        let y = self.config.options.scales.y;
        (y.min, y.max)
    }

    fn set_x_range(&mut self, min: Option<f64>, max: Option<f64>) {
        if has_non_finite(min) || has_non_finite(max) {
            warn!(?min, ?max, "ignoring non-finite x range");
            return;
        }
        self.config.options.scales.x.min = min;
        self.config.options.scales.x.max = max;
    }

    fn set_y_range(&mut self, min: Option<f64>, max: Option<f64>) {
        if has_non_finite(min) || has_non_finite(max) {
            warn!(?min, ?max, "ignoring non-finite y range");
            return;
        }
        self.config.options.scales.y.min = min;
        self.config.options.scales.y.max = max;
    }

    fn request_update(&mut self) {
        self.update_count += 1;
    }

    fn dataset_count(&self) -> usize {
        self.config.datasets.len()
    }

    fn dataset_label(&self, index: usize) -> Option<&str> {
        self.config.datasets.get(index).map(|d| d.label.as_str())
    }

    fn dataset_meta(&self, index: usize) -> Option<DatasetMeta> {
        self.metas.get(index).copied()
    }

    fn set_dataset_meta_hidden(&mut self, index: usize, hidden: Option<bool>) {
        if let Some(meta) = self.metas.get_mut(index) {
            meta.hidden = hidden;
        }
    }

    fn dataset_base_hidden(&self, index: usize) -> Option<bool> {
        self.config.datasets.get(index).map(|d| d.hidden)
    }

    fn dataset_border_width(&self, index: usize) -> Option<f64> {
        self.config.datasets.get(index).map(|d| d.border_width)
    }

    fn set_dataset_border_width(&mut self, index: usize, width: f64) {
        if let Some(dataset) = self.config.datasets.get_mut(index) {
            dataset.border_width = width;
        }
    }
}

fn plot_area_for(viewport: Viewport, insets: PlotInsets) -> ChartResult<PlotArea> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    PlotArea::new(
        insets.left,
        f64::from(viewport.width) - insets.right,
        insets.top,
        f64::from(viewport.height) - insets.bottom,
    )
}

fn has_non_finite(bound: Option<f64>) -> bool {
    bound.is_some_and(|v| !v.is_finite())
}
