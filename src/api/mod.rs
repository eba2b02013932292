pub mod chart_config;
pub mod chart_model;
pub mod click_controller;
pub mod config_builder;
pub mod field_selector;
pub mod label_format;
pub mod legend_controller;

pub use chart_config::{
    AxisRangeOptions, ChartConfig, ChartOptions, ChartPoint, Dataset, DecorationOptions,
    LegendOptions, ScaleOptions, TitleOptions, TooltipOptions,
};
pub use chart_model::{ChartHandle, ChartModel, DatasetMeta, PlotInsets};
pub use click_controller::{ChartHit, ClickTarget, HoverCursor};
pub use config_builder::{Y_AXIS_GRACE_RATIO, build_chart_config, build_rating_chart_config};
pub use field_selector::FieldSelector;
pub use label_format::{format_axis_tick, format_number};
pub use legend_controller::LegendEntry;
