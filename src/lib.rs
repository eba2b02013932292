//! rating-chart-rs: rating-history chart configuration and interaction.
//!
//! Turns a resource's rating history into a declarative, engine-agnostic
//! chart configuration, and implements the interactive layer on top of it:
//! drag-to-zoom range selection with a LIFO undo stack, a cross-chart
//! synchronized guide line, and tooltip/legend/click strategies. The
//! rendering engine itself stays external, behind [`api::ChartHandle`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartHandle, ChartModel, build_chart_config};
pub use error::{ChartError, ChartResult};
