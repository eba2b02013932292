use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Builder sentinel for per-field charts whose value range cannot span an
    /// axis. Callers skip the chart and surface a notice instead of drawing.
    #[error("field `{field}` has a degenerate value range: min={min:?}, max={max:?}")]
    DegenerateFieldRange {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("unknown overlay id: {0}")]
    UnknownOverlay(u64),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
