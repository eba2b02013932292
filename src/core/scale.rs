use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Rectangular region of the canvas bounded by the axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> ChartResult<Self> {
        if ![left, right, top, bottom].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(
                "plot area bounds must be finite".to_owned(),
            ));
        }
        if right <= left || bottom <= top {
            return Err(ChartError::InvalidData(
                "plot area must have positive extent".to_owned(),
            ));
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn clamp_x(self, x: f64) -> f64 {
        x.max(self.left).min(self.right)
    }

    #[must_use]
    pub fn clamp_y(self, y: f64) -> f64 {
        y.max(self.top).min(self.bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// One axis of a rendered chart: a pixel span plus the value domain mapped
/// onto it.
///
/// Horizontal axes grow left-to-right with the value minimum at the left
/// edge; vertical axes are inverted, with the value maximum at the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    orientation: AxisOrientation,
    pixel_start: f64,
    pixel_end: f64,
    min: f64,
    max: f64,
}

impl AxisScale {
    pub fn horizontal(left: f64, right: f64, min: f64, max: f64) -> ChartResult<Self> {
        Self::new(AxisOrientation::Horizontal, left, right, min, max)
    }

    pub fn vertical(top: f64, bottom: f64, min: f64, max: f64) -> ChartResult<Self> {
        Self::new(AxisOrientation::Vertical, top, bottom, min, max)
    }

    fn new(
        orientation: AxisOrientation,
        pixel_start: f64,
        pixel_end: f64,
        min: f64,
        max: f64,
    ) -> ChartResult<Self> {
        if ![pixel_start, pixel_end, min, max].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(
                "axis scale bounds must be finite".to_owned(),
            ));
        }
        if pixel_end <= pixel_start {
            return Err(ChartError::InvalidData(
                "axis pixel span must be positive".to_owned(),
            ));
        }
        if min == max {
            return Err(ChartError::InvalidData(
                "axis value domain must be non-empty".to_owned(),
            ));
        }
        Ok(Self {
            orientation,
            pixel_start,
            pixel_end,
            min,
            max,
        })
    }

    #[must_use]
    pub fn orientation(self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.pixel_start
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.pixel_end
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.pixel_start
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.pixel_end
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.pixel_end - self.pixel_start
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.span()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.span()
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Whether a value lies strictly inside the visible domain.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min < value && value < self.max
    }

    /// Maps a pixel position to an axis value.
    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        let alpha = (pixel - self.pixel_start) / self.span();
        match self.orientation {
            AxisOrientation::Horizontal => alpha * (self.max - self.min) + self.min,
            AxisOrientation::Vertical => alpha * (self.min - self.max) + self.max,
        }
    }

    /// Maps an axis value to a pixel position.
    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let alpha = match self.orientation {
            AxisOrientation::Horizontal => (value - self.min) / (self.max - self.min),
            AxisOrientation::Vertical => (value - self.max) / (self.min - self.max),
        };
        alpha * self.span() + self.pixel_start
    }

    /// Normalized position of a pixel within the span, unclamped.
    #[must_use]
    pub fn pixel_alpha(self, pixel: f64) -> f64 {
        (pixel - self.pixel_start) / self.span()
    }
}

/// Widens a degenerate range so a scale can always be constructed from it.
pub fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
