use serde::{Deserialize, Serialize};

use crate::api::label_format::format_number;
use crate::core::{AxisScale, ColorBand, HighestMark, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

/// Fills one horizontal stripe per color band behind the data, spanning the
/// full plot width.
pub fn band_background_scene(
    viewport: Viewport,
    bands: &[ColorBand],
    x: AxisScale,
    y: AxisScale,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    for band in bands {
        let to = y.value_to_pixel(band.low);
        let from = y.value_to_pixel(band.high + 1.0);
        let [h, s, l] = band.display_hsl();
        frame = frame.with_rect(RectPrimitive::filled(
            x.left(),
            from,
            x.width(),
            to - from,
            Color::from_hsl(h, s, l),
        ));
    }
    frame.validate()?;
    Ok(frame)
}

/// Dashed horizontal rule at the peak achieved value.
pub fn highest_line_scene(
    viewport: Viewport,
    highest: HighestMark,
    x: AxisScale,
    y: AxisScale,
) -> ChartResult<RenderFrame> {
    let y_px = y.value_to_pixel(highest.value);
    let frame = RenderFrame::new(viewport).with_line(
        LinePrimitive::new(x.left(), y_px, x.right(), y_px, 1.0, Color::black())
            .with_stroke_style(LineStrokeStyle::Dashed {
                on_px: 5.0,
                off_px: 15.0,
            }),
    );
    frame.validate()?;
    Ok(frame)
}

/// Geometry of the floating peak callout box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalloutGeometry {
    pub width_px: f64,
    pub height_px: f64,
    pub margin_px: f64,
    pub font_size_px: f64,
}

impl Default for CalloutGeometry {
    fn default() -> Self {
        Self {
            width_px: 40.0,
            height_px: 20.0,
            margin_px: 10.0,
            font_size_px: 12.0,
        }
    }
}

impl CalloutGeometry {
    fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.width_px, "width_px"),
            (self.height_px, "height_px"),
            (self.margin_px, "margin_px"),
            (self.font_size_px, "font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "callout geometry `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Floating box labeling the peak value, anchored above it with a connector
/// line and clamped to stay inside the plot width.
///
/// Returns an empty frame when the peak lies outside the visible y range.
pub fn highest_callout_scene(
    viewport: Viewport,
    highest: HighestMark,
    x: AxisScale,
    y: AxisScale,
    geometry: CalloutGeometry,
) -> ChartResult<RenderFrame> {
    let geometry = geometry.validate()?;
    let mut frame = RenderFrame::new(viewport);

    let x_px = x.value_to_pixel(highest.x_millis());
    let y_px = y.value_to_pixel(highest.value);
    if !(y.top() <= y_px && y_px <= y.bottom()) {
        return Ok(frame);
    }

    let width = geometry.width_px;
    let height = geometry.height_px;
    let margin = geometry.margin_px;

    let rx = (x_px - width / 2.0)
        .max(x.left() + margin)
        .min(x.right() - width - margin);
    let ry = y_px - (height + margin);
    let cx = rx + width / 2.0;
    let cy = ry + height / 2.0;

    frame = frame
        .with_line(LinePrimitive::new(
            x_px,
            y_px,
            x_px.max(rx).min(rx + width - 1.0),
            ry + height - 1.0,
            1.0,
            Color::black(),
        ))
        .with_rect(
            RectPrimitive::filled(rx, ry, width, height, Color::white())
                .with_stroke(1.0, Color::black()),
        )
        .with_text(TextPrimitive::new(
            format_number(highest.value),
            cx,
            cy + 4.0,
            geometry.font_size_px,
            Color::black(),
            TextHAlign::Center,
        ));

    frame.validate()?;
    Ok(frame)
}
