use tracing::debug;

use crate::api::ChartHandle;
use crate::error::ChartResult;
use crate::interaction::{
    AxisRanges, DragAxis, SelectionPhase, SelectionRect, SelectionTuning, SliderLink, ZoomStack,
};
use crate::render::{Color, RectPrimitive};

/// Cursor position to mirror as a vertical guide line on every registered
/// chart, expressed as an x-axis value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLineRequest {
    pub x_value: f64,
}

/// Overlay paint output of one pointer-move step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerMoveOutcome {
    /// Translucent band over the selected range on this chart.
    pub selection: Option<RectPrimitive>,
    /// Thin horizontal ruler shown while hovering the left/right margins.
    pub axis_ruler: Option<RectPrimitive>,
    /// Vertical guide line to broadcast across charts.
    pub guide: Option<GuideLineRequest>,
}

/// Axis-range change applied by a committed drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomCommit {
    pub axis: DragAxis,
    pub min: f64,
    pub max: f64,
}

/// Per-chart drag-to-zoom controller.
///
/// Translates pointer gestures into axis-range changes through a
/// [`ChartHandle`], maintains the zoom-out stack, and emits overlay paint
/// primitives. Gestures that never exceed the commit threshold change
/// nothing.
#[derive(Debug)]
pub struct RangeSelection {
    tuning: SelectionTuning,
    phase: SelectionPhase,
    rect: SelectionRect,
    committed: bool,
    highlight_x: bool,
    zoom_stack: ZoomStack,
    slider: Option<SliderLink>,
}

impl RangeSelection {
    pub fn new(tuning: SelectionTuning) -> ChartResult<Self> {
        Ok(Self {
            tuning: tuning.validate()?,
            phase: SelectionPhase::Idle,
            rect: SelectionRect::default(),
            committed: false,
            highlight_x: false,
            zoom_stack: ZoomStack::new(),
            slider: None,
        })
    }

    #[must_use]
    pub fn with_slider_link(mut self, link: SliderLink) -> Self {
        self.slider = Some(link);
        self
    }

    #[must_use]
    pub fn tuning(&self) -> SelectionTuning {
        self.tuning
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    #[must_use]
    pub fn zoom_depth(&self) -> usize {
        self.zoom_stack.len()
    }

    /// Whether the "double-click to zoom out" hint should be visible.
    #[must_use]
    pub fn hint_visible(&self) -> bool {
        !self.zoom_stack.is_empty()
    }

    #[must_use]
    pub fn slider_link(&self) -> Option<&SliderLink> {
        self.slider.as_ref()
    }

    /// Starts a gesture: clamps the anchor to the plot area and arms both
    /// axes.
    pub fn pointer_down<C: ChartHandle>(&mut self, chart: &C, x: f64, y: f64) {
        let area = chart.plot_area();
        self.rect = SelectionRect::anchored(area.clamp_x(x), area.clamp_y(y));
        self.committed = false;
        self.phase = SelectionPhase::Armed;
    }

    /// Advances the gesture and computes this chart's overlay paint output.
    ///
    /// Margin proximity is judged on raw coordinates; everything applied to
    /// the selection uses plot-area-clamped coordinates.
    pub fn pointer_move<C: ChartHandle>(
        &mut self,
        chart: &C,
        x: f64,
        y: f64,
    ) -> ChartResult<PointerMoveOutcome> {
        let area = chart.plot_area();
        let border = self.tuning.drag_border_px;
        let clip_x = area.clamp_x(x);
        let clip_y = area.clamp_y(y);
        let paint = Color::black().with_alpha(self.tuning.overlay_alpha);
        let mut outcome = PointerMoveOutcome::default();

        let dragging_x = self.phase == SelectionPhase::Dragging(DragAxis::Horizontal);
        let mut near_x = (self.committed && dragging_x)
            || y < area.top + border
            || area.bottom - border < y;
        let near_y = x < area.left + border || area.right - border < x;
        // In a corner both rulers apply; keep whichever was highlighted last.
        if near_x && near_y && !self.highlight_x {
            near_x = false;
        }

        if near_x {
            self.highlight_x = true;
            outcome.guide = Some(GuideLineRequest {
                x_value: chart.x_scale()?.pixel_to_value(clip_x),
            });
        } else if near_y {
            self.highlight_x = false;
            outcome.axis_ruler = Some(RectPrimitive::filled(
                area.left,
                clip_y,
                area.width(),
                1.0,
                paint,
            ));
        }

        match self.phase {
            SelectionPhase::Idle => {}
            SelectionPhase::Armed => {
                self.rect.end_x = clip_x;
                self.rect.end_y = clip_y;
                if self.rect.width().abs() > self.tuning.commit_threshold_px {
                    self.phase = SelectionPhase::Dragging(DragAxis::Horizontal);
                } else if self.rect.height().abs() > self.tuning.commit_threshold_px {
                    self.phase = SelectionPhase::Dragging(DragAxis::Vertical);
                }
            }
            SelectionPhase::Dragging(axis) => {
                self.rect.end_x = clip_x;
                self.rect.end_y = clip_y;
                outcome.selection = Some(match axis {
                    DragAxis::Horizontal => RectPrimitive::filled(
                        self.rect.start_x,
                        area.top,
                        self.rect.width(),
                        area.height(),
                        paint,
                    ),
                    DragAxis::Vertical => RectPrimitive::filled(
                        area.left,
                        self.rect.start_y,
                        area.width(),
                        self.rect.height(),
                        paint,
                    ),
                });
                self.committed = true;
            }
        }

        Ok(outcome)
    }

    /// Finalizes the gesture, applying the selected range when one exists.
    ///
    /// Also called on pointer-out; a gesture that never committed resets
    /// without touching the chart or the zoom stack.
    pub fn pointer_up<C: ChartHandle>(
        &mut self,
        chart: &mut C,
        x: f64,
        y: f64,
    ) -> ChartResult<Option<ZoomCommit>> {
        self.pointer_move(&*chart, x, y)?;

        let mut commit = None;
        if self.committed {
            let (x_min, x_max) = chart.x_range();
            let (y_min, y_max) = chart.y_range();
            self.zoom_stack.push(AxisRanges {
                x_min,
                x_max,
                y_min,
                y_max,
            });
            if let Some(link) = self.slider.as_mut() {
                link.push_current();
            }

            match self.phase {
                SelectionPhase::Dragging(DragAxis::Horizontal) => {
                    let scale = chart.x_scale()?;
                    let v1 = scale.pixel_to_value(self.rect.start_x);
                    let v2 = scale.pixel_to_value(self.rect.end_x);
                    let (min, max) = (v1.min(v2), v1.max(v2));
                    chart.set_x_range(Some(min), Some(max));
                    chart.request_update();
                    if let Some(link) = self.slider.as_mut() {
                        link.apply_alphas(
                            scale.pixel_alpha(self.rect.start_x),
                            scale.pixel_alpha(self.rect.end_x),
                        );
                    }
                    debug!(min, max, "committed horizontal zoom");
                    commit = Some(ZoomCommit {
                        axis: DragAxis::Horizontal,
                        min,
                        max,
                    });
                }
                SelectionPhase::Dragging(DragAxis::Vertical) => {
                    let scale = chart.y_scale()?;
                    let v1 = scale.pixel_to_value(self.rect.start_y);
                    let v2 = scale.pixel_to_value(self.rect.end_y);
                    let (min, max) = (v1.min(v2), v1.max(v2));
                    chart.set_y_range(Some(min), Some(max));
                    chart.request_update();
                    debug!(min, max, "committed vertical zoom");
                    commit = Some(ZoomCommit {
                        axis: DragAxis::Vertical,
                        min,
                        max,
                    });
                }
                _ => {}
            }
        }

        self.phase = SelectionPhase::Idle;
        self.committed = false;
        Ok(commit)
    }

    /// Pops the most recent zoom and restores it.
    ///
    /// Returns `false` when the stack is empty and nothing changed.
    pub fn zoom_out<C: ChartHandle>(&mut self, chart: &mut C) -> ChartResult<bool> {
        let Some(ranges) = self.zoom_stack.pop() else {
            return Ok(false);
        };

        chart.set_x_range(ranges.x_min, ranges.x_max);
        chart.set_y_range(ranges.y_min, ranges.y_max);
        if let Some(link) = self.slider.as_mut() {
            link.pop_restore();
        }
        chart.request_update();
        debug!(depth = self.zoom_stack.len(), "restored previous zoom");
        Ok(true)
    }
}
