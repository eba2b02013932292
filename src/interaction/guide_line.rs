use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::ChartHandle;
use crate::error::{ChartError, ChartResult};
use crate::interaction::range_selection::{RangeSelection, ZoomCommit};
use crate::render::{Color, RectPrimitive, RenderFrame};

/// Handle to one registered overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayId(u64);

impl OverlayId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Overlay repaint for every registered chart after one pointer step.
///
/// Every overlay is present, empty frames included: an empty frame means
/// "clear", which is how stale guide lines disappear.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerFrame {
    pub frames: IndexMap<OverlayId, RenderFrame>,
}

impl PointerFrame {
    #[must_use]
    pub fn frame(&self, id: OverlayId) -> Option<&RenderFrame> {
        self.frames.get(&id)
    }
}

struct OverlayEntry<C> {
    chart: C,
    selection: RangeSelection,
}

/// Explicit registry of the overlays sharing a page.
///
/// Replaces a page-global lookup: overlays subscribe here, and the
/// synchronized vertical guide line fans out to every subscriber in
/// registration order within the same call, so all charts reflect a
/// consistent cursor position before the next event.
pub struct OverlayRegistry<C: ChartHandle> {
    entries: IndexMap<u64, OverlayEntry<C>>,
    next_id: u64,
}

impl<C: ChartHandle> Default for OverlayRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ChartHandle> OverlayRegistry<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_id: 0,
        }
    }

    pub fn register(&mut self, chart: C, selection: RangeSelection) -> OverlayId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, OverlayEntry { chart, selection });
        OverlayId(id)
    }

    /// Drops an overlay, returning its chart and selection state.
    pub fn unregister(&mut self, id: OverlayId) -> Option<(C, RangeSelection)> {
        self.entries
            .shift_remove(&id.0)
            .map(|entry| (entry.chart, entry.selection))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn chart(&self, id: OverlayId) -> Option<&C> {
        self.entries.get(&id.0).map(|entry| &entry.chart)
    }

    #[must_use]
    pub fn chart_mut(&mut self, id: OverlayId) -> Option<&mut C> {
        self.entries.get_mut(&id.0).map(|entry| &mut entry.chart)
    }

    #[must_use]
    pub fn selection(&self, id: OverlayId) -> Option<&RangeSelection> {
        self.entries.get(&id.0).map(|entry| &entry.selection)
    }

    pub fn pointer_down(&mut self, id: OverlayId, x: f64, y: f64) -> ChartResult<()> {
        let entry = self.entry_mut(id)?;
        entry.selection.pointer_down(&entry.chart, x, y);
        Ok(())
    }

    /// Advances the gesture on one overlay and repaints all of them.
    pub fn pointer_move(&mut self, id: OverlayId, x: f64, y: f64) -> ChartResult<PointerFrame> {
        let outcome = {
            let entry = self.entry_mut(id)?;
            entry.selection.pointer_move(&entry.chart, x, y)?
        };

        let mut frames: IndexMap<OverlayId, RenderFrame> = self
            .entries
            .iter()
            .map(|(&key, entry)| (OverlayId(key), RenderFrame::new(entry.chart.viewport())))
            .collect();

        if let Some(guide) = &outcome.guide {
            for (&key, entry) in &self.entries {
                let scale = entry.chart.x_scale()?;
                if !scale.contains(guide.x_value) {
                    continue;
                }
                let px = scale.value_to_pixel(guide.x_value);
                let area = entry.chart.plot_area();
                let alpha = entry.selection.tuning().overlay_alpha;
                if let Some(frame) = frames.get_mut(&OverlayId(key)) {
                    frame.rects.push(RectPrimitive::filled(
                        px,
                        area.top,
                        1.0,
                        area.height(),
                        Color::black().with_alpha(alpha),
                    ));
                }
            }
        }

        if let Some(frame) = frames.get_mut(&id) {
            if let Some(ruler) = outcome.axis_ruler {
                frame.rects.push(ruler);
            }
            if let Some(band) = outcome.selection {
                frame.rects.push(band);
            }
        }

        Ok(PointerFrame { frames })
    }

    /// Finalizes a gesture, applying the selected range when one committed.
    pub fn pointer_up(&mut self, id: OverlayId, x: f64, y: f64) -> ChartResult<Option<ZoomCommit>> {
        let entry = self.entry_mut(id)?;
        entry.selection.pointer_up(&mut entry.chart, x, y)
    }

    /// Pointer leaving the canvas finalizes exactly like a release.
    pub fn pointer_out(&mut self, id: OverlayId, x: f64, y: f64) -> ChartResult<Option<ZoomCommit>> {
        self.pointer_up(id, x, y)
    }

    /// Restores the previous zoom level of one overlay.
    pub fn double_click(&mut self, id: OverlayId) -> ChartResult<bool> {
        let entry = self.entry_mut(id)?;
        entry.selection.zoom_out(&mut entry.chart)
    }

    pub fn hint_visible(&self, id: OverlayId) -> ChartResult<bool> {
        self.entries
            .get(&id.0)
            .map(|entry| entry.selection.hint_visible())
            .ok_or(ChartError::UnknownOverlay(id.0))
    }

    fn entry_mut(&mut self, id: OverlayId) -> ChartResult<&mut OverlayEntry<C>> {
        self.entries
            .get_mut(&id.0)
            .ok_or(ChartError::UnknownOverlay(id.0))
    }
}
