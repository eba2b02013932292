use std::fmt;

/// External dual-handle slider the overlay mirrors horizontal zooms onto.
pub trait SliderSink {
    fn values(&self) -> (f64, f64);
    fn set_values(&mut self, low: f64, high: f64);
}

/// Keeps an external range slider in lockstep with horizontal zooms.
///
/// Commits project the drag's normalized positions onto the slider's own
/// domain; the slider value history pushes and pops together with the zoom
/// stack.
pub struct SliderLink {
    sink: Box<dyn SliderSink>,
    domain_from: f64,
    domain_to: f64,
    stack: Vec<(f64, f64)>,
}

impl SliderLink {
    #[must_use]
    pub fn new(sink: Box<dyn SliderSink>, domain_from: f64, domain_to: f64) -> Self {
        Self {
            sink,
            domain_from,
            domain_to,
            stack: Vec::new(),
        }
    }

    /// Maps a normalized plot position onto the slider domain.
    #[must_use]
    pub fn project(&self, alpha: f64) -> f64 {
        alpha * (self.domain_to - self.domain_from) + self.domain_from
    }

    #[must_use]
    pub fn sink(&self) -> &dyn SliderSink {
        self.sink.as_ref()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn push_current(&mut self) {
        self.stack.push(self.sink.values());
    }

    pub(crate) fn apply_alphas(&mut self, start_alpha: f64, end_alpha: f64) {
        let a = self.project(start_alpha);
        let b = self.project(end_alpha);
        self.sink.set_values(a.min(b), a.max(b));
    }

    pub(crate) fn pop_restore(&mut self) {
        if let Some((low, high)) = self.stack.pop() {
            self.sink.set_values(low, high);
        }
    }
}

impl fmt::Debug for SliderLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderLink")
            .field("domain_from", &self.domain_from)
            .field("domain_to", &self.domain_to)
            .field("history_len", &self.stack.len())
            .finish_non_exhaustive()
    }
}
