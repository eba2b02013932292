use serde::{Deserialize, Serialize};

use crate::interaction::AxisRanges;

/// LIFO history of previously active axis ranges.
///
/// Every committed zoom pushes the ranges it replaced; a double-click pops
/// and restores the most recent entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoomStack {
    entries: Vec<AxisRanges>,
}

impl ZoomStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ranges: AxisRanges) {
        self.entries.push(ranges);
    }

    pub fn pop(&mut self) -> Option<AxisRanges> {
        self.entries.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
