//! One-shot "visible" tagging for page sections.
//!
//! A section is revealed once at least 20% of it lies inside the viewport,
//! where the viewport's bottom edge is pulled up by 100px. Revealed sections
//! stay revealed.

use std::collections::HashSet;

pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPolicy {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealPolicy {
    /// Visible share of an element with the given client-space `top` and
    /// `height`
    pub fn intersection_ratio(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }
        let visible_bottom = (viewport_height - self.bottom_margin).max(0.0);
        let overlap = (top + height).min(visible_bottom) - top.max(0.0);
        (overlap.max(0.0) / height).min(1.0)
    }

    pub fn is_revealed(&self, top: f64, height: f64, viewport_height: f64) -> bool {
        height > 0.0 && self.intersection_ratio(top, height, viewport_height) >= self.threshold
    }
}

/// Latches each section index the first time it crosses the threshold
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    policy: RevealPolicy,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            revealed: HashSet::new(),
        }
    }

    /// Feed a fresh measurement; returns true only on the first reveal
    pub fn observe(&mut self, index: usize, top: f64, height: f64, viewport_height: f64) -> bool {
        if self.revealed.contains(&index) {
            return false;
        }
        if self.policy.is_revealed(top, height, viewport_height) {
            self.revealed.insert(index);
            tracing::trace!(section = index, "Section revealed");
            return true;
        }
        false
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }
}
