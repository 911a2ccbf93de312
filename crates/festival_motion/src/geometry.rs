//! Frame geometry primitives
//!
//! The host's layout pass reports element rectangles in global coordinates
//! once per frame. The motion core only ever reads edges and midpoints, so
//! `Rect` stays a plain value type. `FrameLatch` records the very first
//! non-zero rectangle it sees and keeps it as the reference origin for the
//! scrollable content.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in global (window) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from origin and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge
    pub fn min_y(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Vertical midpoint
    pub fn mid_y(&self) -> f32 {
        self.y + self.height * 0.5
    }

    /// A zero rect is what layout reports before the first real pass
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.width == 0.0 && self.height == 0.0
    }
}

/// Capture-once latch for the content's starting rectangle
///
/// Layout delivers a stream of rectangles for the scrollable content; the
/// first non-zero one is the resting position everything else is measured
/// against. Later frames never re-latch, no matter how far the content
/// moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLatch {
    starting: Option<Rect>,
}

impl FrameLatch {
    /// Create an empty latch
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one layout sample; only the first non-zero rect is kept
    pub fn observe(&mut self, rect: Rect) {
        if self.starting.is_none() && !rect.is_zero() {
            tracing::trace!(?rect, "latched starting rect");
            self.starting = Some(rect);
        }
    }

    /// The latched starting rect, if a real layout pass has happened
    pub fn starting(&self) -> Option<Rect> {
        self.starting
    }

    /// Whether the latch has captured a rect
    pub fn is_latched(&self) -> bool {
        self.starting.is_some()
    }

    /// Vertical anchor for the header overlay: the negated bottom edge of
    /// the starting rect, or the negated fallback (typically the screen
    /// height) while no layout pass has been observed yet.
    pub fn content_anchor(&self, fallback_height: f32) -> f32 {
        match self.starting {
            Some(rect) => -rect.max_y(),
            None => -fallback_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(0.0, 40.0, 320.0, 70.0);
        assert_eq!(rect.min_y(), 40.0);
        assert_eq!(rect.max_y(), 110.0);
        assert_eq!(rect.mid_y(), 75.0);
        assert!(!rect.is_zero());
        assert!(Rect::default().is_zero());
    }

    #[test]
    fn test_latch_ignores_zero_rect() {
        let mut latch = FrameLatch::new();
        latch.observe(Rect::default());
        assert!(!latch.is_latched());

        latch.observe(Rect::new(0.0, 340.0, 320.0, 900.0));
        assert!(latch.is_latched());
    }

    #[test]
    fn test_latch_captures_only_once() {
        let mut latch = FrameLatch::new();
        let first = Rect::new(0.0, 340.0, 320.0, 900.0);
        latch.observe(first);

        // Content scrolled; the latch must keep the resting rect
        latch.observe(Rect::new(0.0, 100.0, 320.0, 900.0));
        assert_eq!(latch.starting(), Some(first));
    }

    #[test]
    fn test_content_anchor_fallback() {
        let mut latch = FrameLatch::new();
        assert_eq!(latch.content_anchor(812.0), -812.0);

        latch.observe(Rect::new(0.0, 340.0, 320.0, 900.0));
        assert_eq!(latch.content_anchor(812.0), -1240.0);
    }
}
