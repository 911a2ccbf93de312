//! Collapsing parallax header transform
//!
//! Maps the scroll position of a detail screen to the render parameters of
//! its header image: vertical offset, stretched height, blur radius, and
//! the floating title's offset. Every query is a pure function of the
//! current sample and the fixed geometry, re-evaluated once per frame by
//! the host.
//!
//! # Example
//!
//! ```
//! use festival_motion::parallax::{HeaderGeometry, ParallaxHeader};
//!
//! let header = ParallaxHeader::new(HeaderGeometry::default()).unwrap();
//!
//! // Pulled down 50px: header stretches 1:1
//! assert_eq!(header.header_offset(50.0), -50.0);
//! assert_eq!(header.header_height(50.0, 300.0), 350.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::geometry::Rect;

/// The title starts its travel at the collapsed header height and bottoms
/// out here; scrolling further has no additional effect.
const TITLE_TRAVEL_FLOOR: f32 = 50.0;

/// Title offset while the title sits exactly at the collapse line
const TITLE_REST_OFFSET: f32 = 20.0;

/// Offset contribution at full travel
const TITLE_DROP_OFFSET: f32 = -30.0;

// ============================================================================
// Header Geometry
// ============================================================================

/// Fixed geometry of the collapsing header
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HeaderGeometry {
    /// Header image height at rest (fully expanded)
    pub full_height: f32,
    /// Height of the strip that stays pinned once collapsed
    pub collapsed_height: f32,
    /// Blur radius applied when the header is fully scrolled away
    pub max_blur: f32,
}

impl Default for HeaderGeometry {
    fn default() -> Self {
        Self {
            full_height: 300.0,
            collapsed_height: 75.0,
            max_blur: 6.0,
        }
    }
}

impl HeaderGeometry {
    /// Scroll distance after which the header is fully collapsed
    pub fn size_off_screen(&self) -> f32 {
        self.full_height - self.collapsed_height
    }

    fn validate(&self) -> Result<()> {
        if self.full_height <= 0.0 || self.collapsed_height <= 0.0 {
            return Err(MotionError::InvalidGeometry(format!(
                "heights must be positive (full {}, collapsed {})",
                self.full_height, self.collapsed_height
            )));
        }
        if self.collapsed_height >= self.full_height {
            return Err(MotionError::InvalidGeometry(format!(
                "collapsed height {} must be below full height {}",
                self.collapsed_height, self.full_height
            )));
        }
        if self.collapsed_height <= TITLE_TRAVEL_FLOOR {
            return Err(MotionError::InvalidGeometry(format!(
                "collapsed height {} must exceed the title travel floor {}",
                self.collapsed_height, TITLE_TRAVEL_FLOOR
            )));
        }
        if self.max_blur < 0.0 {
            return Err(MotionError::InvalidGeometry(format!(
                "max blur {} must not be negative",
                self.max_blur
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Header Frame
// ============================================================================

/// Computed render parameters for one frame of the header
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeaderFrame {
    /// Vertical offset applied to the header image
    pub offset: f32,
    /// Header image height (stretched on pull-down)
    pub height: f32,
    /// Blur radius for the header image
    pub blur: f32,
    /// Floating title offset; `None` until the title reaches the header
    pub title_offset: Option<f32>,
}

// ============================================================================
// Parallax Header
// ============================================================================

/// Scroll-driven transform for a collapsing parallax header
///
/// Holds nothing but validated geometry; all queries are pure and
/// idempotent, so the host can call them as often as it likes within a
/// frame.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxHeader {
    geometry: HeaderGeometry,
}

impl ParallaxHeader {
    /// Create a header transform with validated geometry
    pub fn new(geometry: HeaderGeometry) -> Result<Self> {
        geometry.validate()?;
        Ok(Self { geometry })
    }

    /// The geometry this transform was built with
    pub fn geometry(&self) -> HeaderGeometry {
        self.geometry
    }

    /// Vertical offset for the header image at the given scroll position
    ///
    /// `scroll_y` is the content's global offset from its resting
    /// position: negative once scrolled down, positive when pulled past
    /// the top. Past the collapse threshold the result counter-shifts the
    /// image so exactly `collapsed_height` stays on screen; on pull-down
    /// the image follows the finger 1:1.
    pub fn header_offset(&self, scroll_y: f32) -> f32 {
        let size_off_screen = self.geometry.size_off_screen();

        if scroll_y < -size_off_screen {
            let image_offset = scroll_y.min(-size_off_screen).abs();
            return image_offset - size_off_screen;
        }

        if scroll_y > 0.0 {
            return -scroll_y;
        }

        0.0
    }

    /// Header image height at the given scroll position
    ///
    /// Pull-down stretches the image by the overscroll amount; scrolling
    /// down never shrinks it below `base_height` (collapse is achieved by
    /// offsetting, not resizing).
    pub fn header_height(&self, scroll_y: f32, base_height: f32) -> f32 {
        if scroll_y > 0.0 {
            return base_height + scroll_y;
        }
        base_height
    }

    /// Blur radius for the header image
    ///
    /// `image_max_y` is the global bottom edge of the header image. The
    /// blur ramps linearly from 0 (header at rest) to `max_blur` (header
    /// fully scrolled away); momentary out-of-range samples from a fast
    /// fling are clamped rather than overshooting.
    pub fn blur_radius(&self, image_max_y: f32, base_height: f32) -> f32 {
        let fraction = (base_height - image_max_y.max(0.0)) / base_height;
        fraction.clamp(0.0, 1.0) * self.geometry.max_blur
    }

    /// Offset of the floating title under the header
    ///
    /// Returns `None` while the title's midpoint still sits below the
    /// header image's bottom edge (the title has not reached the header
    /// yet and must be left where layout put it). Once it crosses, the
    /// offset travels from its rest value toward the drop position as the
    /// midpoint moves from `collapsed_height` down to the travel floor,
    /// clamping there.
    pub fn title_offset(&self, title: Rect, header_image: Rect) -> Option<f32> {
        let current_y = title.mid_y();
        if current_y >= header_image.max_y() {
            return None;
        }

        let travel_start = self.geometry.collapsed_height;
        let percentage =
            ((current_y - travel_start) / (travel_start - TITLE_TRAVEL_FLOOR)).max(-1.0);

        Some(TITLE_REST_OFFSET - percentage * TITLE_DROP_OFFSET)
    }

    /// Compute all render parameters for one frame
    pub fn frame(
        &self,
        scroll_y: f32,
        base_height: f32,
        title: Rect,
        header_image: Rect,
    ) -> HeaderFrame {
        HeaderFrame {
            offset: self.header_offset(scroll_y),
            height: self.header_height(scroll_y, base_height),
            blur: self.blur_radius(header_image.max_y(), base_height),
            title_offset: self.title_offset(title, header_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> ParallaxHeader {
        ParallaxHeader::new(HeaderGeometry::default()).unwrap()
    }

    #[test]
    fn test_offset_at_rest() {
        assert_eq!(header().header_offset(0.0), 0.0);
    }

    #[test]
    fn test_offset_within_collapse_range() {
        // Anywhere between rest and the collapse threshold the image
        // scrolls with the content (no counter-offset)
        assert_eq!(header().header_offset(-100.0), 0.0);
        assert_eq!(header().header_offset(-225.0), 0.0);
    }

    #[test]
    fn test_offset_pins_past_threshold() {
        let header = header();

        // 75px past the threshold: counter-shift by exactly that amount
        assert_eq!(header.header_offset(-300.0), 75.0);

        // The pinned strip never grows or shrinks from here on
        assert_eq!(header.header_offset(-500.0), 275.0);
        let visible = |scroll_y: f32| header.header_offset(scroll_y) - scroll_y.abs();
        assert_eq!(visible(-300.0), -225.0);
        assert_eq!(visible(-500.0), -225.0);
    }

    #[test]
    fn test_offset_follows_pull_down() {
        assert_eq!(header().header_offset(50.0), -50.0);
    }

    #[test]
    fn test_height_stretches_on_pull_down() {
        let header = header();
        assert_eq!(header.header_height(50.0, 300.0), 350.0);
        assert_eq!(header.header_height(0.0, 300.0), 300.0);
        assert_eq!(header.header_height(-120.0, 300.0), 300.0);
    }

    #[test]
    fn test_blur_ramp() {
        let header = header();

        // Header at rest: bottom edge at base height, no blur
        assert_eq!(header.blur_radius(300.0, 300.0), 0.0);

        // Halfway gone
        assert!((header.blur_radius(150.0, 300.0) - 3.0).abs() < 1e-5);

        // Fully scrolled away (and anything past it clamps at max)
        assert_eq!(header.blur_radius(0.0, 300.0), 6.0);
        assert_eq!(header.blur_radius(-40.0, 300.0), 6.0);

        // Stretched past rest never produces negative blur
        assert_eq!(header.blur_radius(360.0, 300.0), 0.0);
    }

    #[test]
    fn test_title_offset_unset_below_header() {
        let title = Rect::new(0.0, 400.0, 320.0, 30.0);
        let image = Rect::new(0.0, 0.0, 320.0, 300.0);
        assert_eq!(header().title_offset(title, image), None);
    }

    #[test]
    fn test_title_offset_travel() {
        let header = header();
        let image = Rect::new(0.0, -225.0, 320.0, 300.0); // max_y = 75

        // Midpoint at the collapse line: rest offset
        let at_start = Rect::new(0.0, 74.9 - 15.0, 320.0, 30.0);
        let offset = header.title_offset(at_start, image).unwrap();
        assert!((offset - 20.0).abs() < 0.2);

        // Midpoint at the travel floor: full drop, 20 - (-1 * -30)
        let at_floor = Rect::new(0.0, 50.0 - 15.0, 320.0, 30.0);
        let offset = header.title_offset(at_floor, image).unwrap();
        assert!((offset - -10.0).abs() < 1e-5);

        // Past the floor the travel clamps
        let past = Rect::new(0.0, 10.0 - 15.0, 320.0, 30.0);
        let offset = header.title_offset(past, image).unwrap();
        assert!((offset - -10.0).abs() < 1e-5);
    }

    #[test]
    fn test_header_frame_serializes() {
        let title = Rect::new(0.0, 400.0, 320.0, 30.0);
        let image = Rect::new(0.0, 0.0, 320.0, 300.0);
        let frame = header().frame(0.0, 300.0, title, image);

        let json = serde_json::to_value(frame).unwrap();
        assert_eq!(json["offset"], 0.0);
        assert_eq!(json["title_offset"], serde_json::Value::Null);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let header = header();
        let title = Rect::new(0.0, 45.0, 320.0, 30.0);
        let image = Rect::new(0.0, -225.0, 320.0, 300.0);

        let first = header.frame(-260.0, 300.0, title, image);
        let second = header.frame(-260.0, 300.0, title, image);
        assert_eq!(first, second);
    }

    #[test]
    fn test_geometry_validation() {
        assert!(ParallaxHeader::new(HeaderGeometry {
            full_height: 75.0,
            collapsed_height: 300.0,
            max_blur: 6.0,
        })
        .is_err());

        assert!(ParallaxHeader::new(HeaderGeometry {
            full_height: 300.0,
            collapsed_height: 50.0,
            max_blur: 6.0,
        })
        .is_err());

        assert!(ParallaxHeader::new(HeaderGeometry {
            full_height: 300.0,
            collapsed_height: 75.0,
            max_blur: -1.0,
        })
        .is_err());
    }
}
