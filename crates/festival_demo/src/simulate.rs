//! Headless motion sessions
//!
//! Reproduces what the host UI would feed the motion core over a scroll
//! or drag interaction, frame by frame, and collects the computed render
//! parameters. The synthesized rectangles follow the detail screen's
//! layout: header image at the top, floating title a fixed distance into
//! the content below it.

use serde::Serialize;
use tracing::debug;

use festival_motion::{
    DismissDecision, DragPhase, DragSample, FrameLatch, HeaderFrame, ParallaxHeader, Rect, Sheet,
    SheetConfig, SheetState,
};

/// Vertical gap between the header image and the article content
const CONTENT_GAP: f32 = 40.0;

/// Resting distance from the content top to the title's midpoint
const TITLE_MID_IN_CONTENT: f32 = 60.0;

/// Synthesized title height
const TITLE_HEIGHT: f32 = 30.0;

/// Simulation tick length (60 fps)
const TICK: f32 = 1.0 / 60.0;

// ============================================================================
// Scroll Session
// ============================================================================

/// Render parameters computed for one scroll position
#[derive(Debug, Serialize)]
pub struct ScrollFrame {
    pub scroll_y: f32,
    #[serde(flatten)]
    pub header: HeaderFrame,
}

/// Full output of a simulated scroll session
#[derive(Debug, Serialize)]
pub struct ScrollReport {
    /// Anchor the host applies to the header overlay, from the latched
    /// starting rect
    pub content_anchor: f32,
    pub frames: Vec<ScrollFrame>,
}

/// Sweep the scroll offset from `from` down to `to` in `step` decrements
pub fn scroll_sweep(
    header: &ParallaxHeader,
    viewport_width: f32,
    viewport_height: f32,
    from: f32,
    to: f32,
    step: f32,
) -> ScrollReport {
    let geometry = header.geometry();
    let content_top = geometry.full_height + CONTENT_GAP;
    let content_height = viewport_height * 2.0;

    let mut latch = FrameLatch::new();
    let mut frames = Vec::new();

    let step = step.abs().max(1.0);
    let mut scroll_y = from.max(to);
    let end = from.min(to);

    while scroll_y >= end {
        // Layout reports the content rect every frame; only the first
        // non-zero one sticks
        latch.observe(Rect::new(
            0.0,
            content_top + scroll_y,
            viewport_width,
            content_height,
        ));

        let image = Rect::new(
            0.0,
            scroll_y + header.header_offset(scroll_y),
            viewport_width,
            header.header_height(scroll_y, geometry.full_height),
        );
        let title = Rect::new(
            0.0,
            content_top + TITLE_MID_IN_CONTENT - TITLE_HEIGHT * 0.5 + scroll_y,
            viewport_width,
            TITLE_HEIGHT,
        );

        frames.push(ScrollFrame {
            scroll_y,
            header: header.frame(scroll_y, geometry.full_height, title, image),
        });

        scroll_y -= step;
    }

    debug!(frames = frames.len(), "scroll sweep complete");

    ScrollReport {
        content_anchor: latch.content_anchor(viewport_height),
        frames,
    }
}

// ============================================================================
// Sheet Session
// ============================================================================

/// One frame of the simulated sheet interaction
#[derive(Debug, Serialize)]
pub struct SheetFrame {
    pub state: SheetState,
    pub translation: f32,
    pub scrim_opacity: f32,
}

/// Full output of a simulated drag-and-release
#[derive(Debug, Serialize)]
pub struct SheetReport {
    pub decision: DismissDecision,
    pub final_state: SheetState,
    pub final_translation: f32,
    pub frames: Vec<SheetFrame>,
}

/// Open the sheet, drag it to `translation_y`, release, settle
///
/// `predicted_end_y` defaults to the translation itself (a release with
/// no residual velocity) when not given.
pub fn sheet_session(
    config: SheetConfig,
    translation_y: f32,
    predicted_end_y: Option<f32>,
) -> SheetReport {
    fn record(sheet: &Sheet, frames: &mut Vec<SheetFrame>) {
        frames.push(SheetFrame {
            state: sheet.state(),
            translation: sheet.translation(),
            scrim_opacity: sheet.scrim_opacity_now(),
        });
    }

    let mut sheet = Sheet::new(config);
    let mut frames = Vec::new();

    sheet.open();
    record(&sheet, &mut frames);
    while sheet.tick(TICK) {
        record(&sheet, &mut frames);
    }

    // Drag down in even increments, the way a finger would report
    sheet.drag(DragSample::with_translation(0.0), DragPhase::Began);
    for i in 1..=8 {
        let sample = DragSample::with_translation(translation_y * i as f32 / 8.0);
        sheet.drag(sample, DragPhase::Changed);
        record(&sheet, &mut frames);
    }

    let release = DragSample {
        translation_y,
        predicted_end_y: predicted_end_y.unwrap_or(translation_y),
        velocity_x: 0.0,
    };
    let decision = sheet.release(release);

    while sheet.tick(TICK) {
        record(&sheet, &mut frames);
    }
    record(&sheet, &mut frames);

    SheetReport {
        decision,
        final_state: sheet.state(),
        final_translation: sheet.translation(),
        frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festival_motion::HeaderGeometry;

    fn header() -> ParallaxHeader {
        ParallaxHeader::new(HeaderGeometry::default()).unwrap()
    }

    #[test]
    fn test_sweep_covers_pull_down_and_pin() {
        let report = scroll_sweep(&header(), 375.0, 812.0, 120.0, -600.0, 40.0);

        let first = &report.frames[0];
        assert_eq!(first.scroll_y, 120.0);
        assert_eq!(first.header.offset, -120.0);
        assert_eq!(first.header.height, 420.0);

        let last = report.frames.last().unwrap();
        assert_eq!(last.scroll_y, -600.0);
        assert_eq!(last.header.offset, 375.0);
        // Pinned: image bottom stays at the collapsed height
        assert_eq!(last.scroll_y + last.header.offset + 300.0, 75.0);
    }

    #[test]
    fn test_sweep_anchor_comes_from_first_frame() {
        let report = scroll_sweep(&header(), 375.0, 812.0, 120.0, -600.0, 40.0);
        // Content top at rest is 340, first observed frame is pulled down
        // 120px, so the latched rect sits at 460 with height 1624
        assert_eq!(report.content_anchor, -(460.0 + 1624.0));
    }

    #[test]
    fn test_title_offset_appears_late_in_sweep() {
        let report = scroll_sweep(&header(), 375.0, 812.0, 0.0, -600.0, 20.0);
        let early = &report.frames[0];
        assert!(early.header.title_offset.is_none());

        let engaged: Vec<_> = report
            .frames
            .iter()
            .filter(|frame| frame.header.title_offset.is_some())
            .collect();
        assert!(!engaged.is_empty());
    }

    #[test]
    fn test_sheet_session_dismisses() {
        let config = SheetConfig::new(400.0).unwrap();
        let report = sheet_session(config, 300.0, None);

        assert_eq!(report.decision, DismissDecision::Dismiss);
        assert_eq!(report.final_state, SheetState::Closed);
        assert_eq!(report.final_translation, 400.0);
    }

    #[test]
    fn test_sheet_session_snaps_back() {
        let config = SheetConfig::new(400.0).unwrap();
        let report = sheet_session(config, 200.0, None);

        assert_eq!(report.decision, DismissDecision::SnapBack);
        assert_eq!(report.final_state, SheetState::Open);
        assert_eq!(report.final_translation, 0.0);
    }

    #[test]
    fn test_flick_dismisses_via_prediction() {
        let config = SheetConfig::new(400.0).unwrap();
        let report = sheet_session(config, 40.0, Some(300.0));
        assert_eq!(report.decision, DismissDecision::Dismiss);
    }
}
