//! Swipe-to-dismiss sheet
//!
//! A bottom sheet the user can drag away. The decision logic is a pure
//! function of the drag sample and the configured sheet height: the live
//! scrim opacity tracks the translation, and on release the sheet either
//! dismisses or snaps back depending on how far the drag got (or was
//! projected to get). [`Sheet`] wraps that logic together with the
//! lifecycle state machine and the settle spring into the controller the
//! host ticks every frame.
//!
//! # Example
//!
//! ```
//! use festival_motion::sheet::{DismissDecision, DragSample, SheetConfig};
//!
//! let config = SheetConfig::new(400.0).unwrap();
//!
//! // Released two-thirds of the way down: gone
//! let sample = DragSample::with_translation(300.0);
//! assert_eq!(config.classify_release(sample), DismissDecision::Dismiss);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::spring::{SettleConfig, SettleSpring};
use crate::state::{sheet_events, SheetState, StateTransitions};

/// Fraction of the sheet height a drag must pass to dismiss
pub const DEFAULT_DISMISS_FRACTION: f32 = 2.0 / 3.0;

// ============================================================================
// Sheet Configuration
// ============================================================================

/// Fixed configuration for a swipe-to-dismiss sheet
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Sheet height in pixels
    pub height: f32,
    /// Fraction of `height` past which a release dismisses
    pub dismiss_fraction: f32,
}

impl SheetConfig {
    /// Create a config with the default dismiss threshold
    pub fn new(height: f32) -> Result<Self> {
        Self::with_dismiss_fraction(height, DEFAULT_DISMISS_FRACTION)
    }

    /// Create a config with a custom dismiss threshold
    pub fn with_dismiss_fraction(height: f32, dismiss_fraction: f32) -> Result<Self> {
        if height <= 0.0 {
            return Err(MotionError::InvalidSheetConfig(format!(
                "height {height} must be positive"
            )));
        }
        if dismiss_fraction <= 0.0 || dismiss_fraction > 1.0 {
            return Err(MotionError::InvalidSheetConfig(format!(
                "dismiss fraction {dismiss_fraction} must be in (0, 1]"
            )));
        }
        Ok(Self {
            height,
            dismiss_fraction,
        })
    }

    /// Absolute translation past which a release dismisses
    pub fn dismiss_threshold(&self) -> f32 {
        self.height * self.dismiss_fraction
    }

    /// Scrim opacity for the current drag translation
    ///
    /// 1.0 with the sheet fully open, fading to 0.0 as it is dragged the
    /// full height away. Upward drags and fling overshoot clamp to the
    /// valid range.
    pub fn scrim_opacity(&self, sample: DragSample) -> f32 {
        let dragged = sample.translation_y.clamp(0.0, self.height);
        1.0 - dragged / self.height
    }

    /// Classify a finished drag
    ///
    /// Dismisses when either the actual translation or the recognizer's
    /// velocity-projected end translation passes the threshold, so a
    /// short hard fling dismisses just like a long slow drag.
    pub fn classify_release(&self, sample: DragSample) -> DismissDecision {
        let threshold = self.dismiss_threshold();
        if sample.predicted_end_y > threshold || sample.translation_y > threshold {
            DismissDecision::Dismiss
        } else {
            DismissDecision::SnapBack
        }
    }
}

// ============================================================================
// Drag Input
// ============================================================================

/// One update from the drag gesture recognizer
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragSample {
    /// Vertical translation since the gesture began (positive = downward)
    pub translation_y: f32,
    /// Velocity-projected final translation
    pub predicted_end_y: f32,
    /// Horizontal velocity, reported by the recognizer but not used for
    /// the dismiss decision
    pub velocity_x: f32,
}

impl DragSample {
    /// A sample where the projected end equals the current translation
    /// (a drag with no residual velocity)
    pub fn with_translation(translation_y: f32) -> Self {
        Self {
            translation_y,
            predicted_end_y: translation_y,
            velocity_x: 0.0,
        }
    }
}

/// Phase of the drag gesture, as delivered by the recognizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    /// Terminal `.cancelled` / `.failed` recognizer states
    Cancelled,
}

/// What should happen to the sheet once the drag ends
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DismissDecision {
    /// Run the sheet off screen and close it
    Dismiss,
    /// Animate the sheet back to its open position
    SnapBack,
}

// ============================================================================
// Sheet Controller
// ============================================================================

/// Host-facing controller for one swipe-to-dismiss sheet
///
/// Owns the configuration, the lifecycle state machine and the settle
/// spring. The host forwards gesture callbacks and calls [`Sheet::tick`]
/// once per frame while [`SheetState::is_animating`] holds; everything
/// else is derived.
#[derive(Clone, Copy, Debug)]
pub struct Sheet {
    config: SheetConfig,
    state: SheetState,
    translation: f32,
    spring: Option<SettleSpring>,
}

impl Sheet {
    /// Create a closed sheet
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            state: SheetState::Closed,
            translation: config.height,
            spring: None,
        }
    }

    pub fn config(&self) -> SheetConfig {
        self.config
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Current vertical translation of the sheet (0 = fully open)
    pub fn translation(&self) -> f32 {
        self.translation
    }

    /// Scrim opacity for the sheet's current translation
    pub fn scrim_opacity_now(&self) -> f32 {
        self.config
            .scrim_opacity(DragSample::with_translation(self.translation))
    }

    /// Present the sheet, animating it up from the bottom edge
    pub fn open(&mut self) {
        if self.apply(sheet_events::OPEN) {
            self.translation = self.config.height;
            self.spring = Some(SettleSpring::new(
                SettleConfig::snap_back(),
                self.translation,
                0.0,
            ));
        }
    }

    /// Forward one drag recognizer callback
    ///
    /// Returns the dismiss decision when the phase is terminal, `None`
    /// for begin/move updates.
    pub fn drag(&mut self, sample: DragSample, phase: DragPhase) -> Option<DismissDecision> {
        match phase {
            DragPhase::Began => {
                if self.apply(sheet_events::DRAG_START) {
                    self.spring = None;
                    self.track(sample);
                }
                None
            }
            DragPhase::Changed => {
                if self.state.is_dragging() {
                    self.track(sample);
                }
                None
            }
            DragPhase::Ended => Some(self.release(sample)),
            DragPhase::Cancelled => {
                if self.apply(sheet_events::DRAG_CANCELLED) {
                    self.settle_to(0.0, SettleConfig::snap_back());
                }
                Some(DismissDecision::SnapBack)
            }
        }
    }

    /// Classify the release and start the matching settle motion
    pub fn release(&mut self, sample: DragSample) -> DismissDecision {
        let decision = self.config.classify_release(sample);

        match decision {
            DismissDecision::Dismiss => {
                if self.apply(sheet_events::RELEASE_DISMISS) {
                    self.settle_to(self.config.height, SettleConfig::dismiss());
                }
            }
            DismissDecision::SnapBack => {
                if self.apply(sheet_events::RELEASE_SNAP_BACK) {
                    self.settle_to(0.0, SettleConfig::snap_back());
                }
            }
        }

        decision
    }

    /// Advance the settle motion by `dt` seconds
    ///
    /// Returns true while still animating, false once the sheet has come
    /// to rest (at which point the lifecycle transition has fired).
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(spring) = self.spring.as_mut() else {
            return false;
        };

        spring.step(dt);
        self.translation = spring.value();

        if spring.is_settled() {
            self.translation = spring.target();
            self.spring = None;
            self.apply(sheet_events::ANIMATION_COMPLETE);
            return false;
        }

        true
    }

    fn track(&mut self, sample: DragSample) {
        self.translation = sample.translation_y.clamp(0.0, self.config.height);
    }

    fn settle_to(&mut self, target: f32, config: SettleConfig) {
        self.spring = Some(SettleSpring::new(config, self.translation, target));
    }

    /// Run one event through the state machine; true if it transitioned
    fn apply(&mut self, event: u32) -> bool {
        match self.state.on_event(event) {
            Some(next) => {
                tracing::debug!(from = ?self.state, to = ?next, event, "sheet transition");
                self.state = next;
                true
            }
            None => false,
        }
    }
}
