//! Festival Motion
//!
//! Headless motion core for a festival-browsing UI: the scroll-driven
//! collapsing parallax header of the detail screen and the
//! swipe-to-dismiss bottom sheet.
//!
//! # Features
//!
//! - **Parallax Header**: scroll offset in, header offset / stretched
//!   height / blur / floating-title offset out, pure per frame
//! - **Swipe-to-Dismiss Sheet**: live scrim opacity, dismiss-vs-snap-back
//!   classification from translation and predicted end translation
//! - **Lifecycle FSM**: event-driven sheet states with spring-based
//!   settle motion
//! - **Frame Latch**: capture-once starting rect anchoring the scrollable
//!   content
//!
//! The crate owns no timers or threads; the host feeds it scroll and
//! gesture samples on the UI thread and applies the returned numbers to
//! its own rendering calls.

pub mod error;
pub mod geometry;
pub mod parallax;
pub mod sheet;
pub mod spring;
pub mod state;

pub use error::{MotionError, Result};
pub use geometry::{FrameLatch, Rect};
pub use parallax::{HeaderFrame, HeaderGeometry, ParallaxHeader};
pub use sheet::{DismissDecision, DragPhase, DragSample, Sheet, SheetConfig};
pub use spring::{SettleConfig, SettleSpring};
pub use state::{sheet_events, SheetState, StateTransitions};
