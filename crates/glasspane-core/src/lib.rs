pub mod config;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod gui;
pub mod log;
pub mod platform;
pub mod session;
pub mod surface;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{InitStep, OverlayError, OverlayResult, PlatformResult};
pub use frame_loop::{FrameLoop, LoopState, LoopSummary, StopReason};
pub use geometry::{Margins, Point, Rect, Size};
pub use gui::{FrameRenderer, Gui, NullGui};
pub use platform::{Platform, Pump, ShowCommand};
pub use session::{OverlayOptions, Session, run_overlay};
pub use surface::Surface;
