//! The frame loop driver.
//!
//! Single-threaded and cooperative: each iteration pumps messages, lets
//! the renderer declare its widgets, clears the target, submits the GUI
//! draw data and presents before the next one starts.

use crate::error::{OverlayError, OverlayResult, PRESENT_FAILED};
use crate::gui::{FrameRenderer, Gui};
use crate::platform::{Platform, Pump};
use crate::session::Session;
use crate::surface::ERROR_CAPTION;
use crate::{log_error, log_info};

/// Loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A quit message was observed while draining the queue.
    Quit,
    /// Presenting the swapchain failed.
    PresentFailed,
}

/// Outcome of a loop that stopped on a quit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Frames presented successfully.
    pub frames: u64,
    pub stop_reason: StopReason,
}

/// Drives frames for a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    state: LoopState,
    stop_reason: Option<StopReason>,
    frames: u64,
    sync_interval: u32,
}

impl FrameLoop {
    pub fn new(sync_interval: u32) -> Self {
        Self {
            state: LoopState::Running,
            stop_reason: None,
            frames: 0,
            sync_interval,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs frames until the loop stops.
    ///
    /// Returns the summary on a quit-initiated stop and the present error
    /// otherwise. Either way the session stays valid for teardown. A loop
    /// that already stopped runs nothing and returns its summary.
    pub fn run<P, G, R>(&mut self, session: &mut Session<P, G, R>) -> OverlayResult<LoopSummary>
    where
        P: Platform,
        G: Gui<P>,
        R: FrameRenderer,
    {
        if self.state == LoopState::Running {
            log_info!("frame loop started");
            while self.step(session)? == LoopState::Running {}
        }

        Ok(self.summary())
    }

    fn summary(&self) -> LoopSummary {
        LoopSummary {
            frames: self.frames,
            stop_reason: self.stop_reason.unwrap_or(StopReason::Quit),
        }
    }

    /// Runs one iteration. A stopped loop does nothing.
    pub fn step<P, G, R>(&mut self, session: &mut Session<P, G, R>) -> OverlayResult<LoopState>
    where
        P: Platform,
        G: Gui<P>,
        R: FrameRenderer,
    {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        // A quit seen anywhere in the drain cancels this frame.
        if session.platform.pump_messages() == Pump::Quit {
            self.stop(StopReason::Quit);
            return Ok(LoopState::Stopped);
        }

        session.gui.begin_frame(&session.surface);
        session.renderer.render();
        let draw_data = session.gui.end_frame();

        session
            .surface
            .present_frame_targets(&mut session.platform);
        session.gui.submit(&session.surface, draw_data);

        if let Err(source) = session
            .surface
            .present(&mut session.platform, self.sync_interval)
        {
            log_error!("{PRESENT_FAILED} ({source})");
            if session.options.error_dialogs {
                session.platform.notify_error(ERROR_CAPTION, PRESENT_FAILED);
            }
            self.stop(StopReason::PresentFailed);
            return Err(OverlayError::Present { source });
        }

        self.frames += 1;
        Ok(LoopState::Running)
    }

    fn stop(&mut self, reason: StopReason) {
        self.state = LoopState::Stopped;
        self.stop_reason = Some(reason);
        log_info!("frame loop stopped after {} frame(s): {reason:?}", self.frames);
    }
}

#[cfg(test)]
#[path = "frame_loop_tests.rs"]
mod tests;
