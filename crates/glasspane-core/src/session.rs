//! The overlay session: initialize, run, teardown.

use crate::error::{InitStep, OverlayResult};
use crate::frame_loop::{FrameLoop, LoopSummary};
use crate::gui::{FrameRenderer, Gui};
use crate::platform::{Platform, ShowCommand};
use crate::surface::{Surface, init_failed};
use crate::{log_debug, log_info};

/// Caller-supplied settings for one overlay session.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOptions {
    /// Window title.
    pub title: String,
    /// Window class name. Defaults to the title when `None`.
    pub class_name: Option<String>,
    /// How the window is first shown.
    pub show: ShowCommand,
    /// Swapchain refresh rate numerator (denominator is 1).
    pub refresh_rate: u32,
    /// Present sync interval; 1 waits for one vertical refresh.
    pub sync_interval: u32,
    /// Whether failures raise a modal notification.
    pub error_dialogs: bool,
}

impl OverlayOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            class_name: None,
            show: ShowCommand::Show,
            refresh_rate: 60,
            sync_interval: 1,
            error_dialogs: true,
        }
    }

    /// The class name registered for the overlay window.
    pub fn class_name(&self) -> &str {
        self.class_name.as_deref().unwrap_or(&self.title)
    }
}

/// A fully initialized overlay.
///
/// Owns the platform, the surface, the GUI and the renderer. A session
/// only exists once every initialization step has succeeded; it is torn
/// down by [`Session::teardown`] or, failing that, when dropped.
pub struct Session<P: Platform, G: Gui<P>, R: FrameRenderer> {
    pub(crate) gui: G,
    gui_live: bool,
    pub(crate) renderer: R,
    pub(crate) surface: Surface<P>,
    pub(crate) platform: P,
    pub(crate) options: OverlayOptions,
    frame_loop: FrameLoop,
}

impl<P: Platform, G: Gui<P>, R: FrameRenderer> Session<P, G, R> {
    /// Creates the overlay window and GPU surface, then initializes the GUI.
    ///
    /// Any failing step is reported and everything acquired before it is
    /// released before the error is returned.
    pub fn initialize(
        mut platform: P,
        mut gui: G,
        options: OverlayOptions,
        renderer: R,
    ) -> OverlayResult<Self> {
        log_info!("initializing overlay \"{}\"", options.title);

        let surface = Surface::create(&mut platform, &options)?;

        if let Err(source) = gui.init(&surface) {
            let err = init_failed(
                &mut platform,
                options.error_dialogs,
                InitStep::GuiInit,
                source,
            );
            drop(surface);
            return Err(err);
        }
        log_debug!("gui backends initialized");

        let frame_loop = FrameLoop::new(options.sync_interval);
        Ok(Self {
            gui,
            gui_live: true,
            renderer,
            surface,
            platform,
            options,
            frame_loop,
        })
    }

    /// Runs the frame loop until a quit message or a present failure.
    ///
    /// The loop state belongs to the session: once stopped, later calls
    /// render nothing and return the same summary.
    pub fn run(&mut self) -> OverlayResult<LoopSummary> {
        let mut driver = self.frame_loop;
        let result = driver.run(self);
        self.frame_loop = driver;
        result
    }

    /// The session's frame loop, as of the last [`Session::run`].
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Shuts down the GUI, then releases the GPU resources, the window and
    /// the window class.
    pub fn teardown(self) {
        log_info!("tearing down overlay \"{}\"", self.options.title);
        drop(self);
    }

    pub fn surface(&self) -> &Surface<P> {
        &self.surface
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn gui(&self) -> &G {
        &self.gui
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    fn shutdown_gui(&mut self) {
        if self.gui_live {
            self.gui.shutdown();
            self.gui_live = false;
            log_debug!("gui backends shut down");
        }
    }
}

impl<P: Platform, G: Gui<P>, R: FrameRenderer> Drop for Session<P, G, R> {
    fn drop(&mut self) {
        // The surface fields drop after this, in release order.
        self.shutdown_gui();
    }
}

/// Initializes an overlay, runs it to completion and tears it down.
pub fn run_overlay<P, G, R>(
    platform: P,
    gui: G,
    options: OverlayOptions,
    renderer: R,
) -> OverlayResult<LoopSummary>
where
    P: Platform,
    G: Gui<P>,
    R: FrameRenderer,
{
    let mut session = Session::initialize(platform, gui, options, renderer)?;
    let result = session.run();
    session.teardown();
    result
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
