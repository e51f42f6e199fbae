//! The immediate-mode GUI library seam.

use crate::error::PlatformResult;
use crate::platform::Platform;
use crate::surface::Surface;

/// Lifecycle hooks of an immediate-mode GUI library and its two backends
/// (native-window and GPU).
///
/// The session calls `init` once after the surface exists, then
/// `begin_frame`, `end_frame` and `submit` once per rendered frame, and
/// `shutdown` during teardown.
pub trait Gui<P: Platform> {
    /// Draw commands produced by one frame.
    type DrawData;

    /// Creates the library context, applies styling and initializes the
    /// platform and GPU backends against the surface.
    fn init(&mut self, surface: &Surface<P>) -> PlatformResult<()>;

    /// Starts a frame: GPU backend, platform backend, then the library.
    fn begin_frame(&mut self, surface: &Surface<P>);

    /// Finalizes the frame and returns its draw data.
    fn end_frame(&mut self) -> Self::DrawData;

    /// Renders draw data into the currently bound render target.
    fn submit(&mut self, surface: &Surface<P>, draw_data: Self::DrawData);

    /// Shuts down the GPU backend, the platform backend, then the context.
    ///
    /// Runs before the window is destroyed. A backend that receives window
    /// messages should stop handling them here.
    fn shutdown(&mut self);
}

/// A GUI that declares no widgets and draws nothing.
///
/// Useful for smoke runs: the overlay still clears and presents every frame.
#[derive(Debug, Default)]
pub struct NullGui;

impl<P: Platform> Gui<P> for NullGui {
    type DrawData = ();

    fn init(&mut self, _surface: &Surface<P>) -> PlatformResult<()> {
        Ok(())
    }

    fn begin_frame(&mut self, _surface: &Surface<P>) {}

    fn end_frame(&mut self) {}

    fn submit(&mut self, _surface: &Surface<P>, _draw_data: ()) {}

    fn shutdown(&mut self) {}
}

/// The per-frame draw hook supplied by the embedding application.
///
/// Called once per frame between `Gui::begin_frame` and `Gui::end_frame`.
/// It should only issue immediate-mode GUI calls and must not block.
pub trait FrameRenderer {
    fn render(&mut self);
}

impl<F: FnMut()> FrameRenderer for F {
    fn render(&mut self) {
        self()
    }
}
