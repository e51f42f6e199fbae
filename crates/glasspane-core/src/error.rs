use std::fmt;

/// A boxed error type for platform and GUI backend operations.
///
/// Native calls fail with platform-specific error types (`HRESULT`
/// wrappers on Windows); boxing keeps the `Platform` trait object-agnostic.
pub type PlatformResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Result alias for overlay session operations.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// The initialization step that failed.
///
/// Steps are listed in the order `Session::initialize` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitStep {
    RegisterClass,
    DesktopResolution,
    CreateWindow,
    LayeredAttributes,
    ClientArea,
    WindowArea,
    ClientToScreen,
    ExtendFrame,
    CreateDevice,
    BackBuffer,
    RenderTargetView,
    GuiInit,
}

impl InitStep {
    /// Every step, in execution order.
    pub const ALL: [InitStep; 12] = [
        Self::RegisterClass,
        Self::DesktopResolution,
        Self::CreateWindow,
        Self::LayeredAttributes,
        Self::ClientArea,
        Self::WindowArea,
        Self::ClientToScreen,
        Self::ExtendFrame,
        Self::CreateDevice,
        Self::BackBuffer,
        Self::RenderTargetView,
        Self::GuiInit,
    ];

    /// User-facing text shown in the failure notification.
    pub fn message(self) -> &'static str {
        match self {
            Self::RegisterClass => "Failed to register window class!",
            Self::DesktopResolution => "Failed to query desktop resolution!",
            Self::CreateWindow => "Failed to create window!",
            Self::LayeredAttributes => "Failed to set layered window attributes!",
            Self::ClientArea => "Failed to get client area!",
            Self::WindowArea => "Failed to get window area!",
            Self::ClientToScreen => "Failed to convert client to screen coordinates!",
            Self::ExtendFrame => "Failed to extend frame into client area!",
            Self::CreateDevice => "Failed to create GPU device and swap chain!",
            Self::BackBuffer => "Failed to get back buffer!",
            Self::RenderTargetView => "Failed to create render target view!",
            Self::GuiInit => "Failed to initialize GUI backends!",
        }
    }
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Text shown when presenting a frame fails.
pub const PRESENT_FAILED: &str = "Failed to present swap chain!";

/// Errors surfaced by the overlay session.
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    /// A step of `Session::initialize` failed; everything acquired before
    /// it has already been released.
    #[error("{step} ({source})")]
    Init {
        step: InitStep,
        source: Box<dyn std::error::Error>,
    },

    /// Presenting the swapchain failed; the frame loop has stopped.
    #[error("Failed to present swap chain! ({source})")]
    Present { source: Box<dyn std::error::Error> },
}

impl OverlayError {
    /// Returns the failed initialization step, if this is an init error.
    pub fn step(&self) -> Option<InitStep> {
        match self {
            Self::Init { step, .. } => Some(*step),
            Self::Present { .. } => None,
        }
    }
}
