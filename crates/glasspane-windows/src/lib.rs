#![cfg(windows)]

/// Window class registration.
pub mod class;

/// Modal error notifications.
pub mod dialog;

/// Process DPI awareness.
pub mod dpi;

/// Direct3D 11 device, swapchain and render target.
pub mod gpu;

/// Window procedure and GUI message hook.
pub mod hook;

/// Non-blocking message drain.
mod message_pump;

/// Desktop resolution.
pub mod monitor;

/// `Platform` implementation.
pub mod platform;

/// The overlay window.
pub mod window;

pub use dpi::enable_dpi_awareness;
pub use hook::{MessageHook, clear_message_hook, set_message_hook};
pub use platform::Win32Platform;
pub use window::OverlayWindow;
