//! The windowing and GPU operations an overlay session needs.
//!
//! Each platform crate (e.g. `glasspane-windows`) implements [`Platform`].
//! Resources are returned as owned values whose `Drop` releases the
//! native object, so a session unwinds simply by dropping what it holds.

use crate::error::PlatformResult;
use crate::geometry::{Margins, Point, Rect, Size};

/// Color every frame's render target is cleared to: fully transparent black.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Layer alpha applied to the overlay window. Fully opaque at the layer
/// level; see-through comes from [`CLEAR_COLOR`] over the extended frame.
pub const LAYER_ALPHA: u8 = 255;

/// Hardware feature levels requested, highest first.
pub const FEATURE_LEVELS: [FeatureLevel; 2] = [FeatureLevel::Level11_0, FeatureLevel::Level10_0];

/// GPU feature level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLevel {
    Level10_0,
    Level11_0,
}

/// Swapchain pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8 bits per channel RGBA, unsigned normalized.
    Rgba8Unorm,
}

/// How the swapchain treats presented buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapEffect {
    Discard,
}

/// A refresh rate expressed as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

/// Everything needed to create the overlay swapchain.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapChainDesc {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub refresh_rate: Rational,
    pub buffer_count: u32,
    pub sample_count: u32,
    pub windowed: bool,
    pub swap_effect: SwapEffect,
    pub allow_mode_switch: bool,
}

impl SwapChainDesc {
    /// A double-buffered, windowed, discard-effect swapchain covering `size`.
    pub fn overlay(size: Size, refresh_rate: u32) -> Self {
        let (width, height) = size.to_u32();
        Self {
            width,
            height,
            format: PixelFormat::Rgba8Unorm,
            refresh_rate: Rational {
                numerator: refresh_rate,
                denominator: 1,
            },
            buffer_count: 2,
            sample_count: 1,
            windowed: true,
            swap_effect: SwapEffect::Discard,
            allow_mode_switch: true,
        }
    }
}

/// How the overlay window is first shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowCommand {
    /// Activate and display the window.
    #[default]
    Show,
    /// Display the window without activating it.
    ShowNoActivate,
    /// Activate and display the window in its normal position.
    Normal,
}

/// Result of draining the message queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    /// The queue was drained without a quit request.
    Continue,
    /// A quit message was observed during the drain.
    Quit,
}

/// The three GPU objects created together with the swapchain.
pub struct DeviceParts<D, C, S> {
    pub device: D,
    pub context: C,
    pub swap_chain: S,
    pub feature_level: FeatureLevel,
}

/// Native windowing and GPU operations.
///
/// All methods run on the thread that owns the window. Associated
/// resource types release their native object when dropped.
pub trait Platform {
    /// A registered window class; unregisters on drop.
    type Class;
    /// The overlay window; destroys itself on drop.
    type Window;
    type Device;
    type Context;
    type SwapChain;
    type BackBuffer;
    type RenderTarget;

    /// Registers a window class whose procedure forwards messages to the
    /// GUI hook first and posts a quit message on destroy.
    fn register_class(&mut self, name: &str) -> PlatformResult<Self::Class>;

    /// Returns the desktop size used to cover the whole screen.
    fn desktop_size(&mut self) -> PlatformResult<Size>;

    /// Creates a borderless, topmost, input-transparent, layered popup at
    /// the origin covering `size`.
    fn create_window(
        &mut self,
        class: &Self::Class,
        title: &str,
        size: Size,
    ) -> PlatformResult<Self::Window>;

    /// Sets the constant layer alpha of a layered window.
    fn set_layer_alpha(&mut self, window: &Self::Window, alpha: u8) -> PlatformResult<()>;

    /// Client rectangle in client coordinates.
    fn client_rect(&mut self, window: &Self::Window) -> PlatformResult<Rect>;

    /// Window rectangle in screen coordinates.
    fn window_rect(&mut self, window: &Self::Window) -> PlatformResult<Rect>;

    /// Converts a client-area point to screen coordinates.
    fn client_to_screen(&mut self, window: &Self::Window, point: Point) -> PlatformResult<Point>;

    /// Extends the compositor frame into the client area.
    fn extend_frame(&mut self, window: &Self::Window, margins: Margins) -> PlatformResult<()>;

    /// Creates the device, immediate context and swapchain bound to the
    /// window, trying `levels` in order.
    fn create_device(
        &mut self,
        window: &Self::Window,
        desc: &SwapChainDesc,
        levels: &[FeatureLevel],
    ) -> PlatformResult<DeviceParts<Self::Device, Self::Context, Self::SwapChain>>;

    /// Fetches back buffer 0 of the swapchain.
    fn back_buffer(&mut self, swap_chain: &Self::SwapChain) -> PlatformResult<Self::BackBuffer>;

    /// Creates a render target view over a back buffer.
    fn create_render_target(
        &mut self,
        device: &Self::Device,
        back_buffer: &Self::BackBuffer,
    ) -> PlatformResult<Self::RenderTarget>;

    /// Shows the window and forces an immediate repaint.
    fn show_window(&mut self, window: &Self::Window, show: ShowCommand);

    /// Drains every pending message without blocking, translating and
    /// dispatching each one.
    fn pump_messages(&mut self) -> Pump;

    /// Binds `target` as the only color target (no depth/stencil) and
    /// clears it to `color`.
    fn bind_and_clear(
        &mut self,
        context: &Self::Context,
        target: &Self::RenderTarget,
        color: [f32; 4],
    );

    /// Presents the swapchain with the given sync interval.
    fn present(&mut self, swap_chain: &Self::SwapChain, sync_interval: u32) -> PlatformResult<()>;

    /// Shows a blocking, modal error notification.
    fn notify_error(&mut self, caption: &str, message: &str);
}
