//! The overlay surface: window, layering and GPU render target.

use crate::error::{InitStep, OverlayError, OverlayResult, PlatformResult};
use crate::geometry::{Margins, Point, Size};
use crate::platform::{
    CLEAR_COLOR, DeviceParts, FEATURE_LEVELS, FeatureLevel, LAYER_ALPHA, Platform, SwapChainDesc,
};
use crate::session::OverlayOptions;
use crate::{log_debug, log_error, log_info};

/// Caption of every failure notification.
pub(crate) const ERROR_CAPTION: &str = "Error";

/// Native resources backing one overlay.
///
/// Fields are declared in release order: Rust drops them top to bottom,
/// so the render target and swapchain go before the context and device,
/// and the window is destroyed before its class is unregistered.
pub struct Surface<P: Platform> {
    render_target: P::RenderTarget,
    swap_chain: P::SwapChain,
    context: P::Context,
    device: P::Device,
    window: P::Window,
    class: P::Class,
    size: Size,
    feature_level: FeatureLevel,
}

impl<P: Platform> Surface<P> {
    /// Runs the window, layering and GPU setup steps.
    ///
    /// On failure, shows the step's notification (when enabled) and drops
    /// every resource acquired so far, newest first.
    pub(crate) fn create(platform: &mut P, options: &OverlayOptions) -> OverlayResult<Self> {
        let mut init = Initializer {
            platform,
            notify: options.error_dialogs,
        };

        let class = init.step(InitStep::RegisterClass, |p| {
            p.register_class(options.class_name())
        })?;
        let size = init.step(InitStep::DesktopResolution, |p| p.desktop_size())?;
        log_debug!("desktop size {}x{}", size.width, size.height);

        let window = init.step(InitStep::CreateWindow, |p| {
            p.create_window(&class, &options.title, size)
        })?;
        init.step(InitStep::LayeredAttributes, |p| {
            p.set_layer_alpha(&window, LAYER_ALPHA)
        })?;

        let client = init.step(InitStep::ClientArea, |p| p.client_rect(&window))?;
        let bounds = init.step(InitStep::WindowArea, |p| p.window_rect(&window))?;
        let origin = init.step(InitStep::ClientToScreen, |p| {
            p.client_to_screen(&window, Point::default())
        })?;
        let margins = Margins::from_geometry(bounds, client, origin);
        init.step(InitStep::ExtendFrame, |p| p.extend_frame(&window, margins))?;

        let desc = SwapChainDesc::overlay(size, options.refresh_rate);
        let DeviceParts {
            device,
            context,
            swap_chain,
            feature_level,
        } = init.step(InitStep::CreateDevice, |p| {
            p.create_device(&window, &desc, &FEATURE_LEVELS)
        })?;
        log_debug!("device created at {feature_level:?}");

        let back_buffer = init.step(InitStep::BackBuffer, |p| p.back_buffer(&swap_chain))?;
        let view = init.platform.create_render_target(&device, &back_buffer);
        drop(back_buffer);
        let render_target = init.check(InitStep::RenderTargetView, view)?;

        init.platform.show_window(&window, options.show);
        log_info!("overlay surface ready ({}x{})", size.width, size.height);

        Ok(Self {
            render_target,
            swap_chain,
            context,
            device,
            window,
            class,
            size,
            feature_level,
        })
    }

    /// Binds the render target as the sole color target and clears it to
    /// fully transparent black.
    pub fn present_frame_targets(&self, platform: &mut P) {
        platform.bind_and_clear(&self.context, &self.render_target, CLEAR_COLOR);
    }

    /// Presents the swapchain.
    pub(crate) fn present(&self, platform: &mut P, sync_interval: u32) -> PlatformResult<()> {
        platform.present(&self.swap_chain, sync_interval)
    }

    pub fn window(&self) -> &P::Window {
        &self.window
    }

    pub fn class(&self) -> &P::Class {
        &self.class
    }

    pub fn device(&self) -> &P::Device {
        &self.device
    }

    pub fn context(&self) -> &P::Context {
        &self.context
    }

    pub fn swap_chain(&self) -> &P::SwapChain {
        &self.swap_chain
    }

    pub fn render_target(&self) -> &P::RenderTarget {
        &self.render_target
    }

    /// Desktop size captured at creation; never re-queried.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn feature_level(&self) -> FeatureLevel {
        self.feature_level
    }
}

/// Runs initialization steps, turning failures into notified errors.
struct Initializer<'a, P: Platform> {
    platform: &'a mut P,
    notify: bool,
}

impl<P: Platform> Initializer<'_, P> {
    fn step<T>(
        &mut self,
        step: InitStep,
        op: impl FnOnce(&mut P) -> PlatformResult<T>,
    ) -> OverlayResult<T> {
        let result = op(self.platform);
        self.check(step, result)
    }

    fn check<T>(&mut self, step: InitStep, result: PlatformResult<T>) -> OverlayResult<T> {
        result.map_err(|source| init_failed(self.platform, self.notify, step, source))
    }
}

/// Logs and (optionally) notifies an initialization failure.
pub(crate) fn init_failed<P: Platform>(
    platform: &mut P,
    notify: bool,
    step: InitStep,
    source: Box<dyn std::error::Error>,
) -> OverlayError {
    log_error!("{} ({source})", step.message());
    if notify {
        platform.notify_error(ERROR_CAPTION, step.message());
    }
    OverlayError::Init { step, source }
}
