//! [`Platform`] implementation over Win32, DWM and Direct3D 11.

use glasspane_core::platform::{DeviceParts, FeatureLevel, SwapChainDesc};
use glasspane_core::{Margins, Platform, PlatformResult, Point, Pump, Rect, ShowCommand, Size};
use windows::Win32::Foundation::HINSTANCE;
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Device, ID3D11DeviceContext, ID3D11RenderTargetView, ID3D11Texture2D,
};
use windows::Win32::Graphics::Dxgi::IDXGISwapChain;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;

use crate::class::WindowClass;
use crate::window::OverlayWindow;
use crate::{dialog, gpu, message_pump, monitor};

/// The Win32 platform bound to one module instance.
#[derive(Debug, Clone, Copy)]
pub struct Win32Platform {
    instance: HINSTANCE,
}

impl Win32Platform {
    /// Uses the instance of the running executable.
    pub fn current() -> PlatformResult<Self> {
        let module = unsafe { GetModuleHandleW(None)? };
        Ok(Self::with_instance(module.into()))
    }

    pub fn with_instance(instance: HINSTANCE) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> HINSTANCE {
        self.instance
    }
}

impl Platform for Win32Platform {
    type Class = WindowClass;
    type Window = OverlayWindow;
    type Device = ID3D11Device;
    type Context = ID3D11DeviceContext;
    type SwapChain = IDXGISwapChain;
    type BackBuffer = ID3D11Texture2D;
    type RenderTarget = ID3D11RenderTargetView;

    fn register_class(&mut self, name: &str) -> PlatformResult<WindowClass> {
        WindowClass::register(name, self.instance)
    }

    fn desktop_size(&mut self) -> PlatformResult<Size> {
        monitor::desktop_size()
    }

    fn create_window(
        &mut self,
        class: &WindowClass,
        title: &str,
        size: Size,
    ) -> PlatformResult<OverlayWindow> {
        OverlayWindow::create(class, title, size)
    }

    fn set_layer_alpha(&mut self, window: &OverlayWindow, alpha: u8) -> PlatformResult<()> {
        window.set_layer_alpha(alpha)
    }

    fn client_rect(&mut self, window: &OverlayWindow) -> PlatformResult<Rect> {
        window.client_rect()
    }

    fn window_rect(&mut self, window: &OverlayWindow) -> PlatformResult<Rect> {
        window.window_rect()
    }

    fn client_to_screen(&mut self, window: &OverlayWindow, point: Point) -> PlatformResult<Point> {
        window.client_to_screen(point)
    }

    fn extend_frame(&mut self, window: &OverlayWindow, margins: Margins) -> PlatformResult<()> {
        window.extend_frame(margins)
    }

    fn create_device(
        &mut self,
        window: &OverlayWindow,
        desc: &SwapChainDesc,
        levels: &[FeatureLevel],
    ) -> PlatformResult<DeviceParts<ID3D11Device, ID3D11DeviceContext, IDXGISwapChain>> {
        gpu::create_device(window.hwnd(), desc, levels)
    }

    fn back_buffer(&mut self, swap_chain: &IDXGISwapChain) -> PlatformResult<ID3D11Texture2D> {
        gpu::back_buffer(swap_chain)
    }

    fn create_render_target(
        &mut self,
        device: &ID3D11Device,
        back_buffer: &ID3D11Texture2D,
    ) -> PlatformResult<ID3D11RenderTargetView> {
        gpu::create_render_target(device, back_buffer)
    }

    fn show_window(&mut self, window: &OverlayWindow, show: ShowCommand) {
        window.show(show);
    }

    fn pump_messages(&mut self) -> Pump {
        message_pump::drain_messages()
    }

    fn bind_and_clear(
        &mut self,
        context: &ID3D11DeviceContext,
        target: &ID3D11RenderTargetView,
        color: [f32; 4],
    ) {
        gpu::bind_and_clear(context, target, color);
    }

    fn present(&mut self, swap_chain: &IDXGISwapChain, sync_interval: u32) -> PlatformResult<()> {
        gpu::present(swap_chain, sync_interval)
    }

    fn notify_error(&mut self, caption: &str, message: &str) {
        dialog::error_box(caption, message);
    }
}
