//! Direct3D 11 device, swapchain and render target setup.
//!
//! COM interfaces release their reference when dropped, so the device,
//! context, swapchain and views need no explicit cleanup here.

use glasspane_core::PlatformResult;
use glasspane_core::platform::{
    DeviceParts, FeatureLevel, PixelFormat, SwapChainDesc, SwapEffect,
};
use windows::Win32::Foundation::{HMODULE, HWND};
use windows::Win32::Graphics::Direct3D::{
    D3D_DRIVER_TYPE_HARDWARE, D3D_FEATURE_LEVEL, D3D_FEATURE_LEVEL_10_0, D3D_FEATURE_LEVEL_11_0,
};
use windows::Win32::Graphics::Direct3D11::{
    D3D11_CREATE_DEVICE_FLAG, D3D11_SDK_VERSION, D3D11CreateDeviceAndSwapChain, ID3D11Device,
    ID3D11DeviceContext, ID3D11RenderTargetView, ID3D11Texture2D,
};
use windows::Win32::Graphics::Dxgi::Common::{
    DXGI_FORMAT, DXGI_FORMAT_R8G8B8A8_UNORM, DXGI_MODE_DESC, DXGI_RATIONAL, DXGI_SAMPLE_DESC,
};
use windows::Win32::Graphics::Dxgi::{
    DXGI_PRESENT, DXGI_SWAP_CHAIN_DESC, DXGI_SWAP_CHAIN_FLAG_ALLOW_MODE_SWITCH,
    DXGI_SWAP_EFFECT, DXGI_SWAP_EFFECT_DISCARD, DXGI_USAGE_RENDER_TARGET_OUTPUT, IDXGISwapChain,
};

/// Device, immediate context and swapchain created together.
pub type D3DParts = DeviceParts<ID3D11Device, ID3D11DeviceContext, IDXGISwapChain>;

/// Creates a hardware device and a swapchain bound to `hwnd`, trying
/// `levels` in order.
pub fn create_device(
    hwnd: HWND,
    desc: &SwapChainDesc,
    levels: &[FeatureLevel],
) -> PlatformResult<D3DParts> {
    let sd = swap_chain_desc(hwnd, desc);
    let levels: Vec<D3D_FEATURE_LEVEL> = levels.iter().copied().map(to_d3d_level).collect();

    let mut swap_chain = None;
    let mut device = None;
    let mut context = None;
    let mut achieved = D3D_FEATURE_LEVEL::default();

    // SAFETY: every out pointer references a live local.
    unsafe {
        D3D11CreateDeviceAndSwapChain(
            None,
            D3D_DRIVER_TYPE_HARDWARE,
            HMODULE::default(),
            D3D11_CREATE_DEVICE_FLAG(0),
            Some(&levels),
            D3D11_SDK_VERSION,
            Some(&sd),
            Some(&mut swap_chain),
            Some(&mut device),
            Some(&mut achieved),
            Some(&mut context),
        )?;
    }

    match (device, context, swap_chain) {
        (Some(device), Some(context), Some(swap_chain)) => Ok(DeviceParts {
            device,
            context,
            swap_chain,
            feature_level: from_d3d_level(achieved),
        }),
        _ => Err("D3D11CreateDeviceAndSwapChain returned no objects".into()),
    }
}

/// Fetches back buffer 0.
pub fn back_buffer(swap_chain: &IDXGISwapChain) -> PlatformResult<ID3D11Texture2D> {
    Ok(unsafe { swap_chain.GetBuffer::<ID3D11Texture2D>(0)? })
}

/// Creates a render target view covering the whole back buffer.
pub fn create_render_target(
    device: &ID3D11Device,
    back_buffer: &ID3D11Texture2D,
) -> PlatformResult<ID3D11RenderTargetView> {
    let mut view = None;
    unsafe { device.CreateRenderTargetView(back_buffer, None, Some(&mut view))? };
    view.ok_or_else(|| "CreateRenderTargetView returned no view".into())
}

/// Binds `target` as the sole color target and clears it.
pub fn bind_and_clear(
    context: &ID3D11DeviceContext,
    target: &ID3D11RenderTargetView,
    color: [f32; 4],
) {
    unsafe {
        context.OMSetRenderTargets(Some(&[Some(target.clone())]), None);
        context.ClearRenderTargetView(target, &color);
    }
}

/// Presents the swapchain.
pub fn present(swap_chain: &IDXGISwapChain, sync_interval: u32) -> PlatformResult<()> {
    unsafe { swap_chain.Present(sync_interval, DXGI_PRESENT(0)).ok()? };
    Ok(())
}

fn swap_chain_desc(hwnd: HWND, desc: &SwapChainDesc) -> DXGI_SWAP_CHAIN_DESC {
    DXGI_SWAP_CHAIN_DESC {
        BufferDesc: DXGI_MODE_DESC {
            Width: desc.width,
            Height: desc.height,
            RefreshRate: DXGI_RATIONAL {
                Numerator: desc.refresh_rate.numerator,
                Denominator: desc.refresh_rate.denominator,
            },
            Format: to_dxgi_format(desc.format),
            ..Default::default()
        },
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: desc.sample_count,
            Quality: 0,
        },
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        BufferCount: desc.buffer_count,
        OutputWindow: hwnd,
        Windowed: desc.windowed.into(),
        SwapEffect: to_dxgi_swap_effect(desc.swap_effect),
        Flags: if desc.allow_mode_switch {
            DXGI_SWAP_CHAIN_FLAG_ALLOW_MODE_SWITCH.0 as u32
        } else {
            0
        },
    }
}

fn to_dxgi_format(format: PixelFormat) -> DXGI_FORMAT {
    match format {
        PixelFormat::Rgba8Unorm => DXGI_FORMAT_R8G8B8A8_UNORM,
    }
}

fn to_dxgi_swap_effect(effect: SwapEffect) -> DXGI_SWAP_EFFECT {
    match effect {
        SwapEffect::Discard => DXGI_SWAP_EFFECT_DISCARD,
    }
}

fn to_d3d_level(level: FeatureLevel) -> D3D_FEATURE_LEVEL {
    match level {
        FeatureLevel::Level11_0 => D3D_FEATURE_LEVEL_11_0,
        FeatureLevel::Level10_0 => D3D_FEATURE_LEVEL_10_0,
    }
}

fn from_d3d_level(level: D3D_FEATURE_LEVEL) -> FeatureLevel {
    if level == D3D_FEATURE_LEVEL_11_0 {
        FeatureLevel::Level11_0
    } else {
        FeatureLevel::Level10_0
    }
}
