use glasspane_core::{Margins, Point, PlatformResult, Rect, ShowCommand, Size};
use windows::Win32::Foundation::{COLORREF, HWND, POINT, RECT};
use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
use windows::Win32::Graphics::Gdi::{ClientToScreen, UpdateWindow};
use windows::Win32::UI::Controls::MARGINS;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DestroyWindow, GetClientRect, GetWindowRect, IsWindow, LWA_ALPHA,
    SHOW_WINDOW_CMD,
    SW_SHOW, SW_SHOWNOACTIVATE, SW_SHOWNORMAL, SetLayeredWindowAttributes, ShowWindow,
    WS_EX_LAYERED, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use crate::class::{WindowClass, wide};
use crate::hook::clear_message_hook;

/// The full-screen overlay window, destroyed on drop.
///
/// Topmost and layered; `WS_EX_TRANSPARENT` lets clicks fall through to
/// whatever is underneath.
pub struct OverlayWindow {
    hwnd: HWND,
}

impl OverlayWindow {
    /// Creates a borderless popup of `size` at the screen origin.
    pub fn create(class: &WindowClass, title: &str, size: Size) -> PlatformResult<Self> {
        let title = wide(title);
        let ex = WS_EX_TOPMOST | WS_EX_TRANSPARENT | WS_EX_LAYERED;

        // SAFETY: class name and title buffers outlive the call.
        let hwnd = unsafe {
            CreateWindowExW(
                ex,
                class.name(),
                windows::core::PCWSTR(title.as_ptr()),
                WS_POPUP,
                0,
                0,
                size.width,
                size.height,
                None,
                None,
                Some(class.instance()),
                None,
            )?
        };

        Ok(Self { hwnd })
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Sets the constant alpha of the whole layer.
    pub fn set_layer_alpha(&self, alpha: u8) -> PlatformResult<()> {
        unsafe { SetLayeredWindowAttributes(self.hwnd, COLORREF(0), alpha, LWA_ALPHA)? };
        Ok(())
    }

    pub fn client_rect(&self) -> PlatformResult<Rect> {
        let mut rc = RECT::default();
        unsafe { GetClientRect(self.hwnd, &mut rc)? };
        Ok(from_win32(rc))
    }

    pub fn window_rect(&self) -> PlatformResult<Rect> {
        let mut rc = RECT::default();
        unsafe { GetWindowRect(self.hwnd, &mut rc)? };
        Ok(from_win32(rc))
    }

    /// Converts a client-area point to screen coordinates.
    pub fn client_to_screen(&self, point: Point) -> PlatformResult<Point> {
        let mut pt = POINT {
            x: point.x,
            y: point.y,
        };
        if !unsafe { ClientToScreen(self.hwnd, &mut pt) }.as_bool() {
            return Err("ClientToScreen failed".into());
        }
        Ok(Point { x: pt.x, y: pt.y })
    }

    /// Marks the margins of the client area as DWM glass.
    pub fn extend_frame(&self, margins: Margins) -> PlatformResult<()> {
        let m = MARGINS {
            cxLeftWidth: margins.left,
            cxRightWidth: margins.right,
            cyTopHeight: margins.top,
            cyBottomHeight: margins.bottom,
        };
        unsafe { DwmExtendFrameIntoClientArea(self.hwnd, &m)? };
        Ok(())
    }

    /// Shows the window and paints it immediately.
    pub fn show(&self, show: ShowCommand) {
        unsafe {
            let _ = ShowWindow(self.hwnd, show_cmd(show));
            let _ = UpdateWindow(self.hwnd);
        }
    }
}

impl Drop for OverlayWindow {
    fn drop(&mut self) {
        // The GUI backends are already shut down; WM_DESTROY must not
        // reach their hook.
        clear_message_hook();

        // Closing the window from outside destroys it before teardown.
        unsafe {
            if IsWindow(Some(self.hwnd)).as_bool() {
                let _ = DestroyWindow(self.hwnd);
            }
        }
    }
}

fn from_win32(rc: RECT) -> Rect {
    Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom)
}

fn show_cmd(show: ShowCommand) -> SHOW_WINDOW_CMD {
    match show {
        ShowCommand::Show => SW_SHOW,
        ShowCommand::ShowNoActivate => SW_SHOWNOACTIVATE,
        ShowCommand::Normal => SW_SHOWNORMAL,
    }
}
