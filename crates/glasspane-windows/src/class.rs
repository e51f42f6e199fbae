use std::mem;

use glasspane_core::PlatformResult;
use windows::Win32::Foundation::HINSTANCE;
use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_VREDRAW, RegisterClassExW, UnregisterClassW, WNDCLASSEXW,
};
use windows::core::PCWSTR;

use crate::hook::overlay_wnd_proc;

/// A registered Win32 window class, unregistered on drop.
///
/// Keeps the null-terminated UTF-16 name alive because Win32 looks the
/// class up by name at creation and unregistration.
pub struct WindowClass {
    name: Vec<u16>,
    instance: HINSTANCE,
}

impl WindowClass {
    /// Registers a class whose procedure is [`overlay_wnd_proc`].
    ///
    /// Fails if the name is already registered in this process.
    pub fn register(name: &str, instance: HINSTANCE) -> PlatformResult<Self> {
        let name = wide(name);
        let wc = WNDCLASSEXW {
            cbSize: mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(overlay_wnd_proc),
            hInstance: instance,
            lpszClassName: PCWSTR(name.as_ptr()),
            ..Default::default()
        };

        // SAFETY: `wc` is fully initialised and `name` outlives the call.
        let atom = unsafe { RegisterClassExW(&wc) };
        if atom == 0 {
            return Err(windows::core::Error::from_win32().into());
        }

        Ok(Self { name, instance })
    }

    /// The class name as a `PCWSTR`, valid while `self` lives.
    pub fn name(&self) -> PCWSTR {
        PCWSTR(self.name.as_ptr())
    }

    pub fn instance(&self) -> HINSTANCE {
        self.instance
    }
}

impl Drop for WindowClass {
    fn drop(&mut self) {
        // SAFETY: the name buffer is still alive; every window of this
        // class has been destroyed by the time the class drops.
        unsafe {
            let _ = UnregisterClassW(self.name(), Some(self.instance));
        }
    }
}

/// Encodes a string as null-terminated UTF-16.
pub(crate) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
