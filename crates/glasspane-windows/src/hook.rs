//! Window procedure for the overlay and the GUI message hook.
//!
//! The GUI platform backend gets first refusal on every message. Only
//! messages it leaves unhandled reach the default processing, where
//! `WM_DESTROY` posts the quit message that stops the frame loop.

use std::cell::RefCell;

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{DefWindowProcW, PostQuitMessage, WM_DESTROY};

/// A GUI backend's message handler. Returns `true` if it consumed the message.
pub type MessageHook = Box<dyn FnMut(HWND, u32, WPARAM, LPARAM) -> bool>;

// Window procedures run on the thread that owns the window, so the hook
// lives in a thread-local next to it.
thread_local! {
    static MESSAGE_HOOK: RefCell<Option<MessageHook>> = const { RefCell::new(None) };
}

/// Installs the GUI message hook for windows on the current thread,
/// replacing any previous one.
///
/// A GUI backend installs its hook from `Gui::init`. The hook is cleared
/// again when the overlay window is destroyed.
///
/// ```no_run
/// use glasspane_core::{Gui, OverlayOptions, PlatformResult, Surface, run_overlay};
/// use glasspane_windows::{Win32Platform, clear_message_hook, set_message_hook};
///
/// struct Hud;
///
/// impl Gui<Win32Platform> for Hud {
///     type DrawData = ();
///
///     fn init(&mut self, surface: &Surface<Win32Platform>) -> PlatformResult<()> {
///         // Build the GUI context and its DX11 backend from
///         // `surface.device()` and `surface.context()`.
///         let _ = surface.feature_level();
///         set_message_hook(Box::new(|_hwnd, _msg, _wparam, _lparam| false));
///         Ok(())
///     }
///
///     fn begin_frame(&mut self, _surface: &Surface<Win32Platform>) {}
///
///     fn end_frame(&mut self) {}
///
///     fn submit(&mut self, _surface: &Surface<Win32Platform>, _draw_data: ()) {}
///
///     fn shutdown(&mut self) {
///         clear_message_hook();
///     }
/// }
///
/// let platform = Win32Platform::current()?;
/// run_overlay(platform, Hud, OverlayOptions::new("HUD"), || {})?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn set_message_hook(hook: MessageHook) {
    MESSAGE_HOOK.with(|cell| *cell.borrow_mut() = Some(hook));
}

/// Removes the GUI message hook from the current thread.
pub fn clear_message_hook() {
    MESSAGE_HOOK.with(|cell| *cell.borrow_mut() = None);
}

/// Offers a message to the hook. A hook that re-enters the window
/// procedure (e.g. via `SendMessageW`) sees the nested message skipped.
pub(crate) fn offer_to_hook(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> bool {
    MESSAGE_HOOK.with(|cell| match cell.try_borrow_mut() {
        Ok(mut hook) => hook
            .as_mut()
            .is_some_and(|handle| handle(hwnd, msg, wparam, lparam)),
        Err(_) => false,
    })
}

/// WNDPROC for the overlay window class.
pub(crate) unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if offer_to_hook(hwnd, msg, wparam, lparam) {
        return LRESULT(0);
    }

    if msg == WM_DESTROY {
        unsafe { PostQuitMessage(0) };
        return LRESULT(0);
    }

    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}
