use glasspane_core::Pump;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, MSG, PM_REMOVE, PeekMessageW, TranslateMessage, WM_QUIT,
};

/// Drains every queued message for this thread without blocking.
///
/// The whole queue is dispatched even after `WM_QUIT` shows up; the quit
/// only takes effect once the drain completes.
pub(crate) fn drain_messages() -> Pump {
    let mut msg = MSG::default();
    let mut pump = Pump::Continue;

    while unsafe { PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() } {
        if msg.message == WM_QUIT {
            pump = Pump::Quit;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    pump
}
