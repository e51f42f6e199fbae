use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
use windows::core::PCWSTR;

use crate::class::wide;

/// Shows a modal, ownerless error box and blocks until it is dismissed.
pub fn error_box(caption: &str, message: &str) {
    let caption = wide(caption);
    let message = wide(message);

    // SAFETY: both buffers are null-terminated and outlive the call.
    unsafe {
        MessageBoxW(
            None,
            PCWSTR(message.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}
