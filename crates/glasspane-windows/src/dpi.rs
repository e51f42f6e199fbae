use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without it the desktop size reported to the overlay is scaled by the
/// primary monitor's DPI, and the window would not cover the whole
/// screen on a scaled display.
///
/// Call once before the window class is registered.
pub fn enable_dpi_awareness() {
    // SAFETY: fails harmlessly if awareness is already set (e.g. by manifest).
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
