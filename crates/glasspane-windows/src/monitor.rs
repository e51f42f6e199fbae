use glasspane_core::{PlatformResult, Rect, Size};
use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::{GetDesktopWindow, GetWindowRect};

/// Returns the size of the desktop window.
///
/// The desktop window's right and bottom edges give the resolution of
/// the primary display; the overlay is sized to cover it.
pub fn desktop_size() -> PlatformResult<Size> {
    let mut rc = RECT::default();

    // SAFETY: the desktop window always exists.
    unsafe { GetWindowRect(GetDesktopWindow(), &mut rc)? };

    Ok(size_of_desktop(Rect::from_edges(
        rc.left, rc.top, rc.right, rc.bottom,
    )))
}

fn size_of_desktop(rect: Rect) -> Size {
    Size::new(rect.right(), rect.bottom())
}
