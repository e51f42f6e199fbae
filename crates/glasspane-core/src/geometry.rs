/// A rectangle in screen or client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its four edges, the way Win32 `RECT` stores it.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// A point in screen or client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Width and height in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the size as unsigned swapchain dimensions, clamping negatives to zero.
    pub fn to_u32(self) -> (u32, u32) {
        (self.width.max(0) as u32, self.height.max(0) as u32)
    }
}

/// Insets of the DWM composition frame extended into the client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    /// Computes frame margins from the window geometry.
    ///
    /// `window` is the window rectangle in screen coordinates, `client` the
    /// client rectangle in client coordinates, and `client_origin` the
    /// client area's top-left corner converted to screen coordinates. For a
    /// borderless popup the result covers the whole client area, so the
    /// compositor treats all of it as glass.
    pub fn from_geometry(window: Rect, client: Rect, client_origin: Point) -> Self {
        Self {
            left: window.x + (client_origin.x - window.x),
            top: window.y + (client_origin.y - window.y),
            right: client.right(),
            bottom: client.bottom(),
        }
    }
}
