//! Band geometry for the container window.
//!
//! Reparented clients are stacked top-to-bottom as fixed-size horizontal
//! bands, in the order they were reparented. The slot index of a client is
//! simply how many clients were reparented before it.

/// Width of the container window in pixels.
pub const CONTAINER_WIDTH: u16 = 200;

/// Height of the container window in pixels.
pub const CONTAINER_HEIGHT: u16 = 800;

/// Size of one client band. Bands are square: 200 wide, 200 tall.
pub const BAND_SIZE: u16 = 200;

/// A rectangle representing geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Geometry of the band assigned to the client in the given slot, in the
/// container's coordinate space.
pub fn band_rect(slot: usize) -> Rect {
    Rect::new(
        0,
        slot as i32 * BAND_SIZE as i32,
        BAND_SIZE as u32,
        BAND_SIZE as u32,
    )
}
