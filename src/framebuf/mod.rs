//! The in-memory pixel plane. All drawing happens here; the display only ever
//! sees the packed bytes at render time.
//!
//! The buffer layout is the native layout of the display RAM: one byte holds
//! 8 vertically-stacked pixels (one "page" row), so pixel `(x, y)` lives at
//! byte `(y / 8) * width + x`, bit `y % 8`. Both supported controllers share
//! this layout, which is what keeps the drawing layer controller-agnostic.

mod text;

use crate::command::consts::*;

/// A packed monochrome frame for a 128x64 panel.
///
/// The buffer is owned by the caller and passed by reference to render calls;
/// a `Display` never holds one. Drawing calls clip silently at the panel
/// edges rather than returning errors.
#[derive(Clone)]
pub struct FrameBuffer {
    buf: [u8; BUF_LEN],
}

impl FrameBuffer {
    /// Create a frame buffer with all pixels off.
    pub const fn new() -> Self {
        FrameBuffer { buf: [0; BUF_LEN] }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buf = [0x00; BUF_LEN];
    }

    /// Turn every pixel on.
    pub fn fill(&mut self) {
        self.buf = [0xFF; BUF_LEN];
    }

    /// The raw page-major bytes, in the order the render protocol streams
    /// them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Set or clear the pixel at `(x, y)`. Out-of-bounds coordinates are
    /// ignored; no neighboring byte is ever touched.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || x >= NUM_PIXEL_COLS as i32 || y < 0 || y >= NUM_PIXEL_ROWS as i32 {
            return;
        }
        let byte = (y as usize / PAGE_HEIGHT) * NUM_PIXEL_COLS + x as usize;
        let mask = 1u8 << (y as usize % PAGE_HEIGHT);
        if on {
            self.buf[byte] |= mask;
        } else {
            self.buf[byte] &= !mask;
        }
    }

    /// Read the pixel at `(x, y)` through the same page/column/bit mapping
    /// that `set_pixel` writes. Out-of-bounds coordinates read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= NUM_PIXEL_COLS as i32 || y < 0 || y >= NUM_PIXEL_ROWS as i32 {
            return false;
        }
        let byte = (y as usize / PAGE_HEIGHT) * NUM_PIXEL_COLS + x as usize;
        self.buf[byte] & (1u8 << (y as usize % PAGE_HEIGHT)) != 0
    }

    /// Draw a line from `(x0, y0)` to `(x1, y1)` with integer Bresenham.
    /// Both endpoints are drawn. Every visited point goes through
    /// `set_pixel`, so segments leaving the panel clip pixel-by-pixel instead
    /// of rejecting the whole line.
    pub fn draw_line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, on: bool) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, on);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
