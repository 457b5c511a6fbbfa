//! Text layer over the frame buffer: glyph blitting and line layout using
//! the built-in 8x8 font.

use itertools::iproduct;

use crate::command::consts::*;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::framebuf::FrameBuffer;

impl FrameBuffer {
    /// Blit one glyph with its top-left corner at `(x, y)`.
    ///
    /// Letters are case-folded and unknown characters render as the space
    /// glyph. A glyph whose 8x8 box would cross a panel edge is suppressed
    /// whole; glyphs are never partially clipped. The blit is transparent:
    /// only the glyph's lit pixels touch the buffer, so text can overlay
    /// other drawing.
    pub fn write_char(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || x > (NUM_PIXEL_COLS - GLYPH_WIDTH) as i32 {
            return;
        }
        if y < 0 || y > (NUM_PIXEL_ROWS - GLYPH_HEIGHT) as i32 {
            return;
        }
        let glyph = font::glyph(ch);
        for (col, row) in iproduct!(0..GLYPH_WIDTH, 0..GLYPH_HEIGHT) {
            if glyph[col] & (1 << row) != 0 {
                self.set_pixel(x + col as i32, y + row as i32, true);
            }
        }
    }

    /// Write a string left to right from `(x, y)`, advancing 8 pixels per
    /// character. Writing stops at the first character that would start past
    /// `width - 8`; the rest of the string is dropped, never wrapped.
    pub fn write_string(&mut self, x: i32, y: i32, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx > (NUM_PIXEL_COLS - GLYPH_WIDTH) as i32 {
                break;
            }
            self.write_char(cx, y, ch);
            cx += GLYPH_WIDTH as i32;
        }
    }

    /// Write a string horizontally centered on the panel at row `y`. Strings
    /// wider than the panel start at column 0 and clip on the right as in
    /// `write_string`.
    pub fn write_centered(&mut self, y: i32, s: &str) {
        let text_width = (s.chars().count() * GLYPH_WIDTH) as i32;
        let x = ((NUM_PIXEL_COLS as i32 - text_width) / 2).max(0);
        self.write_string(x, y, s);
    }

    /// Write several lines of text, each `spacing` pixel rows below the
    /// previous one. Stops before the first line whose row would pass
    /// `height - 8`; remaining lines are dropped.
    pub fn write_lines(&mut self, x: i32, y: i32, lines: &[&str], spacing: i32) {
        let mut cy = y;
        for line in lines {
            if cy > (NUM_PIXEL_ROWS - GLYPH_HEIGHT) as i32 {
                break;
            }
            self.write_string(x, cy, line);
            cy += spacing;
        }
    }
}
