//! The built-in 8x8 bitmap font.
//!
//! Glyphs are column-major: each of the 8 bytes is one column of pixels, left
//! to right, with bit 0 as the top row and bit 7 as the bottom row. This
//! matches the page layout of the display RAM, so a glyph drawn at a
//! page-aligned row is a straight copy of its columns.

/// Width of every glyph in pixels.
pub const GLYPH_WIDTH: usize = 8;
/// Height of every glyph in pixels.
pub const GLYPH_HEIGHT: usize = 8;

/// Look up the glyph for a character.
///
/// Letters are case-folded to uppercase. Characters without a glyph (anything
/// outside A-Z, 0-9, space, and `. , % - : ; ! ? / ( ) + = _`) resolve to the
/// space glyph rather than an error.
pub fn glyph(ch: char) -> &'static [u8; GLYPH_WIDTH] {
    &GLYPHS[index_of(ch)]
}

fn index_of(ch: char) -> usize {
    match ch {
        'A'..='Z' => ch as usize - 'A' as usize + 1,
        'a'..='z' => ch as usize - 'a' as usize + 1,
        '0'..='9' => ch as usize - '0' as usize + 27,
        '.' => 37,
        ',' => 38,
        '%' => 39,
        '-' => 40,
        ':' => 41,
        ';' => 42,
        '!' => 43,
        '?' => 44,
        '/' => 45,
        '(' => 46,
        ')' => 47,
        '+' => 48,
        '=' => 49,
        '_' => 50,
        _ => 0,
    }
}

#[cfg_attr(rustfmt, rustfmt_skip)]
const GLYPHS: [[u8; GLYPH_WIDTH]; 51] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x7C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x7C, 0x00], // A
    [0x7F, 0x49, 0x49, 0x49, 0x49, 0x49, 0x36, 0x00], // B
    [0x3E, 0x41, 0x41, 0x41, 0x41, 0x41, 0x22, 0x00], // C
    [0x7F, 0x41, 0x41, 0x41, 0x41, 0x41, 0x3E, 0x00], // D
    [0x7F, 0x49, 0x49, 0x49, 0x49, 0x49, 0x41, 0x00], // E
    [0x7F, 0x09, 0x09, 0x09, 0x09, 0x09, 0x01, 0x00], // F
    [0x3E, 0x41, 0x41, 0x49, 0x49, 0x49, 0x3A, 0x00], // G
    [0x7F, 0x08, 0x08, 0x08, 0x08, 0x08, 0x7F, 0x00], // H
    [0x41, 0x41, 0x41, 0x7F, 0x41, 0x41, 0x41, 0x00], // I
    [0x20, 0x40, 0x40, 0x40, 0x40, 0x40, 0x3F, 0x00], // J
    [0x7F, 0x08, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00], // L
    [0x7F, 0x02, 0x04, 0x08, 0x04, 0x02, 0x7F, 0x00], // M
    [0x7F, 0x02, 0x04, 0x08, 0x10, 0x20, 0x7F, 0x00], // N
    [0x3E, 0x41, 0x41, 0x41, 0x41, 0x41, 0x3E, 0x00], // O
    [0x7F, 0x09, 0x09, 0x09, 0x09, 0x09, 0x06, 0x00], // P
    [0x3E, 0x41, 0x41, 0x51, 0x21, 0x41, 0x5E, 0x00], // Q
    [0x7F, 0x09, 0x09, 0x19, 0x29, 0x49, 0x06, 0x00], // R
    [0x26, 0x49, 0x49, 0x49, 0x49, 0x49, 0x32, 0x00], // S
    [0x01, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x01, 0x00], // T
    [0x3F, 0x40, 0x40, 0x40, 0x40, 0x40, 0x3F, 0x00], // U
    [0x0F, 0x10, 0x20, 0x40, 0x20, 0x10, 0x0F, 0x00], // V
    [0x3F, 0x40, 0x20, 0x18, 0x20, 0x40, 0x3F, 0x00], // W
    [0x41, 0x22, 0x14, 0x08, 0x14, 0x22, 0x41, 0x00], // X
    [0x07, 0x08, 0x10, 0x60, 0x10, 0x08, 0x07, 0x00], // Y
    [0x41, 0x61, 0x51, 0x49, 0x45, 0x43, 0x41, 0x00], // Z
    [0x3E, 0x51, 0x49, 0x45, 0x43, 0x41, 0x3E, 0x00], // 0 (slashed)
    [0x00, 0x42, 0x42, 0x7F, 0x40, 0x40, 0x00, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x45, 0x43, 0x42, 0x00], // 2
    [0x22, 0x41, 0x49, 0x49, 0x49, 0x49, 0x36, 0x00], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10, 0x10, 0x10, 0x00], // 4
    [0x27, 0x45, 0x45, 0x45, 0x45, 0x45, 0x39, 0x00], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x49, 0x49, 0x30, 0x00], // 6
    [0x01, 0x01, 0x71, 0x09, 0x05, 0x03, 0x01, 0x00], // 7
    [0x36, 0x49, 0x49, 0x49, 0x49, 0x49, 0x36, 0x00], // 8
    [0x06, 0x49, 0x49, 0x49, 0x49, 0x29, 0x1E, 0x00], // 9
    [0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00], // .
    [0x00, 0x00, 0x00, 0xA0, 0x60, 0x00, 0x00, 0x00], // ,
    [0x23, 0x13, 0x08, 0x64, 0x62, 0x36, 0x49, 0x00], // %
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00], // -
    [0x00, 0x00, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00], // :
    [0x00, 0x00, 0x56, 0x36, 0x00, 0x00, 0x00, 0x00], // ;
    [0x00, 0x00, 0x5F, 0x00, 0x00, 0x00, 0x00, 0x00], // !
    [0x02, 0x01, 0x51, 0x09, 0x06, 0x00, 0x00, 0x00], // ?
    [0x20, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // /
    [0x00, 0x1C, 0x22, 0x41, 0x00, 0x00, 0x00, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00, 0x00, 0x00, 0x00], // )
    [0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, 0x00, 0x00], // +
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x00, 0x00, 0x00], // =
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00], // _
];
