//! The shared command set of the SSD1306 and SH1106 display controllers.
//!
//! Note 1: Multi-byte commands travel as consecutive command bytes on this
//! controller family (every argument byte is itself command-discriminated on
//! the bus), so `Command::send` frames everything through
//! `DisplayInterface::send_commands`.
//!
//! Note 2: Argument values are masked to the width of the register field they
//! land in, so building a command cannot fail; the drawing layer never
//! produces out-of-range values in the first place.
//!
//! Note 3: The two controllers overlap on most of the set. Where a command
//! exists on only one family its documentation says so; sending it to the
//! other chip is a hardware no-op.

use crate::interface::DisplayInterface;

pub mod consts {
    //! Panel geometry and protocol constants shared across the crate.

    /// Number of pixel columns on the panel.
    pub const NUM_PIXEL_COLS: usize = 128;
    /// Number of pixel rows on the panel.
    pub const NUM_PIXEL_ROWS: usize = 64;
    /// Pixel rows covered by one page of display RAM.
    pub const PAGE_HEIGHT: usize = 8;
    /// Number of RAM pages.
    pub const NUM_PAGES: usize = NUM_PIXEL_ROWS / PAGE_HEIGHT;
    /// Bytes in one full frame.
    pub const BUF_LEN: usize = NUM_PAGES * NUM_PIXEL_COLS;
    /// Highest addressable pixel column.
    pub const PIXEL_COL_MAX: u8 = (NUM_PIXEL_COLS - 1) as u8;
    /// Highest addressable page.
    pub const PAGE_MAX: u8 = (NUM_PAGES - 1) as u8;
    /// RAM column where a 128-column module starts on the SH1106. The chip
    /// drives 132 RAM columns and modules wire the panel to the center, so
    /// every visible column sits this far right of RAM column 0.
    pub const SH1106_COL_OFFSET: u8 = 2;
    /// The usual display address on the I2C bus.
    pub const I2C_ADDR: u8 = 0x3C;
}

/// The RAM address increment order applied while data is written.
#[derive(Clone, Copy)]
pub enum AddressMode {
    /// Column advances first, wrapping into the next page: one data block can
    /// cover several pages. The mode the linear render path relies on.
    /// SSD1306 only; the SH1106 always behaves like `Page`.
    Horizontal,
    /// Page advances first, wrapping into the next column. SSD1306 only.
    Vertical,
    /// Column advances and wraps within the current page; the page is set
    /// separately with `SetPageStart`.
    Page,
}

/// Direction of hardware horizontal scrolling. SSD1306 only.
#[derive(Clone, Copy)]
pub enum ScrollDirection {
    Right,
    Left,
}

#[derive(Clone, Copy)]
pub enum Command {
    /// Set the low nibble of the column address pointer used in page
    /// addressing. The argument is the nibble value.
    SetColumnStartLow(u8),
    /// Set the high nibble of the column address pointer used in page
    /// addressing. The argument is the nibble value.
    SetColumnStartHigh(u8),
    /// Set the RAM address increment order. See `AddressMode`. SSD1306 only.
    SetMemoryMode(AddressMode),
    /// Set the column window `(start, end)` for linear addressing, resetting
    /// the column pointer to `start`. Range is 0-127. SSD1306 only.
    SetColumnAddress(u8, u8),
    /// Set the page window `(start, end)` for linear addressing, resetting
    /// the page pointer to `start`. Range is 0-7. SSD1306 only.
    SetPageAddress(u8, u8),
    /// Configure continuous horizontal scrolling of pages `start` through
    /// `end` with the given frame interval code, without starting it.
    /// Scrolling must be off while this is sent. SSD1306 only.
    SetupHorizontalScroll(ScrollDirection, u8, u8, u8),
    /// Start or stop the configured scroll. Stopping corrupts RAM on real
    /// modules unless the frame is rewritten afterwards. SSD1306 only.
    EnableScroll(bool),
    /// Set the charge pump output voltage step, 0-3. SH1106 only.
    SetPumpVoltage(u8),
    /// Set which RAM row drives the top line of the panel, 0-63.
    SetStartLine(u8),
    /// Set the output current level for all segments, 0-255.
    SetContrast(u8),
    /// Enable the internal charge pump; required on modules without an
    /// external panel supply. Takes effect at the next display-on. SSD1306
    /// only.
    SetChargePump(bool),
    /// Map segment outputs right-to-left instead of left-to-right, flipping
    /// the image horizontally. Module-mounting dependent.
    SetSegmentRemap(bool),
    /// Light the whole panel regardless of RAM contents (`true`) or resume
    /// showing RAM (`false`).
    SetEntireOn(bool),
    /// Show RAM inverted: zero bits lit, one bits dark.
    SetInvert(bool),
    /// Set the multiplex ratio to this number of active rows, 1-64.
    SetMuxRatio(u8),
    /// Wake the panel (`true`) or put it in sleep mode (`false`). Sleep
    /// retains RAM contents.
    SetDisplayOn(bool),
    /// Set the page the column pointer works in for page addressing, 0-7.
    SetPageStart(u8),
    /// Scan COM outputs in descending order, flipping the image vertically.
    /// Module-mounting dependent.
    SetComScanDescending(bool),
    /// Shift the mapping of RAM rows onto COM lines by 0-63 lines.
    SetDisplayOffset(u8),
    /// Set the oscillator frequency code (0-15) and display clock divide
    /// ratio minus one (0-15).
    SetClockFoscDivset(u8, u8),
    /// Set the discharge (phase 1) and precharge (phase 2) period lengths in
    /// clocks, each 0-15.
    SetPrechargePeriods(u8, u8),
    /// Set the COM pin wiring: alternative (interleaved) row order, and
    /// left/right remap. `(true, false)` suits 128x64 modules, `(false,
    /// false)` 128x32 ones.
    SetComPinConfig(bool, bool),
    /// Set the VCOM deselect level register. The level encoding differs
    /// between the two controller families, so the raw register byte is
    /// taken verbatim.
    SetVcomDeselect(u8),
}

macro_rules! cmd_bytes {
    ($buf:ident, [$($b:expr),*]) => {{
        let mut len = 0;
        $(
            $buf[len] = $b;
            len += 1;
        )*
        &$buf[..len]
    }};
}

impl Command {
    /// Transmit this command and its argument bytes.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 7];
        let cmds: &[u8] = match self {
            Command::SetColumnStartLow(nibble) => cmd_bytes!(arg_buf, [nibble & 0x0F]),
            Command::SetColumnStartHigh(nibble) => cmd_bytes!(arg_buf, [0x10 | (nibble & 0x0F)]),
            Command::SetMemoryMode(mode) => {
                let m = match mode {
                    AddressMode::Horizontal => 0x00,
                    AddressMode::Vertical => 0x01,
                    AddressMode::Page => 0x02,
                };
                cmd_bytes!(arg_buf, [0x20, m])
            }
            Command::SetColumnAddress(start, end) => {
                cmd_bytes!(arg_buf, [0x21, start & 0x7F, end & 0x7F])
            }
            Command::SetPageAddress(start, end) => {
                cmd_bytes!(arg_buf, [0x22, start & 0x07, end & 0x07])
            }
            Command::SetupHorizontalScroll(direction, start_page, end_page, interval) => {
                let d = match direction {
                    ScrollDirection::Right => 0x26,
                    ScrollDirection::Left => 0x27,
                };
                cmd_bytes!(
                    arg_buf,
                    [
                        d,
                        0x00,
                        start_page & 0x07,
                        interval & 0x07,
                        end_page & 0x07,
                        0x00,
                        0xFF
                    ]
                )
            }
            Command::EnableScroll(ena) => cmd_bytes!(
                arg_buf,
                [match ena {
                    true => 0x2F,
                    false => 0x2E,
                }]
            ),
            Command::SetPumpVoltage(step) => cmd_bytes!(arg_buf, [0x30 | (step & 0x03)]),
            Command::SetStartLine(line) => cmd_bytes!(arg_buf, [0x40 | (line & 0x3F)]),
            Command::SetContrast(contrast) => cmd_bytes!(arg_buf, [0x81, contrast]),
            Command::SetChargePump(ena) => cmd_bytes!(
                arg_buf,
                [
                    0x8D,
                    match ena {
                        true => 0x14,
                        false => 0x10,
                    }
                ]
            ),
            Command::SetSegmentRemap(remap) => cmd_bytes!(
                arg_buf,
                [match remap {
                    true => 0xA1,
                    false => 0xA0,
                }]
            ),
            Command::SetEntireOn(force) => cmd_bytes!(
                arg_buf,
                [match force {
                    true => 0xA5,
                    false => 0xA4,
                }]
            ),
            Command::SetInvert(inv) => cmd_bytes!(
                arg_buf,
                [match inv {
                    true => 0xA7,
                    false => 0xA6,
                }]
            ),
            Command::SetMuxRatio(rows) => {
                cmd_bytes!(arg_buf, [0xA8, rows.saturating_sub(1) & 0x3F])
            }
            Command::SetDisplayOn(on) => cmd_bytes!(
                arg_buf,
                [match on {
                    true => 0xAF,
                    false => 0xAE,
                }]
            ),
            Command::SetPageStart(page) => cmd_bytes!(arg_buf, [0xB0 | (page & 0x07)]),
            Command::SetComScanDescending(descending) => cmd_bytes!(
                arg_buf,
                [match descending {
                    true => 0xC8,
                    false => 0xC0,
                }]
            ),
            Command::SetDisplayOffset(lines) => cmd_bytes!(arg_buf, [0xD3, lines & 0x3F]),
            Command::SetClockFoscDivset(fosc, divset) => {
                cmd_bytes!(arg_buf, [0xD5, (fosc & 0x0F) << 4 | (divset & 0x0F)])
            }
            Command::SetPrechargePeriods(phase1, phase2) => {
                cmd_bytes!(arg_buf, [0xD9, (phase2 & 0x0F) << 4 | (phase1 & 0x0F)])
            }
            Command::SetComPinConfig(alternative, remap_lr) => {
                let alt = match alternative {
                    true => 0x10,
                    false => 0x00,
                };
                let rl = match remap_lr {
                    true => 0x20,
                    false => 0x00,
                };
                cmd_bytes!(arg_buf, [0xDA, 0x02 | alt | rl])
            }
            Command::SetVcomDeselect(level) => cmd_bytes!(arg_buf, [0xDB, level]),
        };
        iface.send_commands(cmds)
    }
}
