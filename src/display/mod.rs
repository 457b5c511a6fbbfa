//! The main API to the display driver. It provides a builder API to configure the display, and
//! methods for moving `FrameBuffer` contents onto the panel over a `DisplayInterface`.

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
pub mod testing {
    macro_rules! send {
        ([$($d:tt),*]) => {Sent::Data(vec![$($d,)*])};
        ($c:tt) => {Sent::Cmd($c)};
    }
    macro_rules! sends {
        ($($e:tt),*) => {&[$(send!($e),)*]};
    }
}

pub mod area;

use itertools::iproduct;

use crate::command::consts::*;
use crate::command::{AddressMode, Command, ScrollDirection};
use crate::config::Config;
use crate::display::area::RenderArea;
use crate::framebuf::FrameBuffer;
use crate::interface::DisplayInterface;

/// The controller variant driving the panel. Both chips share the command set, the RAM layout,
/// and the buffer addressing; they differ in how a render positions the RAM pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    /// Linear addressing: one column/page window, then a single data block for the whole area.
    Ssd1306,
    /// Page addressing with a RAM column offset: every page of an area is positioned and
    /// streamed separately.
    Sh1106,
}

/// The lifecycle state of a display handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// No bring-up sequence has completed. The panel register file is in an unknown state and
    /// the handle refuses to drive it.
    Uninitialized,
    /// A bring-up sequence started and has not completed. A handle stuck here had `init` fail
    /// partway through.
    Initializing,
    /// The panel is configured and accepting renders.
    Ready,
}

/// A driver for an SSD1306 or SH1106 display.
///
/// Drawing happens in a caller-owned `FrameBuffer`; the driver only moves buffer contents over
/// the wire. Every wire operation on a handle that is not `Ready` is a silent no-op, so a stale
/// handle cannot disturb a deinitialized bus.
pub struct Display<DI>
where
    DI: DisplayInterface,
{
    iface: DI,
    kind: Controller,
    state: State,
}

impl<DI> Display<DI>
where
    DI: DisplayInterface,
{
    /// Construct a new display driver for a `kind` controller connected at `iface`.
    ///
    /// The handle starts `Uninitialized`; nothing touches the bus until `init`. These modules
    /// need their power-up settle time (around 100ms from reset) before bring-up will take, and
    /// the wait is left to the caller since this driver owns no clock.
    pub fn new(iface: DI, kind: Controller) -> Self {
        Display {
            iface,
            kind,
            state: State::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Tear down the handle and give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }

    /// Initialize the display with a config message.
    ///
    /// Runs the full bring-up sequence and leaves the panel on, showing whatever is in its RAM
    /// until the first `render`. May be run again on a live display to re-apply bring-up from
    /// scratch. On a transport error the handle is left `Initializing` and refuses renders
    /// until an `init` succeeds.
    pub fn init(&mut self, config: Config) -> Result<(), DI::Error> {
        self.state = State::Initializing;
        Command::SetDisplayOn(false).send(&mut self.iface)?;
        config
            .clock_fosc_divset_cmd
            .unwrap_or(Command::SetClockFoscDivset(8, 0))
            .send(&mut self.iface)?;
        Command::SetMuxRatio(NUM_PIXEL_ROWS as u8).send(&mut self.iface)?;
        config
            .display_offset_cmd
            .unwrap_or(Command::SetDisplayOffset(0))
            .send(&mut self.iface)?;
        Command::SetStartLine(0).send(&mut self.iface)?;
        config
            .charge_pump_cmd
            .unwrap_or(Command::SetChargePump(true))
            .send(&mut self.iface)?;
        Command::SetMemoryMode(AddressMode::Horizontal).send(&mut self.iface)?;
        config
            .segment_remap_cmd
            .unwrap_or(Command::SetSegmentRemap(true))
            .send(&mut self.iface)?;
        config
            .com_scan_descending_cmd
            .unwrap_or(Command::SetComScanDescending(true))
            .send(&mut self.iface)?;
        config
            .com_pin_config_cmd
            .unwrap_or(Command::SetComPinConfig(true, false))
            .send(&mut self.iface)?;
        config
            .contrast_cmd
            .unwrap_or(Command::SetContrast(0xFF))
            .send(&mut self.iface)?;
        config
            .precharge_periods_cmd
            .unwrap_or(Command::SetPrechargePeriods(1, 15))
            .send(&mut self.iface)?;
        config
            .vcom_deselect_cmd
            .unwrap_or(Command::SetVcomDeselect(match self.kind {
                Controller::Ssd1306 => 0x30,
                Controller::Sh1106 => 0x40,
            }))
            .send(&mut self.iface)?;
        Command::SetEntireOn(false).send(&mut self.iface)?;
        config
            .invert_cmd
            .unwrap_or(Command::SetInvert(false))
            .send(&mut self.iface)?;
        match self.kind {
            // RAM writes corrupt while the scroll engine runs, so make sure it is stopped.
            Controller::Ssd1306 => Command::EnableScroll(false).send(&mut self.iface)?,
            Controller::Sh1106 => config
                .pump_voltage_cmd
                .unwrap_or(Command::SetPumpVoltage(0))
                .send(&mut self.iface)?,
        }
        Command::SetDisplayOn(true).send(&mut self.iface)?;
        self.state = State::Ready;
        Ok(())
    }

    /// Shut the display down and electrically safe the transport.
    ///
    /// In order: display-off, an all-zero frame so RAM holds no image, then `shutdown` on the
    /// interface so the bus lines cannot backfeed a power-gated panel. The order is load
    /// bearing and the handle returns to `Uninitialized`; a second `deinit` is a no-op.
    pub fn deinit(&mut self) -> Result<(), DI::Error> {
        if self.state != State::Ready {
            return Ok(());
        }
        Command::SetDisplayOn(false).send(&mut self.iface)?;
        self.iface.send_data(&[0x00; BUF_LEN])?;
        self.iface.shutdown()?;
        self.state = State::Uninitialized;
        Ok(())
    }

    /// Wake the panel or put it to sleep without touching RAM contents or addressing state.
    ///
    /// Sleep retains the image; waking redisplays it. No-op unless the display is `Ready`.
    pub fn display_on(&mut self, on: bool) -> Result<(), DI::Error> {
        if self.state != State::Ready {
            return Ok(());
        }
        Command::SetDisplayOn(on).send(&mut self.iface)
    }

    /// Control the display contrast. No-op unless the display is `Ready`.
    pub fn contrast(&mut self, contrast: u8) -> Result<(), DI::Error> {
        if self.state != State::Ready {
            return Ok(());
        }
        Command::SetContrast(contrast).send(&mut self.iface)
    }

    /// Show the frame inverted: zero bits lit, one bits dark. No-op unless the display is
    /// `Ready`.
    pub fn invert(&mut self, invert: bool) -> Result<(), DI::Error> {
        if self.state != State::Ready {
            return Ok(());
        }
        Command::SetInvert(invert).send(&mut self.iface)
    }

    /// Start or stop continuous horizontal scrolling of the whole frame.
    ///
    /// Stopping leaves RAM corrupted on real modules; render again afterwards to restore the
    /// image. The SH1106 has no scroll engine and ignores these commands. No-op unless the
    /// display is `Ready`.
    pub fn scroll(&mut self, on: bool) -> Result<(), DI::Error> {
        if self.state != State::Ready {
            return Ok(());
        }
        Command::SetupHorizontalScroll(ScrollDirection::Right, 0, PAGE_MAX, 0)
            .send(&mut self.iface)?;
        Command::EnableScroll(on).send(&mut self.iface)
    }

    /// Stream the part of `fb` covered by `area` to the matching window of panel RAM, sending
    /// exactly `area.buffer_len()` data bytes.
    ///
    /// On the SSD1306 the area travels as one column/page window followed by a single data
    /// block. The SH1106 has no window addressing, so each page of the area is positioned and
    /// streamed on its own, with the RAM column offset of that chip applied on the wire;
    /// callers never see the offset. No-op unless the display is `Ready`.
    pub fn render(&mut self, fb: &FrameBuffer, area: &RenderArea) -> Result<(), DI::Error> {
        if self.state != State::Ready {
            return Ok(());
        }
        match self.kind {
            Controller::Ssd1306 => {
                Command::SetColumnAddress(area.start_col(), area.end_col())
                    .send(&mut self.iface)?;
                Command::SetPageAddress(area.start_page(), area.end_page())
                    .send(&mut self.iface)?;
                if area.start_col() == 0 && area.end_col() == PIXEL_COL_MAX {
                    // Full-width areas are contiguous in the buffer, so stream them in place.
                    let from = area.start_page() as usize * NUM_PIXEL_COLS;
                    self.iface
                        .send_data(&fb.as_bytes()[from..from + area.buffer_len()])
                } else {
                    let mut flat = [0u8; BUF_LEN];
                    let mut len = 0;
                    for (page, col) in iproduct!(area.pages(), area.cols()) {
                        flat[len] = fb.as_bytes()[page * NUM_PIXEL_COLS + col];
                        len += 1;
                    }
                    self.iface.send_data(&flat[..len])
                }
            }
            Controller::Sh1106 => {
                let col = area.start_col() + SH1106_COL_OFFSET;
                for page in area.pages() {
                    Command::SetPageStart(page as u8).send(&mut self.iface)?;
                    Command::SetColumnStartLow(col & 0x0F).send(&mut self.iface)?;
                    Command::SetColumnStartHigh(col >> 4).send(&mut self.iface)?;
                    let row = page * NUM_PIXEL_COLS;
                    self.iface.send_data(
                        &fb.as_bytes()[row + area.start_col() as usize..=row + area.end_col() as usize],
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Stream the whole frame to the display.
    pub fn flush(&mut self, fb: &FrameBuffer) -> Result<(), DI::Error> {
        self.render(fb, &RenderArea::full())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn init_defaults() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Controller::Ssd1306);
        assert_eq!(disp.state(), State::Uninitialized);
        disp.init(Config::new()).unwrap();
        assert_eq!(disp.state(), State::Ready);
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xAE,       // display off
            0xD5, 0x80, // clock divide
            0xA8, 0x3F, // mux ratio 64 lines
            0xD3, 0x00, // display offset 0
            0x40,       // start line 0
            0x8D, 0x14, // charge pump on
            0x20, 0x00, // horizontal addressing
            0xA1,       // segment remap
            0xC8,       // COM scan descending
            0xDA, 0x12, // COM pins alternative
            0x81, 0xFF, // contrast
            0xD9, 0xF1, // precharge periods
            0xDB, 0x30, // vcom deselect 0.83 Vcc
            0xA4,       // resume to RAM
            0xA6,       // not inverted
            0x2E,       // scroll off
            0xAF        // display on
        ));
    }

    #[test]
    fn init_defaults_sh1106() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Controller::Sh1106);
        disp.init(Config::new()).unwrap();
        assert_eq!(disp.state(), State::Ready);
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xAE,       // display off
            0xD5, 0x80, // clock divide
            0xA8, 0x3F, // mux ratio 64 lines
            0xD3, 0x00, // display offset 0
            0x40,       // start line 0
            0x8D, 0x14, // charge pump on
            0x20, 0x00, // horizontal addressing
            0xA1,       // segment remap
            0xC8,       // COM scan descending
            0xDA, 0x12, // COM pins alternative
            0x81, 0xFF, // contrast
            0xD9, 0xF1, // precharge periods
            0xDB, 0x40, // vcom deselect 0.77 Vcc
            0xA4,       // resume to RAM
            0xA6,       // not inverted
            0x30,       // pump voltage 7.4V
            0xAF        // display on
        ));
    }

    #[test]
    fn init_many_options() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Controller::Ssd1306);
        let cfg = Config::new()
            .clock_fosc_divset(0xF, 1)
            .display_offset(4)
            .charge_pump(false)
            .segment_remap(false)
            .com_scan_descending(false)
            .com_pin_config(false, false)
            .contrast(0x7F)
            .precharge_periods(2, 2)
            .vcom_deselect(0x20)
            .invert(true);
        disp.init(cfg).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xAE,       // display off
            0xD5, 0xF1, // clock divide
            0xA8, 0x3F, // mux ratio 64 lines
            0xD3, 0x04, // display offset 4
            0x40,       // start line 0
            0x8D, 0x10, // charge pump off
            0x20, 0x00, // horizontal addressing
            0xA0,       // segment remap off
            0xC0,       // COM scan ascending
            0xDA, 0x02, // COM pins sequential
            0x81, 0x7F, // contrast
            0xD9, 0x22, // precharge periods
            0xDB, 0x20, // vcom deselect
            0xA4,       // resume to RAM
            0xA7,       // inverted
            0x2E,       // scroll off
            0xAF        // display on
        ));
    }

    #[test]
    fn init_sh1106_pump_voltage() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Controller::Sh1106);
        disp.init(Config::new().pump_voltage(2)).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xAE,       // display off
            0xD5, 0x80, // clock divide
            0xA8, 0x3F, // mux ratio 64 lines
            0xD3, 0x00, // display offset 0
            0x40,       // start line 0
            0x8D, 0x14, // charge pump on
            0x20, 0x00, // horizontal addressing
            0xA1,       // segment remap
            0xC8,       // COM scan descending
            0xDA, 0x12, // COM pins alternative
            0x81, 0xFF, // contrast
            0xD9, 0xF1, // precharge periods
            0xDB, 0x40, // vcom deselect 0.77 Vcc
            0xA4,       // resume to RAM
            0xA6,       // not inverted
            0x32,       // pump voltage 8.0V
            0xAF        // display on
        ));
    }

    fn ready_display(di: &TestSpyInterface, kind: Controller) -> Display<TestSpyInterface> {
        let mut disp = Display::new(di.split(), kind);
        disp.init(Config::new()).unwrap();
        di.clear();
        disp
    }

    #[test]
    fn render_full_screen() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        let mut fb = FrameBuffer::new();
        fb.write_string(0, 0, "3.7V");
        disp.render(&fb, &RenderArea::full()).unwrap();

        // One window, one block; the first 32 columns of page 0 carry the glyphs and nothing
        // else in the frame is touched.
        let mut body = [0u8; BUF_LEN];
        body[0..8].copy_from_slice(font::glyph('3'));
        body[8..16].copy_from_slice(font::glyph('.'));
        body[16..24].copy_from_slice(font::glyph('7'));
        body[24..32].copy_from_slice(font::glyph('V'));
        let expect = [
            Sent::Cmd(0x21),
            Sent::Cmd(0),
            Sent::Cmd(127),
            Sent::Cmd(0x22),
            Sent::Cmd(0),
            Sent::Cmd(7),
            Sent::Data(body.to_vec()),
        ];
        di.check_multi(&expect);
    }

    #[test]
    fn render_partial_area() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        let mut fb = FrameBuffer::new();
        fb.set_pixel(4, 16, true);
        fb.set_pixel(5, 25, true);
        disp.render(&fb, &RenderArea::new(4, 5, 2, 3)).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x21, 4, 5, // column window
            0x22, 2, 3, // page window
            [0x01, 0x00, 0x00, 0x02] // page 2 then page 3, columns 4 then 5
        ));
    }

    #[test]
    fn render_full_width_band() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 16, true);
        fb.set_pixel(127, 31, true);
        disp.render(&fb, &RenderArea::new(0, 127, 2, 3)).unwrap();
        let expect = [
            Sent::Cmd(0x21),
            Sent::Cmd(0),
            Sent::Cmd(127),
            Sent::Cmd(0x22),
            Sent::Cmd(2),
            Sent::Cmd(3),
            Sent::Data(fb.as_bytes()[256..512].to_vec()),
        ];
        di.check_multi(&expect);
    }

    #[test]
    fn render_sh1106_full_screen() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Sh1106);

        let mut fb = FrameBuffer::new();
        fb.write_centered(28, "HELLO");
        disp.render(&fb, &RenderArea::full()).unwrap();

        // Logical column zero goes on the wire as the chip's RAM offset.
        let mut expect = Vec::new();
        for page in 0..NUM_PAGES {
            expect.push(Sent::Cmd(0xB0 + page as u8));
            expect.push(Sent::Cmd(0x02));
            expect.push(Sent::Cmd(0x10));
            expect.push(Sent::Data(
                fb.as_bytes()[page * NUM_PIXEL_COLS..(page + 1) * NUM_PIXEL_COLS].to_vec(),
            ));
        }
        di.check_multi(&expect);
    }

    #[test]
    fn render_sh1106_partial_area() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Sh1106);

        let mut fb = FrameBuffer::new();
        fb.set_pixel(30, 48, true);
        fb.set_pixel(49, 55, true);
        disp.render(&fb, &RenderArea::new(30, 49, 6, 6)).unwrap();

        // Column 30 plus the offset is RAM column 32: low nibble 0, high nibble 2.
        let mut body = vec![0u8; 20];
        body[0] = 0x01;
        body[19] = 0x80;
        di.check_multi(&[
            Sent::Cmd(0xB6),
            Sent::Cmd(0x00),
            Sent::Cmd(0x12),
            Sent::Data(body),
        ]);
    }

    #[test]
    fn render_requires_ready() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Controller::Ssd1306);
        let fb = FrameBuffer::new();
        // Handles that are not ready swallow draws instead of erroring.
        disp.render(&fb, &RenderArea::full()).unwrap();
        disp.flush(&fb).unwrap();
        di.check_multi(&[]);
    }

    #[test]
    fn display_on_requires_ready() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Controller::Ssd1306);
        disp.display_on(true).unwrap();
        di.check_multi(&[]);

        disp.init(Config::new()).unwrap();
        di.clear();
        disp.display_on(false).unwrap();
        disp.display_on(true).unwrap();
        di.check_cmds(&[0xAE, 0xAF]);
        assert_eq!(disp.state(), State::Ready);
    }

    #[test]
    fn deinit_safety_sequence() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        disp.deinit().unwrap();
        assert_eq!(disp.state(), State::Uninitialized);
        di.check_multi(&[
            Sent::Cmd(0xAE),
            Sent::Data(vec![0u8; BUF_LEN]),
            Sent::Shutdown,
        ]);
    }

    #[test]
    fn deinit_twice_noop() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        disp.deinit().unwrap();
        di.clear();
        disp.deinit().unwrap();
        di.check_multi(&[]);

        // The dead handle refuses everything else too.
        disp.render(&FrameBuffer::new(), &RenderArea::full()).unwrap();
        disp.display_on(true).unwrap();
        di.check_multi(&[]);
    }

    #[test]
    fn contrast_and_invert() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        disp.contrast(0x40).unwrap();
        disp.invert(true).unwrap();
        disp.invert(false).unwrap();
        di.check_cmds(&[0x81, 0x40, 0xA7, 0xA6]);
    }

    #[test]
    fn scroll_whole_frame() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        disp.scroll(true).unwrap();
        di.check_cmds(&[0x26, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF, 0x2F]);
        di.clear();
        disp.scroll(false).unwrap();
        di.check_cmds(&[0x26, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF, 0x2E]);
    }

    #[test]
    fn flush_full_screen() {
        let di = TestSpyInterface::new();
        let mut disp = ready_display(&di, Controller::Ssd1306);

        let mut fb = FrameBuffer::new();
        fb.draw_line(0, 0, 127, 63, true);
        disp.flush(&fb).unwrap();
        let direct = di.sent();
        di.clear();
        disp.render(&fb, &RenderArea::full()).unwrap();
        assert_eq!(di.sent(), direct);
    }
}
