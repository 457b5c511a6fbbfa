//! Full example code for setting up an SH1106 display. This runs on a Raspberry Pi Pico
//! (RP2040), with a 1.3" 128x64 module on I2C0: SDA on GP16 and SCL on GP17, both with
//! external pull-ups or the module's own.
//!
//! For an SSD1306 0.96" module the wiring is the same; construct the `Display` with
//! `Controller::Ssd1306` instead.

#![no_main]
#![no_std]

use defmt_rtt as _;
use panic_probe as _;

use rp2040_hal as hal;

use hal::fugit::RateExtU32;
use hal::pac;
use oled1306 as oled;

/// Second-stage bootloader for the Pico's W25Q080 flash.
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let sio = hal::Sio::new(pac.SIO);

    // External high-speed crystal on the Pico board is 12MHz.
    let clocks = hal::clocks::init_clocks_and_plls(
        12_000_000u32,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();
    let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Set up I2C0 on GP16/GP17 at 400kHz.
    let sda_pin = pins.gpio16.reconfigure();
    let scl_pin = pins.gpio17.reconfigure();
    let i2c = hal::I2C::i2c0(
        pac.I2C0,
        sda_pin,
        scl_pin,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    // These modules need a moment from power-on before they will accept bring-up.
    delay.delay_ms(100);

    // Create the I2cInterface and Display, and run bring-up with stock settings.
    let mut disp = oled::Display::new(
        oled::I2cInterface::new(i2c, oled::consts::I2C_ADDR),
        oled::Controller::Sh1106,
    );
    disp.init(oled::Config::new()).unwrap();
    defmt::info!("display ready");

    // Compose a frame offline, then move it over in one flush.
    let mut fb = oled::FrameBuffer::new();
    fb.write_centered(0, "HELLO");
    fb.draw_line(0, 12, 127, 12, true);
    fb.write_lines(0, 20, &["BATT 3.7V", "TEMP 21C"], 12);
    disp.flush(&fb).unwrap();

    // Later updates can rewrite just the pages that changed.
    fb.write_string(0, 56, "UPTIME 0S");
    disp.render(&fb, &oled::RenderArea::new(0, 127, 7, 7)).unwrap();
    defmt::info!("frame rendered");

    loop {
        cortex_m::asm::wfi();
    }
}
