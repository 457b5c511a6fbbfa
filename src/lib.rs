//! Driver library for the SSD1306 and SH1106 dot matrix OLED display controllers.
//!
//! Drawing happens offline in a caller-owned `FrameBuffer`; a `Display` handle then moves the
//! buffer, or any `RenderArea` rectangle of it, onto the panel over a `DisplayInterface`
//! transport. The two controller variants share everything except the render addressing, which
//! `Controller` selects at construction time.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod framebuf;
pub mod interface;

// Re-exports for primary API.
pub use crate::command::{consts, AddressMode, Command, ScrollDirection};
pub use crate::config::Config;
pub use crate::display::area::RenderArea;
pub use crate::display::{Controller, Display, State};
pub use crate::framebuf::FrameBuffer;
pub use crate::interface::i2c::I2cInterface;
pub use crate::interface::DisplayInterface;
