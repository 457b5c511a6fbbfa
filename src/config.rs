//! Defines a struct for storing register values of commands that are associated with
//! relatively-static configuration applied during display initialization.

use crate::command::Command;

/// A configuration for the display. Builder methods offer a declarative way to override any of
/// the power-up register values that `Display::init` sends. Options left unset fall back to
/// defaults that suit the common 128x64 modules, so `Config::new()` alone brings up most boards.
pub struct Config {
    pub(crate) clock_fosc_divset_cmd: Option<Command>,
    pub(crate) display_offset_cmd: Option<Command>,
    pub(crate) charge_pump_cmd: Option<Command>,
    pub(crate) segment_remap_cmd: Option<Command>,
    pub(crate) com_scan_descending_cmd: Option<Command>,
    pub(crate) com_pin_config_cmd: Option<Command>,
    pub(crate) contrast_cmd: Option<Command>,
    pub(crate) precharge_periods_cmd: Option<Command>,
    pub(crate) vcom_deselect_cmd: Option<Command>,
    pub(crate) invert_cmd: Option<Command>,
    pub(crate) pump_voltage_cmd: Option<Command>,
}

impl Config {
    /// Create a new configuration where every option defers to the driver's power-up default.
    pub fn new() -> Self {
        Config {
            clock_fosc_divset_cmd: None,
            display_offset_cmd: None,
            charge_pump_cmd: None,
            segment_remap_cmd: None,
            com_scan_descending_cmd: None,
            com_pin_config_cmd: None,
            contrast_cmd: None,
            precharge_periods_cmd: None,
            vcom_deselect_cmd: None,
            invert_cmd: None,
            pump_voltage_cmd: None,
        }
    }

    /// Extend this `Config` to explicitly configure the display clock frequency and divider. See
    /// `Command::SetClockFoscDivset`.
    pub fn clock_fosc_divset(self, fosc: u8, divset: u8) -> Self {
        Self {
            clock_fosc_divset_cmd: Some(Command::SetClockFoscDivset(fosc, divset)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM line display offset. See
    /// `Command::SetDisplayOffset`.
    pub fn display_offset(self, lines: u8) -> Self {
        Self {
            display_offset_cmd: Some(Command::SetDisplayOffset(lines)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly enable or disable the internal charge pump. Modules
    /// without an external panel supply stay dark with the pump off. See
    /// `Command::SetChargePump`.
    pub fn charge_pump(self, enable: bool) -> Self {
        Self {
            charge_pump_cmd: Some(Command::SetChargePump(enable)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure segment remapping, which mirrors the image
    /// horizontally. See `Command::SetSegmentRemap`.
    pub fn segment_remap(self, remap: bool) -> Self {
        Self {
            segment_remap_cmd: Some(Command::SetSegmentRemap(remap)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM scan direction, which mirrors the
    /// image vertically. See `Command::SetComScanDescending`.
    pub fn com_scan_descending(self, descending: bool) -> Self {
        Self {
            com_scan_descending_cmd: Some(Command::SetComScanDescending(descending)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM pin wiring. See
    /// `Command::SetComPinConfig`.
    pub fn com_pin_config(self, alternative: bool, remap_lr: bool) -> Self {
        Self {
            com_pin_config_cmd: Some(Command::SetComPinConfig(alternative, remap_lr)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure display contrast. See
    /// `Command::SetContrast`.
    pub fn contrast(self, contrast: u8) -> Self {
        Self {
            contrast_cmd: Some(Command::SetContrast(contrast)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure OLED drive precharge periods. See
    /// `Command::SetPrechargePeriods`.
    pub fn precharge_periods(self, phase1: u8, phase2: u8) -> Self {
        Self {
            precharge_periods_cmd: Some(Command::SetPrechargePeriods(phase1, phase2)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the VCOM deselect level register. The
    /// encoding differs between the two controllers, so the raw register byte is taken. See
    /// `Command::SetVcomDeselect`.
    pub fn vcom_deselect(self, level: u8) -> Self {
        Self {
            vcom_deselect_cmd: Some(Command::SetVcomDeselect(level)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly start the display inverted. See
    /// `Command::SetInvert`.
    pub fn invert(self, invert: bool) -> Self {
        Self {
            invert_cmd: Some(Command::SetInvert(invert)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the charge pump output voltage. Only the
    /// SH1106 has this register; the option is ignored on the SSD1306. See
    /// `Command::SetPumpVoltage`.
    pub fn pump_voltage(self, step: u8) -> Self {
        Self {
            pump_voltage_cmd: Some(Command::SetPumpVoltage(step)),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
