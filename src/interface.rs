//! The transport seam between the driver and the bus hardware.

/// A byte-oriented link to the display controller.
///
/// The controller family distinguishes command bytes from RAM data on the
/// wire; implementations own that framing. Errors of the underlying bus pass
/// through unchanged as the associated `Error` type; this crate never
/// constructs or inspects them.
pub trait DisplayInterface {
    type Error;

    /// Transmit one command byte.
    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Transmit a sequence of command bytes. Multi-byte commands travel as
    /// consecutive command bytes on this controller family, never as a data
    /// payload.
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        for &cmd in cmds {
            self.send_command(cmd)?;
        }
        Ok(())
    }

    /// Transmit a block of display RAM data.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Drive the link into an electrically safe idle state.
    ///
    /// `Display::deinit` calls this last so that a power-gated panel cannot
    /// be back-fed through the bus lines once its supply rail is switched
    /// off.
    fn shutdown(&mut self) -> Result<(), Self::Error>;
}

pub mod i2c {
    //! The I2C interface used by both supported controller families. Every
    //! bus transaction starts with a control byte selecting the command or
    //! data register of the controller.

    use embedded_hal::blocking::i2c::Write;

    use super::DisplayInterface;

    /// Control byte introducing a single command byte.
    pub const CONTROL_COMMAND: u8 = 0x80;
    /// Control byte introducing a display RAM data block.
    pub const CONTROL_DATA: u8 = 0x40;

    /// Largest data payload sent per bus transaction. The controller's RAM
    /// pointer survives transaction boundaries, so splitting a block is
    /// invisible on the panel.
    const DATA_CHUNK: usize = 16;

    pub struct I2cInterface<I2C> {
        /// The I2C master device the display is connected to.
        i2c: I2C,
        /// The display's bus address, usually `consts::I2C_ADDR`.
        addr: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: Write,
    {
        /// Create a new I2C interface to communicate with the display
        /// controller. `i2c` is an already-configured bus; `addr` is the
        /// display's address on it.
        pub fn new(i2c: I2C, addr: u8) -> Self {
            Self { i2c, addr }
        }

        /// Give back the bus.
        pub fn release(self) -> I2C {
            self.i2c
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: Write,
    {
        type Error = I2C::Error;

        fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
            self.i2c.write(self.addr, &[CONTROL_COMMAND, cmd])
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            let mut chunk = [CONTROL_DATA; DATA_CHUNK + 1];
            for piece in buf.chunks(DATA_CHUNK) {
                chunk[1..=piece.len()].copy_from_slice(piece);
                self.i2c.write(self.addr, &chunk[..=piece.len()])?;
            }
            Ok(())
        }

        /// A bare I2C bus exposes no pin control through `embedded-hal`, and
        /// its lines idle released between transactions. Platform interfaces
        /// that own their pin muxing implement the real line parking.
        fn shutdown(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}
