//! Board Integration Hardware Abstraction Layer.
//!
//! Traits for the board-level facilities that surround the timer
//! peripherals: the pad/pin configuration facility, the housekeeping
//! control interface and the management status line. These are opaque
//! collaborators; the traits only name the calls the firmware
//! sequences make into them.

/// Logical function assigned to a user I/O pad.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinMode {
    /// Push-pull output driven by the user project.
    Output,
    /// High-impedance input.
    Input,
    /// Input with the internal pull-up enabled.
    InputPullUp,
}

/// Board-level I/O configuration facility.
///
/// Assigns physical pads to the peripheral outputs. Assignments are
/// staged by [`configure_pin`](BoardIo::configure_pin) and take effect
/// only once [`load_pin_config`](BoardIo::load_pin_config) commits them.
pub trait BoardIo {
    /// Error type for board I/O operations.
    type Error: core::fmt::Debug;

    /// Stage a mode assignment for one user I/O pad.
    fn configure_pin(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error>;

    /// Commit all staged pad assignments.
    fn load_pin_config(&mut self) -> Result<(), Self::Error>;

    /// Enable the user-project bus interface.
    ///
    /// Must be invoked once before any peripheral register access.
    fn enable_user_interface(&mut self) -> Result<(), Self::Error>;
}

/// Housekeeping/control-interface enabler.
pub trait Housekeeping {
    /// Error type for housekeeping operations.
    type Error: core::fmt::Debug;

    /// Enable or release the housekeeping SPI.
    ///
    /// Released before peripheral use so the pads it shares are free.
    fn enable_spi(&mut self, enable: bool) -> Result<(), Self::Error>;
}

/// General-purpose status signaling line.
///
/// A single management-controlled output used to bracket firmware
/// progress for an external observer.
pub trait StatusSignal {
    /// Error type for status line operations.
    type Error: core::fmt::Debug;

    /// Configure the line as an output.
    fn output_enable(&mut self) -> Result<(), Self::Error>;

    /// Drive the line high or low.
    fn write(&mut self, level: bool) -> Result<(), Self::Error>;

    /// Emit one high-low pulse.
    fn pulse(&mut self) -> Result<(), Self::Error> {
        self.write(true)?;
        self.write(false)
    }
}
