//! Board bring-up.
//!
//! The order mirrors what the hardware requires: quiesce the status
//! line, release the housekeeping SPI, stage and commit the pad
//! assignments, then enable the user-project interface.

use drivers::hal::board::{BoardIo, Housekeeping, PinMode, StatusSignal};

/// User I/O pads serving one timer instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinAssignment {
    /// PWM channel 0 output pad.
    pub pwm0: u8,
    /// PWM channel 1 output pad.
    pub pwm1: u8,
    /// Fault input pad (pulled up).
    pub fault: u8,
}

impl PinAssignment {
    /// Pads wired to timer instance 0.
    pub const TIMER0: Self = Self {
        pwm0: 5,
        pwm1: 6,
        fault: 7,
    };

    /// Pads wired to timer instance 1.
    pub const TIMER1: Self = Self {
        pwm0: 8,
        pwm1: 9,
        fault: 10,
    };
}

/// Run the board bring-up sequence for one timer instance.
///
/// After this returns, the peripheral registers are reachable and the
/// PWM outputs own their pads.
pub fn board_bringup<B, H, S>(
    board: &mut B,
    housekeeping: &mut H,
    status: &mut S,
    pins: PinAssignment,
) -> Result<(), &'static str>
where
    B: BoardIo,
    H: Housekeeping,
    S: StatusSignal,
{
    status
        .output_enable()
        .map_err(|_| "Failed to claim status line")?;
    status.write(false).map_err(|_| "Failed to drive status line")?;

    housekeeping
        .enable_spi(false)
        .map_err(|_| "Failed to release housekeeping SPI")?;

    board
        .configure_pin(pins.pwm0, PinMode::Output)
        .map_err(|_| "Failed to configure PWM0 pad")?;
    board
        .configure_pin(pins.pwm1, PinMode::Output)
        .map_err(|_| "Failed to configure PWM1 pad")?;
    board
        .configure_pin(pins.fault, PinMode::InputPullUp)
        .map_err(|_| "Failed to configure fault pad")?;
    board
        .load_pin_config()
        .map_err(|_| "Failed to commit pad configuration")?;

    board
        .enable_user_interface()
        .map_err(|_| "Failed to enable user interface")?;

    log::debug!(
        "board bring-up complete: pwm0=pad{} pwm1=pad{} fault=pad{}",
        pins.pwm0,
        pins.pwm1,
        pins.fault
    );

    Ok(())
}
