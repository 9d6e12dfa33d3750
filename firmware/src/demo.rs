//! PWM demonstration sequence.
//!
//! The classic bring-up check: pulse the status line, configure a
//! dual-channel PWM at 25% and 75% duty, start it, pulse again. An
//! external monitor can use the two pulses to bracket the window in
//! which the outputs begin toggling.

use drivers::hal::board::StatusSignal;
use drivers::hal::pwm::Pwm;
use drivers::hal::timer::{ConfigurableTimer, Direction, GatedTimer, Timer, TimerMode};

/// Demonstration waveform period.
pub const DEMO_RELOAD: u32 = 1000;
/// Channel 0 duty threshold (25% of the period).
pub const DEMO_COMPARE_X: u32 = 250;
/// Channel 1 duty threshold (75% of the period).
pub const DEMO_COMPARE_Y: u32 = 750;

/// Bring up a free-running dual-channel PWM on one timer instance.
///
/// The timer must already be reachable (see
/// [`bringup::board_bringup`](crate::bringup::board_bringup)).
pub fn pwm_demo<T, S>(timer: &mut T, status: &mut S) -> Result<(), &'static str>
where
    T: Timer + ConfigurableTimer + GatedTimer + Pwm,
    S: StatusSignal,
{
    status.pulse().map_err(|_| "Failed to pulse status line")?;

    timer.init().map_err(|_| "Failed to reset timer")?;
    timer
        .set_clock_enable(true)
        .map_err(|_| "Failed to ungate timer clock")?;
    timer
        .set_mode(TimerMode::Periodic)
        .map_err(|_| "Failed to select periodic mode")?;
    timer
        .set_direction(Direction::Up)
        .map_err(|_| "Failed to select counting direction")?;

    timer
        .configure_pwm(DEMO_RELOAD, DEMO_COMPARE_X, DEMO_COMPARE_Y)
        .map_err(|_| "Failed to configure PWM")?;
    timer
        .enable_channels(true, true)
        .map_err(|_| "Failed to enable PWM channels")?;
    timer.enable().map_err(|_| "Failed to start timer")?;

    log::info!(
        "PWM demo running: period={} duty_x={} duty_y={}",
        DEMO_RELOAD,
        DEMO_COMPARE_X,
        DEMO_COMPARE_Y
    );

    status.pulse().map_err(|_| "Failed to pulse status line")?;

    Ok(())
}
