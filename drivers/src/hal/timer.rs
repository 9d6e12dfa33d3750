//! Timer Hardware Abstraction Layer.
//!
//! This module defines platform-independent traits for 32-bit
//! timer/counter peripherals.

/// Timer operating mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerMode {
    /// Counter runs a single period and stops.
    OneShot,
    /// Counter automatically reloads and keeps running.
    Periodic,
}

/// Counting direction.
///
/// The underlying hardware field is two bits wide with a fourth,
/// reserved encoding. That encoding has no variant here, so it cannot
/// be requested through this API.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Count up from zero to the reload value.
    Up,
    /// Count down from the reload value to zero.
    Down,
    /// Count up to the reload value, then back down to zero.
    UpDown,
}

/// Complete counting configuration for one timer instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Counting boundary defining the period.
    pub reload: u32,
    /// Compare-X match threshold.
    pub compare_x: u32,
    /// Compare-Y match threshold.
    pub compare_y: u32,
    /// Input clock prescale ratio.
    pub prescaler: u32,
    /// One-shot or periodic operation.
    pub mode: TimerMode,
    /// Counting direction.
    pub direction: Direction,
}

impl TimerConfig {
    /// Create a periodic, up-counting configuration with the given
    /// period and compare thresholds and no prescaling.
    pub const fn periodic_up(reload: u32, compare_x: u32, compare_y: u32) -> Self {
        Self {
            reload,
            compare_x,
            compare_y,
            prescaler: 0,
            mode: TimerMode::Periodic,
            direction: Direction::Up,
        }
    }
}

impl Default for TimerConfig {
    /// Default configuration: everything zero, one-shot, counting up.
    ///
    /// This matches the hardware state after a driver reset.
    fn default() -> Self {
        Self {
            reload: 0,
            compare_x: 0,
            compare_y: 0,
            prescaler: 0,
            mode: TimerMode::OneShot,
            direction: Direction::Up,
        }
    }
}

/// Hardware timer trait.
///
/// This trait represents one timer/counter instance. All operations are
/// plain register accesses; serializing access to a single instance is
/// the caller's responsibility.
pub trait Timer {
    /// Error type for timer operations.
    type Error: core::fmt::Debug;

    /// Reset the instance to a known inert state.
    ///
    /// Clears the control, reload, prescale, compare and PWM channel
    /// registers, disables all interrupt sources and acknowledges any
    /// pending events. Must be the first operation performed on an
    /// instance after power-up or before reconfiguration.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Write the reload value and both compare thresholds.
    ///
    /// Call before [`enable`](Timer::enable) so the configuration takes
    /// effect from the first counting period. Reconfiguring a running
    /// timer is not guaranteed safe; disable first.
    fn configure(
        &mut self,
        reload: u32,
        compare_x: u32,
        compare_y: u32,
    ) -> Result<(), Self::Error>;

    /// Start the counter.
    ///
    /// Sets the enable and start bits without disturbing the rest of
    /// the control register. Idempotent.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Halt the counter.
    ///
    /// Clears the enable and start bits without disturbing the rest of
    /// the control register. Idempotent.
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Read the live counter value.
    ///
    /// No side effects. The value may change between consecutive calls
    /// while the counter is running; disable the timer first for a
    /// stable snapshot.
    fn read(&self) -> u32;
}

/// Extension trait for timers with selectable mode, direction and
/// prescaling.
pub trait ConfigurableTimer: Timer {
    /// Select one-shot or periodic operation.
    fn set_mode(&mut self, mode: TimerMode) -> Result<(), Self::Error>;

    /// Select the counting direction.
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;

    /// Set the input clock prescale ratio.
    fn set_prescaler(&mut self, ratio: u32) -> Result<(), Self::Error>;

    /// Apply a full counting configuration in one call.
    fn apply(&mut self, config: TimerConfig) -> Result<(), Self::Error> {
        self.configure(config.reload, config.compare_x, config.compare_y)?;
        self.set_prescaler(config.prescaler)?;
        self.set_mode(config.mode)?;
        self.set_direction(config.direction)
    }
}

/// Extension trait for timers behind a clock gate.
pub trait GatedTimer: Timer {
    /// Gate or ungate the peripheral clock.
    ///
    /// The clock must be ungated before any counting use.
    fn set_clock_enable(&mut self, enable: bool) -> Result<(), Self::Error>;
}
