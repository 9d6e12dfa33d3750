//! PWM Hardware Abstraction Layer.
//!
//! This module defines platform-independent traits for PWM generation
//! derived from a timer/counter.

/// PWM output channel identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PwmChannel {
    /// Channel 0, driven by the compare-X threshold.
    Ch0,
    /// Channel 1, driven by the compare-Y threshold.
    Ch1,
}

/// Output waveform polarity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Polarity {
    /// Output is asserted high below the duty threshold.
    ActiveHigh,
    /// Inverted output.
    ActiveLow,
}

/// PWM generation trait.
///
/// The PWM outputs are a view over the timer's compare-match logic, not
/// a separate counter: the period and duty thresholds share storage
/// with the counting configuration, and the waveform only advances
/// while the timer itself is enabled. Configure the period and duty
/// values and enable the channels before starting the timer; the
/// ordering is a caller responsibility, not checked at runtime.
pub trait Pwm {
    /// Error type for PWM operations.
    type Error: core::fmt::Debug;

    /// Set the waveform period and the two channels' duty thresholds.
    ///
    /// Writes the same registers as the timer's counting configuration;
    /// plain compare-interrupt use and PWM use of one instance are
    /// coupled by design.
    fn configure_pwm(
        &mut self,
        period: u32,
        duty_x: u32,
        duty_y: u32,
    ) -> Result<(), Self::Error>;

    /// Enable the selected output channels.
    ///
    /// Channels passed as `false` are left untouched. Does not alter
    /// polarity or the shared counting parameters.
    fn enable_channels(&mut self, ch0: bool, ch1: bool) -> Result<(), Self::Error>;

    /// Disable the selected output channels.
    ///
    /// The symmetric complement of [`enable_channels`](Pwm::enable_channels).
    fn disable_channels(&mut self, ch0: bool, ch1: bool) -> Result<(), Self::Error>;

    /// Set the output polarity of one channel.
    ///
    /// Independent of the channel enable bit.
    fn set_polarity(
        &mut self,
        channel: PwmChannel,
        polarity: Polarity,
    ) -> Result<(), Self::Error>;
}

/// Extension trait for PWM blocks with output guard hardware.
pub trait GuardedPwm: Pwm {
    /// Set the dead-time inserted between complementary transitions.
    fn set_dead_time(&mut self, value: u32) -> Result<(), Self::Error>;

    /// Program the fault-control behaviour of the outputs.
    fn set_fault_control(&mut self, value: u32) -> Result<(), Self::Error>;
}
