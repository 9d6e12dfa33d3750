//! TMR32 Timer/Counter/PWM Driver
//!
//! This module provides a driver for the 32-bit timer/counter
//! peripheral with two PWM output channels and a per-instance
//! interrupt controller. The chip carries two structurally identical
//! instances distinguished only by base address, so the driver is
//! parametrized by the base rather than duplicated per instance.
//!
//! # Features
//!
//! - Up, down and up-then-down counting against a reload boundary
//! - One-shot and periodic operation with input clock prescaling
//! - Two compare thresholds raising match events
//! - Two PWM channels deriving duty/period from the shared reload and
//!   compare values, with per-channel polarity inversion
//! - Mask / raw-status / masked-status / write-1-to-clear event
//!   protocol for the timeout and compare-match sources
//!
//! # Example
//!
//! ```no_run
//! use drivers::hal::interrupt::{EVENT_COMPARE_X, InterruptControl};
//! use drivers::hal::pwm::Pwm;
//! use drivers::hal::timer::Timer;
//! use drivers::peripheral::tmr32::Tmr32;
//!
//! unsafe {
//!     let mut timer = Tmr32::new(0x3000_0000);
//!     timer.init().unwrap();
//!     timer.configure(1000, 250, 750).unwrap();
//!     timer.set_mask(EVENT_COMPARE_X).unwrap();
//!     timer.enable_channels(true, true).unwrap();
//!     timer.enable().unwrap();
//! }
//! ```
//!
//! Every operation is a bounded sequence of ordered 32-bit register
//! accesses; nothing here locks or blocks. A single instance is not
//! safe for unsynchronized use from multiple execution contexts;
//! callers must serialize access per instance.

use crate::hal::interrupt::{EventMask, InterruptControl};
use crate::hal::pwm::{GuardedPwm, Polarity, Pwm, PwmChannel};
use crate::hal::timer::{ConfigurableTimer, Direction, GatedTimer, Timer, TimerMode};
use core::ptr::{read_volatile, write_volatile};

// Register offsets
const TMR_OFFSET: usize = 0x0000;
const RELOAD_OFFSET: usize = 0x0004;
const PR_OFFSET: usize = 0x0008;
const CMPX_OFFSET: usize = 0x000C;
const CMPY_OFFSET: usize = 0x0010;
const CTRL_OFFSET: usize = 0x0014;
const CFG_OFFSET: usize = 0x0018;
const PWM0CFG_OFFSET: usize = 0x001C;
const PWM1CFG_OFFSET: usize = 0x0020;
const PWMDT_OFFSET: usize = 0x0024;
const PWMFC_OFFSET: usize = 0x0028;
const IM_OFFSET: usize = 0xFF00;
const MIS_OFFSET: usize = 0xFF04;
const RIS_OFFSET: usize = 0xFF08;
const IC_OFFSET: usize = 0xFF0C;
const GCLK_OFFSET: usize = 0xFF10;

// Control Register (CTRL) bits
const CTRL_EN: u32 = 1 << 0;
const CTRL_START: u32 = 1 << 1;
const CTRL_PERIODIC: u32 = 1 << 2;
const CTRL_DIR_SHIFT: u32 = 3;
const CTRL_DIR_MASK: u32 = 0b11 << CTRL_DIR_SHIFT;

// PWM Channel Config (PWMnCFG) bits
const PWM_EN: u32 = 1 << 0;
const PWM_INV: u32 = 1 << 1;

// Clock Gating (GCLK) bits
const GCLK_EN: u32 = 1 << 0;

/// TMR32 timer/counter/PWM driver.
///
/// One value of this type drives one peripheral instance. The
/// underlying registers exist for the lifetime of the powered device;
/// this type is only a handle onto them and neither allocates nor
/// releases anything.
pub struct Tmr32 {
    base: usize,
}

impl Tmr32 {
    /// Create a new TMR32 instance handle.
    ///
    /// # Safety
    ///
    /// - `base` must be the base address of a TMR32 register block
    /// - Only one handle should exist per timer hardware
    /// - Memory must be properly mapped as device memory
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    #[inline]
    fn read_reg(&self, offset: usize) -> u32 {
        unsafe { read_volatile((self.base + offset) as *const u32) }
    }

    #[inline]
    fn write_reg(&mut self, offset: usize, value: u32) {
        unsafe { write_volatile((self.base + offset) as *mut u32, value) }
    }

    /// Read-modify-write of a single register.
    fn update_reg(&mut self, offset: usize, clear: u32, set: u32) {
        let value = self.read_reg(offset);
        self.write_reg(offset, (value & !clear) | set);
    }

    fn channel_cfg_offset(channel: PwmChannel) -> usize {
        match channel {
            PwmChannel::Ch0 => PWM0CFG_OFFSET,
            PwmChannel::Ch1 => PWM1CFG_OFFSET,
        }
    }

    /// Direction field encoding for CTRL bits 3-4. The reserved fourth
    /// encoding is unrepresentable in [`Direction`].
    fn direction_bits(direction: Direction) -> u32 {
        let value = match direction {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::UpDown => 2,
        };
        value << CTRL_DIR_SHIFT
    }
}

/// Timer errors (TMR32 register operations are infallible).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tmr32Error {}

// ============================================================================
// HAL Implementation
// ============================================================================

impl Timer for Tmr32 {
    type Error = Tmr32Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        // Stop counting before touching the configuration
        self.write_reg(CTRL_OFFSET, 0);

        self.write_reg(RELOAD_OFFSET, 0);
        self.write_reg(PR_OFFSET, 0);
        self.write_reg(CMPX_OFFSET, 0);
        self.write_reg(CMPY_OFFSET, 0);
        self.write_reg(PWM0CFG_OFFSET, 0);
        self.write_reg(PWM1CFG_OFFSET, 0);
        self.write_reg(IM_OFFSET, 0);

        // Acknowledge anything still pending (write-1-to-clear)
        self.write_reg(IC_OFFSET, 0xFFFF_FFFF);

        Ok(())
    }

    fn configure(
        &mut self,
        reload: u32,
        compare_x: u32,
        compare_y: u32,
    ) -> Result<(), Self::Error> {
        self.write_reg(RELOAD_OFFSET, reload);
        self.write_reg(CMPX_OFFSET, compare_x);
        self.write_reg(CMPY_OFFSET, compare_y);
        Ok(())
    }

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.update_reg(CTRL_OFFSET, 0, CTRL_EN | CTRL_START);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.update_reg(CTRL_OFFSET, CTRL_EN | CTRL_START, 0);
        Ok(())
    }

    fn read(&self) -> u32 {
        self.read_reg(TMR_OFFSET)
    }
}

impl ConfigurableTimer for Tmr32 {
    fn set_mode(&mut self, mode: TimerMode) -> Result<(), Self::Error> {
        match mode {
            TimerMode::Periodic => self.update_reg(CTRL_OFFSET, 0, CTRL_PERIODIC),
            TimerMode::OneShot => self.update_reg(CTRL_OFFSET, CTRL_PERIODIC, 0),
        }
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        self.update_reg(CTRL_OFFSET, CTRL_DIR_MASK, Self::direction_bits(direction));
        Ok(())
    }

    fn set_prescaler(&mut self, ratio: u32) -> Result<(), Self::Error> {
        self.write_reg(PR_OFFSET, ratio);
        Ok(())
    }
}

impl GatedTimer for Tmr32 {
    fn set_clock_enable(&mut self, enable: bool) -> Result<(), Self::Error> {
        self.write_reg(GCLK_OFFSET, if enable { GCLK_EN } else { 0 });
        Ok(())
    }
}

impl Pwm for Tmr32 {
    type Error = Tmr32Error;

    fn configure_pwm(
        &mut self,
        period: u32,
        duty_x: u32,
        duty_y: u32,
    ) -> Result<(), Self::Error> {
        // Same storage as the counting configuration: one reload and
        // one compare pair per instance.
        self.write_reg(RELOAD_OFFSET, period);
        self.write_reg(CMPX_OFFSET, duty_x);
        self.write_reg(CMPY_OFFSET, duty_y);
        Ok(())
    }

    fn enable_channels(&mut self, ch0: bool, ch1: bool) -> Result<(), Self::Error> {
        if ch0 {
            self.update_reg(PWM0CFG_OFFSET, 0, PWM_EN);
        }
        if ch1 {
            self.update_reg(PWM1CFG_OFFSET, 0, PWM_EN);
        }
        Ok(())
    }

    fn disable_channels(&mut self, ch0: bool, ch1: bool) -> Result<(), Self::Error> {
        if ch0 {
            self.update_reg(PWM0CFG_OFFSET, PWM_EN, 0);
        }
        if ch1 {
            self.update_reg(PWM1CFG_OFFSET, PWM_EN, 0);
        }
        Ok(())
    }

    fn set_polarity(
        &mut self,
        channel: PwmChannel,
        polarity: Polarity,
    ) -> Result<(), Self::Error> {
        let offset = Self::channel_cfg_offset(channel);
        match polarity {
            Polarity::ActiveLow => self.update_reg(offset, 0, PWM_INV),
            Polarity::ActiveHigh => self.update_reg(offset, PWM_INV, 0),
        }
        Ok(())
    }
}

impl GuardedPwm for Tmr32 {
    fn set_dead_time(&mut self, value: u32) -> Result<(), Self::Error> {
        self.write_reg(PWMDT_OFFSET, value);
        Ok(())
    }

    fn set_fault_control(&mut self, value: u32) -> Result<(), Self::Error> {
        self.write_reg(PWMFC_OFFSET, value);
        Ok(())
    }
}

impl InterruptControl for Tmr32 {
    type Error = Tmr32Error;

    fn set_mask(&mut self, mask: EventMask) -> Result<(), Self::Error> {
        self.write_reg(IM_OFFSET, mask);
        Ok(())
    }

    fn clear(&mut self, events: EventMask) -> Result<(), Self::Error> {
        // The clear register is write-only and self-clearing; this is
        // an acknowledgement, not a stored value.
        self.write_reg(IC_OFFSET, events);
        Ok(())
    }

    fn status(&self) -> EventMask {
        self.read_reg(MIS_OFFSET)
    }

    fn raw_status(&self) -> EventMask {
        self.read_reg(RIS_OFFSET)
    }
}

// SAFETY: Tmr32 wraps memory-mapped hardware that can be safely
// accessed from any thread when protected by synchronization.
unsafe impl Send for Tmr32 {}
unsafe impl Sync for Tmr32 {}
