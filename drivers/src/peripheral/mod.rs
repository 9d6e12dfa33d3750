//! Peripheral Drivers
//!
//! This module contains drivers for reusable peripherals that
//! can be found across different platforms.
//!
//! # Available Peripherals
//!
//! - [`tmr32`]: 32-bit timer/counter with dual-channel PWM

pub mod tmr32;
