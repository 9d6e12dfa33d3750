//! Hardware Driver Subsystem
//!
//! This module provides a layered architecture for hardware abstraction:
//!
//! # Module Organization
//!
//! - [`hal`]: Platform-independent trait definitions
//! - [`peripheral`]: Reusable peripheral drivers
//! - [`platform`]: Platform-specific wiring (base addresses, IRQ lines)
//!
//! # Design Principles
//!
//! 1. **Separation of Concerns**: Platform wiring is separate from peripheral code
//! 2. **Zero-Cost Abstractions**: HAL traits compile to direct hardware access
//! 3. **Type Safety**: Use the type system to prevent errors at compile time
//! 4. **Reusability**: Peripheral drivers work across different platforms
//! 5. **Clear Ownership**: Each driver has one clear purpose
//!
//! # Usage Example
//!
//! ```no_run
//! use drivers::hal::pwm::Pwm;
//! use drivers::hal::timer::Timer;
//! use drivers::peripheral::tmr32::Tmr32;
//!
//! unsafe {
//!     let mut timer = Tmr32::new(0x3000_0000);
//!     timer.init().unwrap();
//!     timer.configure(1000, 250, 750).unwrap();
//!     timer.enable_channels(true, true).unwrap();
//!     timer.enable().unwrap();
//! }
//! ```

#![no_std]
#![allow(dead_code)]

pub mod hal;
pub mod peripheral;
pub mod platform;

// Re-export commonly used types
pub use hal::interrupt::{EventMask, InterruptControl};
pub use hal::pwm::{Polarity, Pwm, PwmChannel};
pub use hal::timer::{Direction, Timer, TimerConfig, TimerMode};
pub use platform::TimerInstance;
