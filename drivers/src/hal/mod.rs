//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! This module defines generic traits for interacting with hardware
//! peripherals. These traits are implemented by peripheral drivers,
//! allowing application code to be written in a platform-independent
//! manner.
//!
//! # Design Principles
//!
//! - **Zero-cost abstractions**: Traits compile to direct hardware access
//! - **Type safety**: Use associated types to catch errors at compile time
//! - **Flexibility**: Support diverse hardware capabilities
//! - **No platform leakage**: Traits must not reference platform-specific types
//!
//! # Available Interfaces
//!
//! - [`timer`]: Timer/counter control
//! - [`pwm`]: PWM waveform generation
//! - [`interrupt`]: Per-peripheral interrupt event control
//! - [`board`]: Board-level facilities surrounding the peripherals

pub mod board;
pub mod interrupt;
pub mod pwm;
pub mod timer;
