//! Platform Abstraction Layer
//!
//! This module provides a platform-agnostic interface to the timer
//! hardware actually wired into the chip. Each platform implements the
//! Platform trait, pinning base addresses and interrupt lines.
//!
//! # Usage
//!
//! ```no_run
//! use drivers::hal::timer::Timer;
//! use drivers::platform::{CurrentPlatform as Platform, Platform as PlatformTrait, TimerInstance};
//!
//! // Initialize platform devices
//! unsafe { Platform::init_devices().unwrap() };
//!
//! // Use either instance through the selector
//! Platform::with_timer(TimerInstance::Timer0, |t| t.enable()).unwrap().unwrap();
//! ```

use crate::peripheral::tmr32::Tmr32;

/// Platform memory map information
#[derive(Debug, Clone, Copy)]
pub struct MemoryMap {
    /// Start of the peripheral region
    pub peripheral_base: usize,
    /// Size of the peripheral region
    pub peripheral_size: usize,
}

/// Timer instance selector.
///
/// The two peripheral occurrences share one register layout and differ
/// only in base address; this enum is the thin addressing layer that
/// applies the same logical operations to either of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerInstance {
    Timer0,
    Timer1,
}

/// Platform trait - implemented by each supported platform
pub trait Platform {
    /// Platform name for debugging
    fn name() -> &'static str;

    /// Get static memory map for this platform
    fn memory_map() -> MemoryMap;

    /// Attach to and reset the platform's timer instances
    ///
    /// # Safety
    /// Must only be called once, after the user-project interface has
    /// been enabled.
    unsafe fn init_devices() -> Result<(), &'static str>;

    /// Access a timer instance
    ///
    /// Executes the closure with mutable access to the selected timer,
    /// serializing against other users of the same instance. Returns
    /// None if the platform has not been initialized.
    fn with_timer<R>(instance: TimerInstance, f: impl FnOnce(&mut Tmr32) -> R) -> Option<R>;

    /// Get the interrupt line wired to a timer instance
    fn timer_irq(instance: TimerInstance) -> u32;
}

// Platform selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "caravel")] {
        pub mod caravel;
        pub use caravel::CaravelPlatform as CurrentPlatform;
    } else {
        compile_error!(
            "No platform selected!\n\
            Use: cargo build --features caravel"
        );
    }
}
