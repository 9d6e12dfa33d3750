//! Caravel User-Project Platform
//!
//! Two TMR32 instances live in the user-project address space, one
//! register block each, at fixed bases 0x1_0000 apart. Their interrupt
//! outputs ride the user IRQ lines into the management core.

use super::{MemoryMap, Platform, TimerInstance};
use crate::hal::timer::Timer;
use crate::peripheral::tmr32::Tmr32;
use spin::Mutex;

/// Start of the user-project peripheral region.
pub const PERIPHERAL_BASE: usize = 0x3000_0000;

/// Timer instance 0 register block.
pub const TIMER0_BASE: usize = 0x3000_0000;
/// Timer instance 1 register block.
pub const TIMER1_BASE: usize = 0x3001_0000;

/// User IRQ line carrying timer 0 events.
pub const IRQ_TIMER0: u32 = 0;
/// User IRQ line carrying timer 1 events.
pub const IRQ_TIMER1: u32 = 1;

// ============================================================================
// Internal Platform State (not exposed)
// ============================================================================

/// Timer instance 0 driver handle (private)
static TIMER0: Mutex<Option<Tmr32>> = Mutex::new(None);

/// Timer instance 1 driver handle (private)
static TIMER1: Mutex<Option<Tmr32>> = Mutex::new(None);

fn slot(instance: TimerInstance) -> &'static Mutex<Option<Tmr32>> {
    match instance {
        TimerInstance::Timer0 => &TIMER0,
        TimerInstance::Timer1 => &TIMER1,
    }
}

const fn base(instance: TimerInstance) -> usize {
    match instance {
        TimerInstance::Timer0 => TIMER0_BASE,
        TimerInstance::Timer1 => TIMER1_BASE,
    }
}

pub struct CaravelPlatform;

impl Platform for CaravelPlatform {
    fn name() -> &'static str {
        "Caravel user project (dual TMR32)"
    }

    fn memory_map() -> MemoryMap {
        MemoryMap {
            peripheral_base: PERIPHERAL_BASE,
            peripheral_size: 0x0002_0000,
        }
    }

    unsafe fn init_devices() -> Result<(), &'static str> {
        // 1. Attach and reset timer instance 0
        let mut timer0 = unsafe { Tmr32::new(base(TimerInstance::Timer0)) };
        timer0.init().map_err(|_| "Failed to reset timer 0")?;
        *TIMER0.lock() = Some(timer0);

        // 2. Attach and reset timer instance 1
        let mut timer1 = unsafe { Tmr32::new(base(TimerInstance::Timer1)) };
        timer1.init().map_err(|_| "Failed to reset timer 1")?;
        *TIMER1.lock() = Some(timer1);

        log::info!(
            "{}: timers ready at {:#010x} / {:#010x}",
            Self::name(),
            TIMER0_BASE,
            TIMER1_BASE
        );

        Ok(())
    }

    fn with_timer<R>(instance: TimerInstance, f: impl FnOnce(&mut Tmr32) -> R) -> Option<R> {
        slot(instance).lock().as_mut().map(f)
    }

    fn timer_irq(instance: TimerInstance) -> u32 {
        match instance {
            TimerInstance::Timer0 => IRQ_TIMER0,
            TimerInstance::Timer1 => IRQ_TIMER1,
        }
    }
}
