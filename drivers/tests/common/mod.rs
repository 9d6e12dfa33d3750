//! Simulated TMR32 register file.
//!
//! Backs the driver under test with a plain in-memory register image
//! and models the hardware-side behaviour the image cannot express by
//! itself: the counter state machine (direction, reload wrap, compare
//! matches), derivation of the masked status from the raw status and
//! the mask, and application of writes to the self-clearing interrupt
//! clear register.
//!
//! The model advances one prescaled count per `tick`; the prescale
//! divider itself is not modelled.

#![allow(dead_code)]

use core::ptr::{read_volatile, write_volatile};
use drivers::hal::interrupt::{EVENT_COMPARE_X, EVENT_COMPARE_Y, EVENT_TIMEOUT};

// Register offsets, mirroring the peripheral's fixed map
pub const TMR: usize = 0x0000;
pub const RELOAD: usize = 0x0004;
pub const PR: usize = 0x0008;
pub const CMPX: usize = 0x000C;
pub const CMPY: usize = 0x0010;
pub const CTRL: usize = 0x0014;
pub const CFG: usize = 0x0018;
pub const PWM0CFG: usize = 0x001C;
pub const PWM1CFG: usize = 0x0020;
pub const PWMDT: usize = 0x0024;
pub const PWMFC: usize = 0x0028;
pub const IM: usize = 0xFF00;
pub const MIS: usize = 0xFF04;
pub const RIS: usize = 0xFF08;
pub const IC: usize = 0xFF0C;
pub const GCLK: usize = 0xFF10;

// Control register bits
pub const CTRL_EN: u32 = 1 << 0;
pub const CTRL_START: u32 = 1 << 1;
pub const CTRL_PERIODIC: u32 = 1 << 2;
pub const CTRL_DIR_SHIFT: u32 = 3;
pub const CTRL_DIR_MASK: u32 = 0b11 << CTRL_DIR_SHIFT;

// PWM channel config bits
pub const PWM_EN: u32 = 1 << 0;
pub const PWM_INV: u32 = 1 << 1;

// Clock gating bits
pub const GCLK_EN: u32 = 1 << 0;

/// One simulated peripheral instance: a 64 KiB register image plus the
/// bits of hardware state that live outside the registers.
pub struct SimTmr32 {
    mem: Vec<u32>,
    /// Up-then-down mode: currently on the downslope.
    descending: bool,
}

impl SimTmr32 {
    pub fn new() -> Self {
        Self {
            mem: vec![0u32; 0x4000],
            descending: false,
        }
    }

    /// Base address to hand to the driver under test.
    pub fn base(&mut self) -> usize {
        self.mem.as_mut_ptr() as usize
    }

    pub fn reg(&self, offset: usize) -> u32 {
        unsafe { read_volatile(self.mem.as_ptr().add(offset / 4)) }
    }

    pub fn set_reg(&mut self, offset: usize, value: u32) {
        unsafe { write_volatile(self.mem.as_mut_ptr().add(offset / 4), value) }
    }

    /// Derive MIS from RIS and IM, as the hardware does combinationally.
    fn update_mis(&mut self) {
        let mis = self.reg(RIS) & self.reg(IM);
        self.set_reg(MIS, mis);
    }

    /// Let the register file react to driver writes: apply anything
    /// written to the self-clearing IC register, then rederive MIS.
    pub fn settle(&mut self) {
        let ic = self.reg(IC);
        if ic != 0 {
            let ris = self.reg(RIS) & !ic;
            self.set_reg(RIS, ris);
            self.set_reg(IC, 0);
        }
        self.update_mis();
    }

    /// Raise raw event flags as if the counter logic fired them.
    pub fn raise(&mut self, events: u32) {
        let ris = self.reg(RIS) | events;
        self.set_reg(RIS, ris);
        self.update_mis();
    }

    /// Advance the counter by one prescaled count, honouring the
    /// configured direction, the reload boundary and both compare
    /// thresholds.
    pub fn tick(&mut self) {
        let ctrl = self.reg(CTRL);
        if ctrl & (CTRL_EN | CTRL_START) != (CTRL_EN | CTRL_START) {
            return;
        }

        let reload = self.reg(RELOAD);
        let mut tmr = self.reg(TMR);
        let mut events = 0u32;

        match (ctrl & CTRL_DIR_MASK) >> CTRL_DIR_SHIFT {
            // Up: wrap to zero at the reload boundary
            0 => {
                if tmr >= reload {
                    tmr = 0;
                    events |= EVENT_TIMEOUT;
                } else {
                    tmr += 1;
                }
            }
            // Down: reload at zero, timeout on reaching zero
            1 => {
                if tmr == 0 {
                    tmr = reload;
                } else {
                    tmr -= 1;
                    if tmr == 0 {
                        events |= EVENT_TIMEOUT;
                    }
                }
            }
            // Up-then-down: bounce at the reload boundary, timeout on
            // returning to zero
            _ => {
                if self.descending {
                    tmr = tmr.saturating_sub(1);
                    if tmr == 0 {
                        events |= EVENT_TIMEOUT;
                        self.descending = false;
                    }
                } else {
                    tmr += 1;
                    if tmr >= reload {
                        self.descending = true;
                    }
                }
            }
        }

        if tmr == self.reg(CMPX) {
            events |= EVENT_COMPARE_X;
        }
        if tmr == self.reg(CMPY) {
            events |= EVENT_COMPARE_Y;
        }

        self.set_reg(TMR, tmr);

        if events & EVENT_TIMEOUT != 0 && ctrl & CTRL_PERIODIC == 0 {
            // One-shot: the period that just ended was the only one
            self.set_reg(CTRL, ctrl & !(CTRL_EN | CTRL_START));
        }

        if events != 0 {
            self.raise(events);
        }
    }

    /// Advance the counter by `count` prescaled counts.
    pub fn run(&mut self, count: u32) {
        for _ in 0..count {
            self.tick();
        }
    }
}
