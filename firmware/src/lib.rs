//! User-Project Firmware Sequences
//!
//! Glue between the board facilities and the timer driver stack: the
//! bring-up sequence that hands the pads over to the user project, and
//! the demonstration program that brings up a dual-channel PWM on one
//! timer instance. Everything here calls through the `drivers` HAL
//! traits, so the board facilities stay opaque collaborators and the
//! sequences run unchanged against mock hardware in tests.

#![no_std]

pub mod bringup;
pub mod demo;
