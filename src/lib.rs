//! Symbolic bit-field access to memory-mapped registers for Drone.
//!
//! Firmware names a peripheral instance, a register, and one or more fields;
//! this crate turns that into a correctly shifted and masked read-modify-write
//! with exactly one load and one store, without computing bit positions or
//! masks by hand.
//!
//! The crate has the following layers, composed bottom-up:
//!
//! * [`table!`] declares a register definition table: instance base
//!   addresses, register offsets, field positions and masks.
//! * [`reg`] resolves symbolic names against the table and performs atomic
//!   field updates, either with statically named registers
//!   ([`reg::set!`](reg::set), [`reg::get!`](reg::get)) or through a
//!   run-time [`reg::Locator`].
//! * [`nvic`] and [`gpio`] provide single-bit helpers for the interrupt
//!   controller and general-purpose I/O pins.
//! * [`log`] exposes the debug probe log streams, including the optional
//!   register store trace.
//! * `device` carries register definition tables for supported parts, enabled
//!   with Cargo features.
//!
//! # Cargo features
//!
//! * `trace`: log every register store to [`log::TRACE_STREAM`].
//! * `stm32h533`: register definition table for STM32H533.
//! * `stm32h7s3`: register definition table for STM32H7S3.

#![warn(missing_docs, unsafe_op_in_unsafe_fn)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_panics_doc)]
#![cfg_attr(not(test), no_std)]

extern crate self as drone_cmsis;

pub mod device;
pub mod gpio;
pub mod log;
pub mod nvic;
pub mod reg;

/// Declares a register definition table.
///
/// The table consists of family blocks. A family block lists the peripheral
/// instances sharing its register layout, with their base addresses, and the
/// registers with their offsets and fields. A field is declared with its bit
/// position and bit mask.
///
/// ```
/// drone_cmsis::table! {
///     /// General-purpose I/O.
///     GPIO {
///         /// Port A.
///         GPIOA 0x4202_0000;
///         /// Port B.
///         GPIOB 0x4202_0400;
///         /// Output data register.
///         ODR 0x14 {
///             OD0 0 0x0000_0001;
///             OD1 1 0x0000_0002;
///         }
///     }
/// }
///
/// assert_eq!(GPIOB_BASE, 0x4202_0400);
/// assert_eq!(GPIO_ODR_OFFSET, 0x14);
/// assert_eq!(GPIO_ODR_OD1_POS, 1);
/// assert_eq!(GPIO_ODR_OD1_MSK, 0x2);
/// ```
///
/// Attributes of a family block apply to every constant of the family, in
/// front of the constant's own attributes.
///
/// Every instance must resolve to the enclosing family through the alias
/// table, a field position must be less than 32, and a mask must be non-zero.
/// Otherwise the table fails to compile.
#[doc(inline)]
pub use drone_cmsis_macros::table;
