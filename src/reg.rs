//! Symbolic bit-field access to memory-mapped registers.
//!
//! A register definition table, declared with [`table!`](crate::table),
//! provides constants named after the peripheral family, the register, and the
//! field. The macros of this module compose those names from a peripheral
//! instance, a register, and a list of fields:
//!
//! | Key                          | Type    | Meaning                |
//! |------------------------------|---------|------------------------|
//! | `{INSTANCE}_BASE`            | `usize` | instance base address  |
//! | `{FAMILY}_{REG}_OFFSET`      | `usize` | register offset        |
//! | `{FAMILY}_{REG}_{FIELD}_POS` | `u32`   | field bit position     |
//! | `{FAMILY}_{REG}_{FIELD}_MSK` | `u32`   | field bit mask         |
//!
//! The family is obtained from the instance name through a fixed alias table,
//! so `USART1` and `USART6` share the `USART_*` field definitions while having
//! separate base addresses. Names missing from the alias table are families by
//! themselves. An unknown register or field is a compile error pointing at the
//! misspelt name.
//!
//! The peripheral may be prefixed with the path of the module holding the
//! table, e.g. `device::stm32h533::USART1`.
//!
//! # Atomicity
//!
//! [`set!`] applies any number of field assignments with exactly one load and
//! one store of the register. Only the assigned fields change, every other bit
//! is preserved. [`Locator`] does the same for a single field of a register
//! chosen at run-time.
//!
//! The read-modify-write is not protected against other execution contexts.
//! If an interrupt handler modifies the same register between the load and the
//! store, one of the updates is lost. This is why register-touching macros
//! expand to `unsafe` calls: the caller must serialize access to registers
//! shared between contexts.
//!
//! # Examples
//!
//! ```no_run
//! use drone_cmsis::reg;
//!
//! drone_cmsis::table! {
//!     USART {
//!         USART1 0x4001_3800;
//!         USART2 0x4000_4400;
//!         CR1 0x00 {
//!             UE 0 0x0000_0001;
//!             RE 2 0x0000_0004;
//!             TE 3 0x0000_0008;
//!             OVER8 15 0x0000_8000;
//!         }
//!         ISR 0x1C {
//!             TEACK 21 0x0020_0000;
//!         }
//!     }
//! }
//!
//! unsafe {
//!     reg::set!(USART2, CR1, UE = 1, RE = 1, TE = 1, OVER8 = 0);
//!     reg::wait!(USART2, ISR, TEACK = 1);
//!     assert_eq!(reg::get!(USART2, CR1, UE), 1);
//! }
//! ```

mod combine;
mod field;
mod locator;
mod raw;
mod register;

pub use self::{
    combine::{combine, Update},
    field::Field,
    locator::Locator,
    raw::RegRaw,
    register::{RReg, RwReg, Reg, Register, WReg},
};

/// Returns the [`Field`] descriptor of a named field.
///
/// ```
/// use drone_cmsis::reg::{self, Field};
///
/// drone_cmsis::table! {
///     TIM {
///         CR1 0x00 {
///             CKD 8 0x0000_0300;
///         }
///     }
/// }
///
/// assert_eq!(reg::field!(TIM2, CR1, CKD), Field::new(8, 0x300));
/// assert_eq!(reg::field!(TIM2, CR1, CKD), reg::field!(TIM17, CR1, CKD));
/// ```
#[doc(inline)]
pub use drone_cmsis_macros::reg_field as field;

/// Returns the [`Register`] binding of a named register.
#[doc(inline)]
pub use drone_cmsis_macros::reg_register as register;

/// Returns the [`Locator`] of a named field.
///
/// Useful to hand a field over to code that only receives it at run-time.
#[doc(inline)]
pub use drone_cmsis_macros::reg_locator as locator;

/// Reads the value of a named field: `get!(INSTANCE, REG, FIELD)`.
///
/// Must be called within `unsafe`: the register is read through a raw
/// address.
#[doc(inline)]
pub use drone_cmsis_macros::reg_get as get;

/// Extracts a named field from an already read value:
/// `get_from!(value, INSTANCE, REG, FIELD)`.
///
/// ```
/// use drone_cmsis::reg;
///
/// drone_cmsis::table! {
///     RCC {
///         CFGR1 0x1C {
///             SWS 3 0x0000_0018;
///         }
///     }
/// }
///
/// assert_eq!(reg::get_from!(0x0000_0018, RCC, CFGR1, SWS), 3);
/// ```
#[doc(inline)]
pub use drone_cmsis_macros::reg_get_from as get_from;

/// Assigns named fields in a single read-modify-write:
/// `set!(INSTANCE, REG, FIELD = value, ...)`.
///
/// Field values are `u32`. Exactly one load and one store are performed,
/// whatever the number of fields, including zero.
///
/// Must be called within `unsafe`. The caller must ensure no other execution
/// context modifies the register concurrently.
#[doc(inline)]
pub use drone_cmsis_macros::reg_set as set;

/// Assigns named fields of a local value without touching the hardware:
/// `update!(place, INSTANCE, REG, FIELD = value, ...)`.
///
/// ```
/// use drone_cmsis::reg;
///
/// drone_cmsis::table! {
///     PWR {
///         VOSCR 0x10 {
///             VOS 4 0x0000_0030;
///         }
///     }
/// }
///
/// let mut voscr = 0xFFFF_FFFF;
/// reg::update!(voscr, PWR, VOSCR, VOS = 0);
/// assert_eq!(voscr, 0xFFFF_FFCF);
/// ```
#[doc(inline)]
pub use drone_cmsis_macros::reg_update as update;

/// Spins until every named field reads its value:
/// `wait!(INSTANCE, REG, FIELD = value, ...)`.
///
/// Must be called within `unsafe`.
#[doc(inline)]
pub use drone_cmsis_macros::reg_wait as wait;

mod compile_tests {
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     USART {
    //!         USART1 0x4001_3800;
    //!         CR1 0x00 {
    //!             UE 0 0x0000_0001;
    //!         }
    //!     }
    //! }
    //! let field = drone_cmsis::reg::field!(USART1, CR1, UEE);
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     USART {
    //!         USART1 0x4001_3800;
    //!         CR1 0x00 {
    //!             UE 0 0x0000_0001;
    //!         }
    //!     }
    //! }
    //! unsafe { drone_cmsis::reg::set!(USART3, CR1, UE = 1) };
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     USART {
    //!         USART1 0x4001_3800;
    //!         CR1 0x00 {
    //!             UE 0 0x0000_0001;
    //!         }
    //!     }
    //! }
    //! unsafe { drone_cmsis::reg::set!(USART1, CR2, UE = 1) };
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     UART {
    //!         USART1 0x4001_3800;
    //!     }
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     USART1 {
    //!         CR1 0x00 {
    //!             UE 0 0x0000_0001;
    //!         }
    //!     }
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     RCC {
    //!         CR 0x00 {
    //!             HSION 32 0x0000_0001;
    //!         }
    //!     }
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     RCC {
    //!         CR 0x00 {
    //!             HSION 0 0;
    //!         }
    //!     }
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     RCC {
    //!         RCC 0x4402_0C00;
    //!         CR 0x00 {
    //!             HSION 0 0x0000_0001;
    //!         }
    //!     }
    //! }
    //! unsafe { drone_cmsis::reg::set!(RCC, CR, HSION 1) };
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     RCC {
    //!         RCC 0x4402_0C00;
    //!         CR 0x00 {
    //!             HSIRDY 1 0x0000_0002;
    //!         }
    //!     }
    //! }
    //! unsafe { drone_cmsis::reg::wait!(RCC, CR) };
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     RCC {
    //!         RCC 0x4402_0C00;
    //!         CFGR1 0x1C {
    //!             SW 0 0x0000_0007;
    //!         }
    //!     }
    //! }
    //! unsafe { drone_cmsis::reg::set!(RCC, CFGR1, SW = 1, SW = 2) };
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     RCC {
    //!         CFGR1 0x1C {
    //!             SW 0 0x0000_0007;
    //!         }
    //!     }
    //! }
    //! let mut cfgr1 = 0;
    //! drone_cmsis::reg::update!(cfgr1, RCC, CFGR1, SW = 1, sw = 2);
    //! ```
    //!
    //! ```compile_fail
    //! drone_cmsis::table! {
    //!     #[cfg(any())]
    //!     PWR {
    //!         VOSCR 0x10 {
    //!             VOS 4 0x0000_0030;
    //!         }
    //!     }
    //! }
    //! assert_eq!(PWR_VOSCR_VOS_MSK, 0x30);
    //! ```
}
