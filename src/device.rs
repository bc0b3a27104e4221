//! Register definition tables of supported devices.
//!
//! Each device is enabled with a Cargo feature of the same name.

#[cfg(feature = "stm32h533")]
pub mod stm32h533;
#[cfg(feature = "stm32h7s3")]
pub mod stm32h7s3;
