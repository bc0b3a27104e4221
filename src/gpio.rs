//! General-purpose I/O pins.
//!
//! Driving a pin goes through the bit set/reset register, which changes only
//! the written bits and needs no read. Toggling has no such register and is a
//! read-modify-write of the output data register.
//!
//! ```no_run
//! use drone_cmsis::{gpio, table};
//!
//! table! {
//!     GPIO {
//!         GPIOB 0x4202_0400;
//!         IDR 0x10 {}
//!         ODR 0x14 {}
//!         BSRR 0x18 {}
//!     }
//! }
//!
//! let led = gpio::port!(GPIOB).pin(3);
//! let button = gpio::port!(GPIOB).pin_active_low(4);
//! unsafe {
//!     led.set(button.read());
//!     led.toggle();
//! }
//! ```

use crate::reg::{Field, RReg, Register, RwReg, WReg};

/// Returns the [`Port`] of a named GPIO instance: `port!([path::]GPIOx)`.
///
/// The instance must resolve to the `GPIO` family with `IDR`, `ODR`, and
/// `BSRR` registers in the register definition table.
#[doc(inline)]
pub use drone_cmsis_macros::gpio_port as port;

/// Number of pins in a port.
pub const PINS_COUNT: u8 = 16;

/// Registers of a GPIO port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Port {
    idr: Register<u32>,
    odr: Register<u32>,
    bsrr: Register<u32>,
}

/// Electrical level at which a pin is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Active when high.
    High,
    /// Active when low.
    Low,
}

/// GPIO pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    port: Port,
    number: u8,
    level: Level,
}

impl Port {
    /// Creates a port from its input data, output data, and bit set/reset
    /// registers.
    #[inline]
    pub const fn new(idr: Register<u32>, odr: Register<u32>, bsrr: Register<u32>) -> Self {
        Self { idr, odr, bsrr }
    }

    /// Returns the active-high pin `number` of the port.
    #[inline]
    pub fn pin(self, number: u8) -> Pin {
        Pin::new(self, number, Level::High)
    }

    /// Returns the active-low pin `number` of the port.
    #[inline]
    pub fn pin_active_low(self, number: u8) -> Pin {
        Pin::new(self, number, Level::Low)
    }
}

impl Pin {
    /// Creates a pin handle.
    ///
    /// # Panics
    ///
    /// If `number` is more than or equal to [`PINS_COUNT`].
    #[inline]
    pub fn new(port: Port, number: u8, level: Level) -> Self {
        assert!(number < PINS_COUNT);
        Self { port, number, level }
    }

    /// Returns the pin number.
    #[inline]
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns the active level.
    #[inline]
    pub fn level(self) -> Level {
        self.level
    }

    /// Drives the pin to its active level.
    ///
    /// # Safety
    ///
    /// The port registers must be valid and the pin configured as output.
    #[inline]
    pub unsafe fn active(self) {
        unsafe { self.drive(self.level == Level::High) };
    }

    /// Drives the pin to its inactive level.
    ///
    /// # Safety
    ///
    /// See [`Pin::active`].
    #[inline]
    pub unsafe fn inactive(self) {
        unsafe { self.drive(self.level == Level::Low) };
    }

    /// Drives the pin to its active level if `active` is `true`, and to its
    /// inactive level otherwise.
    ///
    /// # Safety
    ///
    /// See [`Pin::active`].
    #[inline]
    pub unsafe fn set(self, active: bool) {
        if active {
            unsafe { self.active() };
        } else {
            unsafe { self.inactive() };
        }
    }

    /// Inverts the pin output in a single read-modify-write of the output data
    /// register.
    ///
    /// # Safety
    ///
    /// See [`Pin::active`]. The caller must ensure no other execution context
    /// modifies the output data register of the port concurrently.
    #[inline]
    pub unsafe fn toggle(self) {
        let bit = self.bit(0);
        unsafe { self.port.odr.update(|raw| raw ^ bit.msk()) };
    }

    /// Returns `true` if the pin input is at its active level.
    ///
    /// # Safety
    ///
    /// The port registers must be valid.
    #[inline]
    pub unsafe fn read(self) -> bool {
        let high = unsafe { self.port.idr.read(self.bit(0)) } != 0;
        high == (self.level == Level::High)
    }

    unsafe fn drive(self, high: bool) {
        let bit = if high { self.bit(0) } else { self.bit(PINS_COUNT) };
        unsafe { self.port.bsrr.store(bit.bits(1)) };
    }

    fn bit(self, offset: u8) -> Field<u32> {
        Field::bit(u32::from(self.number + offset))
    }
}
