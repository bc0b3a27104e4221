use super::{Field, RReg, RegRaw, Register, RwReg};

/// Runtime register locator: a register address bundled with a field
/// position and mask.
///
/// Used when the register is selected at run-time, e.g. one channel out of an
/// array of identical channels. [`Locator::put`] gives the same guarantees as
/// [`RwReg::modify`] with a single field: one load, one modify, one store.
///
/// ```no_run
/// use drone_cmsis::reg::{Field, Locator};
///
/// const CHANNEL0_CCR: usize = 0x4002_0064;
/// const CHANNEL_STRIDE: usize = 0x80;
///
/// fn enable_channel(index: usize) {
///     let en = Locator::new(CHANNEL0_CCR + CHANNEL_STRIDE * index, Field::<u32>::new(0, 0x1));
///     unsafe { en.put(1) };
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Locator<R: RegRaw = u32> {
    register: Register<R>,
    field: Field<R>,
}

impl<R: RegRaw> Locator<R> {
    /// Creates a locator for `field` of the register at `address`.
    #[inline]
    pub const fn new(address: usize, field: Field<R>) -> Self {
        Self::from_parts(Register::at(address), field)
    }

    /// Creates a locator from a register binding and a field descriptor.
    #[inline]
    pub const fn from_parts(register: Register<R>, field: Field<R>) -> Self {
        Self { register, field }
    }

    /// Returns the register address.
    #[inline]
    pub const fn address(self) -> usize {
        self.register.address()
    }

    /// Returns the register binding.
    #[inline]
    pub const fn register(self) -> Register<R> {
        self.register
    }

    /// Returns the field descriptor.
    #[inline]
    pub const fn field(self) -> Field<R> {
        self.field
    }

    /// Writes `value` to the field in a single read-modify-write.
    ///
    /// # Safety
    ///
    /// The address must be a valid register, and no other execution context
    /// may modify it concurrently.
    #[inline]
    pub unsafe fn put(self, value: R) {
        unsafe { self.register.modify([(self.field, value)]) };
    }

    /// Reads the field value.
    ///
    /// # Safety
    ///
    /// The address must be a valid register.
    #[inline]
    pub unsafe fn get(self) -> R {
        unsafe { self.register.read(self.field) }
    }
}
