use super::{combine, Field, RegRaw, Update};
use core::{
    marker::PhantomData,
    ptr::{read_volatile, write_volatile},
};

/// Memory-mapped register binding.
pub trait Reg {
    /// Raw register value type.
    type Raw: RegRaw;
}

/// Register that can read its value.
pub trait RReg: Reg {
    /// Reads the raw register value.
    ///
    /// # Safety
    ///
    /// The register must be valid for volatile reads.
    unsafe fn load(&self) -> Self::Raw;

    /// Reads the value of `field`.
    ///
    /// # Safety
    ///
    /// See [`RReg::load`].
    #[inline]
    unsafe fn read(&self, field: Field<Self::Raw>) -> Self::Raw {
        field.read(unsafe { self.load() })
    }

    /// Spins until every field of `expected` reads its value. Each iteration
    /// performs one load.
    ///
    /// # Safety
    ///
    /// See [`RReg::load`].
    #[inline]
    unsafe fn wait<const N: usize>(&self, expected: [Update<Self::Raw>; N]) {
        loop {
            let raw = unsafe { self.load() };
            if expected.iter().all(|&(field, value)| field.read(raw) == value) {
                break;
            }
        }
    }
}

/// Register that can write its value.
pub trait WReg: Reg {
    /// Writes the raw register value.
    ///
    /// # Safety
    ///
    /// The register must be valid for volatile writes, and the write must not
    /// break the hardware state other code relies on.
    unsafe fn store(&self, raw: Self::Raw);
}

/// Register that can read and write its value.
///
/// Both operations perform exactly one load and one store. Nothing prevents
/// another execution context from modifying the register between them, in
/// which case that modification is lost. Callers sharing a register with an
/// interrupt handler must serialize access themselves.
pub trait RwReg: RReg + WReg {
    /// Applies the field update request `updates` in a single read-modify-write.
    ///
    /// See [`combine`] for the transformation.
    ///
    /// # Safety
    ///
    /// See [`RReg::load`] and [`WReg::store`]. The caller must ensure no other
    /// execution context modifies the register concurrently.
    unsafe fn modify<const N: usize>(&self, updates: [Update<Self::Raw>; N]);

    /// Reads the raw value, passes it through `f`, and writes the result back.
    ///
    /// # Safety
    ///
    /// See [`RwReg::modify`].
    unsafe fn update<F>(&self, f: F)
    where
        F: FnOnce(Self::Raw) -> Self::Raw;
}

impl<T: RReg + WReg> RwReg for T {
    #[inline]
    unsafe fn modify<const N: usize>(&self, updates: [Update<Self::Raw>; N]) {
        unsafe { self.update(|raw| combine(raw, updates)) };
    }

    #[inline]
    unsafe fn update<F>(&self, f: F)
    where
        F: FnOnce(Self::Raw) -> Self::Raw,
    {
        unsafe { self.store(f(self.load())) };
    }
}

/// Register at a fixed memory address.
///
/// ```no_run
/// use drone_cmsis::reg::{Field, RReg, Register, RwReg};
///
/// let cr = Register::<u32>::at(0x4402_0C00);
/// unsafe {
///     cr.modify([(Field::new(0, 0x1), 1)]);
///     while cr.read(Field::new(1, 0x2)) == 0 {}
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Register<R: RegRaw = u32> {
    address: usize,
    _raw: PhantomData<R>,
}

impl<R: RegRaw> Register<R> {
    /// Creates a binding for the register at `address`.
    #[inline]
    pub const fn at(address: usize) -> Self {
        Self { address, _raw: PhantomData }
    }

    /// Returns the memory address of the register.
    #[inline]
    pub const fn address(self) -> usize {
        self.address
    }

    /// Returns an unsafe constant pointer to the register's memory address.
    #[inline]
    pub fn to_ptr(self) -> *const R {
        self.address as *const R
    }

    /// Returns an unsafe mutable pointer to the register's memory address.
    #[inline]
    pub fn to_mut_ptr(self) -> *mut R {
        self.address as *mut R
    }
}

impl<R: RegRaw> Reg for Register<R> {
    type Raw = R;
}

impl<R: RegRaw> RReg for Register<R> {
    #[inline]
    unsafe fn load(&self) -> R {
        unsafe { read_volatile(self.to_ptr()) }
    }
}

impl<R: RegRaw> WReg for Register<R> {
    #[inline]
    unsafe fn store(&self, raw: R) {
        #[cfg(feature = "trace")]
        crate::log::trace::store(self.address, raw);
        unsafe { write_volatile(self.to_mut_ptr(), raw) };
    }
}
