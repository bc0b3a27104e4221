use core::{
    fmt::Debug,
    mem::size_of,
    ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr},
};

/// Raw register value type.
pub trait RegRaw
where
    Self: Sized
        + Debug
        + Copy
        + Eq
        + Not<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + BitAnd<Output = Self>
        + Shl<u32, Output = Self>
        + Shr<u32, Output = Self>,
{
    /// The value of one.
    const ONE: Self;

    /// Width of the type in bits.
    const WIDTH: u32;

    /// Zero-extends the value to `u64`.
    fn widen(self) -> u64;
}

macro_rules! reg_raw {
    ($type:ty) => {
        impl RegRaw for $type {
            const ONE: Self = 1;
            #[allow(clippy::cast_possible_truncation)]
            const WIDTH: u32 = size_of::<$type>() as u32 * 8;

            #[inline]
            fn widen(self) -> u64 {
                u64::from(self)
            }
        }
    };
}

reg_raw!(u8);
reg_raw!(u16);
reg_raw!(u32);
reg_raw!(u64);
