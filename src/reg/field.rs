use super::RegRaw;

/// Bit-field descriptor: a bit position and a bit mask.
///
/// `(raw & mask) >> position` yields the field value. The mask is taken as the
/// hardware defines it and may be non-contiguous.
///
/// Fields are usually obtained from a register definition table with the
/// [`field!`](crate::reg::field) macro.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field<R: RegRaw = u32> {
    pos: u32,
    msk: R,
}

impl<R: RegRaw> Field<R> {
    /// Creates a new field descriptor.
    ///
    /// `pos` must be less than the bit width of `R`.
    #[inline]
    pub const fn new(pos: u32, msk: R) -> Self {
        Self { pos, msk }
    }

    /// Creates a single-bit field at `offset`.
    ///
    /// # Panics
    ///
    /// If `offset` is out of the bit width of `R`.
    #[inline]
    pub fn bit(offset: u32) -> Self {
        assert!(offset < R::WIDTH);
        Self::new(offset, R::ONE << offset)
    }

    /// Returns the bit position.
    #[inline]
    pub const fn pos(self) -> u32 {
        self.pos
    }

    /// Returns the bit mask.
    #[inline]
    pub const fn msk(self) -> R {
        self.msk
    }

    /// Extracts the field value from `raw`.
    #[inline]
    pub fn read(self, raw: R) -> R {
        (raw & self.msk) >> self.pos
    }

    /// Returns `value` shifted to the field position and masked. Bits of
    /// `value` that do not fit the field are discarded.
    #[inline]
    pub fn bits(self, value: R) -> R {
        (value << self.pos) & self.msk
    }

    /// Clears the field bits of `raw`.
    #[inline]
    pub fn clear(self, raw: R) -> R {
        raw & !self.msk
    }

    /// Replaces the field bits of `raw` with `value`.
    #[inline]
    pub fn write(self, raw: R, value: R) -> R {
        self.clear(raw) | self.bits(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read() {
        let field = Field::new(4, 0x30_u32);
        assert_eq!(field.read(0x0000_0020), 2);
        assert_eq!(field.read(0xFFFF_FFCF), 0);
        assert_eq!(field.read(0xFFFF_FFFF), 3);
    }

    #[test]
    fn bits_discard_overflow() {
        let field = Field::new(4, 0x30_u32);
        assert_eq!(field.bits(2), 0x20);
        assert_eq!(field.bits(0xFF), 0x30);
    }

    #[test]
    fn write_preserves_other_bits() {
        let field = Field::new(8, 0xFF00_u32);
        assert_eq!(field.write(0xFFFF_FFFF, 0), 0xFFFF_00FF);
        assert_eq!(field.write(0x1234_5678, 0xAB), 0x1234_AB78);
    }

    #[test]
    fn non_contiguous_mask() {
        let field = Field::new(0, 0b1010_u8);
        assert_eq!(field.read(0b1111), 0b1010);
        assert_eq!(field.write(0, 0b1111), 0b1010);
    }

    #[test]
    fn bit() {
        assert_eq!(Field::<u32>::bit(31), Field::new(31, 0x8000_0000));
        assert_eq!(Field::<u16>::bit(0), Field::new(0, 1));
    }

    #[test]
    #[should_panic]
    fn bit_out_of_width() {
        Field::<u8>::bit(8);
    }
}
