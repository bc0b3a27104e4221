use super::{Field, RegRaw};

/// A single (field, value) pair of a field update request.
pub type Update<R = u32> = (Field<R>, R);

/// Computes the next register value for the field update request `updates`.
///
/// Exactly the union of the requested masks is cleared in `raw`, then every
/// field's value is shifted and masked into place. All other bits of `raw` are
/// preserved. The result does not depend on the order of `updates` as long as
/// the masks are pairwise disjoint, which is not checked. An empty request
/// returns `raw` unchanged.
///
/// # Examples
///
/// ```
/// use drone_cmsis::reg::{combine, Field};
///
/// let a = Field::<u32>::new(0, 0x3);
/// let b = Field::<u32>::new(4, 0x30);
/// assert_eq!(combine(0x0000_0000, [(a, 3), (b, 2)]), 0x0000_0023);
/// assert_eq!(combine(0xFFFF_FFFF, [(Field::<u32>::new(8, 0xFF00), 0)]), 0xFFFF_00FF);
/// ```
#[inline]
pub fn combine<R: RegRaw, const N: usize>(raw: R, updates: [Update<R>; N]) -> R {
    let cleared = updates.iter().fold(raw, |raw, &(field, _)| field.clear(raw));
    updates.iter().fold(cleared, |raw, &(field, value)| raw | field.bits(value))
}
