//! Nested Vectored Interrupt Controller.
//!
//! Enable, disable, set-pending, and clear-pending registers are
//! write-one-to-act: writing a bit acts on that interrupt only, and zero bits
//! are ignored. These operations therefore store a single-bit word directly,
//! without reading the register first.

use crate::reg::{Field, RReg, Register, WReg};

/// Interrupt Set-Enable Registers.
pub const NVIC_ISER: usize = 0xE000_E100;
/// Interrupt Clear-Enable Registers.
pub const NVIC_ICER: usize = 0xE000_E180;
/// Interrupt Set-Pending Registers.
pub const NVIC_ISPR: usize = 0xE000_E200;
/// Interrupt Clear-Pending Registers.
pub const NVIC_ICPR: usize = 0xE000_E280;
/// Interrupt Active Bit Registers.
pub const NVIC_IABR: usize = 0xE000_E300;
/// Interrupt Priority Registers.
pub const NVIC_IPR: usize = 0xE000_E400;

/// Interrupt number of a device.
///
/// # Safety
///
/// `number` must return a valid interrupt number of the device.
pub unsafe trait InterruptNumber: Copy {
    /// Returns the interrupt number, counted from the first device interrupt.
    fn number(self) -> u16;
}

unsafe impl InterruptNumber for u16 {
    #[inline]
    fn number(self) -> u16 {
        self
    }
}

/// Returns the register word and the bit of `irq` in the bank starting at
/// `bank`.
#[inline]
pub fn locate<T: InterruptNumber>(bank: usize, irq: T) -> (Register<u32>, Field<u32>) {
    let number = u32::from(irq.number());
    let word = usize::from(irq.number() / 32);
    (Register::at(bank + word * 4), Field::bit(number % 32))
}

/// Enables the interrupt.
///
/// # Safety
///
/// Unmasking an interrupt may break mask-based critical sections.
#[inline]
pub unsafe fn enable<T: InterruptNumber>(irq: T) {
    unsafe { strobe(NVIC_ISER, irq) };
}

/// Disables the interrupt.
///
/// # Safety
///
/// Must be called on a Cortex-M core.
#[inline]
pub unsafe fn disable<T: InterruptNumber>(irq: T) {
    unsafe { strobe(NVIC_ICER, irq) };
}

/// Sets the interrupt pending.
///
/// # Safety
///
/// Must be called on a Cortex-M core.
#[inline]
pub unsafe fn set_pending<T: InterruptNumber>(irq: T) {
    unsafe { strobe(NVIC_ISPR, irq) };
}

/// Clears the pending state of the interrupt.
///
/// # Safety
///
/// Must be called on a Cortex-M core.
#[inline]
pub unsafe fn clear_pending<T: InterruptNumber>(irq: T) {
    unsafe { strobe(NVIC_ICPR, irq) };
}

/// Returns `true` if the interrupt is enabled.
///
/// # Safety
///
/// Must be called on a Cortex-M core.
#[inline]
pub unsafe fn is_enabled<T: InterruptNumber>(irq: T) -> bool {
    unsafe { probe(NVIC_ISER, irq) }
}

/// Returns `true` if the interrupt is pending.
///
/// # Safety
///
/// Must be called on a Cortex-M core.
#[inline]
pub unsafe fn is_pending<T: InterruptNumber>(irq: T) -> bool {
    unsafe { probe(NVIC_ISPR, irq) }
}

/// Returns `true` if the interrupt is active.
///
/// # Safety
///
/// Must be called on a Cortex-M core.
#[inline]
pub unsafe fn is_active<T: InterruptNumber>(irq: T) -> bool {
    unsafe { probe(NVIC_IABR, irq) }
}

/// Sets the interrupt priority. Higher `niceness` means lower priority.
///
/// Only the `prio_bits` most significant bits of the priority byte are
/// implemented by the device, so `niceness` is shifted into them.
///
/// # Safety
///
/// Changing priorities may break priority-based critical sections.
#[inline]
pub unsafe fn set_priority<T: InterruptNumber>(irq: T, niceness: u8, prio_bits: u8) {
    unsafe { set_priority_at(NVIC_IPR, irq, niceness, prio_bits) };
}

/// Returns the priority byte value for `niceness`.
///
/// # Panics
///
/// If `prio_bits` is not in `1..=8`.
#[inline]
pub fn priority(niceness: u8, prio_bits: u8) -> u8 {
    assert!((1..=8).contains(&prio_bits));
    niceness << (8 - prio_bits)
}

unsafe fn strobe<T: InterruptNumber>(bank: usize, irq: T) {
    let (register, field) = locate(bank, irq);
    unsafe { register.store(field.bits(1)) };
}

unsafe fn probe<T: InterruptNumber>(bank: usize, irq: T) -> bool {
    let (register, field) = locate(bank, irq);
    unsafe { register.read(field) != 0 }
}

unsafe fn set_priority_at<T: InterruptNumber>(ipr: usize, irq: T, niceness: u8, prio_bits: u8) {
    let register = Register::<u8>::at(ipr + usize::from(irq.number()));
    unsafe { register.store(priority(niceness, prio_bits)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_words() {
        assert_eq!(locate(NVIC_ISER, 0_u16), (Register::at(0xE000_E100), Field::bit(0)));
        assert_eq!(locate(NVIC_ISER, 31_u16), (Register::at(0xE000_E100), Field::bit(31)));
        assert_eq!(locate(NVIC_ICER, 32_u16), (Register::at(0xE000_E184), Field::bit(0)));
        assert_eq!(locate(NVIC_ICPR, 85_u16), (Register::at(0xE000_E288), Field::bit(21)));
    }

    #[test]
    fn strobe_writes_single_bit() {
        let mut bank = [0xFFFF_FFFF_u32; 4];
        let base = bank.as_mut_ptr() as usize;
        unsafe { strobe(base, 58_u16) };
        assert_eq!(bank, [0xFFFF_FFFF, 1 << 26, 0xFFFF_FFFF, 0xFFFF_FFFF]);
    }

    #[test]
    fn probe_reads_single_bit() {
        let bank = [0, 1 << 26, 0, 0_u32];
        let base = bank.as_ptr() as usize;
        assert!(unsafe { probe(base, 58_u16) });
        assert!(!unsafe { probe(base, 57_u16) });
        assert!(!unsafe { probe(base, 90_u16) });
    }

    #[test]
    fn priority_bits() {
        assert_eq!(priority(0, 4), 0x00);
        assert_eq!(priority(1, 4), 0x10);
        assert_eq!(priority(15, 4), 0xF0);
        assert_eq!(priority(16, 4), 0x00);
        assert_eq!(priority(3, 3), 0x60);
        assert_eq!(priority(0xFF, 8), 0xFF);
    }

    #[test]
    fn priority_byte_store() {
        let mut ipr = [0_u8; 96];
        let base = ipr.as_mut_ptr() as usize;
        unsafe { set_priority_at(base, 58_u16, 2, 4) };
        assert_eq!(ipr[58], 0x20);
        assert_eq!(ipr.iter().filter(|&&priority| priority != 0).count(), 1);
    }
}
