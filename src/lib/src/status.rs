//! Processor status register [NV-BDIZC]
//!
//! Packing and unpacking of the flags lives here and nowhere else:
//! PHP/PLP and any save-state tooling go through `to_byte` and
//! `from_byte`.

use bitflags::bitflags;

/// Bit positions, bit 7 to bit 0
pub const NEGATIVE_BIT: u8 = 7;
pub const OVERFLOW_BIT: u8 = 6;
pub const UNUSED_BIT: u8 = 5;
pub const BREAK_BIT: u8 = 4;
pub const DECIMAL_BIT: u8 = 3;
pub const INTERRUPT_DISABLE_BIT: u8 = 2;
pub const ZERO_BIT: u8 = 1;
pub const CARRY_BIT: u8 = 0;

bitflags! {
    /// SR Flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// N	Negative
        const NEGATIVE = 1 << NEGATIVE_BIT;
        /// V	Overflow
        const OVERFLOW = 1 << OVERFLOW_BIT;
        /// -   Ignored (hardwired to the logic `1`)
        const UNUSED = 1 << UNUSED_BIT;
        /// B	Break. Set in the value pushed by PHP
        const BREAK = 1 << BREAK_BIT;
        /// D	Decimal. Settable, but the 2A03 has no BCD arithmetic
        const DECIMAL = 1 << DECIMAL_BIT;
        /// I	Interrupt (IRQ) disable
        const INTERRUPT_DISABLE = 1 << INTERRUPT_DISABLE_BIT;
        /// Z	Zero
        const ZERO = 1 << ZERO_BIT;
        /// C	Carry
        const CARRY = 1 << CARRY_BIT;
    }
}

impl Status {
    /// Power-on value: everything clear but the hardwired bit.
    pub const fn power_on() -> Self {
        Status::UNUSED
    }

    /// Unpacks a status byte. Bit 5 always reads back as `1`.
    pub const fn from_byte(value: u8) -> Self {
        Status::from_bits_retain(value | Status::UNUSED.bits())
    }

    /// Packs the flags into a status byte.
    pub const fn to_byte(self) -> u8 {
        self.bits() | Status::UNUSED.bits()
    }

    /// Sets Zero and Negative from a result byte.
    #[inline]
    pub fn update_nz(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, (value as i8) < 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::power_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_positions() {
        assert_eq!(Status::CARRY.bits(), 0x01);
        assert_eq!(Status::ZERO.bits(), 0x02);
        assert_eq!(Status::INTERRUPT_DISABLE.bits(), 0x04);
        assert_eq!(Status::DECIMAL.bits(), 0x08);
        assert_eq!(Status::BREAK.bits(), 0x10);
        assert_eq!(Status::UNUSED.bits(), 0x20);
        assert_eq!(Status::OVERFLOW.bits(), 0x40);
        assert_eq!(Status::NEGATIVE.bits(), 0x80);
    }

    #[test]
    fn round_trip_forces_bit_5() {
        for value in 0..=u8::MAX {
            assert_eq!(Status::from_byte(value).to_byte(), value | 0x20);
        }
    }

    #[test]
    fn update_nz() {
        let mut p = Status::power_on() | Status::CARRY;

        p.update_nz(0);
        assert!(p.contains(Status::ZERO));
        assert!(!p.contains(Status::NEGATIVE));

        p.update_nz(0x80);
        assert!(!p.contains(Status::ZERO));
        assert!(p.contains(Status::NEGATIVE));

        p.update_nz(0x7f);
        assert!(!p.intersects(Status::ZERO | Status::NEGATIVE));
        assert!(p.contains(Status::CARRY));
    }
}
