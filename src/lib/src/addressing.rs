//! Effective address computation
//!
//! Expects the program counter to point past the opcode and leaves it
//! past the operand bytes.

use crate::AddressMode;
use crate::Memory;
use crate::MemoryError;
use crate::RegisterFile;

/// What an instruction operates on once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Nothing
    Implied,
    /// The A register
    Accumulator,
    /// The byte following the opcode
    Immediate(u8),
    /// A memory location. For branches and jumps, the target.
    Address(u16),
}

pub(crate) fn read_u16<M: Memory>(mem: &mut M, addr: u16) -> Result<u16, MemoryError> {
    let lo = mem.read(addr)?;
    let hi = mem.read(addr.wrapping_add(1))?;

    Ok(u16::from_le_bytes([lo, hi]))
}

/// Reads a pointer without carrying into the next page: the high byte of
/// a pointer at `0x..FF` comes from `0x..00`. This is what the hardware
/// does for `JMP (ind)` and for zero-page pointers.
pub(crate) fn read_u16_in_page<M: Memory>(mem: &mut M, addr: u16) -> Result<u16, MemoryError> {
    let lo = mem.read(addr)?;
    let hi = mem.read((addr & 0xff00) | (addr.wrapping_add(1) & 0x00ff))?;

    Ok(u16::from_le_bytes([lo, hi]))
}

pub fn resolve<M: Memory>(
    addr_mode: AddressMode,
    regs: &mut RegisterFile,
    mem: &mut M,
) -> Result<Operand, MemoryError> {
    let pc = regs.pc();

    let operand = match addr_mode {
        AddressMode::Implied => Operand::Implied,
        AddressMode::Accumulator => Operand::Accumulator,
        AddressMode::Immediate => Operand::Immediate(mem.read(pc)?),
        AddressMode::Zeropage => Operand::Address(mem.read(pc)?.into()),
        AddressMode::ZeropageX => Operand::Address(mem.read(pc)?.wrapping_add(regs.x()).into()),
        AddressMode::ZeropageY => Operand::Address(mem.read(pc)?.wrapping_add(regs.y()).into()),
        AddressMode::Absolute => Operand::Address(read_u16(mem, pc)?),
        AddressMode::AbsoluteX => {
            Operand::Address(read_u16(mem, pc)?.wrapping_add(regs.x().into()))
        }
        AddressMode::AbsoluteY => {
            Operand::Address(read_u16(mem, pc)?.wrapping_add(regs.y().into()))
        }
        AddressMode::Indirect => {
            let ptr = read_u16(mem, pc)?;
            Operand::Address(read_u16_in_page(mem, ptr)?)
        }
        AddressMode::Xindirect => {
            let ptr = mem.read(pc)?.wrapping_add(regs.x()).into();
            Operand::Address(read_u16_in_page(mem, ptr)?)
        }
        AddressMode::IndirectY => {
            let ptr = mem.read(pc)?.into();
            let base = read_u16_in_page(mem, ptr)?;
            Operand::Address(base.wrapping_add(regs.y().into()))
        }
        AddressMode::Relative => {
            let offset = mem.read(pc)? as i8;
            let next = pc.wrapping_add(1);
            Operand::Address(next.wrapping_add_signed(offset.into()))
        }
    };

    regs.advance_pc(addr_mode.operand_len());

    Ok(operand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ram;

    fn setup(pc: u16, bytes: &[u8]) -> (Ram, RegisterFile) {
        let mut ram = Ram::new();
        ram.load(pc, bytes);
        let mut regs = RegisterFile::new();
        regs.set_pc(pc);
        (ram, regs)
    }

    #[test]
    fn immediate_and_implied() {
        let (mut ram, mut regs) = setup(0x0200, &[0x42]);

        assert_eq!(
            resolve(AddressMode::Implied, &mut regs, &mut ram),
            Ok(Operand::Implied)
        );
        assert_eq!(regs.pc(), 0x0200);
        assert_eq!(
            resolve(AddressMode::Accumulator, &mut regs, &mut ram),
            Ok(Operand::Accumulator)
        );
        assert_eq!(regs.pc(), 0x0200);
        assert_eq!(
            resolve(AddressMode::Immediate, &mut regs, &mut ram),
            Ok(Operand::Immediate(0x42))
        );
        assert_eq!(regs.pc(), 0x0201);
    }

    #[test]
    fn zeropage_indexed_wraps() {
        let (mut ram, mut regs) = setup(0x0200, &[0xf7, 0xf7]);
        *regs.x_mut() = 0x03;
        *regs.y_mut() = 0x10;

        assert_eq!(
            resolve(AddressMode::ZeropageX, &mut regs, &mut ram),
            Ok(Operand::Address(0x00fa))
        );
        assert_eq!(
            resolve(AddressMode::ZeropageY, &mut regs, &mut ram),
            Ok(Operand::Address(0x0007))
        );
        assert_eq!(regs.pc(), 0x0202);
    }

    #[test]
    fn absolute_indexed_crosses_pages() {
        let (mut ram, mut regs) = setup(0x0200, &[0xfe, 0xea, 0xff, 0xff]);
        *regs.x_mut() = 0x27;
        *regs.y_mut() = 0x02;

        assert_eq!(
            resolve(AddressMode::AbsoluteX, &mut regs, &mut ram),
            Ok(Operand::Address(0xeb25))
        );
        assert_eq!(
            resolve(AddressMode::AbsoluteY, &mut regs, &mut ram),
            Ok(Operand::Address(0x0001))
        );
        assert_eq!(regs.pc(), 0x0204);
    }

    #[test]
    fn indirect_page_boundary_quirk() {
        let (mut ram, mut regs) = setup(0x0200, &[0xff, 0x30]);
        ram.load(0x30ff, &[0x80, 0x50]);
        ram.load(0x3000, &[0x40]);

        assert_eq!(
            resolve(AddressMode::Indirect, &mut regs, &mut ram),
            Ok(Operand::Address(0x4080))
        );
        assert_eq!(regs.pc(), 0x0202);
    }

    #[test]
    fn indexed_indirect() {
        let (mut ram, mut regs) = setup(0x0200, &[0xb3]);
        ram.load(0x00da, &[0xfa, 0xea]);
        *regs.x_mut() = 0x27;

        assert_eq!(
            resolve(AddressMode::Xindirect, &mut regs, &mut ram),
            Ok(Operand::Address(0xeafa))
        );
    }

    #[test]
    fn indirect_indexed() {
        let (mut ram, mut regs) = setup(0x0200, &[0xdc]);
        ram.load(0x00dc, &[0xfb, 0xea]);
        *regs.y_mut() = 0x27;

        assert_eq!(
            resolve(AddressMode::IndirectY, &mut regs, &mut ram),
            Ok(Operand::Address(0xeb22))
        );
    }

    #[test]
    fn zeropage_pointer_wraps() {
        let (mut ram, mut regs) = setup(0x0200, &[0xff]);
        ram.load(0x00ff, &[0x34]);
        ram.load(0x0000, &[0x12]);
        ram.load(0x0100, &[0x99]);

        assert_eq!(
            resolve(AddressMode::IndirectY, &mut regs, &mut ram),
            Ok(Operand::Address(0x1234))
        );

        let (mut ram, mut regs) = setup(0x0200, &[0xf0]);
        ram.load(0x00ff, &[0x34]);
        ram.load(0x0000, &[0x12]);
        ram.load(0x0100, &[0x99]);
        *regs.x_mut() = 0x0f;

        assert_eq!(
            resolve(AddressMode::Xindirect, &mut regs, &mut ram),
            Ok(Operand::Address(0x1234))
        );
    }

    #[test]
    fn relative_targets() {
        let (mut ram, mut regs) = setup(0x0201, &[0x45]);
        assert_eq!(
            resolve(AddressMode::Relative, &mut regs, &mut ram),
            Ok(Operand::Address(0x0247))
        );
        assert_eq!(regs.pc(), 0x0202);

        let (mut ram, mut regs) = setup(0x0201, &[0xfe]);
        assert_eq!(
            resolve(AddressMode::Relative, &mut regs, &mut ram),
            Ok(Operand::Address(0x0200))
        );
    }
}
