//! Register file
//!
//! MOS 6502 has three 8-bit data registers, the 8-bit stack pointer,
//! the status register and the 16-bit program counter.

use core::fmt::Debug;

use crate::Status;

/// Stack pointer value after reset
pub const STACK_TOP: u8 = 0xff;

/// Register
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Accumulator
    A = 0,
    /// X index register
    X = 1,
    /// Y index register
    Y = 2,
    /// Stack pointer. The stack grows top-down
    S = 3,
}

/// MOS 6502 register file
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RegisterFile {
    /// Program counter
    pc: u16,
    /// A, X, Y, S
    r: [u8; 4],
    /// Status register [NV-BDIZC]
    p: Status,
}

impl RegisterFile {
    /// Power-on state with the program counter at zero.
    pub fn new() -> Self {
        Self {
            pc: 0,
            r: [0, 0, 0, STACK_TOP],
            p: Status::power_on(),
        }
    }

    /// Back to the power-on state. The program counter is left alone,
    /// where it points is the embedding system's business.
    pub fn reset(&mut self) {
        self.r = [0, 0, 0, STACK_TOP];
        self.p = Status::power_on();
    }

    #[inline]
    pub fn reg_mut(&mut self, reg: Register) -> &mut u8 {
        &mut self.r[reg as usize]
    }

    #[inline]
    pub fn reg(&self, reg: Register) -> u8 {
        self.r[reg as usize]
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.reg(Register::A)
    }

    #[inline]
    pub fn x(&self) -> u8 {
        self.reg(Register::X)
    }

    #[inline]
    pub fn y(&self) -> u8 {
        self.reg(Register::Y)
    }

    #[inline]
    pub fn sp(&self) -> u8 {
        self.reg(Register::S)
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    #[inline]
    pub fn a_mut(&mut self) -> &mut u8 {
        self.reg_mut(Register::A)
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut u8 {
        self.reg_mut(Register::X)
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut u8 {
        self.reg_mut(Register::Y)
    }

    #[inline]
    pub fn sp_mut(&mut self) -> &mut u8 {
        self.reg_mut(Register::S)
    }

    #[inline]
    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc
    }

    #[inline]
    pub fn advance_pc(&mut self, count: u16) {
        self.pc = self.pc.wrapping_add(count);
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.p
    }

    #[inline]
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.p
    }

    #[inline]
    pub fn flag_set(&self, flag: Status) -> bool {
        self.p.contains(flag)
    }

    #[inline]
    pub fn set_flag_from_cond(&mut self, flag: Status, cond: bool) {
        self.p.set(flag, cond);
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Status) {
        self.p.insert(flag)
    }

    #[inline]
    pub fn clear_flag(&mut self, flag: Status) {
        self.p.remove(flag)
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        RegisterFile::new()
    }
}

impl Debug for RegisterFile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            self.pc,
            self.a(),
            self.x(),
            self.y(),
            self.p.to_byte(),
            self.sp()
        )
    }
}
