//! Behavioral emulator of the NES flavour of MOS 6502
//!
//! There is no emulation of the microarch layer, e.g., no:
//! * cycle-accurate emulation or cycle counting,
//! * interrupts (BRK and RTI decode as invalid),
//! * decimal mode: the D flag can be set, ADC/SBC ignore it as on the 2A03,
//! * support for "undocumented" instructions.
//!
//! The memory is not owned: each `step` borrows it for the duration of
//! one instruction, so the embedding system is free to swap banks or
//! poke registers in between.
//!
//! Unsupported instructions and memory faults jam the processor: the
//! register state is rolled back to the start of the faulting
//! instruction, and only a reset will make it run again. Memory is not
//! rolled back: a JSR faulting on its second stack write leaves the high
//! byte of the return address pushed.

use thiserror::Error;

use crate::addressing;
use crate::addressing::Operand;
use crate::insns::decode_insn;
use crate::insns::Insn;
use crate::AddressMode;
use crate::Memory;
use crate::MemoryError;
use crate::Register;
use crate::RegisterFile;
use crate::Status;

/// When a reset is requested, the low and the high
/// 8 bits of the program counter are loaded
/// from a word at this address.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Bottom of the stack
pub const STACK_BOTTOM: u16 = 0x0100;

/// Run error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// Malformed or unknown instruction was fetched
    #[error("invalid opcode {opcode:#04x} at {pc:#06x} [{registers:?}]")]
    InvalidOpcode {
        opcode: u8,
        pc: u16,
        registers: RegisterFile,
    },
    /// The opcode itself could not be read
    #[error("{source} fetching the instruction at {pc:#06x} [{registers:?}]")]
    InstructionFetch {
        pc: u16,
        registers: RegisterFile,
        source: MemoryError,
    },
    /// Error occurred when the instruction accessed the memory
    #[error("{source} executing {opcode:#04x} at {pc:#06x} [{registers:?}]")]
    MemoryAccess {
        opcode: u8,
        pc: u16,
        registers: RegisterFile,
        source: MemoryError,
    },
}

/// Why `run` returned without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunExit {
    /// An instruction jumped or branched to itself
    Trapped { pc: u16, steps: u64 },
    /// The step budget ran out
    StepLimit(u64),
}

/// Behavioral MOS 6502 emulator
#[derive(Debug, Clone)]
pub struct Cpu {
    reg_file: RegisterFile,
    // Jammed, only reset will help
    fault: Option<CpuError>,
    // Opcode and registers at the start of the instruction being executed
    insn_opcode: u8,
    insn_registers: RegisterFile,
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_registers(RegisterFile::default())
    }

    pub fn with_registers(regf: RegisterFile) -> Self {
        Self {
            reg_file: regf,
            fault: None,
            insn_opcode: 0,
            insn_registers: regf,
        }
    }

    /// Power-on state: A=X=Y=0, SP=0xFF, flags clear but bit 5.
    /// The program counter is kept; see `reset_to`.
    pub fn reset(&mut self) {
        self.reg_file.reset();
        self.fault = None;
        log::debug!("reset: {:?}", self.reg_file);
    }

    pub fn reset_to(&mut self, pc: u16) {
        self.reg_file.set_pc(pc);
        self.reset();
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.reg_file
    }

    pub fn a(&self) -> u8 {
        self.reg_file.a()
    }

    pub fn x(&self) -> u8 {
        self.reg_file.x()
    }

    pub fn y(&self) -> u8 {
        self.reg_file.y()
    }

    pub fn sp(&self) -> u8 {
        self.reg_file.sp()
    }

    pub fn pc(&self) -> u16 {
        self.reg_file.pc()
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.reg_file.set_pc(pc);
    }

    pub fn flag_set(&self, flag: Status) -> bool {
        self.reg_file.flag_set(flag)
    }

    pub fn processor_status(&self) -> u8 {
        self.reg_file.status().to_byte()
    }

    pub fn set_processor_status(&mut self, value: u8) {
        *self.reg_file.status_mut() = Status::from_byte(value);
    }

    pub fn fault(&self) -> Option<CpuError> {
        self.fault
    }

    #[inline]
    fn mem_err(&self) -> impl Fn(MemoryError) -> CpuError {
        let opcode = self.insn_opcode;
        let registers = self.insn_registers;
        move |source| CpuError::MemoryAccess {
            opcode,
            pc: registers.pc(),
            registers,
            source,
        }
    }

    fn read_u8<M: Memory>(&self, mem: &mut M, addr: u16) -> Result<u8, CpuError> {
        mem.read(addr).map_err(self.mem_err())
    }

    fn write_u8<M: Memory>(&self, mem: &mut M, addr: u16, value: u8) -> Result<(), CpuError> {
        mem.write(addr, value).map_err(self.mem_err())
    }

    fn resolve<M: Memory>(
        &mut self,
        mem: &mut M,
        addr_mode: AddressMode,
    ) -> Result<Operand, CpuError> {
        let err = self.mem_err();
        addressing::resolve(addr_mode, &mut self.reg_file, mem).map_err(err)
    }

    fn load<M: Memory>(&mut self, mem: &mut M, operand: Operand) -> Result<u8, CpuError> {
        match operand {
            Operand::Immediate(value) => Ok(value),
            Operand::Address(ea) => self.read_u8(mem, ea),
            Operand::Accumulator => Ok(self.reg_file.a()),
            Operand::Implied => unreachable!("no operand to load"),
        }
    }

    fn store<M: Memory>(&mut self, mem: &mut M, operand: Operand, value: u8) -> Result<(), CpuError> {
        match operand {
            Operand::Address(ea) => self.write_u8(mem, ea, value),
            Operand::Accumulator => {
                *self.reg_file.a_mut() = value;
                Ok(())
            }
            Operand::Immediate(_) | Operand::Implied => unreachable!("no operand to store to"),
        }
    }

    fn target<M: Memory>(&mut self, mem: &mut M, addr_mode: AddressMode) -> Result<u16, CpuError> {
        match self.resolve(mem, addr_mode)? {
            Operand::Address(ea) => Ok(ea),
            operand => unreachable!("{operand:?} is not a jump target"),
        }
    }

    #[inline]
    fn update_flags_nz(&mut self, data: u8) {
        self.reg_file.status_mut().update_nz(data);
    }

    #[inline]
    fn read_modify_to_reg<M, F>(
        &mut self,
        mem: &mut M,
        addr_mode: AddressMode,
        reg: Register,
        modify: F,
    ) -> Result<(), CpuError>
    where
        M: Memory,
        F: FnOnce(u8) -> u8,
    {
        let operand = self.resolve(mem, addr_mode)?;
        let value = modify(self.load(mem, operand)?);
        *self.reg_file.reg_mut(reg) = value;
        self.update_flags_nz(value);

        Ok(())
    }

    #[inline]
    fn mem_to_reg<M: Memory>(
        &mut self,
        mem: &mut M,
        addr_mode: AddressMode,
        reg: Register,
    ) -> Result<(), CpuError> {
        self.read_modify_to_reg(mem, addr_mode, reg, |v| v)
    }

    #[inline]
    fn reg_to_mem<M: Memory>(
        &mut self,
        mem: &mut M,
        reg: Register,
        addr_mode: AddressMode,
    ) -> Result<(), CpuError> {
        let operand = self.resolve(mem, addr_mode)?;
        let value = self.reg_file.reg(reg);
        self.store(mem, operand, value)
    }

    #[inline]
    fn reg_to_reg(&mut self, reg_src: Register, reg_dst: Register) {
        let value = self.reg_file.reg(reg_src);
        *self.reg_file.reg_mut(reg_dst) = value;
        self.update_flags_nz(value);
    }

    /// Shifts, rotates, INC and DEC on either A or memory. `modify` gets
    /// the old value and the carry in, returns the new value and the
    /// carry out (`None` leaves the carry alone).
    #[inline]
    fn read_modify_write<M, F>(
        &mut self,
        mem: &mut M,
        addr_mode: AddressMode,
        modify: F,
    ) -> Result<(), CpuError>
    where
        M: Memory,
        F: FnOnce(u8, bool) -> (u8, Option<bool>),
    {
        let operand = self.resolve(mem, addr_mode)?;
        let value = self.load(mem, operand)?;
        let (value, carry) = modify(value, self.reg_file.flag_set(Status::CARRY));
        self.store(mem, operand, value)?;
        if let Some(carry) = carry {
            self.reg_file.set_flag_from_cond(Status::CARRY, carry);
        }
        self.update_flags_nz(value);

        Ok(())
    }

    #[inline]
    fn read_modify_write_reg<F>(&mut self, reg: Register, modify: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = modify(self.reg_file.reg(reg));
        *self.reg_file.reg_mut(reg) = value;
        self.update_flags_nz(value);
    }

    /// Writes, then decrements the stack pointer. Wraps around silently.
    #[inline]
    fn stack_push_u8<M: Memory>(&mut self, mem: &mut M, value: u8) -> Result<(), CpuError> {
        let sp = self.reg_file.sp();
        self.write_u8(mem, STACK_BOTTOM + sp as u16, value)?;
        *self.reg_file.sp_mut() = sp.wrapping_sub(1);

        Ok(())
    }

    /// Increments the stack pointer, then reads. Wraps around silently.
    #[inline]
    fn stack_pull_u8<M: Memory>(&mut self, mem: &mut M) -> Result<u8, CpuError> {
        let sp = self.reg_file.sp().wrapping_add(1);
        *self.reg_file.sp_mut() = sp;
        self.read_u8(mem, STACK_BOTTOM + sp as u16)
    }

    #[inline]
    fn stack_push_u16<M: Memory>(&mut self, mem: &mut M, value: u16) -> Result<(), CpuError> {
        let [lo, hi] = value.to_le_bytes();
        self.stack_push_u8(mem, hi)?;
        self.stack_push_u8(mem, lo)?;

        Ok(())
    }

    #[inline]
    fn stack_pull_u16<M: Memory>(&mut self, mem: &mut M) -> Result<u16, CpuError> {
        let lo = self.stack_pull_u8(mem)?;
        let hi = self.stack_pull_u8(mem)?;

        Ok(u16::from_le_bytes([lo, hi]))
    }

    #[inline]
    fn branch<M: Memory>(
        &mut self,
        mem: &mut M,
        addr_mode: AddressMode,
        flag: Status,
        expected: bool,
    ) -> Result<(), CpuError> {
        // Always consume the offset, jump only if the condition holds
        let target = self.target(mem, addr_mode)?;
        if self.reg_file.flag_set(flag) == expected {
            self.reg_file.set_pc(target);
        }

        Ok(())
    }

    #[inline]
    fn compare_reg_mem<M: Memory>(
        &mut self,
        mem: &mut M,
        reg: Register,
        addr_mode: AddressMode,
    ) -> Result<(), CpuError> {
        let operand = self.resolve(mem, addr_mode)?;
        let memv = self.load(mem, operand)?;
        let regv = self.reg_file.reg(reg);

        self.update_flags_nz(regv.wrapping_sub(memv));
        self.reg_file.set_flag_from_cond(Status::CARRY, regv >= memv);

        Ok(())
    }

    /// Binary addition with carry, the shared core of ADC and SBC.
    fn add_with_carry(&mut self, v: u8) {
        let a = self.reg_file.a();
        let carry_in = self.reg_file.flag_set(Status::CARRY) as u16;
        let r = a as u16 + v as u16 + carry_in;

        // Signed overflow: both operands have the same sign and the
        // result's sign differs. See
        // https://www.righto.com/2012/12/the-6502-overflow-flag-explained.html
        let overflow = (a as u16 ^ r) & (v as u16 ^ r) & 0x0080 != 0;

        *self.reg_file.a_mut() = r as u8;
        self.reg_file.set_flag_from_cond(Status::CARRY, r > 0xff);
        self.reg_file.set_flag_from_cond(Status::OVERFLOW, overflow);
        self.update_flags_nz(r as u8);
    }

    #[inline]
    fn adc<M: Memory>(&mut self, mem: &mut M, addr_mode: AddressMode) -> Result<(), CpuError> {
        let operand = self.resolve(mem, addr_mode)?;
        let v = self.load(mem, operand)?;
        self.add_with_carry(v);

        Ok(())
    }

    #[inline]
    fn sbc<M: Memory>(&mut self, mem: &mut M, addr_mode: AddressMode) -> Result<(), CpuError> {
        // In the hardware, `sbc operand` is `adc ~operand`. There is no
        // explicit borrow flag, carry set means no borrow.
        let operand = self.resolve(mem, addr_mode)?;
        let v = self.load(mem, operand)?;
        self.add_with_carry(!v);

        Ok(())
    }

    #[inline]
    fn bit<M: Memory>(&mut self, mem: &mut M, addr_mode: AddressMode) -> Result<(), CpuError> {
        let operand = self.resolve(mem, addr_mode)?;
        let v = self.load(mem, operand)?;

        // Only Zero looks at A, N and V come from the operand itself
        let zero = self.reg_file.a() & v == 0;
        let p = self.reg_file.status_mut();
        p.set(Status::ZERO, zero);
        p.set(Status::OVERFLOW, v & Status::OVERFLOW.bits() != 0);
        p.set(Status::NEGATIVE, v & Status::NEGATIVE.bits() != 0);

        Ok(())
    }

    fn execute<M: Memory>(&mut self, mem: &mut M) -> Result<Insn, CpuError> {
        // Fetch instruction
        let registers = self.reg_file;
        let pc = registers.pc();
        let opcode = mem
            .read(pc)
            .map_err(|source| CpuError::InstructionFetch {
                pc,
                registers,
                source,
            })?;
        self.insn_opcode = opcode;
        self.insn_registers = registers;

        // Decode instruction from the opcode
        let insn = decode_insn(opcode).ok_or(CpuError::InvalidOpcode {
            opcode,
            pc,
            registers,
        })?;
        log::trace!("{pc:04X}  {opcode:02X}  {insn} {registers:?}");
        self.reg_file.advance_pc(1);

        // Execute instruction
        match insn {
            Insn::LDA(addr_mode) => self.mem_to_reg(mem, addr_mode, Register::A)?,
            Insn::LDX(addr_mode) => self.mem_to_reg(mem, addr_mode, Register::X)?,
            Insn::LDY(addr_mode) => self.mem_to_reg(mem, addr_mode, Register::Y)?,
            Insn::STA(addr_mode) => self.reg_to_mem(mem, Register::A, addr_mode)?,
            Insn::STX(addr_mode) => self.reg_to_mem(mem, Register::X, addr_mode)?,
            Insn::STY(addr_mode) => self.reg_to_mem(mem, Register::Y, addr_mode)?,

            Insn::TAX => self.reg_to_reg(Register::A, Register::X),
            Insn::TAY => self.reg_to_reg(Register::A, Register::Y),
            Insn::TXA => self.reg_to_reg(Register::X, Register::A),
            Insn::TYA => self.reg_to_reg(Register::Y, Register::A),
            Insn::TSX => self.reg_to_reg(Register::S, Register::X),
            // The only transfer that leaves the flags alone
            Insn::TXS => *self.reg_file.sp_mut() = self.reg_file.x(),

            Insn::ADC(addr_mode) => self.adc(mem, addr_mode)?,
            Insn::SBC(addr_mode) => self.sbc(mem, addr_mode)?,
            Insn::CMP(addr_mode) => self.compare_reg_mem(mem, Register::A, addr_mode)?,
            Insn::CPX(addr_mode) => self.compare_reg_mem(mem, Register::X, addr_mode)?,
            Insn::CPY(addr_mode) => self.compare_reg_mem(mem, Register::Y, addr_mode)?,

            Insn::AND(addr_mode) => {
                let a = self.reg_file.a();
                self.read_modify_to_reg(mem, addr_mode, Register::A, |v| v & a)?;
            }
            Insn::ORA(addr_mode) => {
                let a = self.reg_file.a();
                self.read_modify_to_reg(mem, addr_mode, Register::A, |v| v | a)?;
            }
            Insn::EOR(addr_mode) => {
                let a = self.reg_file.a();
                self.read_modify_to_reg(mem, addr_mode, Register::A, |v| v ^ a)?;
            }
            Insn::BIT(addr_mode) => self.bit(mem, addr_mode)?,

            Insn::ASL(addr_mode) => {
                self.read_modify_write(mem, addr_mode, |v, _| (v << 1, Some(v & 0x80 != 0)))?
            }
            Insn::LSR(addr_mode) => {
                self.read_modify_write(mem, addr_mode, |v, _| (v >> 1, Some(v & 0x01 != 0)))?
            }
            Insn::ROL(addr_mode) => self.read_modify_write(mem, addr_mode, |v, c| {
                ((v << 1) | c as u8, Some(v & 0x80 != 0))
            })?,
            Insn::ROR(addr_mode) => self.read_modify_write(mem, addr_mode, |v, c| {
                ((v >> 1) | (c as u8) << 7, Some(v & 0x01 != 0))
            })?,
            Insn::INC(addr_mode) => {
                self.read_modify_write(mem, addr_mode, |v, _| (v.wrapping_add(1), None))?
            }
            Insn::DEC(addr_mode) => {
                self.read_modify_write(mem, addr_mode, |v, _| (v.wrapping_sub(1), None))?
            }
            Insn::INX => self.read_modify_write_reg(Register::X, |v| v.wrapping_add(1)),
            Insn::INY => self.read_modify_write_reg(Register::Y, |v| v.wrapping_add(1)),
            Insn::DEX => self.read_modify_write_reg(Register::X, |v| v.wrapping_sub(1)),
            Insn::DEY => self.read_modify_write_reg(Register::Y, |v| v.wrapping_sub(1)),

            Insn::BCC(addr_mode) => self.branch(mem, addr_mode, Status::CARRY, false)?,
            Insn::BCS(addr_mode) => self.branch(mem, addr_mode, Status::CARRY, true)?,
            Insn::BNE(addr_mode) => self.branch(mem, addr_mode, Status::ZERO, false)?,
            Insn::BEQ(addr_mode) => self.branch(mem, addr_mode, Status::ZERO, true)?,
            Insn::BVC(addr_mode) => self.branch(mem, addr_mode, Status::OVERFLOW, false)?,
            Insn::BVS(addr_mode) => self.branch(mem, addr_mode, Status::OVERFLOW, true)?,
            Insn::BPL(addr_mode) => self.branch(mem, addr_mode, Status::NEGATIVE, false)?,
            Insn::BMI(addr_mode) => self.branch(mem, addr_mode, Status::NEGATIVE, true)?,

            Insn::JMP(addr_mode) => {
                let ea = self.target(mem, addr_mode)?;
                self.reg_file.set_pc(ea);
            }
            Insn::JSR(addr_mode) => {
                // Get the new PC location (which also skips the JSR instruction bytes)
                let ea = self.target(mem, addr_mode)?;
                // The return address pushed is that of the last JSR byte,
                // RTS adds one
                self.stack_push_u16(mem, self.reg_file.pc().wrapping_sub(1))?;
                self.reg_file.set_pc(ea);
            }
            Insn::RTS => {
                let pc = self.stack_pull_u16(mem)?;
                self.reg_file.set_pc(pc.wrapping_add(1));
            }

            Insn::PHA => self.stack_push_u8(mem, self.reg_file.a())?,
            Insn::PHP => {
                let p = self.reg_file.status() | Status::BREAK | Status::UNUSED;
                self.stack_push_u8(mem, p.bits())?;
            }
            Insn::PLA => {
                let value = self.stack_pull_u8(mem)?;
                *self.reg_file.a_mut() = value;
                self.update_flags_nz(value);
            }
            Insn::PLP => {
                let value = self.stack_pull_u8(mem)?;
                *self.reg_file.status_mut() = Status::from_byte(value);
            }

            Insn::CLC => self.reg_file.clear_flag(Status::CARRY),
            Insn::CLD => self.reg_file.clear_flag(Status::DECIMAL),
            Insn::CLI => self.reg_file.clear_flag(Status::INTERRUPT_DISABLE),
            Insn::CLV => self.reg_file.clear_flag(Status::OVERFLOW),
            Insn::SEC => self.reg_file.set_flag(Status::CARRY),
            Insn::SED => self.reg_file.set_flag(Status::DECIMAL),
            Insn::SEI => self.reg_file.set_flag(Status::INTERRUPT_DISABLE),

            Insn::NOP => {}
        };

        Ok(insn)
    }

    /// Executes exactly one instruction.
    pub fn step<M: Memory>(&mut self, mem: &mut M) -> Result<Insn, CpuError> {
        // If the processor faulted, refuse to run.
        if let Some(f) = self.fault {
            return Err(f);
        }

        // The register state is rolled back on an instruction fault
        let registers = self.reg_file;
        match self.execute(mem) {
            Err(e) => {
                log::error!("jammed: {e}");
                self.fault = Some(e);
                self.reg_file = registers;
                Err(e)
            }
            Ok(insn) => Ok(insn),
        }
    }

    /// Steps until an instruction leaves the program counter where it
    /// was (a `JMP *` style trap) or `max_steps` instructions retire.
    pub fn run<M: Memory>(&mut self, mem: &mut M, max_steps: u64) -> Result<RunExit, CpuError> {
        for steps in 1..=max_steps {
            let pc = self.reg_file.pc();
            self.step(mem)?;
            if self.reg_file.pc() == pc {
                log::debug!("trapped at {pc:#06x} after {steps} instructions");
                return Ok(RunExit::Trapped { pc, steps });
            }
        }

        Ok(RunExit::StepLimit(max_steps))
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::new()
    }
}
