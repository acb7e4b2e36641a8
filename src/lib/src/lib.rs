//! Behavioral emulator of the MOS 6502 core of the NES CPU

#![cfg_attr(not(feature = "std"), no_std)]

mod addressing;
mod cpu;
mod insns;
mod memory;
mod regfile;
mod status;

pub use crate::addressing::*;
pub use crate::cpu::*;
pub use crate::insns::*;
pub use crate::memory::*;
pub use crate::regfile::*;
pub use crate::status::*;
