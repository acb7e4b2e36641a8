//! Memory as seen by the CPU
//!
//! The core only needs a flat 16-bit address space. Anything behind it
//! (mirroring, PPU registers, mapper latches) is up to the implementor.

use thiserror::Error;

/// Memory errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// Could not read at the address
    #[error("bad address {0:#06x}")]
    BadAddress(u16),
    /// Could not write at the address
    #[error("read-only address {0:#06x}")]
    ReadOnlyAddress(u16),
}

/// No more than 64 KiB of memory is supported
pub const MAX_MEMORY_SIZE: usize = u16::MAX as usize + 1;

/// A 16-bit addressable, 8-bit cell memory.
///
/// Reads take `&mut self`: on real hardware reading a device register
/// may change its state.
pub trait Memory {
    fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError>;
    fn read(&mut self, addr: u16) -> Result<u8, MemoryError>;
}

/// Plain 64 KiB of RAM, optionally with the top part write-protected.
#[derive(Clone)]
pub struct Ram {
    cells: [u8; MAX_MEMORY_SIZE],
    rom_start: Option<u16>,
}

impl Ram {
    pub fn new() -> Self {
        Self {
            cells: [0; MAX_MEMORY_SIZE],
            rom_start: None,
        }
    }

    /// Everything from `rom_start` up to 0xFFFF rejects CPU writes.
    pub fn with_rom_start(rom_start: u16) -> Self {
        Self {
            cells: [0; MAX_MEMORY_SIZE],
            rom_start: Some(rom_start),
        }
    }

    /// Copies `bytes` starting at `addr`, wrapping past 0xFFFF.
    /// Bypasses write protection, this is how the ROM gets there.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut addr = addr;
        for &b in bytes {
            self.cells[addr as usize] = b;
            addr = addr.wrapping_add(1);
        }
    }

    /// Little-endian word, e.g. for fetching a vector.
    pub fn read_u16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([
            self.cells[addr as usize],
            self.cells[addr.wrapping_add(1) as usize],
        ])
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Ram {
    fn default() -> Self {
        Ram::new()
    }
}

impl core::fmt::Debug for Ram {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ram")
            .field("rom_start", &self.rom_start)
            .finish_non_exhaustive()
    }
}

impl Memory for Ram {
    fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError> {
        if matches!(self.rom_start, Some(rom_start) if addr >= rom_start) {
            return Err(MemoryError::ReadOnlyAddress(addr));
        }

        self.cells[addr as usize] = value;
        Ok(())
    }

    fn read(&mut self, addr: u16) -> Result<u8, MemoryError> {
        Ok(self.cells[addr as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_window_rejects_writes() {
        let mut ram = Ram::with_rom_start(0xe000);

        assert_eq!(ram.write(0xdfff, 0x12), Ok(()));
        assert_eq!(
            ram.write(0xe000, 0x34),
            Err(MemoryError::ReadOnlyAddress(0xe000))
        );
        assert_eq!(ram.read(0xdfff), Ok(0x12));
        assert_eq!(ram.read(0xe000), Ok(0));
    }

    #[test]
    fn load_wraps_and_ignores_rom_window() {
        let mut ram = Ram::with_rom_start(0x8000);
        ram.load(0xfffe, &[0xaa, 0xbb, 0xcc]);

        assert_eq!(ram.read(0xfffe), Ok(0xaa));
        assert_eq!(ram.read(0xffff), Ok(0xbb));
        assert_eq!(ram.read(0x0000), Ok(0xcc));
        assert_eq!(ram.read_u16(0xfffe), 0xbbaa);
    }
}
