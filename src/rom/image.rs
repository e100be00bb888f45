//! Bounds-checked little-endian reads over an in-memory cartridge image.

use byteorder::{ByteOrder, LittleEndian};

use super::error::{Result, RomTextError};

/// An immutable, byte-addressable cartridge image.
///
/// The original tools read through raw pointer casts with no bounds
/// checking; every accessor here validates the full read range first so a
/// bad address surfaces as an error instead of reading adjacent memory.
/// Addresses are `u64` so callers can do their offset arithmetic without
/// worrying about wraparound.
pub struct RomImage {
    data: Vec<u8>,
}

/// Shows the length only; the buffer itself is megabytes of cartridge data.
impl std::fmt::Debug for RomImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RomImage").field("len", &self.len()).finish()
    }
}

impl RomImage {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow `len` bytes starting at `addr`, or fail if the range does not
    /// fit inside the image.
    fn slice(&self, addr: u64, len: u64) -> Result<&[u8]> {
        let in_bounds = addr
            .checked_add(len)
            .map(|end| end <= self.len())
            .unwrap_or(false);
        if !in_bounds {
            return Err(RomTextError::OutOfBounds {
                addr,
                len,
                rom_len: self.len(),
            });
        }
        Ok(&self.data[addr as usize..(addr + len) as usize])
    }

    pub fn read_u8(&self, addr: u64) -> Result<u8> {
        Ok(self.slice(addr, 1)?[0])
    }

    pub fn read_u16_le(&self, addr: u64) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.slice(addr, 2)?))
    }

    pub fn read_u32_le(&self, addr: u64) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.slice(addr, 4)?))
    }

    pub fn read_bytes(&self, addr: u64, len: u64) -> Result<&[u8]> {
        self.slice(addr, len)
    }
}
