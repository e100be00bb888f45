//! The bitstream tree decoder shared by every game in the family.
//!
//! Each string is stored as a bit sequence that walks an implicit binary
//! tree. The tree lives in the ROM as two parallel little-endian u16 child
//! tables indexed by node number; node numbers above 0xFF are internal
//! nodes, 0xFF and below are leaf character codes. Bits are consumed
//! LSB-first out of a 32-bit window that slides one byte at a time.

use log::trace;

use super::error::{Result, RomTextError};
use super::image::RomImage;
use super::models::StringLocs;

/// Sentinel for the tree root; also the first internal node number.
const NODE_ROOT: u16 = 0x100;

/// Child table displacements below `node_base`. These exact values are how
/// the game binaries address the two tables (same node index, entries two
/// bytes apart); do not "simplify" them.
const LEFT_DISP: u64 = 0x400;
const RIGHT_DISP: u64 = 0x3FE;

/// Hard cap on decoded length. Real strings are far shorter; hitting this
/// means the bitstream or tables are misaddressed.
const MAX_STRING_LEN: usize = 0x4000;

/// Decode one string's raw character codes.
///
/// The terminating zero code is consumed but not included in the result, so
/// an empty `Vec` means string `string_id` exists and is empty.
pub fn decode(image: &RomImage, locs: &StringLocs, string_id: u16) -> Result<Vec<u8>> {
    let index_entry = image.read_u32_le(u64::from(locs.index_base) + u64::from(string_id) * 4)?;
    let mut shift_addr = u64::from(locs.shift_base) + u64::from(index_entry);
    let mut shift_word = image.read_u32_le(shift_addr)?;
    let mut bit_pos: u32 = 0;

    trace!(
        "string {:#x}: shift addr {:#x}, first word {:#010x}",
        string_id,
        shift_addr,
        shift_word
    );

    let mut out = Vec::new();
    loop {
        let mut node = NODE_ROOT;

        while node > 0xFF {
            let bit = (shift_word >> bit_pos) & 1;
            let disp = if bit == 0 { LEFT_DISP } else { RIGHT_DISP };
            // node > 0xFF here, so node*4 >= 0x400 >= disp and the
            // subtraction cannot underflow.
            node = image.read_u16_le(u64::from(locs.node_base) + u64::from(node) * 4 - disp)?;

            bit_pos += 1;
            if bit_pos == 8 {
                // The window slides one byte and reloads all four bytes,
                // even though only the low eight bits are ever consumed.
                // Kept as-is to match the original address computations.
                bit_pos = 0;
                shift_addr += 1;
                shift_word = image.read_u32_le(shift_addr)?;
            }
        }

        if node == 0 {
            break;
        }
        out.push(node as u8);
        if out.len() > MAX_STRING_LEN {
            return Err(RomTextError::Unterminated {
                string_id,
                limit: MAX_STRING_LEN,
            });
        }
    }

    Ok(out)
}
