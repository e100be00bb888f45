//! Game identification from the cartridge header.

use log::debug;

use super::error::{Result, RomTextError};
use super::image::RomImage;
use super::models::{
    Game, KNOWN_TITLE_IDS, MAGIC_BYTE, MAGIC_OFFSET, MAX_ROM_SIZE, MIN_ROM_SIZE, TITLE_ID_OFFSET,
};

/// Identify which supported game an image contains.
///
/// Structural failures (size outside the 16-32 MB range, wrong fixed header
/// byte) are errors: such a file is not a usable cartridge image at all. An
/// intact image whose title ID matches no supported game is `Ok(None)` -
/// unsupported is a state callers check, not a failure.
pub fn detect(image: &RomImage) -> Result<Option<Game>> {
    if image.len() < MIN_ROM_SIZE || image.len() > MAX_ROM_SIZE {
        return Err(RomTextError::InvalidImage(format!(
            "size {:#x} outside the expected {:#x}-{:#x} range (trimmed or not a GBA ROM?)",
            image.len(),
            MIN_ROM_SIZE,
            MAX_ROM_SIZE
        )));
    }

    let magic = image.read_u8(MAGIC_OFFSET)?;
    if magic != MAGIC_BYTE {
        return Err(RomTextError::InvalidImage(format!(
            "header byte at {:#x} is {:#04x}, expected {:#04x}",
            MAGIC_OFFSET, magic, MAGIC_BYTE
        )));
    }

    let tid = image.read_bytes(TITLE_ID_OFFSET, 4)?;
    for (game, known) in KNOWN_TITLE_IDS {
        if tid == known.as_slice() {
            debug!("Title ID {:?} detected as {:?}", known, game);
            return Ok(Some(game));
        }
    }

    debug!("Title ID {:02X?} matches no supported game", tid);
    Ok(None)
}
