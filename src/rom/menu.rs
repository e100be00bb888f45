//! The Sims 2 menu function-pointer table.
//!
//! Only The Sims 2 carries this table: 0x28 menus, 12 bytes apart, each
//! with a "prepare" and a "logic" GBA function pointer.

use super::error::{Result, RomTextError};
use super::image::RomImage;
use super::models::Game;

/// Which of a menu's two function pointers to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStage {
    Prepare,
    Logic,
}

/// Number of menu entries in the table.
pub const MENU_COUNT: u32 = 0x28;

const PREPARE_BASE: u64 = 0x064F84;
const LOGIC_BASE: u64 = 0x064F88;
const MENU_STRIDE: u64 = 12;

/// Cartridge ROM is mapped at 0x08000000 on the GBA.
const GBA_ROM_MAPPING: u32 = 0x0800_0000;

/// Look up a menu function address, rebased to a file offset.
///
/// The stored value points one byte past the function (Thumb address), so
/// the mapping base plus one is subtracted. Empty or unmapped slots give
/// `Ok(None)`.
pub fn menu_address(
    image: &RomImage,
    game: Game,
    menu_id: u32,
    stage: MenuStage,
) -> Result<Option<u32>> {
    if game != Game::Sims2 {
        return Err(RomTextError::UnsupportedGame);
    }
    if menu_id >= MENU_COUNT {
        return Err(RomTextError::OutOfRange {
            id: menu_id,
            max: MENU_COUNT - 1,
        });
    }

    let base = match stage {
        MenuStage::Prepare => PREPARE_BASE,
        MenuStage::Logic => LOGIC_BASE,
    };
    let pointer = image.read_u32_le(base + u64::from(menu_id) * MENU_STRIDE)?;

    if pointer > GBA_ROM_MAPPING {
        Ok(Some(pointer - GBA_ROM_MAPPING - 1))
    } else {
        Ok(None)
    }
}
