//! # sims-gba-text
//!
//! Extracts the in-game strings from The Sims Game Boy Advance family
//! (The Sims Bustin' Out, The Urbz - Sims in the City, The Sims 2, plus the
//! two Japanese releases). Strings are stored compressed: a per-string bit
//! sequence walks a binary decode tree embedded in the ROM, and the decoded
//! codes are remapped onto accented Latin characters. Decode-only; this
//! crate never writes the format back.
pub mod rom;

// Re-export the main types for convenience
pub use rom::{
    detect_game, Game, Language, MenuStage, Result, RomImage, RomTextError, RomTextReader,
    MENU_COUNT,
};
