//! Custom error types for the sims-gba-text crate.

use thiserror::Error;

use super::models::Game;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum RomTextError {
    /// An error originating from I/O operations (the ROM file could not be read).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The image failed a structural check (size range or header magic byte).
    #[error("Invalid ROM image: {0}")]
    InvalidImage(String),

    /// The title ID at 0xAC matches none of the supported games.
    #[error("The ROM's title ID matches no supported game.")]
    UnsupportedGame,

    /// A string ID above the detected game's maximum was requested.
    #[error("String ID {id:#x} is out of range (maximum for this game is {max:#x})")]
    OutOfRange { id: u32, max: u32 },

    /// A computed read would fall outside the image. The original tools read
    /// blindly here; we abort the whole fetch instead.
    #[error("Read of {len} byte(s) at {addr:#x} exceeds ROM length {rom_len:#x}")]
    OutOfBounds { addr: u64, len: u64, rom_len: u64 },

    /// Text was requested from a game whose strings are not Latin-encoded.
    /// Use `fetch_raw` for these.
    #[error("{0:?} stores non-Latin strings; only raw byte output is available")]
    RawOnly(Game),

    /// The decoder produced `limit` characters without hitting a terminator,
    /// which only happens on malformed or misaddressed data.
    #[error("String {string_id:#x} exceeded {limit} characters without a terminator")]
    Unterminated { string_id: u16, limit: usize },
}

/// A convenience `Result` type alias using the crate's `RomTextError` type.
pub type Result<T> = std::result::Result<T, RomTextError>;
