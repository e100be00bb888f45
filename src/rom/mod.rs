//! Core ROM text extraction module

pub mod charset;
pub mod error;
pub mod models;
mod decoder;
mod ident;
mod image;
mod menu;

use std::fs;
use std::path::Path;

use log::info;

pub use error::{Result, RomTextError};
pub use image::RomImage;
pub use menu::{MenuStage, MENU_COUNT};
pub use models::{Game, Language, StringLocs};

/// Identify which supported game an image contains, without building a
/// reader. `Ok(None)` means the image is intact but the title is not one of
/// the supported games.
pub fn detect_game(image: &RomImage) -> Result<Option<Game>> {
    ident::detect(image)
}

/// The main entry point: a validated cartridge image plus its detected game.
///
/// Fetching is read-only and recomputes from scratch on every call, so a
/// shared reader can serve concurrent lookups without locking.
#[derive(Debug)]
pub struct RomTextReader {
    image: RomImage,
    game: Game,
}

impl RomTextReader {
    /// Load a ROM file and validate it.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The size or header magic byte is wrong (trimmed/non-GBA file)
    /// - The title ID matches no supported game
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading ROM image: {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Build a reader from an already-loaded image.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let image = RomImage::new(data);
        let game = ident::detect(&image)?.ok_or(RomTextError::UnsupportedGame)?;

        info!(
            "Detected {:?} ({} strings{})",
            game,
            u32::from(game.max_string_id()) + 1,
            if game.raw_only() { ", raw output only" } else { "" }
        );

        Ok(Self { image, game })
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn image(&self) -> &RomImage {
        &self.image
    }

    /// The highest valid string ID for the detected game.
    pub fn max_string_id(&self) -> u16 {
        self.game.max_string_id()
    }

    /// Fetch one string as text.
    ///
    /// The Japanese releases cannot be remapped to Latin text and yield
    /// [`RomTextError::RawOnly`]; use [`fetch_raw`](Self::fetch_raw) there.
    /// The language picks the bank; IDs above the game's maximum are an
    /// explicit error rather than being clamped.
    pub fn fetch_text(&self, string_id: u16, language: Language) -> Result<String> {
        if self.game.raw_only() {
            return Err(RomTextError::RawOnly(self.game));
        }
        let raw = self.fetch_raw_in(string_id, language)?;
        Ok(charset::remap(&raw))
    }

    /// Fetch one string's undecoded character codes.
    ///
    /// This is the primary surface for the Japanese releases (which have a
    /// single string bank), but works for any game.
    pub fn fetch_raw(&self, string_id: u16) -> Result<Vec<u8>> {
        self.fetch_raw_in(string_id, Language::default())
    }

    fn fetch_raw_in(&self, string_id: u16, language: Language) -> Result<Vec<u8>> {
        self.game.check_string_id(string_id)?;
        let locs = self.game.string_locs(language);
        decoder::decode(&self.image, &locs, string_id)
    }

    /// Iterate over every string in one language bank, in ID order.
    pub fn iter_strings(&self, language: Language) -> StringIterator<'_> {
        StringIterator {
            reader: self,
            language,
            next_id: 0,
            done: false,
        }
    }

    /// Look up a Sims 2 menu function address, rebased to a file offset.
    /// Fails for the other games, which have no menu table.
    pub fn menu_address(&self, menu_id: u32, stage: MenuStage) -> Result<Option<u32>> {
        menu::menu_address(&self.image, self.game, menu_id, stage)
    }
}

/// Iterator over `(string_id, text)` pairs of one language bank.
///
/// Decoding errors end the iteration after being yielded.
pub struct StringIterator<'a> {
    reader: &'a RomTextReader,
    language: Language,
    next_id: u16,
    done: bool,
}

impl<'a> Iterator for StringIterator<'a> {
    type Item = Result<(u16, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next_id > self.reader.max_string_id() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        match self.reader.fetch_text(id, self.language) {
            Ok(text) => Some(Ok((id, text))),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
