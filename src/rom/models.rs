//! Data types and reverse-engineered constants for the supported games.

use super::error::{Result, RomTextError};

/// Offset of the 4-byte title ID in the GBA cartridge header.
pub const TITLE_ID_OFFSET: u64 = 0xAC;

/// Offset and expected value of the header's fixed byte (part of the
/// complement-checked area every licensed GBA cartridge carries).
pub const MAGIC_OFFSET: u64 = 0xB2;
pub const MAGIC_BYTE: u8 = 0x96;

/// Bustin' Out is 16 MB, The Urbz and The Sims 2 are 32 MB.
pub const MIN_ROM_SIZE: u64 = 0x0100_0000;
pub const MAX_ROM_SIZE: u64 = 0x0200_0000;

/// The supported game titles.
///
/// The three western releases share a Latin text encoding and six language
/// banks each. The two Japanese releases store Shift-JIS-like codes the
/// Latin remap table cannot express, so they only expose raw byte output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    /// The Sims Bustin' Out (USA/EUR), title ID "ASIE".
    BustinOut,
    /// The Urbz - Sims in the City (USA/EUR), title ID "BOCE".
    Urbz,
    /// The Sims 2 (USA/EUR), title ID "B46E".
    Sims2,
    /// The Sims Bustin' Out (JPN), title ID "B4PJ".
    BustinOutJp,
    /// The Urbz - Sims in the City (JPN), title ID "BOCJ".
    UrbzJp,
}

/// The language banks available in the western releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Dutch,
    French,
    German,
    Italian,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Dutch,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
    ];

    fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Dutch => 1,
            Language::French => 2,
            Language::German => 3,
            Language::Italian => 4,
            Language::Spanish => 5,
        }
    }
}

/// The three ROM-relative base addresses needed to locate and decode one
/// string bank.
///
/// `shift_base`: added to the per-string indirection delta to form the
/// initial shift address. `index_base`: base of the u32 indirection table
/// indexed by `string_id * 4`. `node_base`: base of the two-sided decode
/// node table (the 0x400 / 0x3FE displacements apply against it).
#[derive(Debug, Clone, Copy)]
pub struct StringLocs {
    pub shift_base: u32,
    pub index_base: u32,
    pub node_base: u32,
}

const fn locs(shift_base: u32, index_base: u32, node_base: u32) -> StringLocs {
    StringLocs { shift_base, index_base, node_base }
}

/* All addresses below are reverse-engineered from the retail cartridges.
   They are fixed properties of each ROM, not derivable from anything. */

const BUSTIN_OUT_LOCS: [StringLocs; 6] = [
    locs(0x0098_D488, 0x0098_D5FC, 0x0098_D48C), // English
    locs(0x009C_1A7C, 0x009C_1C00, 0x009C_1A80), // Dutch
    locs(0x009F_5294, 0x009F_5438, 0x009F_5298), // French
    locs(0x00A2_FE48, 0x00A2_FFD4, 0x00A2_FE4C), // German
    locs(0x00A5_ECF0, 0x00A5_EE7C, 0x00A5_ECF4), // Italian
    locs(0x00A9_4E60, 0x00A9_500C, 0x00A9_4E64), // Spanish
];

const URBZ_LOCS: [StringLocs; 6] = [
    locs(0x00E4_F820, 0x00E4_F9B0, 0x00E4_F824), // English
    locs(0x00E9_3ECC, 0x00E9_4074, 0x00E9_3ED0), // Dutch
    locs(0x00ED_A9AC, 0x00ED_AB60, 0x00ED_A9B0), // French
    locs(0x00F2_6B40, 0x00F2_6CD8, 0x00F2_6B44), // German
    locs(0x00F7_33B4, 0x00F7_3560, 0x00F7_33B8), // Italian
    locs(0x00FB_A2AC, 0x00FB_A460, 0x00FB_A2B0), // Spanish
];

const SIMS2_LOCS: [StringLocs; 6] = [
    locs(0x019B_4990, 0x019B_4B20, 0x019B_4994), // English
    locs(0x019D_7784, 0x019D_7924, 0x019D_7788), // Dutch
    locs(0x019F_AF9C, 0x019F_B154, 0x019F_AFA0), // French
    locs(0x01A1_F7E0, 0x01A1_F98C, 0x01A1_F7E4), // German
    locs(0x01A4_60A0, 0x01A4_6254, 0x01A4_60A4), // Italian
    locs(0x01A6_97C0, 0x01A6_9978, 0x01A6_97C4), // Spanish
];

/// The Japanese releases have a single string bank each.
const BUSTIN_OUT_JP_LOCS: StringLocs = locs(0x009A_732C, 0x009A_7730, 0x009A_7330);
const URBZ_JP_LOCS: StringLocs = locs(0x00E7_EDE4, 0x00E7_F1E8, 0x00E7_EDE8);

/// Known title IDs, checked in this order.
pub const KNOWN_TITLE_IDS: [(Game, [u8; 4]); 5] = [
    (Game::BustinOut, *b"ASIE"),
    (Game::Urbz, *b"BOCE"),
    (Game::Sims2, *b"B46E"),
    (Game::BustinOutJp, *b"B4PJ"),
    (Game::UrbzJp, *b"BOCJ"),
];

impl Game {
    /// The 4-byte title ID stored at 0xAC.
    pub fn title_id(self) -> [u8; 4] {
        KNOWN_TITLE_IDS
            .iter()
            .find(|(game, _)| *game == self)
            .map(|(_, tid)| *tid)
            .unwrap_or([0; 4])
    }

    /// The highest valid string ID for this game.
    pub fn max_string_id(self) -> u16 {
        match self {
            Game::BustinOut | Game::BustinOutJp => 0x1A02,
            Game::Urbz | Game::UrbzJp => 0x1AFD,
            Game::Sims2 => 0xD85,
        }
    }

    /// Whether this game's strings are only available as raw bytes.
    pub fn raw_only(self) -> bool {
        matches!(self, Game::BustinOutJp | Game::UrbzJp)
    }

    /// Resolve the offset triple for a language bank. The Japanese releases
    /// have a single bank and ignore the language.
    pub fn string_locs(self, language: Language) -> StringLocs {
        match self {
            Game::BustinOut => BUSTIN_OUT_LOCS[language.index()],
            Game::Urbz => URBZ_LOCS[language.index()],
            Game::Sims2 => SIMS2_LOCS[language.index()],
            Game::BustinOutJp => BUSTIN_OUT_JP_LOCS,
            Game::UrbzJp => URBZ_JP_LOCS,
        }
    }

    /// Range-check a string ID against this game's maximum.
    pub fn check_string_id(self, string_id: u16) -> Result<()> {
        let max = self.max_string_id();
        if string_id > max {
            return Err(RomTextError::OutOfRange {
                id: u32::from(string_id),
                max: u32::from(max),
            });
        }
        Ok(())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "english" | "e" => Ok(Language::English),
            "dutch" | "d" => Ok(Language::Dutch),
            "french" | "f" => Ok(Language::French),
            "german" | "g" => Ok(Language::German),
            "italian" | "i" => Ok(Language::Italian),
            "spanish" | "s" => Ok(Language::Spanish),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}
