//! End-to-end tests against synthetic cartridge images.
//!
//! Real ROMs cannot ship with the repository, so these fixtures build
//! images that satisfy the header checks and carry hand-assembled decode
//! trees and bitstreams at the real reverse-engineered bank addresses.

use byteorder::{ByteOrder, LittleEndian};
use sims_gba_text::rom::models::{MAGIC_BYTE, MAGIC_OFFSET, MIN_ROM_SIZE, TITLE_ID_OFFSET};
use sims_gba_text::{
    detect_game, Game, Language, MenuStage, RomImage, RomTextError, RomTextReader, MENU_COUNT,
};

const SIMS2_SIZE: usize = 0x0200_0000;

fn blank_image(game: Game, size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    data[MAGIC_OFFSET as usize] = MAGIC_BYTE;
    let tid_at = TITLE_ID_OFFSET as usize;
    data[tid_at..tid_at + 4].copy_from_slice(&game.title_id());
    data
}

fn put_u16(data: &mut [u8], addr: u32, value: u16) {
    LittleEndian::write_u16(&mut data[addr as usize..addr as usize + 2], value);
}

fn put_u32(data: &mut [u8], addr: u32, value: u32) {
    LittleEndian::write_u32(&mut data[addr as usize..addr as usize + 4], value);
}

/// Plant a decode tree into a bank and encode strings against it.
///
/// The tree assigns two-bit codes via three nodes:
///   root 0x100: 0 -> 0x101, 1 -> 0x102
///   0x101:      0 -> terminator, 1 -> first leaf
///   0x102:      0 -> second leaf, 1 -> third leaf
struct Bank {
    shift_base: u32,
    index_base: u32,
    node_base: u32,
    next_bit_area: u32,
}

impl Bank {
    fn install(data: &mut [u8], game: Game, language: Language, leaves: [u8; 3]) -> Bank {
        let locs = game.string_locs(language);
        let bank = Bank {
            shift_base: locs.shift_base,
            index_base: locs.index_base,
            node_base: locs.node_base,
            next_bit_area: locs.node_base + 0x2000,
        };
        let children = |addr: u32, zero: u16, one: u16, data: &mut [u8]| {
            put_u16(data, addr, zero);
            put_u16(data, addr + 2, one);
        };
        // Child slots for node n sit at node_base + n*4 - 0x400 (+2 for bit 1).
        children(bank.node_base + 0x100 * 4 - 0x400, 0x101, 0x102, data);
        children(bank.node_base + 0x101 * 4 - 0x400, 0x0000, u16::from(leaves[0]), data);
        children(bank.node_base + 0x102 * 4 - 0x400, u16::from(leaves[1]), u16::from(leaves[2]), data);
        bank
    }

    /// Two-bit code for a leaf installed by `install`, terminator included.
    fn code_of(&self, leaves: [u8; 3], byte: u8) -> [u8; 2] {
        if byte == 0 {
            [0, 0]
        } else if byte == leaves[0] {
            [0, 1]
        } else if byte == leaves[1] {
            [1, 0]
        } else {
            assert_eq!(byte, leaves[2], "byte not in this bank's tree");
            [1, 1]
        }
    }

    fn encode(&mut self, data: &mut [u8], id: u16, leaves: [u8; 3], bytes: &[u8]) {
        let bit_area = self.next_bit_area;
        self.next_bit_area += (bytes.len() as u32 / 4) + 8;

        put_u32(data, self.index_base + u32::from(id) * 4, bit_area - self.shift_base);
        let mut bit_idx = 0u32;
        for &byte in bytes.iter().chain(std::iter::once(&0u8)) {
            for bit in self.code_of(leaves, byte) {
                let at = (bit_area + bit_idx / 8) as usize;
                data[at] |= bit << (bit_idx % 8);
                bit_idx += 1;
            }
        }
    }
}

/// A Bustin' Out image with English and German strings planted.
fn bustin_out_fixture() -> Vec<u8> {
    let mut data = blank_image(Game::BustinOut, MIN_ROM_SIZE as usize);

    // English bank over { 'H', 'i', 0xA3 ('é') }.
    let leaves = [b'H', b'i', 0xA3];
    let mut bank = Bank::install(&mut data, Game::BustinOut, Language::English, leaves);
    bank.encode(&mut data, 0, leaves, b"Hi");
    bank.encode(&mut data, 1, leaves, &[b'H', 0xA3]);
    bank.encode(&mut data, 2, leaves, &[]);

    // German bank over { 'J', 'a', 0x09 (dropped control code) }.
    let leaves_de = [b'J', b'a', 0x09];
    let mut bank_de = Bank::install(&mut data, Game::BustinOut, Language::German, leaves_de);
    bank_de.encode(&mut data, 0, leaves_de, &[b'J', b'a', 0x09]);

    data
}

#[test]
fn detects_game_without_a_reader() {
    let image = RomImage::new(blank_image(Game::Urbz, MIN_ROM_SIZE as usize));
    assert_eq!(detect_game(&image).unwrap(), Some(Game::Urbz));
}

#[test]
fn fetches_text_from_each_planted_string() {
    let reader = RomTextReader::from_bytes(bustin_out_fixture()).unwrap();
    assert_eq!(reader.game(), Game::BustinOut);
    assert_eq!(reader.max_string_id(), 0x1A02);

    assert_eq!(reader.fetch_text(0, Language::English).unwrap(), "Hi");
    assert_eq!(reader.fetch_text(1, Language::English).unwrap(), "Hé");
    assert_eq!(reader.fetch_text(2, Language::English).unwrap(), "");
}

#[test]
fn language_selects_the_bank() {
    let reader = RomTextReader::from_bytes(bustin_out_fixture()).unwrap();
    // The control code survives raw fetch but is dropped from the text.
    assert_eq!(reader.fetch_text(0, Language::German).unwrap(), "Ja");
}

#[test]
fn raw_fetch_returns_undecoded_codes() {
    let reader = RomTextReader::from_bytes(bustin_out_fixture()).unwrap();
    assert_eq!(reader.fetch_raw(1).unwrap(), vec![b'H', 0xA3]);
}

#[test]
fn decoded_strings_never_contain_the_terminator() {
    let reader = RomTextReader::from_bytes(bustin_out_fixture()).unwrap();
    for id in 0..3 {
        let raw = reader.fetch_raw(id).unwrap();
        assert!(!raw.contains(&0), "terminator leaked from string {}", id);
    }
}

#[test]
fn iterator_walks_ids_in_order() {
    let reader = RomTextReader::from_bytes(bustin_out_fixture()).unwrap();
    let first: Vec<(u16, String)> = reader
        .iter_strings(Language::English)
        .take(3)
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(
        first,
        vec![(0, "Hi".into()), (1, "Hé".into()), (2, "".into())]
    );
}

#[test]
fn string_id_above_maximum_is_out_of_range() {
    let reader = RomTextReader::from_bytes(bustin_out_fixture()).unwrap();
    let too_high = reader.max_string_id() + 1;
    let err = reader.fetch_text(too_high, Language::English).unwrap_err();
    assert!(matches!(err, RomTextError::OutOfRange { .. }));
    let err = reader.fetch_raw(too_high).unwrap_err();
    assert!(matches!(err, RomTextError::OutOfRange { .. }));
}

#[test]
fn unplanted_string_hits_the_bounds_check() {
    // Index entry 5 was never written, so it reads as zero and the decode
    // walks into an all-zero node area; either way nothing may be read
    // outside the image. Planting a huge delta makes that concrete.
    let mut data = bustin_out_fixture();
    let locs = Game::BustinOut.string_locs(Language::English);
    put_u32(&mut data, locs.index_base + 5 * 4, 0x7FFF_FFFF);
    let reader = RomTextReader::from_bytes(data).unwrap();
    let err = reader.fetch_text(5, Language::English).unwrap_err();
    assert!(matches!(err, RomTextError::OutOfBounds { .. }));
}

#[test]
fn half_size_image_is_invalid_regardless_of_title_id() {
    let data = blank_image(Game::BustinOut, MIN_ROM_SIZE as usize / 2);
    let err = RomTextReader::from_bytes(data).unwrap_err();
    assert!(matches!(err, RomTextError::InvalidImage(_)));
}

#[test]
fn unknown_title_is_unsupported() {
    let mut data = blank_image(Game::BustinOut, MIN_ROM_SIZE as usize);
    let tid_at = TITLE_ID_OFFSET as usize;
    data[tid_at..tid_at + 4].copy_from_slice(b"XXXX");

    assert_eq!(detect_game(&RomImage::new(data.clone())).unwrap(), None);
    let err = RomTextReader::from_bytes(data).unwrap_err();
    assert!(matches!(err, RomTextError::UnsupportedGame));
}

#[test]
fn japanese_release_is_raw_only() {
    let mut data = blank_image(Game::UrbzJp, MIN_ROM_SIZE as usize);
    let leaves = [0x30, 0x31, 0x32];
    let mut bank = Bank::install(&mut data, Game::UrbzJp, Language::English, leaves);
    bank.encode(&mut data, 0, leaves, &[0x32, 0x30, 0x31]);

    let reader = RomTextReader::from_bytes(data).unwrap();
    assert_eq!(reader.game(), Game::UrbzJp);
    assert_eq!(reader.fetch_raw(0).unwrap(), vec![0x32, 0x30, 0x31]);

    let err = reader.fetch_text(0, Language::English).unwrap_err();
    assert!(matches!(err, RomTextError::RawOnly(Game::UrbzJp)));
}

#[test]
fn sims2_menu_table_round_trip() {
    let mut data = blank_image(Game::Sims2, SIMS2_SIZE);
    // Menu 2: prepare pointer mapped, logic slot empty.
    put_u32(&mut data, 0x064F84 + 2 * 12, 0x0803_1235);
    let reader = RomTextReader::from_bytes(data).unwrap();

    assert_eq!(
        reader.menu_address(2, MenuStage::Prepare).unwrap(),
        Some(0x0003_1234)
    );
    assert_eq!(reader.menu_address(2, MenuStage::Logic).unwrap(), None);

    let err = reader.menu_address(MENU_COUNT, MenuStage::Logic).unwrap_err();
    assert!(matches!(err, RomTextError::OutOfRange { .. }));
}

#[test]
fn menu_table_requires_sims2() {
    let reader = RomTextReader::from_bytes(bustin_out_fixture()).unwrap();
    let err = reader.menu_address(0, MenuStage::Prepare).unwrap_err();
    assert!(matches!(err, RomTextError::UnsupportedGame));
}
