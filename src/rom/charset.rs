//! Mapping from the games' private character codes to text.

/// First and last codes covered by [`REMAP_TABLE`].
const REMAP_FIRST: u8 = 0x7B;
const REMAP_LAST: u8 = 0xBA;

/// The accented/symbol glyphs stored above plain ASCII, indexed by
/// `code - 0x7B`. Entry 0x3E (code 0xB9) is empty in the game data itself;
/// it renders as nothing and is kept that way rather than guessed at.
///
/// 0x40 ('@') is not in here: the games use it for parameter substitution
/// ("@1" etc.), and it passes through unchanged like the rest of ASCII.
const REMAP_TABLE: [&str; 0x40] = [
    "©", "œ", "¡", "¿", "À", "Á", "Â", "Ã", "Ä", "Å", "Æ", "Ç", "È", "É", "Ê", "Ë",
    "Ì", "Í", "Î", "Ï", "Ñ", "Ò", "Ó", "Ô", "Õ", "Ö", "Ø", "Ù", "Ú", "Ü", "ß", "à",
    "á", "â", "ã", "ä", "å", "æ", "ç", "è", "é", "ê", "ë", "ì", "í", "î", "ï", "ñ",
    "ò", "ó", "ô", "õ", "ö", "ø", "ù", "ú", "û", "ü", "º", "ª", "…", "™", "", "®",
];

/// Translate decoded character codes into readable text.
///
/// Codes 0x01-0x09, 0x0B-0x1F and 0xBC+ are control/unused and dropped;
/// 0x7B-0xBA go through the remap table; everything else is emitted as-is.
/// Pure and order-preserving; empty input gives an empty string.
pub fn remap(raw: &[u8]) -> String {
    let mut text = String::with_capacity(raw.len());

    for &code in raw {
        match code {
            0x01..=0x09 | 0x0B..=0x1F => {}
            c if c >= 0xBC => {}
            c if (REMAP_FIRST..=REMAP_LAST).contains(&c) => {
                text.push_str(REMAP_TABLE[usize::from(c - REMAP_FIRST)]);
            }
            c => text.push(char::from(c)),
        }
    }

    text
}
