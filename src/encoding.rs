//! WinAnsiEncoding support for content-stream text.
//!
//! The standard Type1 fonts are written with `/Encoding /WinAnsiEncoding`,
//! so every character of a span must be lowered to its WinAnsi byte before it
//! lands in a content stream. Printable ASCII and the Latin-1 block map
//! straight through; the 0x80–0x9F window holds the Windows-1252 specials
//! (quotes, dashes, bullet, euro). Anything else has no glyph in these fonts.

/// The Windows-1252 specials that differ from Latin-1, keyed by the Unicode
/// character they encode. Positions taken from the PDF Reference, appendix D
/// ("Latin Character Set and Encodings"), WinAnsi column.
const WIN_ANSI_SPECIALS: &[(char, u8)] = &[
    ('\u{20AC}', 0x80), // Euro
    ('\u{201A}', 0x82), // quotesinglbase
    ('\u{0192}', 0x83), // florin
    ('\u{201E}', 0x84), // quotedblbase
    ('\u{2026}', 0x85), // ellipsis
    ('\u{2020}', 0x86), // dagger
    ('\u{2021}', 0x87), // daggerdbl
    ('\u{02C6}', 0x88), // circumflex
    ('\u{2030}', 0x89), // perthousand
    ('\u{0160}', 0x8A), // Scaron
    ('\u{2039}', 0x8B), // guilsinglleft
    ('\u{0152}', 0x8C), // OE
    ('\u{017D}', 0x8E), // Zcaron
    ('\u{2018}', 0x91), // quoteleft
    ('\u{2019}', 0x92), // quoteright
    ('\u{201C}', 0x93), // quotedblleft
    ('\u{201D}', 0x94), // quotedblright
    ('\u{2022}', 0x95), // bullet
    ('\u{2013}', 0x96), // endash
    ('\u{2014}', 0x97), // emdash
    ('\u{02DC}', 0x98), // tilde
    ('\u{2122}', 0x99), // trademark
    ('\u{0161}', 0x9A), // scaron
    ('\u{203A}', 0x9B), // guilsinglright
    ('\u{0153}', 0x9C), // oe
    ('\u{017E}', 0x9E), // zcaron
    ('\u{0178}', 0x9F), // Ydieresis
];

/// Map a single character to its WinAnsi byte, or [None] if the character has
/// no position in the encoding.
pub fn encode_char(ch: char) -> Option<u8> {
    match ch {
        // tabs have no printable glyph; render them as a single space
        '\t' => Some(b' '),
        ' '..='~' => Some(ch as u8),
        '\u{00A0}'..='\u{00FF}' => Some(ch as u32 as u8),
        _ => WIN_ANSI_SPECIALS
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, b)| b),
    }
}

/// Lower a string to WinAnsi bytes, substituting `?` for characters the
/// encoding cannot represent.
pub fn encode_str(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| encode_char(ch).unwrap_or(b'?'))
        .collect()
}
