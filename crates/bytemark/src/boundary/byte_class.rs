//! # UTF-8 Structural Byte Classification

/// Bytes that mark a word-adjacent space or punctuation position.
///
/// A fixed ASCII set; multibyte punctuation is not part of the marker
/// alphabet.
pub const SPACE_PUNCT_BYTES: &[u8] = b" \t\n.,!?;:()[]{}\"'";

/// Whether a byte begins a UTF-8 character.
///
/// ASCII bytes (`< 0x80`) and multibyte lead bytes (`0xC0..=0xF7`)
/// qualify; continuation bytes (`0x80..=0xBF`) do not. `0xF8..=0xFF`
/// cannot lead a character in well-formed UTF-8 and classify as non-lead.
#[inline(always)]
pub fn is_lead_byte(byte: u8) -> bool {
    byte < 0x80 || (0xC0..=0xF7).contains(&byte)
}

/// Whether a byte is in the space/punctuation marker set.
#[inline(always)]
pub fn is_space_or_punct(byte: u8) -> bool {
    SPACE_PUNCT_BYTES.contains(&byte)
}
