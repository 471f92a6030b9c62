//! Fixed initial alphabet shared by encoder and decoder.
//!
//! Codes `1..=95` map to the printable ASCII block `' '..='~'`
//! (values 32..=126). The mapping is arithmetic and identical on both
//! sides of the codec; it is the only dictionary content that is never
//! learned from the input.

/// First character of the initial alphabet (ASCII 32).
pub const MIN_CHAR: char = ' ';

/// Last character of the initial alphabet (ASCII 126).
pub const MAX_CHAR: char = '~';

/// Number of entries in the initial alphabet.
pub const ALPHABET_SIZE: u16 = 95;

/// First code available for learned dictionary entries.
pub const FIRST_FREE_CODE: u16 = 96;

/// Maximum number of dictionary entries, alphabet included.
///
/// Codes are transmitted as single bytes; 0 is reserved and 255 is
/// never a valid code, leaving 254 usable codes.
pub const MAX_ENTRIES: u16 = 254;

/// Look up the alphabet code for a character.
///
/// Returns `None` for characters outside the printable ASCII block.
pub fn code_for_char(c: char) -> Option<u8> {
    if (MIN_CHAR..=MAX_CHAR).contains(&c) {
        Some(c as u8 - MIN_CHAR as u8 + 1)
    } else {
        None
    }
}

/// Look up the character for an alphabet code.
///
/// Returns `None` for codes outside `1..=95`.
pub fn char_for_code(code: u8) -> Option<char> {
    if (1..=ALPHABET_SIZE as u8).contains(&code) {
        Some((code - 1 + MIN_CHAR as u8) as char)
    } else {
        None
    }
}

/// Check whether a character belongs to the initial alphabet.
pub fn contains(c: char) -> bool {
    (MIN_CHAR..=MAX_CHAR).contains(&c)
}
