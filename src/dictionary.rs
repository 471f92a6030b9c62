//! Growable code dictionaries for the encoder and decoder sides.
//!
//! Both directions seed their table with the fixed alphabet and assign
//! learned codes in a strictly increasing sequence starting at
//! [`FIRST_FREE_CODE`]. The capacity invariant is enforced at insertion
//! time: a table never holds more than [`MAX_ENTRIES`] entries.

use crate::alphabet::{self, ALPHABET_SIZE, FIRST_FREE_CODE, MAX_ENTRIES};
use crate::error::{LzwError, Result};
use ahash::AHashMap;

/// Encoder-side dictionary: character sequence → code.
#[derive(Debug)]
pub struct SequenceTable {
    entries: AHashMap<String, u8>,
    next_code: u16,
}

impl SequenceTable {
    /// Create a table seeded with the initial alphabet.
    pub fn new() -> Self {
        let mut entries = AHashMap::with_capacity(MAX_ENTRIES as usize);
        for code in 1..=ALPHABET_SIZE as u8 {
            // char_for_code is total over 1..=95
            if let Some(c) = alphabet::char_for_code(code) {
                entries.insert(c.to_string(), code);
            }
        }
        Self {
            entries,
            next_code: FIRST_FREE_CODE,
        }
    }

    /// The code the next learned entry will receive.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }

    /// Look up the code for a sequence.
    pub fn code_of(&self, sequence: &str) -> Option<u8> {
        self.entries.get(sequence).copied()
    }

    /// Check whether a sequence is already in the table.
    pub fn contains(&self, sequence: &str) -> bool {
        self.entries.contains_key(sequence)
    }

    /// Insert a learned sequence at the next free code.
    ///
    /// Returns the assigned code, or [`LzwError::CapacityExceeded`] if
    /// the table already holds 254 entries.
    pub fn insert(&mut self, sequence: String) -> Result<u8> {
        if self.next_code > MAX_ENTRIES {
            return Err(LzwError::CapacityExceeded);
        }
        let code = self.next_code as u8;
        self.entries.insert(sequence, code);
        self.next_code += 1;
        Ok(code)
    }
}

impl Default for SequenceTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoder-side dictionary: code → character sequence.
#[derive(Debug)]
pub struct CodeTable {
    entries: AHashMap<u8, String>,
    next_code: u16,
}

impl CodeTable {
    /// Create a table seeded with the initial alphabet.
    pub fn new() -> Self {
        let mut entries = AHashMap::with_capacity(MAX_ENTRIES as usize);
        for code in 1..=ALPHABET_SIZE as u8 {
            if let Some(c) = alphabet::char_for_code(code) {
                entries.insert(code, c.to_string());
            }
        }
        Self {
            entries,
            next_code: FIRST_FREE_CODE,
        }
    }

    /// The code the next learned entry will receive.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }

    /// Resolve a code to its sequence.
    pub fn sequence_of(&self, code: u8) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    /// Insert a learned sequence at the next free code.
    pub fn insert(&mut self, sequence: String) -> Result<u8> {
        if self.next_code > MAX_ENTRIES {
            return Err(LzwError::CapacityExceeded);
        }
        let code = self.next_code as u8;
        self.entries.insert(code, sequence);
        self.next_code += 1;
        Ok(code)
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}
