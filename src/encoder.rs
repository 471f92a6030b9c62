//! Streaming LZW encoder.
//!
//! The encoder consumes a character stream and emits one byte per code.
//! It grows its dictionary by appending the character that broke the
//! current longest match to the matched prefix, so the decoder can
//! rebuild the same table entry-by-entry without it ever being sent.

use crate::dictionary::SequenceTable;
use crate::error::{LzwError, Result};
use std::io::{BufReader, BufWriter, Read, Write};

/// Single-use LZW encoder bound to one input stream.
pub struct Encoder {
    table: SequenceTable,
    prefix: String,
}

impl Encoder {
    /// Create an encoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Self {
            table: SequenceTable::new(),
            prefix: String::new(),
        }
    }

    /// Encode all characters from `source`, writing one code byte per
    /// emission to `sink` in emission order.
    ///
    /// The sink is flushed before returning. On failure, bytes already
    /// written are left in place.
    ///
    /// # Errors
    ///
    /// - [`LzwError::CapacityExceeded`] if the input forces a 255th
    ///   dictionary entry.
    /// - [`LzwError::UnsupportedCharacter`] if a character outside the
    ///   printable ASCII block becomes a pending match on its own.
    /// - [`LzwError::Io`] for read or write failures.
    pub fn encode<R: Read, W: Write>(mut self, source: R, sink: W) -> Result<()> {
        let mut reader = BufReader::new(source);
        let mut writer = BufWriter::new(sink);

        let mut byte = [0u8; 1];
        loop {
            match reader.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => self.push(byte[0] as char, &mut writer)?,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        // Flush the final pending match. Empty input emits nothing.
        if !self.prefix.is_empty() {
            let code = self.resolve_prefix()?;
            writer.write_all(&[code])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Feed one character through the longest-match loop.
    fn push<W: Write>(&mut self, c: char, writer: &mut W) -> Result<()> {
        let mut candidate = std::mem::take(&mut self.prefix);
        candidate.push(c);

        if self.table.contains(&candidate) {
            // Keep extending the match; nothing is emitted yet.
            self.prefix = candidate;
            return Ok(());
        }
        if candidate.len() == c.len_utf8() {
            // Stream start with a character the alphabet does not cover.
            return Err(LzwError::UnsupportedCharacter(c));
        }

        self.prefix = candidate[..candidate.len() - c.len_utf8()].to_string();
        let code = self.resolve_prefix()?;
        writer.write_all(&[code])?;
        self.table.insert(candidate)?;
        self.prefix = c.to_string();
        Ok(())
    }

    /// Look up the code for the current prefix.
    ///
    /// Any prefix longer than one character was placed in the table by
    /// construction; a miss means a lone character outside the alphabet.
    fn resolve_prefix(&self) -> Result<u8> {
        match self.table.code_of(&self.prefix) {
            Some(code) => Ok(code),
            None => {
                let c = self.prefix.chars().next().unwrap_or('\0');
                Err(LzwError::UnsupportedCharacter(c))
            }
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress a string into an LZW code stream.
pub fn compress(input: &str) -> Result<Vec<u8>> {
    let mut codes = Vec::new();
    Encoder::new().encode(input.as_bytes(), &mut codes)?;
    Ok(codes)
}
