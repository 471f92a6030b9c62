//! Streaming LZW decoder.
//!
//! The decoder rebuilds the encoder's dictionary entry-by-entry as it
//! resolves codes. It runs exactly one entry behind the encoder, so a
//! code one past the end of its table is not an error: the entry is
//! derived from the previously resolved string (`old + first(old)`).
//! Any other unresolvable code means the stream is malformed.

use crate::dictionary::CodeTable;
use crate::error::{LzwError, Result};
use std::io::{BufReader, BufWriter, Read, Write};

/// Single-use LZW decoder bound to one code stream.
pub struct Decoder {
    table: CodeTable,
}

impl Decoder {
    /// Create a decoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Self {
            table: CodeTable::new(),
        }
    }

    /// Decode the full code stream and return the reconstructed text.
    ///
    /// # Errors
    ///
    /// - [`LzwError::InvalidCode`] if the first code is not an initial
    ///   alphabet code, or a later code is neither known nor the single
    ///   entry the decoder can derive.
    /// - [`LzwError::CapacityExceeded`] if the stream implies a 255th
    ///   dictionary entry.
    /// - [`LzwError::Io`] for read failures.
    pub fn decode_to_string<R: Read>(mut self, source: R) -> Result<String> {
        let mut reader = BufReader::new(source);
        let mut output = String::new();

        // An empty code stream decodes to empty text.
        let first = match read_code(&mut reader)? {
            Some(code) => code,
            None => return Ok(output),
        };

        // The first code has nothing to derive from, so it must sit in
        // the initial alphabet; a fresh table holds exactly that.
        let mut old = match self.table.sequence_of(first) {
            Some(sequence) => sequence.to_string(),
            None => return Err(LzwError::InvalidCode(first)),
        };
        output.push_str(&old);

        while let Some(code) = read_code(&mut reader)? {
            old = self.step(code, &old, &mut output)?;
        }

        Ok(output)
    }

    /// Decode the full code stream from `source` and write the text to
    /// `sink` in one completed write once the stream is exhausted.
    pub fn decode<R: Read, W: Write>(self, source: R, sink: W) -> Result<()> {
        let text = self.decode_to_string(source)?;
        let mut writer = BufWriter::new(sink);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Resolve one code, grow the table, and return the next `old`.
    fn step(&mut self, code: u8, old: &str, output: &mut String) -> Result<String> {
        if let Some(sequence) = self.table.sequence_of(code) {
            // Known code: the encoder inserted old + first(resolved)
            // right before emitting it.
            let resolved = sequence.to_string();
            output.push_str(&resolved);
            if let Some(first) = resolved.chars().next() {
                let mut learned = old.to_string();
                learned.push(first);
                self.table.insert(learned)?;
            }
            Ok(resolved)
        } else if code as u16 == self.table.next_code() {
            // The encoder is exactly one entry ahead: the unknown code
            // must be old + first(old).
            let mut derived = old.to_string();
            match old.chars().next() {
                Some(first) => derived.push(first),
                None => return Err(LzwError::InvalidCode(code)),
            }
            self.table.insert(derived.clone())?;
            output.push_str(&derived);
            Ok(derived)
        } else {
            Err(LzwError::InvalidCode(code))
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the next code byte, or `None` at end of stream.
fn read_code<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Decompress an LZW code stream back into text.
pub fn decompress(codes: &[u8]) -> Result<String> {
    Decoder::new().decode_to_string(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::compress;

    #[test]
    fn test_empty_stream_decodes_to_empty_text() {
        assert_eq!(decompress(&[]).unwrap(), "");
    }

    #[test]
    fn test_single_alphabet_code() {
        assert_eq!(decompress(&[66]).unwrap(), "a");
    }

    #[test]
    fn test_known_code_path() {
        // Codes for "abababab" produced by the encoder
        assert_eq!(decompress(&[66, 67, 96, 98, 67]).unwrap(), "abababab");
    }

    #[test]
    fn test_not_yet_known_code_path() {
        // "aaa" encodes to [66, 96]; code 96 is assigned by the encoder
        // one step before the decoder learns it and resolves to "aa"
        // via the old-plus-first-character rule.
        assert_eq!(decompress(&[66, 96]).unwrap(), "aaa");
    }

    #[test]
    fn test_first_code_outside_alphabet() {
        let err = decompress(&[96, 66]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode(96)));
    }

    #[test]
    fn test_first_code_zero() {
        let err = decompress(&[0]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode(0)));
    }

    #[test]
    fn test_code_far_past_table_end() {
        // Only code 96 could be derived here; 200 is malformed.
        let err = decompress(&[66, 200]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode(200)));
    }

    #[test]
    fn test_code_255_is_never_valid() {
        let err = decompress(&[66, 255]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode(255)));
    }

    #[test]
    fn test_determinism() {
        let codes = compress("mississippi mississippi").unwrap();
        assert_eq!(
            decompress(&codes).unwrap(),
            decompress(&codes).unwrap()
        );
    }

    #[test]
    fn test_roundtrip_sentences() {
        for input in [
            "to be or not to be, that is the question",
            "TOBEORNOTTOBEORTOBEORNOT",
            "xyxyxyxyxyxyxyxy",
            "a man a plan a canal panama",
        ] {
            let codes = compress(input).unwrap();
            assert_eq!(decompress(&codes).unwrap(), input);
        }
    }
}
