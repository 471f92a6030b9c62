//! File-level compress and decompress operations.
//!
//! These open the source, create the destination, run a fresh codec
//! over the pair, and report sizes once the output is flushed. The
//! interactive front end builds on this module; the core codec never
//! touches the filesystem itself.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use std::fs::{self, File};
use std::path::Path;

/// Sizes observed after a completed compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionReport {
    /// Size of the source file in bytes.
    pub original_bytes: u64,
    /// Size of the compressed file in bytes.
    pub compressed_bytes: u64,
}

impl CompressionReport {
    /// Fraction of the original size that was saved.
    ///
    /// `0.25` means the compressed file is a quarter smaller than the
    /// original. Negative when the output grew. Zero for an empty
    /// source.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        let saved = self.original_bytes as i64 - self.compressed_bytes as i64;
        saved as f64 / self.original_bytes as f64
    }
}

/// Compress the text file at `source` into a new file at `dest`.
///
/// The destination is created (or truncated) before encoding starts;
/// on failure, bytes already written remain in place.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
) -> Result<CompressionReport> {
    let input = File::open(&source)?;
    let output = File::create(&dest)?;
    Encoder::new().encode(input, output)?;

    Ok(CompressionReport {
        original_bytes: fs::metadata(&source)?.len(),
        compressed_bytes: fs::metadata(&dest)?.len(),
    })
}

/// Decompress the code stream at `source` into a new text file at `dest`.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let input = File::open(&source)?;
    let output = File::create(&dest)?;
    Decoder::new().decode(input, output)
}
