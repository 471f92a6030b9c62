//! # lzwpack
//!
//! A pure Rust library for compressing and decompressing text files
//! with the LZW algorithm.
//!
//! The codec learns its dictionary from the input itself: recurring
//! character sequences are replaced by one-byte codes, and the decoder
//! rebuilds the identical dictionary entry-by-entry while reading the
//! code stream, so the dictionary is never transmitted.
//!
//! ## Features
//!
//! - Streaming encoder and decoder over any `Read`/`Write` pair
//! - Fixed printable-ASCII alphabet (codes 1-95), learned codes 96-254
//! - File-level operations with compression-ratio reporting
//! - Distinct error kinds for dictionary overflow, malformed streams,
//!   and unsupported input characters
//!
//! ## Quick Start
//!
//! ```rust
//! use lzwpack::{compress, decompress};
//!
//! let codes = compress("to be or not to be")?;
//! assert_eq!(decompress(&codes)?, "to be or not to be");
//! # Ok::<(), lzwpack::LzwError>(())
//! ```
//!
//! ## Wire format
//!
//! The compressed stream is a raw byte sequence, one code per byte
//! (values 1-254), with no header, length field, or terminator. The
//! fixed one-byte code width is what caps the dictionary at 254
//! entries; inputs rich enough to exhaust it fail with
//! [`LzwError::CapacityExceeded`].

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alphabet;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod files;

// Re-export commonly used types
pub use decoder::{decompress, Decoder};
pub use encoder::{compress, Encoder};
pub use error::{LzwError, Result};
pub use files::{compress_file, decompress_file, CompressionReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
