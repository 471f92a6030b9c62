//! Integration tests for the LZW codec public API.

use lzwpack::{compress, decompress, Decoder, Encoder, LzwError};
use proptest::prelude::*;

/// Encoding must be reversible for alphabet-only text.
#[test]
fn test_roundtrip_plain_text() {
    let input = "it was the best of times, it was the worst of times";
    let codes = compress(input).unwrap();
    assert_eq!(decompress(&codes).unwrap(), input);
}

/// Repeated patterns must compress once the dictionary has learned them.
#[test]
fn test_repeated_pattern_compresses() {
    let input = "abababab";
    let codes = compress(input).unwrap();
    assert!(codes.len() < input.len());
    assert_eq!(decompress(&codes).unwrap(), input);
}

/// Empty text and empty code stream map to each other.
#[test]
fn test_empty_both_directions() {
    assert_eq!(compress("").unwrap(), Vec::<u8>::new());
    assert_eq!(decompress(&[]).unwrap(), "");
}

/// Every emitted code must fit the one-byte wire format: 1..=254.
#[test]
fn test_codes_stay_in_wire_range() {
    let codes = compress("she sells sea shells by the sea shore").unwrap();
    assert!(codes.iter().all(|&c| (1..=254).contains(&c)));
}

/// The streaming API must agree with the in-memory convenience API.
#[test]
fn test_streaming_matches_convenience() {
    let input = "round and round and round it goes";

    let mut streamed = Vec::new();
    Encoder::new().encode(input.as_bytes(), &mut streamed).unwrap();
    assert_eq!(streamed, compress(input).unwrap());

    let mut restored = Vec::new();
    Decoder::new().decode(streamed.as_slice(), &mut restored).unwrap();
    assert_eq!(restored, input.as_bytes());
}

/// A stream whose first code is a learned-range code must be rejected,
/// not resolved into garbage.
#[test]
fn test_malformed_first_code_is_rejected() {
    for first in [96u8, 150, 254, 255, 0] {
        let err = decompress(&[first]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode(c) if c == first));
    }
}

/// Input rich enough to demand a 255th dictionary entry must fail with
/// the capacity condition rather than truncate or wrap.
#[test]
fn test_capacity_boundary() {
    // No two-character window repeats, so every character after the
    // first adds a dictionary entry.
    let mut input = String::new();
    for c in '!'..='~' {
        input.push(' ');
        input.push(c);
        input.push(c);
    }
    let err = compress(&input).unwrap_err();
    assert!(matches!(err, LzwError::CapacityExceeded));
}

proptest! {
    /// decode(encode(x)) == x for alphabet-only inputs small enough to
    /// stay inside the 254-entry dictionary.
    #[test]
    fn prop_roundtrip(input in "[ -~]{0,120}") {
        let codes = compress(&input).unwrap();
        prop_assert_eq!(decompress(&codes).unwrap(), input);
    }

    /// Encoding is deterministic.
    #[test]
    fn prop_deterministic(input in "[ -~]{0,120}") {
        prop_assert_eq!(compress(&input).unwrap(), compress(&input).unwrap());
    }

    /// Compressed output never exceeds one code per input character.
    #[test]
    fn prop_never_expands_code_count(input in "[ -~]{1,120}") {
        let codes = compress(&input).unwrap();
        prop_assert!(codes.len() <= input.len());
    }
}
