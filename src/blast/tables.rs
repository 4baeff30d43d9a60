//! Fixed code specifications for the Blast bit stream
//!
//! The three alphabets ship as compact run-length lists of code lengths
//! (see [`HuffmanTable::from_compact`]); the decode tables built from
//! them live for the whole process and are read-only after
//! construction, so concurrent decodes share them freely.

use crate::huffman::HuffmanTable;
use std::sync::LazyLock;

/// Compact code lengths for the 256-symbol literal alphabet
pub const LITERAL_SPEC: [u8; 98] = [
    11, 124, 8, 7, 28, 7, 188, 13, 76, 4, 10, 8, 12, 10, 12, 10, 8, 23, 8, 9, 7, 6, 7, 8, 7, 6,
    55, 8, 23, 24, 12, 11, 7, 9, 11, 12, 6, 7, 22, 5, 7, 24, 6, 11, 9, 6, 7, 22, 7, 11, 38, 7, 9,
    8, 25, 11, 8, 11, 9, 12, 8, 12, 5, 38, 5, 38, 5, 11, 7, 5, 6, 21, 6, 10, 53, 8, 7, 24, 10,
    27, 44, 253, 253, 253, 252, 252, 252, 13, 12, 45, 12, 45, 12, 61, 12, 45, 44, 173,
];

/// Compact code lengths for the 16-symbol length alphabet
pub const LENGTH_SPEC: [u8; 6] = [2, 35, 36, 53, 38, 23];

/// Compact code lengths for the 64-symbol distance alphabet
pub const DISTANCE_SPEC: [u8; 7] = [2, 20, 53, 230, 247, 151, 248];

/// Base copy length for each length symbol
pub const LENGTH_BASE: [u16; 16] = [3, 2, 4, 5, 6, 7, 8, 9, 10, 12, 16, 24, 40, 72, 136, 264];

/// Extra bits to read after each length symbol
pub const LENGTH_EXTRA_BITS: [u32; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Decode table for Huffman-coded literal bytes
pub static LITERAL_TABLE: LazyLock<HuffmanTable> = LazyLock::new(|| {
    HuffmanTable::from_compact(&LITERAL_SPEC).expect("shipped literal code lengths are valid")
});

/// Decode table for length symbols
pub static LENGTH_TABLE: LazyLock<HuffmanTable> = LazyLock::new(|| {
    HuffmanTable::from_compact(&LENGTH_SPEC).expect("shipped length code lengths are valid")
});

/// Decode table for distance symbols
pub static DISTANCE_TABLE: LazyLock<HuffmanTable> = LazyLock::new(|| {
    HuffmanTable::from_compact(&DISTANCE_SPEC).expect("shipped distance code lengths are valid")
});
