//! Blast-style Huffman/LZ77 decompression
//!
//! Decodes the proprietary archive payload format: a two-byte header,
//! then a bit stream of Huffman-coded or raw literals and Huffman-coded
//! length/distance back-references into a 4096-byte sliding window. A
//! decoded copy length of 519 is the only terminator; a stream that
//! never produces it ends in [`CodecError::Truncated`] once the input
//! runs out.
//!
//! The bit stream stores its codes bit-reversed; [`BitCursor`] inverts
//! each bit as it is read. That ordering is a quirk of the origin
//! format, not something to normalize away.

mod decoder;
pub mod tables;

use crate::cursor::BitCursor;
use crate::{CodecError, Result};
use decoder::BlastDecoder;

/// Decompress a complete Blast stream into an owned byte vector
///
/// The header is one byte selecting raw (0) or Huffman-coded (1)
/// literals, then one byte giving the dictionary size log (4, 5 or 6).
/// Anything else fails with [`CodecError::InvalidHeader`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let literals = *data.first().ok_or(CodecError::Truncated { offset: 0 })?;
    if literals > 1 {
        return Err(CodecError::InvalidHeader {
            value: literals,
            offset: 0,
        });
    }

    let dict_log = *data.get(1).ok_or(CodecError::Truncated { offset: 1 })?;
    if !(4..=6).contains(&dict_log) {
        return Err(CodecError::InvalidHeader {
            value: dict_log,
            offset: 1,
        });
    }

    let mut bits = BitCursor::starting_at(data, 2);
    BlastDecoder::new().run(literals == 1, dict_log as u32, &mut bits)
}
