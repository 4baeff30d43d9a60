//! Canonical Huffman decode tables
//!
//! The Blast bit stream Huffman-codes three alphabets (literal bytes,
//! length codes, distance codes). Each alphabet ships as a compact
//! run-length list of code lengths; this module expands that list,
//! validates it against the Kraft inequality and builds the canonical
//! (count, symbol) table the bit-at-a-time decoder walks.

use crate::cursor::BitCursor;
use crate::{CodecError, Result, MAX_CODE_BITS};

/// Nibble-packed code lengths can name lengths up to 15 even though no
/// decodable code exceeds [`MAX_CODE_BITS`].
const MAX_NIBBLE_LENGTH: usize = 15;

/// Canonical Huffman decode table for one symbol alphabet
///
/// Immutable once built. `count[len]` is the number of codes of each
/// bit length and `symbol` lists the symbols in canonical order: sorted
/// by code length, original index order within a length.
#[derive(Debug)]
pub struct HuffmanTable {
    count: [u16; MAX_NIBBLE_LENGTH + 1],
    symbol: Vec<u16>,
}

impl HuffmanTable {
    /// Build a table from a compact length specification
    ///
    /// Each byte packs a repeat count minus one in the high nibble and a
    /// code length in the low nibble; expanding the repeats yields the
    /// per-symbol length array (symbol index = position after expansion,
    /// length 0 = symbol unused). Fails with
    /// [`CodecError::OverSubscribedCode`] if the lengths claim more code
    /// space than exists.
    pub fn from_compact(compact: &[u8]) -> Result<Self> {
        let mut lengths = Vec::new();
        for &packed in compact {
            let repeat = (packed >> 4) + 1;
            let length = packed & 0x0F;
            for _ in 0..repeat {
                lengths.push(length as usize);
            }
        }

        let mut count = [0u16; MAX_NIBBLE_LENGTH + 1];
        for &length in &lengths {
            count[length] += 1;
        }
        if count[0] as usize == lengths.len() {
            // No codes at all. Valid, but decode is unreachable for
            // this alphabet.
            return Ok(Self {
                count,
                symbol: Vec::new(),
            });
        }

        // Kraft inequality over the decodable lengths
        let mut left: i32 = 1;
        for (length, &cnt) in count.iter().enumerate().take(MAX_CODE_BITS + 1).skip(1) {
            left = 2 * left - cnt as i32;
            if left < 0 {
                return Err(CodecError::OverSubscribedCode { length });
            }
        }

        // Per-length starting offsets into the canonical symbol array
        let mut offset = [0u16; MAX_NIBBLE_LENGTH + 1];
        for length in 1..MAX_NIBBLE_LENGTH {
            offset[length + 1] = offset[length] + count[length];
        }

        let coded = lengths.iter().filter(|&&l| l != 0).count();
        let mut symbol = vec![0u16; coded];
        for (index, &length) in lengths.iter().enumerate() {
            if length != 0 {
                symbol[offset[length] as usize] = index as u16;
                offset[length] += 1;
            }
        }

        Ok(Self { count, symbol })
    }

    /// Decode one symbol from the bit stream
    ///
    /// Walks code lengths 1..=13, comparing the accumulated code against
    /// the canonical first-code/count bounds for each length. The bits
    /// arrive already inverted from the cursor. A sequence that exhausts
    /// the maximum code length without matching is
    /// [`CodecError::InvalidCode`].
    pub fn decode(&self, bits: &mut BitCursor<'_>) -> Result<u16> {
        let mut code: u32 = 0;
        let mut first: u32 = 0;
        let mut index: u32 = 0;

        for length in 1..=MAX_CODE_BITS {
            code |= bits.read_bits(1)?;
            let cnt = self.count[length] as u32;
            if code < first + cnt {
                return Ok(self.symbol[(index + (code - first)) as usize]);
            }
            index += cnt;
            first = (first + cnt) << 1;
            code <<= 1;
        }

        Err(CodecError::InvalidCode {
            max_bits: MAX_CODE_BITS,
        })
    }

    #[cfg(test)]
    pub(crate) fn code_count(&self, length: usize) -> u16 {
        self.count[length]
    }

    #[cfg(test)]
    pub(crate) fn symbols(&self) -> &[u16] {
        &self.symbol
    }
}
