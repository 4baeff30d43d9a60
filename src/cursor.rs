//! Sequential readers over a compressed input buffer
//!
//! Two cursor flavors cover the two ways the legacy formats consume
//! their input: [`ByteCursor`] reads whole bytes and little-endian
//! 16-bit words (Format2, Format40, Format80), while [`BitCursor`]
//! reads individual bits in the inverted, LSB-first order the Blast
//! bit stream is stored in.
//!
//! Both cursors advance monotonically and never rewind. Running past
//! the end of the buffer is a [`CodecError::Truncated`] error carrying
//! the byte offset where the read failed, never a silent short read.

use crate::{CodecError, Result};

/// Sequential byte/word reader over a compressed input buffer
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset into the input
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True once every input byte has been consumed
    pub fn is_done(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read the next byte
    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(CodecError::Truncated { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read the next little-endian 16-bit word
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo | (hi << 8))
    }
}

/// Sequential bit reader over a compressed input buffer
///
/// Bits are consumed least-significant first within each byte, refilled
/// one source byte at a time, and every incoming bit is logically
/// inverted before it is accumulated. The inversion matches how the
/// origin format stores its bit-reversed codes; it applies to every
/// read, raw literals and extra bits included.
#[derive(Debug)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    pos: usize,
    bit_buf: u8,
    bit_count: u32,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor over `data`, starting at byte offset `start`
    ///
    /// The offset lets a decoder consume header bytes first and still
    /// report truncation offsets relative to the whole input buffer.
    pub fn starting_at(data: &'a [u8], start: usize) -> Self {
        Self {
            data,
            pos: start,
            bit_buf: 0,
            bit_count: 0,
        }
    }

    /// Read `count` bits and assemble them LSB-first into an integer
    ///
    /// `count` must be at most 16; the formats never ask for more than
    /// 8 bits in one call.
    pub fn read_bits(&mut self, count: u32) -> Result<u32> {
        debug_assert!(count <= 16);

        let mut value = 0u32;
        for filled in 0..count {
            if self.bit_count == 0 {
                self.bit_buf = *self
                    .data
                    .get(self.pos)
                    .ok_or(CodecError::Truncated { offset: self.pos })?;
                self.pos += 1;
                self.bit_count = 8;
            }
            let bit = (self.bit_buf as u32 & 1) ^ 1;
            self.bit_buf >>= 1;
            self.bit_count -= 1;
            value |= bit << filled;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_cursor_sequential_reads() {
        let mut cursor = ByteCursor::new(&[0x01, 0x34, 0x12, 0xFF]);
        assert_eq!(cursor.remaining(), 4);
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 1);
        assert!(!cursor.is_done());
        assert_eq!(cursor.read_u8().unwrap(), 0xFF);
        assert!(cursor.is_done());
    }

    #[test]
    fn test_byte_cursor_truncation_reports_offset() {
        let mut cursor = ByteCursor::new(&[0xAB]);
        cursor.read_u8().unwrap();
        match cursor.read_u8() {
            Err(CodecError::Truncated { offset }) => assert_eq!(offset, 1),
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_byte_cursor_word_straddling_end() {
        // A word read that consumes the last byte and then runs out
        let mut cursor = ByteCursor::new(&[0x10]);
        assert!(matches!(
            cursor.read_u16_le(),
            Err(CodecError::Truncated { offset: 1 })
        ));
    }

    #[test]
    fn test_bit_cursor_inverts_each_bit() {
        // Stored byte 0x00 reads back as all-ones
        let mut bits = BitCursor::starting_at(&[0x00], 0);
        assert_eq!(bits.read_bits(8).unwrap(), 0xFF);

        // Stored byte 0xFF reads back as all-zeros
        let mut bits = BitCursor::starting_at(&[0xFF], 0);
        assert_eq!(bits.read_bits(8).unwrap(), 0x00);
    }

    #[test]
    fn test_bit_cursor_lsb_first_assembly() {
        // Stored bits (LSB first): 1,0,1,1,... -> inverted 0,1,0,0
        let mut bits = BitCursor::starting_at(&[0b0000_1101], 0);
        assert_eq!(bits.read_bits(4).unwrap(), 0b0010);
        // Remaining four stored bits are 0 -> inverted 1111
        assert_eq!(bits.read_bits(4).unwrap(), 0b1111);
    }

    #[test]
    fn test_bit_cursor_crosses_byte_boundary() {
        // 12 bits spanning two bytes; value bit i = inverted stored bit i
        let mut bits = BitCursor::starting_at(&[0x0F, 0xF0], 0);
        assert_eq!(bits.read_bits(6).unwrap(), 0b110000);
        assert_eq!(bits.read_bits(6).unwrap(), 0b111111);
        assert_eq!(bits.read_bits(4).unwrap(), 0b0000);
    }

    #[test]
    fn test_bit_cursor_truncation_mid_read() {
        let mut bits = BitCursor::starting_at(&[0x00], 0);
        bits.read_bits(5).unwrap();
        // 3 bits left in the refill byte, then the buffer ends
        match bits.read_bits(8) {
            Err(CodecError::Truncated { offset }) => assert_eq!(offset, 1),
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_bit_cursor_start_offset() {
        // Header bytes are skipped; truncation offsets stay absolute
        let mut bits = BitCursor::starting_at(&[0xAA, 0xBB, 0x00], 2);
        assert_eq!(bits.read_bits(8).unwrap(), 0xFF);
        assert!(matches!(
            bits.read_bits(1),
            Err(CodecError::Truncated { offset: 3 })
        ));
    }
}
