//! Format40 decompression (XOR-delta animation frames)
//!
//! A Format40 stream is a diff against prior content: every write XORs
//! into the destination instead of overwriting it, so frame N is
//! reconstructed from frame N-1 plus the diff. The caller seeds `dest`
//! with the previous frame before decoding (an all-zero buffer makes
//! the diff absolute).
//!
//! Opcode forms, for opcode byte `i`:
//!
//! - `i < 0x80`, `i != 0`: XOR the next `i` source bytes in.
//! - `i == 0`: count byte + fill byte, XOR-fill.
//! - `i > 0x80`: skip `i & 0x7F` destination bytes.
//! - `i == 0x80`: a 16-bit word selects the long forms — 0 terminates,
//!   top bit clear skips, `10` XOR-copies, `11` XOR-fills.

use crate::cursor::ByteCursor;
use crate::{CodecError, Result};

fn check_room(dest: &[u8], index: usize, count: usize) -> Result<()> {
    if index + count > dest.len() {
        return Err(CodecError::BufferTooSmall {
            needed: index + count,
            available: dest.len(),
        });
    }
    Ok(())
}

/// Decode a Format40 diff into the pre-seeded `dest`, returning the
/// final destination index
pub fn decode(src: &[u8], dest: &mut [u8]) -> Result<usize> {
    let mut cursor = ByteCursor::new(src);
    let mut index = 0;

    loop {
        let opcode = cursor.read_u8()?;

        if opcode & 0x80 == 0 {
            let count = (opcode & 0x7F) as usize;
            if count == 0 {
                // XOR-fill: count byte, then fill byte
                let count = cursor.read_u8()? as usize;
                let fill = cursor.read_u8()?;
                check_room(dest, index, count)?;
                for slot in &mut dest[index..index + count] {
                    *slot ^= fill;
                }
                index += count;
            } else {
                // XOR the next `count` source bytes in
                check_room(dest, index, count)?;
                for slot in &mut dest[index..index + count] {
                    *slot ^= cursor.read_u8()?;
                }
                index += count;
            }
        } else {
            let count = (opcode & 0x7F) as usize;
            if count != 0 {
                // Short skip over an unchanged region
                index += count;
                continue;
            }

            let word = cursor.read_u16_le()?;
            if word == 0 {
                return Ok(index);
            }

            if word & 0x8000 == 0 {
                // Long skip
                index += (word & 0x7FFF) as usize;
            } else if word & 0x4000 == 0 {
                // Long XOR-copy
                let count = (word & 0x3FFF) as usize;
                check_room(dest, index, count)?;
                for slot in &mut dest[index..index + count] {
                    *slot ^= cursor.read_u8()?;
                }
                index += count;
            } else {
                // Long XOR-fill
                let count = (word & 0x3FFF) as usize;
                let fill = cursor.read_u8()?;
                check_room(dest, index, count)?;
                for slot in &mut dest[index..index + count] {
                    *slot ^= fill;
                }
                index += count;
            }
        }
    }
}
