//! Format80 decompression and minimal compression (sprite/tile codec)
//!
//! A byte-opcode LZ77 variant. Copies run forward one byte at a time,
//! so a back-reference may deliberately overlap the bytes it is still
//! producing (relative offset 1 repeats the preceding byte; an absolute
//! copy reaching past the write position repeats a tile). Opcode forms,
//! for opcode byte `i`:
//!
//! - `i < 0x80`: short back-reference, count `((i >> 4) & 7) + 3`,
//!   relative offset `((i & 0xF) << 8) | next byte`.
//! - `0x80 <= i < 0xC0`: literal run of `i & 0x3F` bytes; a zero-length
//!   run terminates the stream.
//! - `i >= 0xC0`: 16-bit forms — `0x3E` fill, `0x3F` copy with 16-bit
//!   count, otherwise copy of `(i & 0x3F) + 3`; the last two carry a
//!   16-bit absolute source index that must precede the write position.
//!
//! The encoder is a minimal valid producer, not a compressor: it only
//! emits literal runs, and its output always decodes back exactly.

use crate::cursor::ByteCursor;
use crate::{CodecError, Result, MAX_LITERAL_RUN};

fn check_room(dest: &[u8], index: usize, count: usize) -> Result<()> {
    if index + count > dest.len() {
        return Err(CodecError::BufferTooSmall {
            needed: index + count,
            available: dest.len(),
        });
    }
    Ok(())
}

/// Forward byte-by-byte copy; source and destination ranges may overlap
fn copy_forward(dest: &mut [u8], mut source: usize, mut index: usize, count: usize) -> usize {
    for _ in 0..count {
        dest[index] = dest[source];
        index += 1;
        source += 1;
    }
    index
}

/// Decode a Format80 stream into `dest`, returning the bytes written
pub fn decode(src: &[u8], dest: &mut [u8]) -> Result<usize> {
    let mut cursor = ByteCursor::new(src);
    let mut index = 0;

    loop {
        let opcode = cursor.read_u8()?;

        if opcode & 0x80 == 0 {
            // Short back-reference with a relative offset
            let low = cursor.read_u8()? as usize;
            let count = (((opcode >> 4) & 0x7) + 3) as usize;
            let offset = ((opcode as usize & 0xF) << 8) | low;
            if offset == 0 || offset > index {
                return Err(CodecError::BackReferenceOutOfRange {
                    source: index.wrapping_sub(offset),
                    position: index,
                });
            }
            check_room(dest, index, count)?;
            if offset == 1 {
                // Degenerate but common: repeat the preceding byte
                let byte = dest[index - 1];
                dest[index..index + count].fill(byte);
                index += count;
            } else {
                index = copy_forward(dest, index - offset, index, count);
            }
        } else if opcode & 0x40 == 0 {
            // Literal run; zero length terminates
            let count = (opcode & 0x3F) as usize;
            if count == 0 {
                return Ok(index);
            }
            check_room(dest, index, count)?;
            for slot in &mut dest[index..index + count] {
                *slot = cursor.read_u8()?;
            }
            index += count;
        } else {
            let code = opcode & 0x3F;
            if code == 0x3E {
                // Fill with a 16-bit count
                let count = cursor.read_u16_le()? as usize;
                let fill = cursor.read_u8()?;
                check_room(dest, index, count)?;
                dest[index..index + count].fill(fill);
                index += count;
            } else {
                let count = if code == 0x3F {
                    cursor.read_u16_le()? as usize
                } else {
                    code as usize + 3
                };
                let source = cursor.read_u16_le()? as usize;
                if source >= index {
                    return Err(CodecError::BackReferenceOutOfRange {
                        source,
                        position: index,
                    });
                }
                check_room(dest, index, count)?;
                index = copy_forward(dest, source, index, count);
            }
        }
    }
}

/// Encode `src` as a valid Format80 stream of literal runs
///
/// Splits the input into runs of at most 63 bytes and terminates with a
/// zero-length run. Decoding the result always reproduces `src`.
pub fn encode(src: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(src.len() + src.len() / MAX_LITERAL_RUN + 2);
    for chunk in src.chunks(MAX_LITERAL_RUN) {
        output.push(0x80 | chunk.len() as u8);
        output.extend_from_slice(chunk);
    }
    output.push(0x80);
    output
}
