//! Format2 decompression (literal/zero-run sprite codec)
//!
//! The simplest of the RLE family: a nonzero source byte is a literal,
//! a zero source byte is followed by a count of zeros to emit. There is
//! no terminator opcode; the stream ends when the input does.

use crate::cursor::ByteCursor;
use crate::{CodecError, Result};

/// Decode a Format2 stream into `dest`, returning the bytes written
///
/// `dest` must be pre-sized by the caller from externally-stored asset
/// metadata; overrunning it is [`CodecError::BufferTooSmall`].
pub fn decode(src: &[u8], dest: &mut [u8]) -> Result<usize> {
    let mut cursor = ByteCursor::new(src);
    let mut index = 0;

    while !cursor.is_done() {
        let byte = cursor.read_u8()?;
        if byte == 0 {
            let count = cursor.read_u8()? as usize;
            if index + count > dest.len() {
                return Err(CodecError::BufferTooSmall {
                    needed: index + count,
                    available: dest.len(),
                });
            }
            dest[index..index + count].fill(0);
            index += count;
        } else {
            if index >= dest.len() {
                return Err(CodecError::BufferTooSmall {
                    needed: index + 1,
                    available: dest.len(),
                });
            }
            dest[index] = byte;
            index += 1;
        }
    }

    Ok(index)
}
