//! Sliding-window decode loop for Blast streams
//!
//! The decoder owns a 4096-byte circular window that is appended to the
//! result whenever it fills, including in the middle of a copy. Until
//! the first flush the window is all the output that exists, so copy
//! distances are validated against the write position; afterwards a
//! full window of history is always available.

use super::tables::{DISTANCE_TABLE, LENGTH_BASE, LENGTH_EXTRA_BITS, LENGTH_TABLE, LITERAL_TABLE};
use crate::cursor::BitCursor;
use crate::{CodecError, Result, END_OF_STREAM, WINDOW_SIZE};

#[derive(Debug)]
pub(super) struct BlastDecoder {
    window: Box<[u8; WINDOW_SIZE]>,
    pos: usize,
    first_window: bool,
    output: Vec<u8>,
}

impl BlastDecoder {
    pub(super) fn new() -> Self {
        Self {
            window: Box::new([0; WINDOW_SIZE]),
            pos: 0,
            first_window: true,
            output: Vec::new(),
        }
    }

    /// Write one byte to the window, flushing when it fills
    fn push(&mut self, byte: u8) {
        self.window[self.pos] = byte;
        self.pos += 1;
        if self.pos == WINDOW_SIZE {
            self.output.extend_from_slice(&self.window[..]);
            self.pos = 0;
            self.first_window = false;
        }
    }

    /// Copy `length` bytes from `distance` back, one byte at a time
    ///
    /// Byte-at-a-time copying makes distances shorter than the length
    /// reproduce repeating patterns (distance 1 repeats the previous
    /// byte). The window index wraps, so after the first flush a copy
    /// may reach back into the previous window's contents.
    fn copy(&mut self, distance: usize, length: u32) -> Result<()> {
        if self.first_window && distance > self.pos {
            return Err(CodecError::DistanceBeforeStart {
                distance,
                position: self.pos,
            });
        }
        for _ in 0..length {
            let src = (self.pos + WINDOW_SIZE - distance) % WINDOW_SIZE;
            let byte = self.window[src];
            self.push(byte);
        }
        Ok(())
    }

    /// Drive the body loop until the end-of-stream length appears
    pub(super) fn run(
        mut self,
        literals_coded: bool,
        dict_log: u32,
        bits: &mut BitCursor<'_>,
    ) -> Result<Vec<u8>> {
        loop {
            if bits.read_bits(1)? == 1 {
                // Length/distance pair
                let symbol = LENGTH_TABLE.decode(bits)? as usize;
                let length =
                    LENGTH_BASE[symbol] as u32 + bits.read_bits(LENGTH_EXTRA_BITS[symbol])?;
                if length == END_OF_STREAM {
                    self.output.extend_from_slice(&self.window[..self.pos]);
                    return Ok(self.output);
                }

                let dist_symbol = DISTANCE_TABLE.decode(bits)? as u32;
                let shift = if length == 2 { 2 } else { dict_log };
                let distance = ((dist_symbol << shift) + bits.read_bits(shift)? + 1) as usize;
                self.copy(distance, length)?;
            } else {
                // Literal
                let byte = if literals_coded {
                    LITERAL_TABLE.decode(bits)? as u8
                } else {
                    bits.read_bits(8)? as u8
                };
                self.push(byte);
            }
        }
    }
}
