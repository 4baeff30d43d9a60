//! Common types and constants for the legacy asset codecs
//!
//! This module defines the error type, result alias and the fixed
//! parameters shared by the four decoders.

/// Error type for codec operations
///
/// Every fatal condition a decoder can hit has its own variant. Errors
/// are raised eagerly at the point of violation and abort the decode;
/// nothing is retried or recovered internally.
///
/// `Display` and `Error` are implemented by hand because the
/// `BackReferenceOutOfRange::source` field name would otherwise be
/// inferred by `thiserror` as the error-source field, which requires
/// the field to implement `Error`.
#[derive(Debug)]
pub enum CodecError {
    /// A Blast stream header byte was out of range (literal-coding flag
    /// not 0/1, or dictionary size byte not 4, 5 or 6)
    InvalidHeader {
        /// The offending byte value
        value: u8,
        /// Byte offset of the header field in the compressed input
        offset: usize,
    },

    /// A Huffman code length histogram violates the Kraft inequality
    OverSubscribedCode {
        /// Bit length at which the histogram went negative
        length: usize,
    },

    /// A bit sequence matched no canonical code within the maximum length
    InvalidCode {
        /// Maximum code length that was searched
        max_bits: usize,
    },

    /// A Blast back-reference reaches before the start of produced output
    DistanceBeforeStart {
        /// Decoded backward distance
        distance: usize,
        /// Window position at the time of the copy
        position: usize,
    },

    /// A Format80 back-reference does not point at already-produced output
    BackReferenceOutOfRange {
        /// Source index the opcode asked for
        source: usize,
        /// Destination index at the time of the copy
        position: usize,
    },

    /// The compressed input ended before the stream did
    Truncated {
        /// Byte offset at which the read ran past the input
        offset: usize,
    },

    /// The caller-supplied destination buffer cannot hold the output
    BufferTooSmall {
        /// Bytes the decode would have written
        needed: usize,
        /// Bytes the destination actually holds
        available: usize,
    },
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::InvalidHeader { value, offset } => {
                write!(f, "invalid header byte {value:#04x} at offset {offset}")
            }
            CodecError::OverSubscribedCode { length } => {
                write!(f, "oversubscribed huffman code at bit length {length}")
            }
            CodecError::InvalidCode { max_bits } => {
                write!(f, "bit sequence matches no huffman code within {max_bits} bits")
            }
            CodecError::DistanceBeforeStart { distance, position } => {
                write!(
                    f,
                    "copy distance {distance} reaches before start of output (position {position})"
                )
            }
            CodecError::BackReferenceOutOfRange { source, position } => {
                write!(
                    f,
                    "back-reference to {source} is not before output position {position}"
                )
            }
            CodecError::Truncated { offset } => {
                write!(f, "compressed input truncated at offset {offset}")
            }
            CodecError::BufferTooSmall { needed, available } => {
                write!(
                    f,
                    "destination buffer too small: need {needed} bytes, have {available}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Sliding window size for the Blast decoder (bytes)
pub const WINDOW_SIZE: usize = 0x1000;

/// Maximum canonical Huffman code length (bits)
pub const MAX_CODE_BITS: usize = 13;

/// Decoded length value that marks the end of a Blast stream
pub const END_OF_STREAM: u32 = 519;

/// Longest literal run a Format80 opcode can carry
pub const MAX_LITERAL_RUN: usize = 0x3F;
