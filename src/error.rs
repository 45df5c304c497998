//! Error types for the huffzip codec.
//!
//! Every failure the codec can report is a variant here. None of them is
//! transient and none is retried internally: an encode failure means the
//! caller handed us a symbol the current code table has never seen, and a
//! decode failure means the packed stream is truncated, corrupted, or was
//! produced by a different code table.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors reported by compress/decompress and the textual rendering helpers.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Encode met a symbol with no entry in the code table. Cannot happen
    /// when the table was built from the same data's frequencies.
    #[error("symbol {0:#04x} has no code in the current code table")]
    UnknownSymbol(u8),

    /// The packed stream fails a structural check before decoding starts:
    /// missing or out-of-range padding header, padding longer than the
    /// payload, or a bit rendering that is not whole bytes of binary digits.
    #[error("malformed packing: {0}")]
    MalformedPacking(String),

    /// Decode ran out of input with bits left in the candidate code, or the
    /// candidate outgrew every code in the table. The payload carries the
    /// unresolved bit count. Decoding against a code table other than the
    /// one that produced the stream surfaces here too.
    #[error("{0} trailing bits did not resolve to any code")]
    UnmatchedTrailingBits(usize),

    /// File I/O failure in the calling layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
