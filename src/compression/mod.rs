//! The compression module ties the huffzip pipeline together.
//!
//! Compression runs the stages in order: frequency count, prefix-code tree
//! merge, code book derivation, bit packing. Decompression strips the
//! padding header and greedily matches payload bits against the reverse
//! table. Both directions are whole-buffer and purely CPU-bound.
//!
//! The packed stream does not embed the code book, so a stream decodes only
//! against the book produced by the matching compress call. [`HuffmanCodec`]
//! keeps that book as instance state; the functions in [`compress`] and
//! [`decompress`] pass it explicitly instead.

pub mod compress;
pub mod decompress;

use crate::error::CodecResult;
use crate::huffman_coding::codebook::CodeBook;

/// A codec instance holding the code book from its most recent compress
/// call. `compress` replaces the book wholesale; `decompress` reads it, so a
/// packed stream must be decompressed by the instance that produced it.
///
/// A stream fed to the wrong instance is not detectable (no table signature
/// is embedded); it surfaces as `UnmatchedTrailingBits` or as well-formed
/// but wrong output. A `HuffmanCodec` is not internally synchronized; share
/// one across threads only behind external mutual exclusion, or give each
/// operation its own instance.
#[derive(Debug, Default)]
pub struct HuffmanCodec {
    book: CodeBook,
}

impl HuffmanCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress `data`, replacing this instance's code book as a side
    /// effect. Returns the packed stream: one padding-count byte, then the
    /// bit-packed payload.
    pub fn compress(&mut self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let (packed, book) = compress::compress(data)?;
        self.book = book;
        Ok(packed)
    }

    /// Decompress a packed stream against the book from the most recent
    /// compress call. Does not mutate the instance.
    pub fn decompress(&self, packed: &[u8]) -> CodecResult<Vec<u8>> {
        decompress::decode(packed, &self.book)
    }

    /// The current code book (empty until the first compress call).
    pub fn code_book(&self) -> &CodeBook {
        &self.book
    }
}
