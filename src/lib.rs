//! Huffzip, a lossless Huffman entropy codec.
//!
//! Version 0.1.0
//!
//! Turns an arbitrary byte sequence into a minimal-redundancy bit-packed
//! stream and reverses the process exactly. The pipeline is the classic one:
//! count symbol frequencies, merge the two lightest nodes until a single
//! prefix-code tree remains, derive a code per symbol from the root-to-leaf
//! paths, then pack the per-symbol codes into bytes behind a one-byte
//! padding-count header.
//!
//! No code table is embedded in the packed stream, so a stream can only be
//! decoded against the table that produced it. The simplest way to hold that
//! contract is one [`HuffmanCodec`] instance per compress/decompress pair:
//!
//! ```
//! use huffzip::HuffmanCodec;
//!
//! let mut codec = HuffmanCodec::new();
//! let packed = codec.compress(b"abracadabra").unwrap();
//! assert_eq!(codec.decompress(&packed).unwrap(), b"abracadabra");
//! ```
//!
//! Callers that want the coupling explicit can use the table-passing layer
//! in [`compression::compress`] and [`compression::decompress`] instead.

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::HuffmanCodec;
pub use error::{CodecError, CodecResult};
