use log::{debug, info};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::{CodecError, CodecResult};
use crate::huffman_coding::codebook::CodeBook;
use crate::huffman_coding::huffman::build_tree;
use crate::tools::freq_count::freqs;

/// Compress `data`, building a fresh code book from its own symbol
/// frequencies. Returns the packed stream and the book needed to decode it.
/// Empty input yields the one-byte stream `[8]` and an empty book.
pub fn compress(data: &[u8]) -> CodecResult<(Vec<u8>, CodeBook)> {
    let frequencies = freqs(data);

    // The tree only exists long enough to hand out codes.
    let book = match build_tree(&frequencies) {
        Some(root) => CodeBook::from_tree(&root),
        None => CodeBook::default(),
    };
    debug!(
        "Built a code book with {} symbols, longest code {} bits.",
        book.len(),
        book.max_len()
    );

    let packed = encode(data, &book)?;
    info!(
        "Compressed {} bytes into {} ({} distinct symbols).",
        data.len(),
        packed.len(),
        book.len()
    );
    Ok((packed, book))
}

/// Encode `data` against an existing book: concatenate each symbol's code in
/// input order, pad to a byte boundary, and prepend the padding-count
/// header. A symbol missing from the book is an unrecoverable encoding
/// error; it cannot happen when the book came from this data's frequencies.
pub fn encode(data: &[u8], book: &CodeBook) -> CodecResult<Vec<u8>> {
    let mut packer = BitPacker::new(data.len() / 2 + 1);
    for &symbol in data {
        let code = book
            .code(symbol)
            .ok_or(CodecError::UnknownSymbol(symbol))?;
        packer.push_code(code);
    }
    Ok(packer.finish())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_test() {
        let (packed, book) = compress(b"").unwrap();
        assert_eq!(packed, vec![8]);
        assert!(book.is_empty());
    }

    #[test]
    fn aaab_packs_to_two_bytes_test() {
        // Two symbols get one-bit codes: 'b' (lighter) 0, 'a' 1.
        // "aaab" -> 1110 -> padded 1110_0000 behind a header of 4.
        let (packed, book) = compress(b"aaab").unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(packed, vec![4, 0b1110_0000]);
    }

    #[test]
    fn single_symbol_run_test() {
        // One-entry book, one-bit code 0: four payload bits, four pad bits.
        let (packed, book) = compress(b"zzzz").unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(packed, vec![4, 0b0000_0000]);
    }

    #[test]
    fn packed_len_matches_bit_count_test() {
        let data = b"abracadabra";
        let (packed, book) = compress(data).unwrap();
        let payload_bits: usize = data
            .iter()
            .map(|&s| book.code(s).unwrap().len as usize)
            .sum();
        // header byte + payload rounded up to whole bytes (full extra byte
        // when already aligned)
        assert_eq!(packed.len(), 1 + payload_bits / 8 + 1);
        assert!((1..=8).contains(&packed[0]));
    }

    #[test]
    fn unknown_symbol_test() {
        let (_, book) = compress(b"aaab").unwrap();
        match encode(b"aaxb", &book) {
            Err(CodecError::UnknownSymbol(sym)) => assert_eq!(sym, b'x'),
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
    }

    #[test]
    fn deterministic_output_test() {
        let data = b"deterministic output for identical input";
        let (first, _) = compress(data).unwrap();
        let (second, _) = compress(data).unwrap();
        assert_eq!(first, second);
    }
}
