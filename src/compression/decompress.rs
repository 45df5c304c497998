use log::{debug, trace};

use crate::bitstream::bitreader::BitReader;
use crate::error::{CodecError, CodecResult};
use crate::huffman_coding::codebook::{Code, CodeBook};

/// Decode a packed stream against the book that produced it. Strips the
/// padding-count header and the padding bits it declares, then walks the
/// payload bit by bit, emitting a symbol every time the accumulated
/// candidate matches a code. The code set is prefix-free, so the greedy
/// match is unambiguous.
pub fn decode(packed: &[u8], book: &CodeBook) -> CodecResult<Vec<u8>> {
    let padding = *packed.first().ok_or_else(|| {
        CodecError::MalformedPacking("stream is empty, no padding header".to_string())
    })?;
    if !(1..=8).contains(&padding) {
        return Err(CodecError::MalformedPacking(format!(
            "padding count {} outside 1..=8",
            padding
        )));
    }

    let data_bits = (packed.len() - 1) * 8;
    if data_bits == 0 {
        // The degenerate empty stream carries a padding count of 8 and no
        // payload bytes at all.
        if padding == 8 {
            return Ok(Vec::new());
        }
        return Err(CodecError::MalformedPacking(format!(
            "padding count {} with no payload bytes",
            padding
        )));
    }
    let payload_bits = data_bits - padding as usize;
    debug!(
        "Decoding {} payload bits ({} bytes, {} padding).",
        payload_bits,
        packed.len(),
        padding
    );

    let mut br = BitReader::new(&packed[1..]);
    let mut out = Vec::with_capacity(packed.len() * 2);
    let mut candidate = Code::default();

    for _ in 0..payload_bits {
        let bit = br.bit().ok_or_else(|| {
            CodecError::MalformedPacking("stream ended before the declared payload".to_string())
        })?;
        candidate = candidate.appended(bit);
        if let Some(symbol) = book.symbol(candidate) {
            out.push(symbol);
            candidate = Code::default();
        } else if candidate.len > book.max_len() {
            // No code is this long, so no extension can ever match. The
            // stream is corrupt or belongs to a different book.
            trace!("Candidate {} outgrew the book at {}.", candidate, br.loc());
            return Err(CodecError::UnmatchedTrailingBits(candidate.len as usize));
        }
    }

    if candidate.len > 0 {
        return Err(CodecError::UnmatchedTrailingBits(candidate.len as usize));
    }
    Ok(out)
}
