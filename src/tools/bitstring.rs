use crate::error::{CodecError, CodecResult};

/// Render a packed stream as a printable string of binary digits, eight per
/// byte, header included. This is a display/transport rendering for
/// text-only channels; the byte form is the canonical one.
pub fn to_bit_string(packed: &[u8]) -> String {
    let mut out = String::with_capacity(packed.len() * 8);
    for byte in packed {
        out.push_str(&format!("{:08b}", byte));
    }
    out
}

/// Parse a binary-digit rendering back into packed bytes. The digit count
/// must be a whole number of bytes and every character a 0 or 1.
pub fn from_bit_string(bits: &str) -> CodecResult<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(CodecError::MalformedPacking(format!(
            "bit rendering is {} digits, not a multiple of 8",
            bits.len()
        )));
    }
    let mut out = Vec::with_capacity(bits.len() / 8);
    let mut byte = 0_u8;
    for (i, c) in bits.chars().enumerate() {
        byte = byte << 1
            | match c {
                '0' => 0,
                '1' => 1,
                other => {
                    return Err(CodecError::MalformedPacking(format!(
                        "character {:?} at position {} is not a binary digit",
                        other, i
                    )))
                }
            };
        if i % 8 == 7 {
            out.push(byte);
            byte = 0;
        }
    }
    Ok(out)
}
