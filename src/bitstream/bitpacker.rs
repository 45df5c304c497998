use log::error;

use crate::huffman_coding::codebook::Code;

/// Packs huffman codes into the output byte stream. Byte 0 is reserved for
/// the padding count and patched by finish().
pub struct BitPacker {
    output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_len: usize,
}

impl BitPacker {
    /// Create a new BitPacker. Suggest setting the size hint to the input
    /// length; the packed stream is rarely larger.
    pub fn new(size: usize) -> Self {
        let mut output = Vec::with_capacity(size + 1);
        output.push(0); // padding count placeholder
        Self {
            output,
            queue: 0,
            q_bits: 0,
            bit_len: 0,
        }
    }

    /// Internal bitstream write function, drains whole bytes from the queue.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Append one code, most significant bit first. The queue holds at most
    /// 7 bits on entry and codes stay under 57 bits (see Code), so the shift
    /// cannot overflow.
    pub fn push_code(&mut self, code: Code) {
        self.queue <<= code.len; //shift queue by code length
        self.queue |= code.bits; //add the code bits to the queue
        self.q_bits += code.len; //update depth of queue bits
        self.bit_len += code.len as usize;
        self.write_stream();
    }

    /// Number of payload bits pushed so far, padding and header excluded.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Pad the final byte with 1-8 zero bits, record the count in the header
    /// byte, and return the packed stream. A payload already on a byte
    /// boundary still gets a full byte of padding so the count is never 0.
    /// Zero payload bits is the degenerate empty stream: just the header,
    /// recording 8.
    pub fn finish(mut self) -> Vec<u8> {
        let padding = 8 - (self.bit_len % 8) as u8;
        if self.bit_len == 0 {
            self.output[0] = padding;
            return self.output;
        }
        self.queue <<= padding;
        self.q_bits += padding;
        self.write_stream();
        if self.q_bits > 0 {
            // Structural invariant: header + payload + padding is whole bytes.
            error!("Stuff left in the BitPacker queue.");
            debug_assert_eq!(self.q_bits, 0);
        }
        self.output[0] = padding;
        self.output
    }
}
