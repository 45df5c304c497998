use rayon::prelude::*;

/// Inputs below this size are counted on one thread; chunked fold/reduce
/// only pays for itself on larger buffers.
const PARALLEL_THRESHOLD: usize = 64_000;
const CHUNK_SIZE: usize = 16_000;

/// Returns a 256-entry frequency count of the input data. An empty input
/// yields an all-zero table. Uses parallelism when the data is large.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    if data.len() > PARALLEL_THRESHOLD {
        data.par_chunks(CHUNK_SIZE)
            .fold(
                || vec![0_u32; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u32; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u32>>(),
            )
    } else {
        let mut freqs = vec![0_u32; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn empty_input_test() {
        let f = freqs(b"");
        assert_eq!(f.len(), 256);
        assert!(f.iter().all(|&c| c == 0));
    }

    #[test]
    fn small_input_test() {
        let f = freqs(b"aaab");
        assert_eq!(f[b'a' as usize], 3);
        assert_eq!(f[b'b' as usize], 1);
        assert_eq!(f.iter().sum::<u32>(), 4);
    }

    #[test]
    fn parallel_matches_serial_test() {
        // Push past the threshold so the fold/reduce path runs.
        let data: Vec<u8> = (0..100_000_u32).map(|i| (i % 251) as u8).collect();
        let serial = {
            let mut f = vec![0_u32; 256];
            data.iter().for_each(|&el| f[el as usize] += 1);
            f
        };
        assert_eq!(freqs(&data), serial);
    }
}
