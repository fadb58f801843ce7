//! Splitting address groups into dictionary indices and joining them back.
//!
//! Each group `v` becomes a pair `(hi, lo)` with `hi * divisor + lo == v`,
//! flattened in address order as `[hi0, lo0, hi1, lo1, ...]`.

use num_integer::Integer;

/// One group split against a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorPair {
    pub hi: u32,
    pub lo: u32,
}

impl FactorPair {
    pub fn split(value: u32, divisor: u32) -> Self {
        let (hi, lo) = value.div_rem(&divisor);
        FactorPair { hi, lo }
    }

    pub fn join(self, divisor: u32) -> u32 {
        self.hi * divisor + self.lo
    }
}

/// Factors every group and flattens the pairs into one index sequence.
pub fn factorize(components: &[u32], divisor: u32) -> Vec<usize> {
    components
        .iter()
        .map(|&value| FactorPair::split(value, divisor))
        .flat_map(|pair| [pair.hi as usize, pair.lo as usize])
        .collect()
}

/// Pairs consecutive factors back into group values.
///
/// A trailing unpaired factor is ignored; callers always pass an even count.
pub fn recombine(factors: &[usize], divisor: u32) -> Vec<u32> {
    factors
        .chunks_exact(2)
        .map(|pair| {
            FactorPair {
                hi: pair[0] as u32,
                lo: pair[1] as u32,
            }
            .join(divisor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_invariant_all_values() {
        for divisor in [16u32, 256] {
            let max = if divisor == 16 { 255 } else { 65535 };
            for value in 0..=max {
                let pair = FactorPair::split(value, divisor);
                assert!(pair.lo < divisor);
                assert!(pair.hi < divisor);
                assert_eq!(pair.hi * divisor + pair.lo, value);
            }
        }
    }

    #[test]
    fn test_factorize_order() {
        // 0xAB -> (10, 11); 0x0F -> (0, 15)
        assert_eq!(factorize(&[0xab, 0x0f], 16), vec![10, 11, 0, 15]);
        assert_eq!(factorize(&[0x2001], 256), vec![0x20, 0x01]);
    }

    #[test]
    fn test_recombine() {
        assert_eq!(recombine(&[10, 11, 0, 15], 16), vec![0xab, 0x0f]);
        assert_eq!(recombine(&[255, 255, 0, 1], 256), vec![0xffff, 1]);
    }

    #[test]
    fn test_factorize_recombine_boundaries() {
        let v4 = [0, 255, 16, 15];
        assert_eq!(recombine(&factorize(&v4, 16), 16), v4);

        let v6 = [0, 65535, 256, 255, 1, 0x8000, 0x00ff, 0xff00];
        assert_eq!(recombine(&factorize(&v6, 256), 256), v6);
    }
}
