//! Bit-level comparison of digests.

/// Number of differing bits between `a` and `b`.
///
/// Slices are compared byte by byte from the start; bytes present in only
/// one of them are compared against zero.
pub fn bit_difference(a: &[u8], b: &[u8]) -> usize {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            (x ^ y).count_ones() as usize
        })
        .sum()
}

/// Fraction of differing bits, over the bit length of the longer slice.
///
/// Returns 0.0 when both slices are empty.
pub fn avalanche_ratio(a: &[u8], b: &[u8]) -> f64 {
    let total_bits = a.len().max(b.len()) * 8;
    if total_bits == 0 {
        return 0.0;
    }
    bit_difference(a, b) as f64 / total_bits as f64
}
