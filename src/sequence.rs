//! Fibonacci sequence generation.

/// Largest prefix length whose terms all fit in a `u64`. The 95th term
/// (index 94) exceeds `u64::MAX`.
pub const MAX_TERMS: usize = 94;

/// Returns the first `n` Fibonacci numbers, starting from 0. An empty vector
/// for `n == 0`.
///
/// # Panics
///
/// Panics when `n` exceeds [`MAX_TERMS`] instead of silently wrapping.
pub fn fibonacci(n: usize) -> Vec<u64> {
    assert!(
        n <= MAX_TERMS,
        "fibonacci prefix of length {n} does not fit in u64 terms"
    );

    let mut seq = Vec::with_capacity(n);
    for i in 0..n {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => seq[i - 1] + seq[i - 2],
        };
        seq.push(term);
    }
    seq
}
