//! Fixed-length palindrome check

/// Whether `buffer` reads the same forwards and backwards.
///
/// Walks inward from both ends and stops at the first mismatch. Buffers of
/// length 0 or 1 are trivially palindromes.
pub fn is_palindrome<T: PartialEq>(buffer: &[T]) -> bool {
    if buffer.len() < 2 {
        return true;
    }
    let (mut i, mut j) = (0, buffer.len() - 1);
    while i < j {
        if buffer[i] != buffer[j] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}
