//! Lazy recognizer-driven unpacking of byte buffers.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Creates a lazy iterator that walks `buffer` bit by bit, MSB-first,
/// feeding the accumulated bit pattern to `recognize`.
///
/// After each bit is appended, `recognize` is called with the pattern read
/// so far. Returning `Some(value)` yields `value` and starts a fresh
/// pattern; returning `None` keeps accumulating. The recognizer defines the
/// coding scheme (fixed-width fields, prefix codes, ...) and is never called
/// with more bits than it needed to decide, since the pattern resets on
/// every successful decode.
///
/// Iteration ends when the buffer is exhausted. An unrecognized trailing
/// pattern is dropped, not yielded; it stays observable through
/// [`UnpackIter::pending`]. Each call reads from the start of the buffer.
///
/// # Examples
///
/// ```
/// use bit_pack::unpack_iter;
///
/// let decoded: Vec<u64> = unpack_iter(&[0b10100001], |pattern| {
///     (pattern.len() == 4).then(|| u64::from_str_radix(pattern, 2).unwrap())
/// })
/// .collect();
/// assert_eq!(decoded, vec![0b1010, 0b0001]);
/// ```
pub fn unpack_iter<T, F>(buffer: &[u8], recognize: F) -> UnpackIter<'_, F>
where
    F: FnMut(&str) -> Option<T>,
{
    UnpackIter {
        buffer,
        byte_index: 0,
        bit_index: 7,
        pattern: String::new(),
        recognize,
    }
}

/// Iterator returned by [`unpack_iter`].
pub struct UnpackIter<'a, F> {
    buffer: &'a [u8],
    byte_index: usize,
    bit_index: usize,
    pattern: String,
    recognize: F,
}

impl<F> UnpackIter<'_, F> {
    /// The bit pattern accumulated since the last successful decode.
    ///
    /// Once the iterator is exhausted this is the trailing pattern the
    /// recognizer never accepted; it is empty when the buffer was decoded
    /// completely.
    pub fn pending(&self) -> &str {
        &self.pattern
    }
}

impl<T, F> Iterator for UnpackIter<'_, F>
where
    F: FnMut(&str) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.byte_index < self.buffer.len() {
            let bit = (self.buffer[self.byte_index] >> self.bit_index) & 1;
            self.pattern.push(if bit == 1 { '1' } else { '0' });

            if self.bit_index == 0 {
                self.bit_index = 7;
                self.byte_index += 1;
            } else {
                self.bit_index -= 1;
            }

            if let Some(decoded) = (self.recognize)(&self.pattern) {
                self.pattern.clear();
                return Some(decoded);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BitDescriptor, pack};

    // Fixed-width recognizer: decode every `width` bits as an integer.
    fn fixed_width(width: usize) -> impl FnMut(&str) -> Option<u64> {
        move |pattern| (pattern.len() == width).then(|| u64::from_str_radix(pattern, 2).unwrap())
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        let decoded: Vec<u64> = unpack_iter(&[], fixed_width(8)).collect();
        assert!(decoded.is_empty());
    }

    #[test]
    fn reads_fixed_width_fields_msb_first() {
        let decoded: Vec<u64> = unpack_iter(&[0b10100001, 0b00011111], fixed_width(4)).collect();
        assert_eq!(decoded, vec![0b1010, 0b0001, 0b0001, 0b1111]);
    }

    #[test]
    fn packed_binary_string_round_trips() {
        let buffer = pack(&[BitDescriptor::from_binary_str("00001000").unwrap()]);
        let decoded: Vec<u64> = unpack_iter(&buffer, fixed_width(8)).collect();
        assert_eq!(decoded, vec![8]);
    }

    #[test]
    fn never_matching_recognizer_yields_nothing() {
        let mut iter = unpack_iter(&[0xAB, 0xCD], |_| None::<u64>);
        assert!(iter.next().is_none());
        assert_eq!(iter.pending().len(), 16);
    }

    #[test]
    fn trailing_pattern_is_dropped_but_observable() {
        // 8-bit fields with a leading 0; the second byte never matches
        let mut iter = unpack_iter(&[0b00001000, 0b10110000], |pattern: &str| {
            (pattern.len() == 8 && pattern.starts_with('0'))
                .then(|| u64::from_str_radix(pattern, 2).unwrap())
        });
        assert_eq!(iter.next(), Some(8));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.pending(), "10110000");
    }

    #[test]
    fn pattern_resets_after_each_decode() {
        let mut seen = Vec::new();
        let decoded: Vec<u64> = unpack_iter(&[0b11110000], |pattern| {
            seen.push(pattern.len());
            (pattern.len() == 4).then(|| u64::from_str_radix(pattern, 2).unwrap())
        })
        .collect();
        assert_eq!(decoded, vec![0b1111, 0b0000]);
        assert_eq!(seen, vec![1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn fresh_call_rereads_from_the_start() {
        let buffer = [0b10100001];
        let first: Vec<u64> = unpack_iter(&buffer, fixed_width(8)).collect();
        let second: Vec<u64> = unpack_iter(&buffer, fixed_width(8)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn prefix_code_decoding() {
        // Unary: n zeros then a one
        let buffer = pack(&[
            BitDescriptor::from_binary_str("001").unwrap(),
            BitDescriptor::from_binary_str("1").unwrap(),
            BitDescriptor::from_binary_str("00001").unwrap(),
        ]);
        let decoded: Vec<usize> =
            unpack_iter(&buffer, |pattern| pattern.ends_with('1').then(|| pattern.len() - 1))
                .collect();
        assert_eq!(decoded, vec![2, 0, 4]);
    }
}
