//! A (value, bit width) pair describing one field to pack.

use crate::BitPackError;

/// One field of a packed bit stream: a value and the number of bits it
/// occupies in the output.
///
/// `bits` may exceed the natural width of `value`; the excess high-order
/// bits are packed as zeros. Bits of `value` above `bits` are ignored.
///
/// # Examples
///
/// ```
/// use bit_pack::BitDescriptor;
///
/// let flag = BitDescriptor::new(1, 1).unwrap();
/// let header = BitDescriptor::from_binary_str("00001000").unwrap();
///
/// assert_eq!(flag.bits(), 1);
/// assert_eq!(header.value(), 8);
/// assert_eq!(header.bits(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDescriptor {
    value: u64,
    bits: usize,
}

impl BitDescriptor {
    /// Creates a descriptor for `value` occupying `bits` bits.
    ///
    /// Fails with [`BitPackError::InvalidBitWidth`] when `bits` is zero.
    pub fn new(value: u64, bits: usize) -> Result<Self, BitPackError> {
        if bits == 0 {
            return Err(BitPackError::InvalidBitWidth(bits));
        }
        Ok(Self { value, bits })
    }

    /// Parses a literal binary string: `value` is the binary value of the
    /// string, `bits` is its length.
    ///
    /// Fails with [`BitPackError::InvalidBinaryString`] when the string is
    /// empty or contains characters other than `'0'`/`'1'`, and with
    /// [`BitPackError::ValueOverflow`] when more than 64 significant bits
    /// are needed (leading zeros do not count).
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_pack::BitDescriptor;
    ///
    /// let d = BitDescriptor::from_binary_str("1111111111").unwrap();
    /// assert_eq!(d.value(), 0b1111111111);
    /// assert_eq!(d.bits(), 10);
    /// ```
    pub fn from_binary_str(s: &str) -> Result<Self, BitPackError> {
        if s.is_empty() {
            return Err(BitPackError::InvalidBinaryString);
        }

        let mut value = 0u64;
        for c in s.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(BitPackError::InvalidBinaryString),
            };
            value = value
                .checked_mul(2)
                .ok_or(BitPackError::ValueOverflow(s.len()))?
                + bit;
        }

        Self::new(value, s.len())
    }

    /// The field's value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The number of bits the field occupies in the packed output.
    #[inline]
    pub fn bits(&self) -> usize {
        self.bits
    }
}
