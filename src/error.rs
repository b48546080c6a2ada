#[cfg(feature = "std")]
use thiserror::Error;

/// Descriptor construction errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitPackError {
    /// A field's bit width must be at least 1
    #[cfg_attr(feature = "std", error("bit width must be at least 1, got {0}"))]
    InvalidBitWidth(usize),

    /// Binary strings must be non-empty and contain only '0' and '1'
    #[cfg_attr(
        feature = "std",
        error("binary string must be non-empty and contain only '0' and '1'")
    )]
    InvalidBinaryString,

    /// The binary string encodes a value wider than 64 bits
    #[cfg_attr(
        feature = "std",
        error("binary string of {0} digits encodes a value that does not fit in 64 bits")
    )]
    ValueOverflow(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitPackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitPackError::InvalidBitWidth(bits) => {
                write!(f, "bit width must be at least 1, got {}", bits)
            }
            BitPackError::InvalidBinaryString => {
                write!(f, "binary string must be non-empty and contain only '0' and '1'")
            }
            BitPackError::ValueOverflow(len) => {
                write!(
                    f,
                    "binary string of {} digits encodes a value that does not fit in 64 bits",
                    len
                )
            }
        }
    }
}
