//! MSB-first packing of descriptor sequences into byte buffers.

use crate::BitDescriptor;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Number of bytes needed to hold `descriptors` packed contiguously.
#[inline]
pub fn packed_len(descriptors: &[BitDescriptor]) -> usize {
    let total_bits: usize = descriptors.iter().map(|d| d.bits()).sum();
    total_bits.div_ceil(8)
}

/// Packs `descriptors` into a freshly allocated buffer of exactly
/// [`packed_len`] bytes.
///
/// Fields appear in input order, each rendered as its `bits`-wide,
/// zero-padded, MSB-first binary representation, with no padding between
/// fields. Unused low-order bits of the final byte are zero.
///
/// # Examples
///
/// ```
/// use bit_pack::{BitDescriptor, pack};
///
/// let buffer = pack(&[
///     BitDescriptor::from_binary_str("101").unwrap(),
///     BitDescriptor::from_binary_str("00001").unwrap(),
/// ]);
/// assert_eq!(buffer, vec![0b10100001]);
/// ```
pub fn pack(descriptors: &[BitDescriptor]) -> Vec<u8> {
    let mut buffer = vec![0u8; packed_len(descriptors)];
    pack_into(descriptors, &mut buffer);
    buffer
}

/// Packs `descriptors` into a caller-provided buffer, starting at the most
/// significant bit of byte 0.
///
/// Bits are ORed into the buffer; existing contents are not cleared, so a
/// non-zero buffer must be zeroed by the caller first. If the buffer is too
/// small the output is silently truncated: bits that do not fit are dropped
/// and no error is raised. Callers normally size the buffer via
/// [`packed_len`] (or use [`pack`], which always sizes exactly).
///
/// Returns the number of bits written, which equals the descriptors' total
/// bit count exactly when nothing was truncated.
pub fn pack_into(descriptors: &[BitDescriptor], buffer: &mut [u8]) -> usize {
    let mut byte_index = 0;
    // MSB position within the current byte, counting down to 0.
    let mut bit_index = 7;
    let mut written = 0;

    for desc in descriptors {
        let value = desc.value();
        let mut remaining = desc.bits();

        while remaining > 0 {
            if byte_index >= buffer.len() {
                return written;
            }
            let available = bit_index + 1;

            if remaining <= available {
                // The rest of the field fits in the current byte.
                let chunk = value & low_mask(remaining);
                buffer[byte_index] |= (chunk as u8) << (available - remaining);

                if remaining == available {
                    bit_index = 7;
                    byte_index += 1;
                } else {
                    bit_index -= remaining;
                }
                written += remaining;
                remaining = 0;
            } else {
                // Fill the rest of the byte with the field's highest-order
                // unconsumed bits and carry on with the lower ones.
                let chunk = shr_saturating(value, remaining - available) & low_mask(available);
                buffer[byte_index] |= chunk as u8;

                bit_index = 7;
                byte_index += 1;
                written += available;
                remaining -= available;
            }
        }
    }

    written
}

// n never exceeds 8: chunks are byte-sized or smaller.
#[inline]
fn low_mask(n: usize) -> u64 {
    (1u64 << n) - 1
}

// A field declared wider than 64 bits has only zero-fill up there, but the
// raw shift would panic.
#[inline]
fn shr_saturating(value: u64, shift: usize) -> u64 {
    if shift >= 64 { 0 } else { value >> shift }
}
