//! # bit_pack
//!
//! A `no_std` compatible library for packing arbitrary-width unsigned integer
//! fields into a byte buffer, MSB-first, and unpacking a buffer back into
//! values through a caller-supplied recognizer.
//!
//! ```rust
//! use bit_pack::{BitDescriptor, pack, unpack_iter};
//!
//! // Three fields: 3 bits, 8 bits, 5 bits = 16 bits = 2 bytes
//! let fields = [
//!     BitDescriptor::new(0b101, 3).unwrap(),
//!     BitDescriptor::new(8, 8).unwrap(),
//!     BitDescriptor::new(0b11111, 5).unwrap(),
//! ];
//! let buffer = pack(&fields);
//! assert_eq!(buffer.len(), 2);
//!
//! // Read back fixed 8-bit fields
//! let bytes: Vec<u64> = unpack_iter(&buffer, |pattern| {
//!     (pattern.len() == 8).then(|| u64::from_str_radix(pattern, 2).unwrap())
//! })
//! .collect();
//! assert_eq!(bytes, vec![0b10100001, 0b00011111]);
//! ```
//!
//! ## Variable-width decoding
//!
//! The recognizer defines the coding scheme, so prefix codes work the same
//! way as fixed-width fields:
//!
//! ```rust
//! use bit_pack::{BitDescriptor, pack, unpack_iter};
//!
//! // Unary code: n encoded as n zeros followed by a one
//! let fields = [
//!     BitDescriptor::new(1, 3).unwrap(), // 001 -> 2
//!     BitDescriptor::new(1, 1).unwrap(), // 1   -> 0
//!     BitDescriptor::new(1, 5).unwrap(), // 00001 -> 4
//! ];
//! let buffer = pack(&fields);
//!
//! let values: Vec<usize> = unpack_iter(&buffer, |pattern| {
//!     pattern.ends_with('1').then(|| pattern.len() - 1)
//! })
//! .collect();
//! assert_eq!(values, vec![2, 0, 4]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitPackError;

pub mod descriptor;
pub use descriptor::BitDescriptor;

pub mod pack;
pub use pack::{pack, pack_into, packed_len};

pub mod unpack;
pub use unpack::{UnpackIter, unpack_iter};
