//! # bitpack
//!
//! Pack 32-bit values into byte buffers at arbitrary bit positions, optionally split across
//! several non-contiguous bit ranges.
//!
//! A [Descriptor] names one `(position, width)` bit range, with bit 0 being the high bit of the
//! first byte. An ordered list of descriptors forms one logical value: the first descriptor
//! receives the most significant bits and the last one the least significant bits. Writes are
//! read-modify-write, so bits outside the descriptors are never disturbed.
//!
//! Lists built at runtime go into a [DescriptorSet]; lists known at compile time can be a
//! `const` [FieldLayout]. Both implement [FieldCodec].
//!
//! ## Example
//!
//! ```
//! use bitpack::{DescriptorSet, FieldCodec};
//!
//! // Nibbles of the value scattered across a 4-byte buffer
//! let set = DescriptorSet::from_pairs(&[(0, 4), (8, 4), (4, 4), (16, 4), (12, 4), (20, 4), (24, 8)])
//!     .unwrap();
//!
//! let buf = [0x12, 0x34, 0x56, 0x78];
//! assert_eq!(set.get(&buf), 0x1325_4678);
//!
//! let mut out = [0u8; 4];
//! set.set(&mut out, 0x1325_4678);
//! assert_eq!(out, buf);
//! ```

pub mod bits;
pub mod codec;
pub mod descriptor;
pub mod errors;
pub mod layout;
pub mod set;

#[cfg(feature = "serde")]
pub mod serde;

pub use codec::FieldCodec;
pub use descriptor::{ByteWindow, Descriptor};
pub use errors::{AccessError, DescriptorError};
pub use layout::FieldLayout;
pub use set::{DescriptorSet, MAX_DESCRIPTORS};
