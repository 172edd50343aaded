//! Fixed-arity layouts whose descriptor count is known at compile time.
//!
//! A [FieldLayout] built in a `const` item is validated during compilation:
//!
//! ```
//! use bitpack::{codec::FieldCodec, layout::FieldLayout};
//!
//! // 32-bit little-endian value in a big-endian buffer
//! const LE32: FieldLayout<4> = FieldLayout::from_pairs([(24, 8), (16, 8), (8, 8), (0, 8)]);
//!
//! let mut buf = [0u8; 4];
//! LE32.set(&mut buf, 0xAABB_CCDD);
//! assert_eq!(buf, [0xDD, 0xCC, 0xBB, 0xAA]);
//! ```
//!
//! ```compile_fail
//! use bitpack::layout::FieldLayout;
//!
//! const OVERLAPPING: FieldLayout<2> = FieldLayout::from_pairs([(0, 8), (4, 8)]);
//! let _layout = OVERLAPPING;
//! ```

use crate::{
    codec::FieldCodec,
    descriptor::Descriptor,
    errors::DescriptorError,
    set::{DescriptorSet, validate},
};

/// `N` descriptors stored by value, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLayout<const N: usize> {
    descriptors: [Descriptor; N],
    total_width: u32,
}

impl<const N: usize> FieldLayout<N> {
    /// Builds a layout, panicking if it is invalid. In a `const` item the panic is a
    /// compile error.
    pub const fn new(descriptors: [Descriptor; N]) -> Self {
        match validate(&descriptors) {
            Ok(total_width) => FieldLayout {
                descriptors,
                total_width,
            },
            Err(DescriptorError::Empty) => panic!("field layout has no descriptors"),
            Err(DescriptorError::InvalidWidth { .. }) => {
                panic!("field layout has a descriptor width outside 1..=32")
            }
            Err(DescriptorError::PositionOverflow { .. }) => {
                panic!("field layout has a descriptor past the addressable bit range")
            }
            Err(DescriptorError::TotalWidthExceeded { .. }) => {
                panic!("field layout covers more than 32 bits")
            }
            Err(DescriptorError::Overlap { .. }) => {
                panic!("field layout has overlapping descriptors")
            }
            Err(DescriptorError::CapacityExceeded { .. }) => {
                panic!("field layout has too many descriptors")
            }
        }
    }

    /// Builds a layout from `(position, width)` pairs, panicking if it is invalid.
    pub const fn from_pairs(pairs: [(u32, u32); N]) -> Self {
        let mut descriptors = [Descriptor::EMPTY; N];
        let mut i = 0;
        while i < N {
            descriptors[i] = Descriptor::new(pairs[i].0, pairs[i].1);
            i += 1;
        }

        Self::new(descriptors)
    }

    /// Fallible counterpart of [FieldLayout::new] for layouts assembled at runtime.
    pub fn try_new(descriptors: [Descriptor; N]) -> Result<Self, DescriptorError> {
        let total_width = validate(&descriptors)?;
        Ok(FieldLayout {
            descriptors,
            total_width,
        })
    }

    /// Copies the descriptors into a runtime [DescriptorSet].
    pub fn to_set(&self) -> Result<DescriptorSet, DescriptorError> {
        DescriptorSet::try_from(self.descriptors)
    }
}

impl<const N: usize> FieldCodec for FieldLayout<N> {
    fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    fn total_width(&self) -> u32 {
        self.total_width
    }
}
