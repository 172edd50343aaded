//! Error types for descriptor set construction and checked buffer access.

use thiserror::Error;

/// Errors produced when building a [crate::set::DescriptorSet] or a [crate::layout::FieldLayout].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Descriptor width is 0 or greater than 32 bits.
    #[error("descriptor {index} has invalid width {width}, expected 1..=32")]
    InvalidWidth { index: usize, width: u32 },
    /// No descriptors were given.
    #[error("descriptor set is empty")]
    Empty,
    /// More descriptors than [crate::set::MAX_DESCRIPTORS].
    #[error("{count} descriptors exceed the capacity of {max}", max = crate::set::MAX_DESCRIPTORS)]
    CapacityExceeded { count: usize },
    /// Sum of all widths is above the 32 bits of a logical value.
    #[error("total width of {total} bits exceeds 32")]
    TotalWidthExceeded { total: u32 },
    /// Two descriptors cover at least one common buffer bit.
    #[error("descriptors {first} and {second} overlap")]
    Overlap { first: usize, second: usize },
    /// `position + width` does not fit in a `u32`.
    #[error("descriptor {index} ends past the addressable bit range")]
    PositionOverflow { index: usize },
}

/// Errors produced by the checked pack/unpack entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Buffer is shorter than the bytes touched by the layout.
    #[error("buffer of {actual} bytes is too short, layout needs {required}")]
    BufferTooShort { required: usize, actual: usize },
}
