//! Runtime descriptor sets: an ordered, validated list of [Descriptor]s stored inline.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{codec::FieldCodec, descriptor::Descriptor, errors::DescriptorError};

/// Maximum number of descriptors a [DescriptorSet] can hold.
pub const MAX_DESCRIPTORS: usize = 32;

/// An ordered list of descriptors that together hold one 32-bit value.
///
/// The first descriptor receives the most significant bits of the value, the last one the
/// least significant bits. Build with [DescriptorSet::from_pairs] or
/// [DescriptorSet::try_from_descriptors], then pack and unpack through [FieldCodec].
#[derive(Clone, Copy)]
pub struct DescriptorSet {
    descriptors: [Descriptor; MAX_DESCRIPTORS],
    len: usize,
    total_width: u32,
}

impl DescriptorSet {
    /// Builds a set from literal `(position, width)` pairs.
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Result<Self, DescriptorError> {
        Self::try_from_descriptors(pairs.iter().copied().map(Descriptor::from))
    }

    /// Builds a set from any sized collection of descriptors, keeping their order.
    pub fn try_from_descriptors<I>(descriptors: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = Descriptor>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = descriptors.into_iter();
        let count = iter.len();
        if count > MAX_DESCRIPTORS {
            return Err(rejected(DescriptorError::CapacityExceeded { count }));
        }

        let mut slots = [Descriptor::EMPTY; MAX_DESCRIPTORS];
        let mut len = 0;
        for descriptor in iter {
            if len == MAX_DESCRIPTORS {
                return Err(rejected(DescriptorError::CapacityExceeded { count: len + 1 }));
            }
            slots[len] = descriptor;
            len += 1;
        }

        let total_width = validate(&slots[..len]).map_err(rejected)?;
        tracing::trace!(count = len, total_width, "built descriptor set");

        Ok(DescriptorSet {
            descriptors: slots,
            len,
            total_width,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A constructed set is never empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Descriptor at `index`, where 0 holds the most significant bits.
    pub fn descriptor(&self, index: usize) -> Option<Descriptor> {
        self.as_slice().get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[Descriptor] {
        &self.descriptors[..self.len]
    }
}

fn rejected(error: DescriptorError) -> DescriptorError {
    tracing::debug!(%error, "rejected descriptor set");
    error
}

impl FieldCodec for DescriptorSet {
    fn descriptors(&self) -> &[Descriptor] {
        self.as_slice()
    }

    fn total_width(&self) -> u32 {
        self.total_width
    }
}

impl fmt::Debug for DescriptorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq for DescriptorSet {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DescriptorSet {}

impl Hash for DescriptorSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a> IntoIterator for &'a DescriptorSet {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<&[Descriptor]> for DescriptorSet {
    type Error = DescriptorError;

    fn try_from(descriptors: &[Descriptor]) -> Result<Self, Self::Error> {
        Self::try_from_descriptors(descriptors.iter().copied())
    }
}

impl TryFrom<Vec<Descriptor>> for DescriptorSet {
    type Error = DescriptorError;

    fn try_from(descriptors: Vec<Descriptor>) -> Result<Self, Self::Error> {
        Self::try_from_descriptors(descriptors)
    }
}

impl<const N: usize> TryFrom<[Descriptor; N]> for DescriptorSet {
    type Error = DescriptorError;

    fn try_from(descriptors: [Descriptor; N]) -> Result<Self, Self::Error> {
        Self::try_from_descriptors(descriptors)
    }
}

/// Checks widths, overflow, total width and overlap. Returns the total width.
///
/// `const` so that [crate::layout::FieldLayout] can reject bad layouts at compile time.
pub(crate) const fn validate(descriptors: &[Descriptor]) -> Result<u32, DescriptorError> {
    if descriptors.is_empty() {
        return Err(DescriptorError::Empty);
    }

    let mut total: u32 = 0;
    let mut i = 0;
    while i < descriptors.len() {
        let descriptor = descriptors[i];
        let width = descriptor.width();
        if width == 0 || width > u32::BITS {
            return Err(DescriptorError::InvalidWidth { index: i, width });
        }
        if descriptor.position().checked_add(width).is_none() {
            return Err(DescriptorError::PositionOverflow { index: i });
        }
        total = total.saturating_add(width);
        i += 1;
    }

    if total > u32::BITS {
        return Err(DescriptorError::TotalWidthExceeded { total });
    }

    let mut first = 0;
    while first < descriptors.len() {
        let mut second = first + 1;
        while second < descriptors.len() {
            if descriptors[first].overlaps(&descriptors[second]) {
                return Err(DescriptorError::Overlap { first, second });
            }
            second += 1;
        }
        first += 1;
    }

    Ok(total)
}
