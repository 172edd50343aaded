//! Serializable descriptor set description.
//!
//! These types describe a layout so it can ship as data (for example a JSON file next to a
//! register map) and be compiled into a [DescriptorSet] at startup:
//!
//! ```json
//! { "descriptors": [ { "position": 24, "width": 8 }, { "position": 16, "width": 8 } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::{descriptor::Descriptor, errors::DescriptorError, set::DescriptorSet};

/// One bit range of a [DescriptorSetDef].
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorDef {
    /// Offset of the first bit from the start of the buffer, MSB-first.
    pub position: u32,
    /// Number of bits, 1..=32.
    pub width: u32,
}

/// Ordered list of bit ranges, most significant first.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DescriptorSetDef {
    pub descriptors: Vec<DescriptorDef>,
}

impl From<DescriptorDef> for Descriptor {
    fn from(value: DescriptorDef) -> Self {
        Descriptor::new(value.position, value.width)
    }
}

impl From<Descriptor> for DescriptorDef {
    fn from(value: Descriptor) -> Self {
        DescriptorDef {
            position: value.position(),
            width: value.width(),
        }
    }
}

impl TryFrom<DescriptorSetDef> for DescriptorSet {
    type Error = DescriptorError;

    fn try_from(value: DescriptorSetDef) -> Result<Self, Self::Error> {
        DescriptorSet::try_from_descriptors(value.descriptors.into_iter().map(Descriptor::from))
    }
}

impl From<&DescriptorSet> for DescriptorSetDef {
    fn from(value: &DescriptorSet) -> Self {
        DescriptorSetDef {
            descriptors: value.iter().copied().map(DescriptorDef::from).collect(),
        }
    }
}
