//! A single contiguous bit range inside a byte buffer.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.

use std::ops::Range;

/// One `(position, width)` pair naming a contiguous run of bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Descriptor {
    position: u32,
    width: u32,
}

impl Descriptor {
    /// Placeholder used to fill unused slots of fixed-capacity storage.
    pub(crate) const EMPTY: Descriptor = Descriptor::new(0, 0);

    /// Creates a descriptor for `width` bits starting at bit `position`.
    ///
    /// The width is not checked here; sets and layouts reject widths outside `1..=32`.
    pub const fn new(position: u32, width: u32) -> Self {
        Descriptor { position, width }
    }

    pub const fn position(&self) -> u32 {
        self.position
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// First bit after the range.
    pub const fn end(&self) -> u32 {
        self.position + self.width
    }

    /// `width` low bits set.
    pub const fn mask(&self) -> u32 {
        if self.width >= u32::BITS {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// The minimal run of bytes this descriptor touches.
    pub const fn byte_window(&self) -> ByteWindow {
        let bit_offset = self.position % 8;
        let len = (bit_offset + self.width).div_ceil(8);

        ByteWindow {
            start: (self.position / 8) as usize,
            len: len as usize,
            shift: len * 8 - bit_offset - self.width,
        }
    }

    /// True if both descriptors cover at least one common bit.
    pub const fn overlaps(&self, other: &Descriptor) -> bool {
        self.position < other.end() && other.position < self.end()
    }
}

impl From<(u32, u32)> for Descriptor {
    fn from((position, width): (u32, u32)) -> Self {
        Descriptor::new(position, width)
    }
}

/// Bytes spanned by a [Descriptor], read as one big-endian integer.
///
/// The field occupies bits `[shift, shift + width)` of that integer, counted from its least
/// significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteWindow {
    /// Index of the first byte.
    pub start: usize,
    /// Number of bytes, 1..=5 for widths up to 32.
    pub len: usize,
    /// Distance from the least significant bit of the window to the field.
    pub shift: u32,
}

impl ByteWindow {
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_aligned_window() {
        let window = Descriptor::new(8, 8).byte_window();
        assert_eq!(
            window,
            ByteWindow {
                start: 1,
                len: 1,
                shift: 0
            }
        );
    }

    #[test]
    fn test_unaligned_window() {
        let window = Descriptor::new(4, 8).byte_window();
        assert_eq!(window.range(), 0..2);
        assert_eq!(window.shift, 4);
    }

    #[test]
    fn test_full_width_spans_five_bytes() {
        let window = Descriptor::new(3, 32).byte_window();
        assert_eq!(window.range(), 0..5);
        assert_eq!(window.shift, 5);
    }

    #[test]
    fn test_single_bit_window() {
        let window = Descriptor::new(13, 1).byte_window();
        assert_eq!(window.range(), 1..2);
        assert_eq!(window.shift, 2);
    }

    #[test]
    fn test_mask() {
        assert_eq!(Descriptor::new(0, 1).mask(), 0b1);
        assert_eq!(Descriptor::new(0, 12).mask(), 0xFFF);
        assert_eq!(Descriptor::new(0, 32).mask(), u32::MAX);
    }

    #[test]
    fn test_overlaps() {
        let a = Descriptor::new(0, 4);
        assert!(a.overlaps(&Descriptor::new(3, 2)));
        assert!(!a.overlaps(&Descriptor::new(4, 4)));
        assert!(Descriptor::new(4, 4).overlaps(&Descriptor::new(0, 12)));
    }

    #[test]
    fn test_from_pair() {
        assert_eq!(Descriptor::from((16, 4)), Descriptor::new(16, 4));
    }
}
