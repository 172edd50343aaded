//! Packing and unpacking a 32-bit value across an ordered list of descriptors.

use crate::{bits, descriptor::Descriptor, errors::AccessError};

/// Splits a `u32` across [Descriptor]s and joins it back.
///
/// Descriptor 0 holds the most significant bits of the value and the last descriptor the least
/// significant ones, whatever their positions in the buffer. When the descriptors cover fewer
/// than 32 bits, [FieldCodec::set] drops the high bits of the value and [FieldCodec::get]
/// returns them as zero.
pub trait FieldCodec {
    /// Descriptors in value order, most significant first.
    fn descriptors(&self) -> &[Descriptor];

    /// Sum of all descriptor widths.
    fn total_width(&self) -> u32 {
        self.descriptors().iter().map(Descriptor::width).sum()
    }

    /// Number of bytes a buffer needs so that every descriptor fits.
    fn required_len(&self) -> usize {
        self.descriptors()
            .iter()
            .map(|descriptor| descriptor.byte_window().end())
            .max()
            .unwrap_or(0)
    }

    /// Writes `value` into `buffer`, leaving every bit outside the descriptors untouched.
    ///
    /// Panics if `buffer` is shorter than [FieldCodec::required_len].
    fn set(&self, buffer: &mut [u8], value: u32) {
        let mut consumed = 0u32;
        for &descriptor in self.descriptors().iter().rev() {
            bits::pack(buffer, descriptor, value.checked_shr(consumed).unwrap_or(0));
            consumed += descriptor.width();
        }
    }

    /// Reads the value previously written by [FieldCodec::set].
    ///
    /// Panics if `buffer` is shorter than [FieldCodec::required_len].
    fn get(&self, buffer: &[u8]) -> u32 {
        let mut value = 0u32;
        let mut consumed = 0u32;
        for &descriptor in self.descriptors().iter().rev() {
            value |= bits::unpack(buffer, descriptor)
                .checked_shl(consumed)
                .unwrap_or(0);
            consumed += descriptor.width();
        }

        value
    }

    /// Like [FieldCodec::set], but reports a short buffer instead of panicking.
    fn try_set(&self, buffer: &mut [u8], value: u32) -> Result<(), AccessError> {
        check_len(self.required_len(), buffer.len())?;
        self.set(buffer, value);
        Ok(())
    }

    /// Like [FieldCodec::get], but reports a short buffer instead of panicking.
    fn try_get(&self, buffer: &[u8]) -> Result<u32, AccessError> {
        check_len(self.required_len(), buffer.len())?;
        Ok(self.get(buffer))
    }
}

fn check_len(required: usize, actual: usize) -> Result<(), AccessError> {
    if actual < required {
        return Err(AccessError::BufferTooShort { required, actual });
    }

    Ok(())
}
