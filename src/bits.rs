//! Byte-range primitives: move the low bits of a value into or out of one [Descriptor]'s window.
//!
//! Both functions index the buffer directly and panic if it is shorter than the descriptor's
//! [ByteWindow](crate::descriptor::ByteWindow). Widths must be in `1..=32`.

use crate::descriptor::Descriptor;

/// Writes the low `descriptor.width()` bits of `value` into `buffer`.
///
/// Other bits sharing a byte with the field are preserved. Bytes outside the window are not
/// touched.
#[inline]
pub fn pack(buffer: &mut [u8], descriptor: Descriptor, value: u32) {
    let window = descriptor.byte_window();
    let mask = u64::from(descriptor.mask()) << window.shift;
    let payload = (u64::from(value) << window.shift) & mask;

    let last = window.len - 1;
    for (i, byte) in buffer[window.range()].iter_mut().enumerate() {
        let lsb = (last - i) * 8;
        let keep = !((mask >> lsb) as u8);
        *byte = (*byte & keep) | (payload >> lsb) as u8;
    }
}

/// Reads the field covered by `descriptor`, right-aligned.
#[inline]
pub fn unpack(buffer: &[u8], descriptor: Descriptor) -> u32 {
    let window = descriptor.byte_window();
    let raw = buffer[window.range()]
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

    (raw >> window.shift) as u32 & descriptor.mask()
}
