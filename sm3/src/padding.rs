//! 5.2 Padding
//!
//! A message of `l` bits is followed by a single `1` bit, `k` zero bits with
//! `l + 1 + k = 448 (mod 512)`, and `l` as a 64-bit big-endian integer. Only
//! byte-aligned messages are supported, so the marker bit and the zero fill
//! always form whole bytes: `0x80` followed by `0x00`s.

use block_buffer::byteorder::{ByteOrder, BE};

/// Length in bytes of the `0x80` marker plus zero fill for a message of `bit_len` bits.
pub fn fill_len(bit_len: u64) -> usize {
    let r = bit_len % 512;
    let k = if r + 1 <= 448 { 448 - r - 1 } else { 960 - r - 1 };
    let fill_bits = k + 1;
    debug_assert_eq!(fill_bits % 8, 0, "sm3: padding is not byte aligned");
    debug_assert!(fill_bits > 0);
    (fill_bits / 8) as usize
}

/// Writes the padding for a message of `byte_len` bytes into `out` and returns
/// the number of bytes written.
///
/// `out` must hold at least `MAX_PAD_LEN` bytes.
pub fn write_padding(byte_len: u64, out: &mut [u8]) -> usize {
    let bit_len = byte_len.wrapping_mul(8);
    let fill = fill_len(bit_len);

    out[0] = 0x80;
    for b in out[1..fill].iter_mut() {
        *b = 0;
    }
    BE::write_u64(&mut out[fill..fill + 8], bit_len);
    fill + 8
}
