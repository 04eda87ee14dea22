pub const STATE_LEN: usize = 8;

/// Size of one message block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Size of the digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Longest padding tail: a full block of marker and zero fill plus the 64-bit length.
pub const MAX_PAD_LEN: usize = BLOCK_SIZE + 8;

pub const IV: [u32; STATE_LEN] = [
    0x7380_166f,
    0x4914_b2b9,
    0x1724_42d7,
    0xda8a_0600,
    0xa96f_30bc,
    0x1631_38aa,
    0xe38d_ee4d,
    0xb0fb_0e4e,
];

/// T_j for 0 <= j <= 15
pub const T_0: u32 = 0x79cc_4519;
/// T_j for 16 <= j <= 63
pub const T_1: u32 = 0x7a87_9d8a;
