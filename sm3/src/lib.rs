//! SM3 cryptographic hash function (GB/T 32905-2016, GM/T 0004-2012).
//!
//! ```
//! use sm3::Sm3;
//!
//! let mut hasher = Sm3::new();
//! hasher.write(b"a");
//! hasher.write(b"bc");
//! assert_eq!(hasher.finalize(), sm3::hash(b"abc"));
//! ```
#![no_std]
#[cfg(feature = "std")]
extern crate std;

mod consts;
mod padding;
mod sm3;
mod utils;

pub use digest::Digest;
pub use crate::consts::{BLOCK_SIZE, DIGEST_SIZE};
pub use crate::sm3::Sm3;

use block_buffer::byteorder::{ByteOrder, BE};

use crate::consts::{IV, MAX_PAD_LEN};
use crate::padding::write_padding;
use crate::utils::{compress256, Block};

/// Computes the SM3 digest of `data` in one pass.
pub fn hash(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut state = IV;

    let mut blocks = data.chunks_exact(BLOCK_SIZE);
    for block in &mut blocks {
        compress256(&mut state, Block::from_slice(block));
    }

    let rem = blocks.remainder();
    let mut tail = [0u8; BLOCK_SIZE + MAX_PAD_LEN];
    tail[..rem.len()].copy_from_slice(rem);
    let n = rem.len() + write_padding(data.len() as u64, &mut tail[rem.len()..]);
    debug_assert!(n == BLOCK_SIZE || n == 2 * BLOCK_SIZE);

    for block in tail[..n].chunks_exact(BLOCK_SIZE) {
        compress256(&mut state, Block::from_slice(block));
    }

    let mut out = [0u8; DIGEST_SIZE];
    BE::write_u32_into(&state, &mut out);
    out
}
