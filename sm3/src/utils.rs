use block_buffer::byteorder::{ByteOrder, BE};
use digest::generic_array::typenum::U64;
use digest::generic_array::GenericArray;

use crate::consts::{STATE_LEN, T_0, T_1};

pub type Block = GenericArray<u8, U64>;

/// Rotate left by `n mod 32`, so a rotation by 32 is the identity.
#[inline(always)]
pub fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n % 32)
}

#[inline(always)]
fn ff0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn ff1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn gg0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn gg1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ rotl(x, 9) ^ rotl(x, 17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ rotl(x, 15) ^ rotl(x, 23)
}

/// Message schedule of one block: W_0..W_67 and W'_0..W'_63.
pub struct Schedule {
    pub w: [u32; 68],
    pub w_prime: [u32; 64],
}

/// 5.3.2 Message Expansion
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; 68];
    let mut w_prime = [0u32; 64];

    BE::read_u32_into(block, &mut w[..16]);
    for j in 16..=67 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ rotl(w[j - 3], 15)) ^ rotl(w[j - 13], 7) ^ w[j - 6];
    }
    for j in 0..=63 {
        w_prime[j] = w[j] ^ w[j + 4];
    }

    Schedule { w, w_prime }
}

macro_rules! round {
    ($j:expr, $t:expr, $ff:ident, $gg:ident,
     $a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident,
     $sched:expr) => {{
        let a12 = rotl($a, 12);
        let ss1 = rotl(a12.wrapping_add($e).wrapping_add(rotl($t, $j as u32)), 7);
        let ss2 = ss1 ^ a12;
        let tt1 = $ff($a, $b, $c)
            .wrapping_add($d)
            .wrapping_add(ss2)
            .wrapping_add($sched.w_prime[$j]);
        let tt2 = $gg($e, $f, $g)
            .wrapping_add($h)
            .wrapping_add(ss1)
            .wrapping_add($sched.w[$j]);
        $d = $c;
        $c = rotl($b, 9);
        $b = $a;
        $a = tt1;
        $h = $g;
        $g = rotl($f, 19);
        $f = $e;
        $e = p0(tt2);
    }};
}

fn sm3_digest_w(state: &mut [u32; STATE_LEN], sched: &Schedule) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for j in 0..=15 {
        round!(j, T_0, ff0, gg0, a, b, c, d, e, f, g, h, sched);
    }
    for j in 16..=63 {
        round!(j, T_1, ff1, gg1, a, b, c, d, e, f, g, h, sched);
    }
    // V(i+1) = ABCDEFGH xor V(i); the chaining value is folded in, never replaced.
    *state = [
        state[0] ^ a,
        state[1] ^ b,
        state[2] ^ c,
        state[3] ^ d,
        state[4] ^ e,
        state[5] ^ f,
        state[6] ^ g,
        state[7] ^ h,
    ];
}

/// CF: compress function
pub fn compress256(state: &mut [u32; STATE_LEN], block: &Block) {
    let sched = expand(block);
    sm3_digest_w(state, &sched);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::IV;

    // "abc" after padding, from GB/T 32905-2016 Appendix A.1
    fn abc_block() -> Block {
        let mut block = Block::default();
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 0x18;
        block
    }

    #[test]
    fn rotl_wraps_amount() {
        let x = 0x8000_0001;
        assert_eq!(rotl(x, 0), x);
        assert_eq!(rotl(x, 32), x);
        assert_eq!(rotl(x, 33), rotl(x, 1));
        assert_eq!(rotl(x, 1), 0x0000_0003);
        assert_eq!(rotl(T_1, 48), rotl(T_1, 16));
    }

    #[test]
    fn boolean_functions() {
        assert_eq!(ff1(0b1100, 0b1010, 0b0110), 0b1110);
        assert_eq!(gg1(0b1100, 0b1010, 0b0110), 0b1010);
        assert_eq!(ff0(1, 2, 4), 7);
    }

    #[test]
    fn expand_abc() {
        let sched = expand(&abc_block());
        assert_eq!(sched.w[0], 0x6162_6380);
        assert_eq!(sched.w[15], 0x0000_0018);
        assert_eq!(
            sched.w[16..24],
            [
                0x9092_e200, 0x0000_0000, 0x000c_0606, 0x719c_70ed, 0x0000_0000, 0x8001_801f,
                0x939f_7da9, 0x0000_0000,
            ]
        );
        assert_eq!(
            sched.w[64..68],
            [0x325c_8f78, 0xaccb_8011, 0xe11d_b9dd, 0xb99c_0545]
        );
        assert_eq!(sched.w_prime[0], 0x6162_6380);
        assert_eq!(sched.w_prime[63], 0x49e2_60d5);
    }

    #[test]
    fn compress_abc() {
        let mut state = IV;
        compress256(&mut state, &abc_block());
        assert_eq!(
            state,
            [
                0x66c7_f0f4, 0x62ee_edd9, 0xd1f2_d46b, 0xdc10_e4e2, 0x4167_c487, 0x5cf2_f7a2,
                0x297d_a02b, 0x8f4b_a8e0,
            ]
        );
    }
}
