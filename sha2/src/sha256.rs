use digest::Digest;
use zeroize::Zeroize;

use crate::consts::{H256, K256};

pub(crate) const BLOCK_LEN: usize = 64;

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// SHA-256 compression function.
pub(crate) fn compress256(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 64];
    for i in 0..16 {
        w[i] = u32::from_be_bytes([block[4 * i], block[4 * i + 1], block[4 * i + 2], block[4 * i + 3]]);
    }
    for i in 16..64 {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K256[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);

    w.zeroize();
}

/// SHA-256 hash function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl Sha256 {
    /// Compute the SHA-256 digest of `data`.
    pub fn digest(data: &[u8]) -> [u8; 32] {
        let mut state = H256;
        let mut buf = [0u8; BLOCK_LEN];

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for chunk in blocks.by_ref() {
            buf.copy_from_slice(chunk);
            compress256(&mut state, &buf);
        }

        let rest = blocks.remainder();
        buf = [0u8; BLOCK_LEN];
        buf[..rest.len()].copy_from_slice(rest);
        buf[rest.len()] = 0x80;
        if rest.len() >= BLOCK_LEN - 8 {
            compress256(&mut state, &buf);
            buf = [0u8; BLOCK_LEN];
        }
        let bit_len = (data.len() as u64).wrapping_mul(8);
        buf[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
        compress256(&mut state, &buf);

        let mut out = [0u8; 32];
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        state.zeroize();
        buf.zeroize();
        out
    }
}

impl Digest for Sha256 {
    const OUTPUT_SIZE: usize = 32;
    const BLOCK_SIZE: usize = BLOCK_LEN;

    type Output = [u8; 32];

    #[inline]
    fn digest(data: &[u8]) -> [u8; 32] {
        Self::digest(data)
    }
}

/// Double SHA-256: `sha256(sha256(data))`.
///
/// Collapsing the digest twice defends callers against length-extension
/// on the outer value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256d;

impl Sha256d {
    /// Compute the double SHA-256 digest of `data`.
    pub fn digest(data: &[u8]) -> [u8; 32] {
        let mut inner = Sha256::digest(data);
        let out = Sha256::digest(&inner);
        inner.zeroize();
        out
    }
}

impl Digest for Sha256d {
    const OUTPUT_SIZE: usize = 32;
    const BLOCK_SIZE: usize = BLOCK_LEN;

    type Output = [u8; 32];

    #[inline]
    fn digest(data: &[u8]) -> [u8; 32] {
        Self::digest(data)
    }
}
