use digest::Digest;
use zeroize::Zeroize;

use crate::consts::{H512, K512};

pub(crate) const BLOCK_LEN: usize = 128;

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// SHA-512 compression function.
pub(crate) fn compress512(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u64; 80];
    for i in 0..16 {
        w[i] = u64::from_be_bytes([
            block[8 * i],
            block[8 * i + 1],
            block[8 * i + 2],
            block[8 * i + 3],
            block[8 * i + 4],
            block[8 * i + 5],
            block[8 * i + 6],
            block[8 * i + 7],
        ]);
    }
    for i in 16..80 {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..80 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K512[i])
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

/// SHA-512 hash function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512;

impl Sha512 {
    /// Compute the SHA-512 digest of `data`.
    pub fn digest(data: &[u8]) -> [u8; 64] {
        let mut state = H512;
        let mut buf = [0u8; BLOCK_LEN];

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for chunk in blocks.by_ref() {
            buf.copy_from_slice(chunk);
            compress512(&mut state, &buf);
        }

        let rest = blocks.remainder();
        buf = [0u8; BLOCK_LEN];
        buf[..rest.len()].copy_from_slice(rest);
        buf[rest.len()] = 0x80;
        if rest.len() >= BLOCK_LEN - 16 {
            compress512(&mut state, &buf);
            buf = [0u8; BLOCK_LEN];
        }
        // 128-bit length field; the high 8 bytes stay zero.
        let bit_len = (data.len() as u64).wrapping_mul(8);
        buf[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
        compress512(&mut state, &buf);

        let mut out = [0u8; 64];
        for (chunk, v) in out.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        state.zeroize();
        buf.zeroize();
        out
    }
}

impl Digest for Sha512 {
    const OUTPUT_SIZE: usize = 64;
    const BLOCK_SIZE: usize = BLOCK_LEN;

    type Output = [u8; 64];

    #[inline]
    fn digest(data: &[u8]) -> [u8; 64] {
        Self::digest(data)
    }
}
