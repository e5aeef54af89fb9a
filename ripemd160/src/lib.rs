//! An implementation of the [RIPEMD-160][1] cryptographic hash.
//!
//! Unlike the SHA family, RIPEMD-160 serializes its length field and
//! digest words little-endian.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use ripemd160::Ripemd160;
//!
//! let hash = Ripemd160::digest(b"Hello world!");
//! assert_eq!(hash, hex!("7f772647d88750add82d8e1a7a3e5c0902a346a3"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/RIPEMD
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use zeroize::Zeroize;

mod block;
use block::{compress, BLOCK_LEN, H0};

/// RIPEMD-160 hash function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ripemd160;

impl Ripemd160 {
    /// Compute the RIPEMD-160 digest of `data`.
    pub fn digest(data: &[u8]) -> [u8; 20] {
        let mut state = H0;
        let mut buf = [0u8; BLOCK_LEN];

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for chunk in blocks.by_ref() {
            buf.copy_from_slice(chunk);
            compress(&mut state, &buf);
        }

        let rest = blocks.remainder();
        buf = [0u8; BLOCK_LEN];
        buf[..rest.len()].copy_from_slice(rest);
        buf[rest.len()] = 0x80;
        if rest.len() >= BLOCK_LEN - 8 {
            compress(&mut state, &buf);
            buf = [0u8; BLOCK_LEN];
        }
        let bit_len = (data.len() as u64).wrapping_mul(8);
        buf[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_le_bytes());
        compress(&mut state, &buf);

        let mut out = [0u8; 20];
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }

        state.zeroize();
        buf.zeroize();
        out
    }
}

impl Digest for Ripemd160 {
    const OUTPUT_SIZE: usize = 20;
    const BLOCK_SIZE: usize = BLOCK_LEN;

    type Output = [u8; 20];

    #[inline]
    fn digest(data: &[u8]) -> [u8; 20] {
        Self::digest(data)
    }
}
