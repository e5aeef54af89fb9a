//! An implementation of the [SHA-1][1] cryptographic hash.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sha1::Sha1;
//!
//! let hash = Sha1::digest(b"hello world");
//! assert_eq!(hash, hex!("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-1
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

/// SHA-1 hash function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1;

impl Sha1 {
    /// Compute the SHA-1 digest of `data`.
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
        buf[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut state, &buf);

        let mut out = [0u8; 20];
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        state.zeroize();
        buf.zeroize();
        out
    }
}

impl Digest for Sha1 {
    const OUTPUT_SIZE: usize = 20;
    const BLOCK_SIZE: usize = BLOCK_LEN;

    type Output = [u8; 20];

    #[inline]
    fn digest(data: &[u8]) -> [u8; 20] {
        Self::digest(data)
    }
}
