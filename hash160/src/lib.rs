//! HASH160: the composite digest `ripemd160(sha256(x))`.
//!
//! Produces a 160-bit fingerprint whose collision resistance rests on
//! SHA-256, for callers that need a short digest of stronger origin.
//! The outer RIPEMD-160 stage keeps its little-endian serialization; the
//! inner SHA-256 digest is fed to it as raw big-endian bytes.
//!
//! # Usage
//!
//! ```rust
//! use hash160::Hash160;
//! use hex_literal::hex;
//!
//! let hash = Hash160::digest(b"");
//! assert_eq!(hash, hex!("b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"));
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use ripemd160::Ripemd160;
use sha2::Sha256;
use zeroize::Zeroize;

/// HASH160 composite hash function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hash160;

impl Hash160 {
    /// Compute `ripemd160(sha256(data))`.
    pub fn digest(data: &[u8]) -> [u8; 20] {
        let mut inner = Sha256::digest(data);
        let out = Ripemd160::digest(&inner);
        inner.zeroize();
        out
    }
}

impl Digest for Hash160 {
    const OUTPUT_SIZE: usize = 20;
    const BLOCK_SIZE: usize = 64;

    type Output = [u8; 20];

    #[inline]
    fn digest(data: &[u8]) -> [u8; 20] {
        Self::digest(data)
    }
}
