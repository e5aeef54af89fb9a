//! Generic HMAC (RFC 2104) over any single-shot [`Digest`].
//!
//! `HMAC(key, data) = H((key ^ opad) || H((key ^ ipad) || data))`, with the
//! key zero-padded to the digest's block size and collapsed through the
//! digest first when it is longer than one block.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use hmac::hmac;
//! use sha2::Sha256;
//!
//! let tag = hmac::<Sha256>(b"Jefe", b"what do ya want for nothing?");
//! assert_eq!(
//!     tag,
//!     hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
//! );
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

use alloc::vec::Vec;

pub use digest::{self, Digest};

use zeroize::{Zeroize, Zeroizing};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Build one key-masking pad: the key zero-extended to `D::BLOCK_SIZE`
/// and xored with `mask`, collapsing the key through `D` first when it
/// exceeds one block. `extra` reserves room for what the caller appends,
/// so the key-bearing buffer never reallocates.
fn padded_key<D: Digest>(key: &[u8], mask: u8, extra: usize) -> Zeroizing<Vec<u8>> {
    let mut pad = Zeroizing::new(Vec::with_capacity(D::BLOCK_SIZE + extra));
    pad.resize(D::BLOCK_SIZE, mask);

    if key.len() > D::BLOCK_SIZE {
        let mut collapsed = D::digest(key);
        for (b, k) in pad.iter_mut().zip(collapsed.as_ref()) {
            *b ^= k;
        }
        collapsed.as_mut().zeroize();
    } else {
        for (b, k) in pad.iter_mut().zip(key) {
            *b ^= k;
        }
    }
    pad
}

/// Compute the HMAC of `data` under `key` over the digest `D`.
pub fn hmac<D: Digest>(key: &[u8], data: &[u8]) -> D::Output {
    let mut inner = padded_key::<D>(key, IPAD, data.len());
    inner.extend_from_slice(data);
    let mut inner_hash = D::digest(&inner);

    let mut outer = padded_key::<D>(key, OPAD, D::OUTPUT_SIZE);
    outer.extend_from_slice(inner_hash.as_ref());
    let out = D::digest(&outer);

    inner_hash.as_mut().zeroize();
    out
}
