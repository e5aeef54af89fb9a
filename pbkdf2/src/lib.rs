//! Generic PBKDF2 (RFC 2898) over any single-shot [`Digest`].
//!
//! Each output block `T_i` (1-based, big-endian index) is the xor of the
//! iterated HMAC chain `U_1 = HMAC(pw, salt || be32(i))`,
//! `U_{k+1} = HMAC(pw, U_k)`; the final block is prefix-truncated to fill
//! the caller's buffer exactly. Cost is linear in
//! `rounds * ceil(out.len() / D::OUTPUT_SIZE)`.
//!
//! The round count is a [`NonZeroU32`], so the degenerate zero-iteration
//! case cannot be requested.
//!
//! # Usage
//!
//! ```rust
//! use core::num::NonZeroU32;
//! use hex_literal::hex;
//! use pbkdf2::pbkdf2;
//! use sha2::Sha256;
//!
//! let mut key = [0u8; 32];
//! pbkdf2::<Sha256>(&mut key, b"password", b"salt", NonZeroU32::new(2).unwrap());
//! assert_eq!(
//!     key,
//!     hex!("ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43")
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
use core::num::NonZeroU32;

pub use digest::{self, Digest};
pub use hmac::hmac;

use zeroize::{Zeroize, Zeroizing};

/// Derive `out.len()` bytes of key material from `password` and `salt`.
pub fn pbkdf2<D: Digest>(out: &mut [u8], password: &[u8], salt: &[u8], rounds: NonZeroU32) {
    let mut block_salt = Zeroizing::new(Vec::with_capacity(salt.len() + 4));
    block_salt.extend_from_slice(salt);
    block_salt.extend_from_slice(&[0u8; 4]);

    for (i, chunk) in out.chunks_mut(D::OUTPUT_SIZE).enumerate() {
        let index = (i as u32).wrapping_add(1);
        let at = block_salt.len() - 4;
        block_salt[at..].copy_from_slice(&index.to_be_bytes());

        let mut u = hmac::<D>(password, &block_salt);
        let mut t = u;
        for _ in 1..rounds.get() {
            let next = hmac::<D>(password, u.as_ref());
            u.as_mut().zeroize();
            u = next;
            for (t, u) in t.as_mut().iter_mut().zip(u.as_ref()) {
                *t ^= u;
            }
        }
        chunk.copy_from_slice(&t.as_ref()[..chunk.len()]);

        u.as_mut().zeroize();
        t.as_mut().zeroize();
    }
}
