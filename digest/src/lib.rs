//! Single-shot trait for cryptographic hash functions.
//!
//! Unlike the streaming `update()`/`finalize()` hashers elsewhere in the
//! ecosystem, implementors of this trait consume the whole message in one
//! call and keep no state between calls. Keyed constructions (`hmac`,
//! `pbkdf2`) are generic over this trait, which carries the block size
//! alongside the output size so that mismatched pairings are
//! unrepresentable.
//!
//! # Usage
//!
//! ```rust
//! use digest::Digest;
//!
//! fn fingerprint<D: Digest>(data: &[u8]) -> D::Output {
//!     D::digest(data)
//! }
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use core::fmt::Debug;

/// Cryptographic hash function computed over a complete message.
///
/// Any input length, including zero, is valid; there are no error cases.
pub trait Digest {
    /// Digest size in bytes.
    const OUTPUT_SIZE: usize;

    /// Compression block size in bytes.
    ///
    /// Keyed constructions pad and mask key material to this size.
    const BLOCK_SIZE: usize;

    /// The digest output type, typically `[u8; N]`.
    type Output: Copy + Eq + Debug + AsRef<[u8]> + AsMut<[u8]>;

    /// Compute the digest of `data` in one shot.
    fn digest(data: &[u8]) -> Self::Output;
}
