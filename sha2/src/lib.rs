//! An implementation of the [SHA-2][1] cryptographic hash algorithms.
//!
//! This crate provides SHA-256 and SHA-512, plus the double SHA-256
//! digest (`sha256(sha256(x))`) used where length-extension on the outer
//! value must not be possible.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sha2::{Sha256, Sha512};
//!
//! let hash = Sha256::digest(b"abc");
//! assert_eq!(
//!     hash,
//!     hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
//! );
//!
//! let hash = Sha512::digest(b"abc");
//! assert_eq!(
//!     hash[..],
//!     hex!("
//!         ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a
//!         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f
//!     ")[..]
//! );
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

mod consts;
mod sha256;
mod sha512;

pub use sha256::{Sha256, Sha256d};
pub use sha512::Sha512;
