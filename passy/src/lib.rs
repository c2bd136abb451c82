//! Deterministic site passwords.
//!
//! A password is derived from a site identifier ("text", e.g. `amazon.com`)
//! and a user secret with HMAC-SHA1, then re-encoded through a 32-symbol
//! alphabet into 12 easily typed characters. Nothing is stored: the same
//! (text, secret) pair always produces the same password.
//!
//! ```
//! let digest = passy::derive("amazon.com", "mypassword").unwrap();
//! assert_eq!(digest.password(), "e98=4%7hffBb");
//! assert_eq!(digest.fragment(), "2c37565db2");
//! ```
//!
//! # Layers
//!
//! - [`sha1`](mod@sha1): SHA-1 written from FIPS 180-4 (padding, message schedule,
//!   80-round compression).
//! - [`hmac`]: HMAC (RFC 2104) over that SHA-1 with its 64-byte block.
//! - [`derive`](mod@derive): maps the first 12 bytes of the HMAC tag through
//!   [`PASSY_ALPHABET`] (`byte % 32`) and keeps the first 10 hex digits as a
//!   confirmation fragment.
//!
//! Both input strings are encoded one byte per character (Latin-1) and the
//! text is lowercased first. Characters above U+00FF are rejected with
//! [`Error::Encoding`].
//!
//! # Diagnostics
//!
//! [`trace`] returns every HMAC intermediate (normalized key, ipad, opad,
//! inner and outer hash) for inspection, and [`self_test`] checks the HMAC
//! against the RFC 2202 vectors.

pub mod conversion;
pub mod derive;
pub mod encoding;
pub mod error;
pub mod hmac;
pub mod sha1;

pub use crate::conversion::{Radix, render, to_hex};
#[cfg(feature = "tokio")]
pub use crate::derive::derive_async;
pub use crate::derive::{
    FRAGMENT_LEN, PASSWORD_LEN, PASSY_ALPHABET, PassyDigest, derive, derive_bytes, passify, trace,
};
pub use crate::error::{Error, Field, Result};
pub use crate::hmac::{
    HmacKey, HmacTrace, RFC2202_VECTORS, hmac_sha1, hmac_sha1_hex, hmac_sha1_trace, self_test,
};
pub use crate::sha1::{BLOCK_SIZE, DIGEST_SIZE, sha1, sha1_hex};
