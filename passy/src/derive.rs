use std::fmt;

use crate::conversion::to_hex;
use crate::encoding::{latin1_bytes, latin1_lowercase_bytes};
use crate::error::{Field, Result};
use crate::hmac::{HmacTrace, hmac_sha1, hmac_sha1_trace};
use crate::sha1::DIGEST_SIZE;

/// Symbols a password is built from, indexed by `byte % 32`.
///
/// No `0`/`O`, `1`/`l`/`I` or other look-alikes.
pub const PASSY_ALPHABET: &[u8; 32] = b"ABCDEFGHabcdefgh23456789#$%*+=@?";

/// Number of symbols in a password (one per digest byte).
pub const PASSWORD_LEN: usize = 12;

/// Number of hex characters in the confirmation fragment.
pub const FRAGMENT_LEN: usize = 10;

/// A derived password together with a short hex fragment of the same digest.
#[derive(Clone, PartialEq, Eq)]
pub struct PassyDigest {
    password: String,
    fragment: String,
}

impl PassyDigest {
    /// Builds the password and fragment from a raw HMAC-SHA1 digest.
    pub fn from_digest(digest: &[u8; DIGEST_SIZE]) -> Self {
        let password = passify(digest).iter().map(|&s| s as char).collect();
        let mut fragment = to_hex(digest);
        fragment.truncate(FRAGMENT_LEN);

        Self { password, fragment }
    }

    /// The 12-symbol password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The first 10 hex characters of the digest.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn into_parts(self) -> (String, String) {
        (self.password, self.fragment)
    }
}

impl fmt::Display for PassyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.password, self.fragment)
    }
}

// Keeps the password out of `{:?}` output.
impl fmt::Debug for PassyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassyDigest")
            .field("fragment", &self.fragment)
            .finish_non_exhaustive()
    }
}

/// Maps each of the first [`PASSWORD_LEN`] digest bytes through [`PASSY_ALPHABET`].
#[inline]
pub fn passify(digest: &[u8; DIGEST_SIZE]) -> [u8; PASSWORD_LEN] {
    let mut out = [0u8; PASSWORD_LEN];
    for (symbol, &byte) in out.iter_mut().zip(digest.iter()) {
        *symbol = PASSY_ALPHABET[(byte % 32) as usize];
    }
    out
}

/// Derives the password for already encoded bytes. `text` is used as is.
pub fn derive_bytes(text: &[u8], secret: &[u8]) -> PassyDigest {
    PassyDigest::from_digest(&hmac_sha1(secret, text))
}

/// Derives the password for site `text` from `secret`.
///
/// `text` is compared case-insensitively. Both strings must be Latin-1.
pub fn derive(text: &str, secret: &str) -> Result<PassyDigest> {
    let text = latin1_lowercase_bytes(text, Field::Text)?;
    let secret = latin1_bytes(secret, Field::Secret)?;

    tracing::debug!(text_len = text.len(), secret_len = secret.len(), "deriving password");
    let digest = derive_bytes(&text, &secret);
    tracing::debug!("password derived");

    Ok(digest)
}

/// Runs [`derive`] on tokio's blocking pool.
#[cfg(feature = "tokio")]
pub async fn derive_async(text: String, secret: String) -> Result<PassyDigest> {
    tokio::task::spawn_blocking(move || derive(&text, &secret))
        .await
        .map_err(|e| crate::Error::Task(e.to_string()))?
}

/// The HMAC intermediates [`derive`] goes through for `text` and `secret`.
pub fn trace(text: &str, secret: &str) -> Result<HmacTrace> {
    let text = latin1_lowercase_bytes(text, Field::Text)?;
    let secret = latin1_bytes(secret, Field::Secret)?;
    Ok(hmac_sha1_trace(&secret, &text))
}
