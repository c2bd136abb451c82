//! HMAC-SHA1 (RFC 2104) over [`crate::sha1`].

use crate::conversion::to_hex;
use crate::sha1::{BLOCK_SIZE, DIGEST_SIZE, sha1};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// A key normalized to exactly one SHA-1 block.
///
/// Keys longer than [`BLOCK_SIZE`] are replaced by their digest, shorter
/// keys are zero padded on the right.
#[derive(Clone, PartialEq, Eq)]
pub struct HmacKey([u8; BLOCK_SIZE]);

impl HmacKey {
    pub fn new(key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_SIZE];
        if key.len() > BLOCK_SIZE {
            tracing::trace!(key_len = key.len(), "hashing down oversized hmac key");
            block[..DIGEST_SIZE].copy_from_slice(&sha1(key));
        } else {
            block[..key.len()].copy_from_slice(key);
        }
        Self(block)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    pub fn ipad(&self) -> [u8; BLOCK_SIZE] {
        self.xor_with(IPAD)
    }

    pub fn opad(&self) -> [u8; BLOCK_SIZE] {
        self.xor_with(OPAD)
    }

    fn xor_with(&self, pad: u8) -> [u8; BLOCK_SIZE] {
        let mut out = self.0;
        out.iter_mut().for_each(|b| *b ^= pad);
        out
    }
}

// Key material stays out of debug output.
impl std::fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HmacKey(..)")
    }
}

/// `sha1(pad ‖ message)`
fn hash_padded(pad: &[u8; BLOCK_SIZE], message: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut buf = Vec::with_capacity(BLOCK_SIZE + message.len());
    buf.extend_from_slice(pad);
    buf.extend_from_slice(message);
    sha1(&buf)
}

/// Computes `sha1(opad ‖ sha1(ipad ‖ message))`.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; DIGEST_SIZE] {
    let key = HmacKey::new(key);
    let inner = hash_padded(&key.ipad(), message);
    hash_padded(&key.opad(), &inner)
}

/// Lowercase hex of [`hmac_sha1`].
pub fn hmac_sha1_hex(key: &[u8], message: &[u8]) -> String {
    to_hex(&hmac_sha1(key, message))
}

/// Every intermediate value of one HMAC-SHA1 computation.
///
/// Purely diagnostic. `outer` always equals `hmac_sha1(key, message)`.
#[derive(Clone, PartialEq, Eq)]
pub struct HmacTrace {
    pub key: [u8; BLOCK_SIZE],
    pub message: Vec<u8>,
    pub ipad: [u8; BLOCK_SIZE],
    pub opad: [u8; BLOCK_SIZE],
    pub inner: [u8; DIGEST_SIZE],
    pub outer: [u8; DIGEST_SIZE],
}

impl std::fmt::Debug for HmacTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacTrace")
            .field("message_len", &self.message.len())
            .field("outer", &to_hex(&self.outer))
            .finish_non_exhaustive()
    }
}

pub fn hmac_sha1_trace(key: &[u8], message: &[u8]) -> HmacTrace {
    let key = HmacKey::new(key);
    let ipad = key.ipad();
    let opad = key.opad();
    let inner = hash_padded(&ipad, message);
    let outer = hash_padded(&opad, &inner);

    HmacTrace {
        key: *key.as_bytes(),
        message: message.to_vec(),
        ipad,
        opad,
        inner,
        outer,
    }
}

/// Key or data of a test case, either literal or a repeated byte.
#[derive(Debug, Clone, Copy)]
pub enum Input {
    Literal(&'static [u8]),
    Repeat(u8, usize),
}

impl Input {
    pub fn to_vec(self) -> Vec<u8> {
        match self {
            Input::Literal(bytes) => bytes.to_vec(),
            Input::Repeat(byte, len) => vec![byte; len],
        }
    }
}

/// One RFC 2202 HMAC-SHA1 test case.
#[derive(Debug, Clone, Copy)]
pub struct TestVector {
    pub key: Input,
    pub data: Input,
    pub digest: &'static str,
}

impl TestVector {
    pub fn passes(&self) -> bool {
        hmac_sha1_hex(&self.key.to_vec(), &self.data.to_vec()) == self.digest
    }
}

/// The HMAC-SHA1 test cases of RFC 2202 section 3.
pub const RFC2202_VECTORS: [TestVector; 7] = [
    TestVector {
        key: Input::Repeat(0x0b, 20),
        data: Input::Literal(b"Hi There"),
        digest: "b617318655057264e28bc0b6fb378c8ef146be00",
    },
    TestVector {
        key: Input::Literal(b"Jefe"),
        data: Input::Literal(b"what do ya want for nothing?"),
        digest: "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
    },
    TestVector {
        key: Input::Repeat(0xaa, 20),
        data: Input::Repeat(0xdd, 50),
        digest: "125d7342b9ac11cd91a39af48aa17b4f63f175d3",
    },
    TestVector {
        key: Input::Literal(&[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
            0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19,
        ]),
        data: Input::Repeat(0xcd, 50),
        digest: "4c9007f4026250c6bc8414f9bf50c86c2d7235da",
    },
    TestVector {
        key: Input::Repeat(0x0c, 20),
        data: Input::Literal(b"Test With Truncation"),
        digest: "4c1a03424b55e07fe7f27be1d58bb9324a9a5a04",
    },
    TestVector {
        key: Input::Repeat(0xaa, 80),
        data: Input::Literal(b"Test Using Larger Than Block-Size Key - Hash Key First"),
        digest: "aa4ae5e15272d00e95705637ce8a3b55ed402112",
    },
    TestVector {
        key: Input::Repeat(0xaa, 80),
        data: Input::Literal(
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
        ),
        digest: "e8e99d0f45237d786d6bbaa7965c7808bbff1a91",
    },
];

/// Runs every RFC 2202 vector. Returns `true` if all of them match.
pub fn self_test() -> bool {
    let failed = RFC2202_VECTORS.iter().filter(|v| !v.passes()).count();
    if failed > 0 {
        tracing::warn!(failed, total = RFC2202_VECTORS.len(), "hmac-sha1 self test failed");
    }
    failed == 0
}
