//! SHA-1 (FIPS 180-4) over byte slices.
//!
//! Everything here is plain `u32` arithmetic with explicit wrapping, so the
//! digest is bit-for-bit identical on every target.

use crate::conversion::to_hex;

/// Compression block length in bytes. Also the HMAC key length.
pub const BLOCK_SIZE: usize = 64;

/// Digest length in bytes.
pub const DIGEST_SIZE: usize = 20;

/// Number of compression rounds (and message schedule words) per block.
pub const ROUNDS: usize = 80;

/// Offset within a block where the 64-bit length trailer starts.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants for rounds [0,20), [20,40), [40,60) and [60,80).
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// The running digest, h0..h4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState {
    h: [u32; 5],
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    pub const fn new() -> Self {
        Self { h: INITIAL_STATE }
    }

    pub fn words(&self) -> [u32; 5] {
        self.h
    }

    /// Mixes one 64-byte block into the state.
    pub fn compress(&mut self, block: &[u8; BLOCK_SIZE]) {
        let w = message_schedule(block);
        let [mut a, mut b, mut c, mut d, mut e] = self.h;

        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i {
                0..20 => (ch(b, c, d), K[0]),
                20..40 => (parity(b, c, d), K[1]),
                40..60 => (maj(b, c, d), K[2]),
                _ => (parity(b, c, d), K[3]),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (h, v) in self.h.iter_mut().zip([a, b, c, d, e]) {
            *h = h.wrapping_add(v);
        }
    }

    /// Serializes h0..h4 big-endian.
    pub fn finalize(self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, h) in out.chunks_exact_mut(4).zip(self.h) {
            chunk.copy_from_slice(&h.to_be_bytes());
        }
        out
    }
}

#[inline(always)]
fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Expands one block into the 80-word message schedule.
pub fn message_schedule(block: &[u8; BLOCK_SIZE]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];

    for (word, bytes) in w.iter_mut().zip(block.as_chunks::<4>().0) {
        *word = u32::from_be_bytes(*bytes);
    }
    for i in 16..ROUNDS {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    w
}

/// Appends the 0x80 marker, zero fill and the big-endian bit length.
///
/// The result is always a non-empty multiple of [`BLOCK_SIZE`].
pub fn pad(message: &[u8]) -> Vec<u8> {
    // Bit length of the unpadded message. SHA-1 defines it modulo 2^64.
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity((message.len() / BLOCK_SIZE + 2) * BLOCK_SIZE);
    padded.extend_from_slice(message);
    padded.push(0x80);
    while padded.len() % BLOCK_SIZE != LENGTH_OFFSET {
        padded.push(0);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());

    padded
}

/// Computes the SHA-1 digest of `message`.
pub fn sha1(message: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut state = HashState::new();
    let padded = pad(message);
    let (blocks, _) = padded.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
        state.compress(block);
    }
    state.finalize()
}

/// Lowercase hex of [`sha1`].
pub fn sha1_hex(message: &[u8]) -> String {
    to_hex(&sha1(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use ::sha1::Digest;

    fn reference(message: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = ::sha1::Sha1::new();
        hasher.update(message);
        hasher.finalize().into()
    }

    #[test]
    fn test_empty() {
        assert_eq!(sha1(b""), hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
        assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_quick_brown_fox() {
        assert_eq!(
            sha1(b"The quick brown fox jumps over the lazy dog"),
            hex!("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12")
        );
    }

    #[test]
    fn test_fips_vectors() {
        assert_eq!(sha1(b"abc"), hex!("a9993e364706816aba3e25717850c26c9cd0d89d"));
        assert_eq!(
            sha1(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1")
        );
    }

    #[test]
    fn test_million_a() {
        let message = vec![b'a'; 1_000_000];
        assert_eq!(sha1(&message), hex!("34aa973cd4c4daa4f61eeb2bdbad27316534016f"));
    }

    #[test]
    fn test_padding_boundaries() {
        // 55 bytes is the longest single-block message, 56 spills into a second block.
        assert_eq!(sha1(&[b'a'; 55]), hex!("c1c8bbdc22796e28c0e15163d20899b65621d65a"));
        assert_eq!(sha1(&[b'a'; 56]), hex!("c2db330f6083854c99d4b5bfb6e8f29f201be699"));
        assert_eq!(sha1(&[b'a'; 63]), hex!("03f09f5b158a7a8cdad920bddc29b81c18a551f5"));
        assert_eq!(sha1(&[b'a'; 64]), hex!("0098ba824b5c16427bd7a1122a5a442a25ec644d"));
        assert_eq!(sha1(&[b'a'; 65]), hex!("11655326c708d70319be2610e8a57d9a5b959d3b"));
    }

    #[test]
    fn test_pad_layout() {
        let padded = pad(b"abc");
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(&padded[..4], &[b'a', b'b', b'c', 0x80]);
        assert!(padded[4..LENGTH_OFFSET].iter().all(|&b| b == 0));
        assert_eq!(&padded[LENGTH_OFFSET..], &24u64.to_be_bytes());

        assert_eq!(pad(b"").len(), BLOCK_SIZE);
        assert_eq!(pad(&[0u8; 55]).len(), BLOCK_SIZE);
        assert_eq!(pad(&[0u8; 56]).len(), 2 * BLOCK_SIZE);
        assert_eq!(pad(&[0u8; 64]).len(), 2 * BLOCK_SIZE);
    }

    #[test]
    fn test_message_schedule() {
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x80;
        let w = message_schedule(&block);

        assert_eq!(w[0], 0x8000_0000);
        assert!(w[1..16].iter().all(|&x| x == 0));
        // w[16] = rotl1(w[13] ^ w[8] ^ w[2] ^ w[0])
        assert_eq!(w[16], 0x0000_0001);
    }

    #[test]
    fn test_single_compress_matches_sha1() {
        let padded = pad(b"abc");
        let mut state = HashState::new();
        state.compress(padded.as_slice().try_into().unwrap());
        assert_eq!(state.finalize(), sha1(b"abc"));
        assert_ne!(state.words(), HashState::default().words());
    }

    #[test]
    fn test_matches_sha1_crate() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in (0..300).chain([1000, 4096, 4097]) {
            let message: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
            assert_eq!(sha1(&message), reference(&message), "length {len}");
        }
    }
}
