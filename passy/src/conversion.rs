/// Hex lookup table for digest rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Convert a byte to its two lowercase hex characters (stack allocated)
#[inline]
pub fn byte_to_hex(byte: u8) -> [u8; 2] {
    [HEX_CHARS[(byte >> 4) as usize], HEX_CHARS[(byte & 0x0f) as usize]]
}

/// Lowercase hex string of `bytes`.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        let [hi, lo] = byte_to_hex(byte);
        out.push(hi as char);
        out.push(lo as char);
    }
    out
}

/// How [`render`] prints a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    /// Two-digit zero padded decimal values, e.g. `07 255 `.
    #[default]
    Decimal,
    /// Two lowercase hex digits per byte.
    Hex,
}

/// Renders every byte followed by a single space.
pub fn render(bytes: &[u8], radix: Radix) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for &byte in bytes {
        match radix {
            Radix::Decimal => {
                if byte >= 100 {
                    out.push(char::from(b'0' + byte / 100));
                }
                out.push(char::from(b'0' + byte / 10 % 10));
                out.push(char::from(b'0' + byte % 10));
                out.push(' ');
            }
            Radix::Hex => {
                let [hi, lo] = byte_to_hex(byte);
                out.push(hi as char);
                out.push(lo as char);
                out.push(' ');
            }
        }
    }
    out
}
