//! Single-byte (ISO 8859-1) encoding of caller strings.
//!
//! Code points U+0000..=U+00FF map to the byte of the same value. Anything
//! above is rejected instead of being split into several bytes.

use crate::error::{Error, Field, Result};

/// Encodes `input` one byte per character.
pub fn latin1_bytes(input: &str, field: Field) -> Result<Vec<u8>> {
    input
        .chars()
        .enumerate()
        .map(|(index, c)| {
            u8::try_from(u32::from(c)).map_err(|_| Error::Encoding {
                field,
                index,
                character: (field == Field::Text).then_some(c),
            })
        })
        .collect()
}

/// Lowercases `input`, then encodes it like [`latin1_bytes`].
///
/// A character outside Latin-1 is accepted when its lowercase form is inside
/// (KELVIN SIGN becomes `k`). Error indices refer to `input`'s characters.
pub fn latin1_lowercase_bytes(input: &str, field: Field) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(input.len());
    for (index, c) in input.chars().enumerate() {
        for lower in c.to_lowercase() {
            let byte = u8::try_from(u32::from(lower)).map_err(|_| Error::Encoding {
                field,
                index,
                character: (field == Field::Text).then_some(c),
            })?;
            bytes.push(byte);
        }
    }
    Ok(bytes)
}
