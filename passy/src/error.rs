use std::fmt;

/// Which caller-supplied string an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Secret,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text => f.write_str("text"),
            Field::Secret => f.write_str("secret"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A character has no single-byte (Latin-1) encoding. The character is
    /// only kept for the text, never for the secret.
    #[error("{field} contains a character outside Latin-1 at position {index}")]
    Encoding {
        field: Field,
        index: usize,
        character: Option<char>,
    },

    #[cfg(feature = "tokio")]
    #[error("derivation task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;
