//! Support code for the `passy` command-line tool.

pub mod error;
pub mod output;

pub use error::Error;
pub use output::{read_secret, write_digest, write_trace};

/// Environment variable holding the secret when `--secret` is not given.
pub const SECRET_ENV: &str = "PASSY_SECRET";
