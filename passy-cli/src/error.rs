#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Derive(#[from] passy::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No secret given. Pass --secret, set PASSY_SECRET or pipe it on stdin.")]
    MissingSecret,

    #[error("HMAC-SHA1 self test failed")]
    SelfTest,
}
