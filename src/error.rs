//! Errors produced while minting a record.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The key pair could not be generated.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// A marshaled private key could not be parsed.
    #[error("unable to decode private key: {0}")]
    KeyDecode(String),

    /// The private key could not be marshaled.
    #[error("unable to encode private key: {0}")]
    KeyEncode(String),

    /// The record could not be signed.
    #[error("signing failed: {0}")]
    Signing(String),

    #[error(transparent)]
    Record(#[from] rust_ipns::Error),

    /// The freshly minted record did not pass its own validation.
    #[error("minted record failed validation")]
    Validation,

    #[error("unable to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<rsa::Error> for Error {
    fn from(e: rsa::Error) -> Self {
        Error::KeyGeneration(e.to_string())
    }
}
