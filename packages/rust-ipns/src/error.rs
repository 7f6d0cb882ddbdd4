use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("record exceeds the maximum size of {max} bytes ({size} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error("unable to decode record: {0}")]
    Decode(#[source] quick_protobuf::Error),

    #[error("unable to encode record: {0}")]
    Encode(#[source] quick_protobuf::Error),

    #[error("invalid data document: {0}")]
    Document(String),

    #[error("data document does not match the record fields")]
    DocumentMismatch,

    #[error("invalid validity timestamp: {0}")]
    Validity(#[from] chrono::ParseError),

    #[error("expiration must fall between the years 0 and 9999")]
    Expiration,

    #[error("unknown validity type {0}")]
    ValidityType(i32),

    #[error("ttl must be a non-negative duration that fits in 64 bits of nanoseconds")]
    InvalidTtl,

    #[error("record is missing a V2 signature")]
    EmptySignature,

    #[error("record is missing its data field")]
    EmptyData,

    #[error("invalid public key: {0}")]
    PublicKey(#[from] libp2p::identity::DecodingError),

    #[error("public key is not embedded and cannot be derived from the name")]
    MissingPublicKey,

    #[error("public key does not match the signer of the record")]
    KeyMismatch,

    #[error("signature is invalid")]
    InvalidSignature,

    #[error("record expired at {0}")]
    Expired(DateTime<Utc>),

    #[error("unable to sign record: {0}")]
    Signing(#[from] libp2p::identity::SigningError),

    #[error("value is not a valid ipfs path: {0}")]
    Value(String),
}
