//! Parameters of a minting run.

use std::path::PathBuf;

use chrono::{Datelike, Duration, Utc};
use rust_ipns::KeyType;

use crate::error::Error;
use crate::identity::{DEFAULT_RSA_BITS, RSA_BITS};

pub const DEFAULT_VALUE: &str = "/ipfs/QmUfV4m2PUM559LSvDsJkoz1KofTVq25RDXwW5uMdjNb4u";
pub const DEFAULT_RECORD_PATH: &str = "signed-ipns-record.bin";
pub const DEFAULT_KEY_PATH: &str = "private-key-ipns-record.bin";

/// Latest year a validity timestamp can carry in RFC 3339 form.
const MAX_EXPIRATION_YEAR: i32 = 9999;

/// Everything needed to mint a record and write it out.
///
/// The ttl and the lifetime are independent: the ttl only advises caches how long to hold
/// the record before resolving again, while the lifetime sets the expiration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintConfig {
    pub key_type: KeyType,
    /// Modulus size, only used for RSA keys.
    pub key_bits: usize,
    pub value: String,
    pub sequence: u64,
    /// Offset from now at which the record expires.
    pub lifetime: Duration,
    pub ttl: Duration,
    pub record_path: PathBuf,
    pub key_path: PathBuf,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            key_type: KeyType::RSA,
            key_bits: DEFAULT_RSA_BITS,
            value: DEFAULT_VALUE.into(),
            sequence: 0,
            lifetime: Duration::hours(24),
            ttl: Duration::seconds(60),
            record_path: DEFAULT_RECORD_PATH.into(),
            key_path: DEFAULT_KEY_PATH.into(),
        }
    }
}

impl MintConfig {
    pub fn with_key(mut self, key_type: KeyType, bits: usize) -> Self {
        self.key_type = key_type;
        self.key_bits = bits;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Place both output files in `dir`, keeping their file names.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.record_path = dir.join(DEFAULT_RECORD_PATH);
        self.key_path = dir.join(DEFAULT_KEY_PATH);
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.key_type == KeyType::RSA && !RSA_BITS.contains(&self.key_bits) {
            return Err(Error::Config(format!(
                "rsa key size must be within {}..={}, got {}",
                RSA_BITS.start(),
                RSA_BITS.end(),
                self.key_bits
            )));
        }

        if !self.value.starts_with('/') {
            return Err(Error::Config(format!(
                "value must be a path such as /ipfs/<cid>, got {:?}",
                self.value
            )));
        }

        if self.lifetime <= Duration::zero() {
            return Err(Error::Config("lifetime must be positive".into()));
        }

        match Utc::now().checked_add_signed(self.lifetime) {
            Some(eol) if eol.year() <= MAX_EXPIRATION_YEAR => {}
            _ => {
                return Err(Error::Config(format!(
                    "lifetime must expire no later than the year {MAX_EXPIRATION_YEAR}"
                )))
            }
        }

        if self.ttl < Duration::zero() {
            return Err(Error::Config("ttl must not be negative".into()));
        }

        if self.record_path == self.key_path {
            return Err(Error::Config(
                "record and key must be written to different files".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use chrono::Duration;
    use rust_ipns::KeyType;

    use super::{MintConfig, DEFAULT_KEY_PATH, DEFAULT_RECORD_PATH, DEFAULT_VALUE};

    #[test]
    fn defaults() {
        let config = MintConfig::default();
        assert_eq!(config.key_type, KeyType::RSA);
        assert_eq!(config.key_bits, 2048);
        assert_eq!(config.value, DEFAULT_VALUE);
        assert_eq!(config.sequence, 0);
        assert_eq!(config.lifetime, Duration::hours(24));
        assert_eq!(config.ttl, Duration::seconds(60));
        assert_eq!(config.record_path.to_str(), Some(DEFAULT_RECORD_PATH));
        assert_eq!(config.key_path.to_str(), Some(DEFAULT_KEY_PATH));
        config.validate().unwrap();
    }

    #[test]
    fn output_dir() {
        let config = MintConfig::default().with_output_dir("/tmp/out");
        assert!(config.record_path.ends_with(DEFAULT_RECORD_PATH));
        assert!(config.key_path.starts_with("/tmp/out"));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let invalid = [
            MintConfig::default().with_key(KeyType::RSA, 1024),
            MintConfig::default().with_value("QmUfV4m2PUM559LSvDsJkoz1KofTVq25RDXwW5uMdjNb4u"),
            MintConfig::default().with_lifetime(Duration::zero()),
            MintConfig::default().with_lifetime(Duration::days(365 * 20_000)),
            MintConfig::default().with_lifetime(Duration::days(365 * 300_000)),
            MintConfig::default().with_ttl(Duration::seconds(-1)),
        ];

        for config in invalid {
            assert!(config.validate().is_err(), "{config:?}");
        }

        // key size only matters for rsa
        MintConfig::default()
            .with_key(KeyType::Ed25519, 0)
            .validate()
            .unwrap();
    }

    #[test]
    fn lifetime_bounded_by_expiration_year() {
        let config = MintConfig::default().with_lifetime(Duration::days(365 * 20_000));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        assert!(err.to_string().contains("9999"));

        MintConfig::default()
            .with_lifetime(Duration::days(365 * 1_000))
            .validate()
            .unwrap();
    }
}
