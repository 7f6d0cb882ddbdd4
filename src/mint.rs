//! Minting a record: generate a key, sign a record, check it and write both out.

use libp2p::identity::PublicKey;
use rust_ipns::Record;

use crate::config::MintConfig;
use crate::error::Error;
use crate::identity::Identity;
use crate::output;

/// Sign a record for `config.value` with `identity` and embed its public key.
pub fn mint_record(identity: &Identity, config: &MintConfig) -> Result<Record, Error> {
    let mut record = Record::new(
        identity.keypair(),
        config.value.as_bytes(),
        config.lifetime,
        config.sequence,
        config.ttl,
    )
    .map_err(|e| match e {
        rust_ipns::Error::Signing(e) => Error::Signing(e.to_string()),
        e => Error::Record(e),
    })?;

    record.embed_public_key(&identity.public());

    Ok(record)
}

/// Returns true if `record` is signed by `public_key` and has not expired.
pub fn validate_record(public_key: &PublicKey, record: &Record) -> bool {
    match record.verify_with_key(public_key) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "record failed validation");
            false
        }
    }
}

/// Result of a minting run.
#[derive(Debug)]
pub struct MintOutput {
    pub identity: Identity,
    pub record: Record,
    /// The encoded record, exactly as written to disk.
    pub record_bytes: Vec<u8>,
}

impl MintOutput {
    /// The `/ipns/<name>` path the record can be published under.
    pub fn name(&self) -> String {
        self.identity.name()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Minter {
    config: MintConfig,
}

impl Minter {
    pub fn new(config: MintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    /// Generate the identity and a validated record without touching the filesystem.
    pub fn mint(&self) -> Result<MintOutput, Error> {
        let config = &self.config;
        config.validate()?;

        info!(key_type = %config.key_type, bits = config.key_bits, "generating key pair");
        let identity = Identity::generate(config.key_type, config.key_bits)?;

        info!(
            value = %config.value,
            sequence = config.sequence,
            lifetime = %config.lifetime,
            ttl = %config.ttl,
            "minting record"
        );
        let record = mint_record(&identity, config)?;

        if !validate_record(&identity.public(), &record) {
            return Err(Error::Validation);
        }
        info!(name = %identity.name(), "record validated");

        let record_bytes = record.encode()?;

        Ok(MintOutput {
            identity,
            record,
            record_bytes,
        })
    }

    /// Mint a record and write it and the private key to the configured paths.
    pub fn run(&self) -> Result<MintOutput, Error> {
        let output = self.mint()?;

        output::write_file(&self.config.record_path, &output.record_bytes)?;
        info!(path = %self.config.record_path.display(), len = output.record_bytes.len(), "saved record");

        output::write_secret(
            &self.config.key_path,
            output.identity.to_protobuf_encoding(),
        )?;
        info!(path = %self.config.key_path.display(), "saved private key");

        Ok(output)
    }
}
