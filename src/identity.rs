//! Key pairs used to sign records, and their libp2p private key encoding.

use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;

use libp2p::identity::{Keypair, PublicKey};
use libp2p::PeerId;
use quick_protobuf::{BytesReader, MessageRead, MessageWrite, Writer};
use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::EncodePrivateKey;
use rsa::RsaPrivateKey;
use rust_ipns::KeyType;
use zeroize::Zeroizing;

use crate::error::Error;
use crate::generate::keys_pb;

pub const DEFAULT_RSA_BITS: usize = 2048;

/// RSA modulus sizes the signing backend accepts.
pub const RSA_BITS: RangeInclusive<usize> = 2048..=4096;

/// A key pair together with its marshaled private key.
pub struct Identity {
    keypair: Keypair,
    encoded: Zeroizing<Vec<u8>>,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("key_type", &self.key_type())
            .field("peer_id", &self.peer_id())
            .finish()
    }
}

impl Identity {
    /// Generate a key pair of `key_type`. `bits` is the modulus size for RSA keys and is
    /// ignored otherwise.
    pub fn generate(key_type: KeyType, bits: usize) -> Result<Self, Error> {
        let keypair = match key_type {
            KeyType::RSA => return Self::generate_rsa(bits),
            KeyType::Ed25519 => Keypair::generate_ed25519(),
            KeyType::Secp256k1 => Keypair::generate_secp256k1(),
            KeyType::ECDSA => Keypair::generate_ecdsa(),
        };

        let encoded = Zeroizing::new(
            keypair
                .to_protobuf_encoding()
                .map_err(|e| Error::KeyEncode(e.to_string()))?,
        );

        Ok(Self { keypair, encoded })
    }

    /// Generate an RSA key pair with a `bits` modulus.
    pub fn generate_rsa(bits: usize) -> Result<Self, Error> {
        if !RSA_BITS.contains(&bits) {
            return Err(Error::KeyGeneration(format!(
                "unsupported rsa key size {bits}, expected {}..={}",
                RSA_BITS.start(),
                RSA_BITS.end()
            )));
        }

        let private_key = RsaPrivateKey::new(&mut OsRng, bits)?;
        Self::from_rsa(&private_key)
    }

    fn from_rsa(private_key: &RsaPrivateKey) -> Result<Self, Error> {
        let mut pkcs8 = Zeroizing::new(
            private_key
                .to_pkcs8_der()
                .map_err(|e| Error::KeyEncode(e.to_string()))?
                .as_bytes()
                .to_vec(),
        );
        let keypair = Keypair::rsa_from_pkcs8(&mut pkcs8[..])
            .map_err(|e| Error::KeyEncode(e.to_string()))?;

        // libp2p cannot marshal rsa keys itself, so the key protobuf is built from PKCS#1
        let pkcs1 = private_key
            .to_pkcs1_der()
            .map_err(|e| Error::KeyEncode(e.to_string()))?;
        let encoded = encode_private_key(KeyType::RSA, pkcs1.as_bytes())?;

        Ok(Self { keypair, encoded })
    }

    /// Parse a private key marshaled by [`Identity::to_protobuf_encoding`] (or by go-libp2p).
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = BytesReader::from_bytes(bytes);
        let private_key = keys_pb::PrivateKey::from_reader(&mut reader, bytes)
            .map_err(|e| Error::KeyDecode(e.to_string()))?;

        match KeyType::try_from(private_key.Type as i32) {
            Ok(KeyType::RSA) => {
                let private_key = RsaPrivateKey::from_pkcs1_der(&private_key.Data)
                    .map_err(|e| Error::KeyDecode(e.to_string()))?;
                Self::from_rsa(&private_key)
            }
            Ok(_) => {
                let keypair = Keypair::from_protobuf_encoding(bytes)
                    .map_err(|e| Error::KeyDecode(e.to_string()))?;
                let encoded = Zeroizing::new(bytes.to_vec());
                Ok(Self { keypair, encoded })
            }
            Err(ty) => Err(Error::KeyDecode(format!("unknown key type {ty}"))),
        }
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    pub fn public(&self) -> PublicKey {
        self.keypair.public()
    }

    pub fn key_type(&self) -> KeyType {
        self.keypair.key_type().into()
    }

    pub fn peer_id(&self) -> PeerId {
        self.keypair.public().to_peer_id()
    }

    /// The `/ipns/<name>` path records signed by this identity are published under.
    pub fn name(&self) -> String {
        format!("/ipns/{}", rust_ipns::name(&self.peer_id()))
    }

    /// The libp2p `PrivateKey` protobuf for this key pair. Anyone holding these bytes
    /// controls the name.
    pub fn to_protobuf_encoding(&self) -> &[u8] {
        &self.encoded
    }
}

fn encode_private_key(key_type: KeyType, data: &[u8]) -> Result<Zeroizing<Vec<u8>>, Error> {
    let message = keys_pb::PrivateKey {
        Type: keys_pb::KeyType::from(i32::from(key_type)),
        Data: Cow::Borrowed(data),
    };

    let mut buffer = Zeroizing::new(Vec::with_capacity(message.get_size()));
    {
        let mut writer = Writer::new(&mut *buffer);
        message
            .write_message(&mut writer)
            .map_err(|e| Error::KeyEncode(e.to_string()))?;
    }
    Ok(buffer)
}
