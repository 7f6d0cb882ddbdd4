//! IPNS record creation, encoding and validation.
//!
//! A [`Record`] binds a mutable name, derived from a libp2p public key, to a value such as
//! `/ipfs/<cid>`. Records are signed over a DAG-CBOR document holding the value, validity,
//! sequence and ttl (the "V2" signature) and are exchanged as `IpnsEntry` protobuf messages.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, SecondsFormat, Utc};
use libipld::cbor::DagCborCodec;
use libipld::prelude::Codec;
use libipld::{Cid, Ipld};
use libp2p::identity::{Keypair, PublicKey};
use libp2p::PeerId;
use quick_protobuf::{BytesReader, MessageRead, MessageWrite, Writer};

mod error;
mod generate;

pub use error::Error;

use generate::ipns_pb;

/// Records larger than this are rejected when decoding.
pub const MAX_RECORD_SIZE: usize = 10 * 1024;

const SIGNATURE_V2_PREFIX: &[u8] = b"ipns-signature:";

// multicodec for a CIDv1 wrapping a peer id multihash
const CID_VERSION_1: u8 = 0x01;
const LIBP2P_KEY_CODEC: u8 = 0x72;

// multihash code of the identity hash function
const IDENTITY_HASH_CODE: u64 = 0x00;

// RFC 3339 only has room for four digit years
const MAX_EXPIRATION_YEAR: i32 = 9999;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum ValidityType {
    EOL = 0,
}

impl From<ValidityType> for i32 {
    fn from(ty: ValidityType) -> Self {
        match ty {
            ValidityType::EOL => 0,
        }
    }
}

impl TryFrom<i32> for ValidityType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ValidityType::EOL),
            other => Err(Error::ValidityType(other)),
        }
    }
}

impl fmt::Display for ValidityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityType::EOL => f.write_str("EOL"),
        }
    }
}

/// Key algorithms known to libp2p. The discriminants are the `KeyType` values of the libp2p
/// key protobuf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum KeyType {
    RSA = 0,
    Ed25519 = 1,
    Secp256k1 = 2,
    ECDSA = 3,
}

impl From<libp2p::identity::KeyType> for KeyType {
    fn from(ty: libp2p::identity::KeyType) -> Self {
        match ty {
            libp2p::identity::KeyType::Ed25519 => KeyType::Ed25519,
            libp2p::identity::KeyType::RSA => KeyType::RSA,
            libp2p::identity::KeyType::Secp256k1 => KeyType::Secp256k1,
            libp2p::identity::KeyType::Ecdsa => KeyType::ECDSA,
        }
    }
}

impl From<KeyType> for i32 {
    fn from(ty: KeyType) -> Self {
        ty as i32
    }
}

impl TryFrom<i32> for KeyType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(KeyType::RSA),
            1 => Ok(KeyType::Ed25519),
            2 => Ok(KeyType::Secp256k1),
            3 => Ok(KeyType::ECDSA),
            other => Err(other),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::RSA => "rsa",
            KeyType::Ed25519 => "ed25519",
            KeyType::Secp256k1 => "secp256k1",
            KeyType::ECDSA => "ecdsa",
        };
        f.write_str(name)
    }
}

impl FromStr for KeyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rsa" => Ok(KeyType::RSA),
            "ed25519" => Ok(KeyType::Ed25519),
            "secp256k1" => Ok(KeyType::Secp256k1),
            "ecdsa" => Ok(KeyType::ECDSA),
            other => Err(format!("unknown key type: {other}")),
        }
    }
}

/// Returns the IPNS name for `peer_id`: a CIDv1 with the `libp2p-key` codec, encoded in
/// lowercase base36 (eg `k51...` for ed25519 keys, `k2k4r8...` for RSA keys).
pub fn name(peer_id: &PeerId) -> String {
    let mut bytes = vec![CID_VERSION_1, LIBP2P_KEY_CODEC];
    bytes.extend(peer_id.to_bytes());
    multibase::encode(multibase::Base::Base36Lower, bytes)
}

/// A signed IPNS record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    data: Vec<u8>,

    value: Vec<u8>,
    validity_type: ValidityType,
    validity: Vec<u8>,
    sequence: u64,
    ttl: u64,

    public_key: Vec<u8>,

    signature_v1: Vec<u8>,
    signature_v2: Vec<u8>,
}

impl TryFrom<ipns_pb::IpnsEntry<'_>> for Record {
    type Error = Error;

    fn try_from(entry: ipns_pb::IpnsEntry<'_>) -> Result<Self, Self::Error> {
        Ok(Record {
            data: entry.data.map(Cow::into_owned).unwrap_or_default(),
            value: entry.value.map(Cow::into_owned).unwrap_or_default(),
            validity_type: entry.validityType.unwrap_or_default().try_into()?,
            validity: entry.validity.map(Cow::into_owned).unwrap_or_default(),
            sequence: entry.sequence.unwrap_or_default(),
            ttl: entry.ttl.unwrap_or_default(),
            public_key: entry.pubKey.map(Cow::into_owned).unwrap_or_default(),
            signature_v1: entry.signatureV1.map(Cow::into_owned).unwrap_or_default(),
            signature_v2: entry.signatureV2.map(Cow::into_owned).unwrap_or_default(),
        })
    }
}

/// The signed document carried in the `data` field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    value: Vec<u8>,
    validity_type: ValidityType,
    validity: Vec<u8>,
    sequence: u64,
    ttl: u64,
}

impl Document {
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn validity_type(&self) -> ValidityType {
        self.validity_type
    }

    pub fn validity(&self) -> &[u8] {
        &self.validity
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    /// Encodes the document as DAG-CBOR. Map keys are emitted in canonical order
    /// (shortest first, then bytewise), matching other implementations byte for byte.
    fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut map = BTreeMap::new();
        map.insert("Value".to_string(), Ipld::Bytes(self.value.clone()));
        map.insert(
            "ValidityType".to_string(),
            Ipld::Integer(i32::from(self.validity_type).into()),
        );
        map.insert("Validity".to_string(), Ipld::Bytes(self.validity.clone()));
        map.insert("Sequence".to_string(), Ipld::Integer(self.sequence.into()));
        map.insert("TTL".to_string(), Ipld::Integer(self.ttl.into()));

        DagCborCodec
            .encode(&Ipld::Map(map))
            .map_err(|e| Error::Document(e.to_string()))
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let document: Ipld = DagCborCodec
            .decode(data)
            .map_err(|e| Error::Document(e.to_string()))?;

        let map = match document {
            Ipld::Map(map) => map,
            _ => return Err(Error::Document("expected a map".into())),
        };

        let bytes = |key: &str| match map.get(key) {
            Some(Ipld::Bytes(bytes)) => Ok(bytes.clone()),
            _ => Err(Error::Document(format!("missing or invalid {key}"))),
        };

        let integer = |key: &str| match map.get(key) {
            Some(Ipld::Integer(int)) => {
                u64::try_from(*int).map_err(|_| Error::Document(format!("{key} is out of range")))
            }
            _ => Err(Error::Document(format!("missing or invalid {key}"))),
        };

        let validity_type = match map.get("ValidityType") {
            Some(Ipld::Integer(0)) => ValidityType::EOL,
            Some(Ipld::Integer(other)) => {
                return Err(Error::Document(format!("unknown ValidityType {other}")))
            }
            _ => return Err(Error::Document("missing or invalid ValidityType".into())),
        };

        Ok(Document {
            value: bytes("Value")?,
            validity_type,
            validity: bytes("Validity")?,
            sequence: integer("Sequence")?,
            ttl: integer("TTL")?,
        })
    }
}

impl Record {
    /// Creates a record for `value` that expires `lifetime` from now.
    pub fn new(
        keypair: &Keypair,
        value: impl AsRef<[u8]>,
        lifetime: Duration,
        sequence: u64,
        ttl: Duration,
    ) -> Result<Self, Error> {
        let eol = Utc::now()
            .checked_add_signed(lifetime)
            .ok_or(Error::Expiration)?;
        Self::with_expiration(keypair, value, eol, sequence, ttl)
    }

    /// Creates a record for `value` that expires at `eol`.
    ///
    /// Both signatures are produced: V2 over the DAG-CBOR document, and the legacy V1 over
    /// `value || validity || "EOL"` for resolvers that predate V2. `eol` must fall within
    /// years 0 to 9999 so it can be written as an RFC 3339 timestamp.
    pub fn with_expiration(
        keypair: &Keypair,
        value: impl AsRef<[u8]>,
        eol: DateTime<Utc>,
        sequence: u64,
        ttl: Duration,
    ) -> Result<Self, Error> {
        if !(0..=MAX_EXPIRATION_YEAR).contains(&eol.year()) {
            return Err(Error::Expiration);
        }

        let ttl = ttl
            .num_nanoseconds()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .ok_or(Error::InvalidTtl)?;

        let document = Document {
            value: value.as_ref().to_vec(),
            validity_type: ValidityType::EOL,
            validity: format_validity(&eol).into_bytes(),
            sequence,
            ttl,
        };

        let data = document.encode()?;

        let signature_v1 = keypair.sign(&signature_v1_payload(
            &document.value,
            &document.validity,
            document.validity_type,
        ))?;

        let signature_v2 = keypair.sign(&signature_v2_payload(&data))?;

        let Document {
            value,
            validity_type,
            validity,
            sequence,
            ttl,
        } = document;

        Ok(Record {
            data,
            value,
            validity_type,
            validity,
            sequence,
            ttl,
            public_key: Vec::new(),
            signature_v1,
            signature_v2,
        })
    }

    pub fn decode(data: impl AsRef<[u8]>) -> Result<Self, Error> {
        let data = data.as_ref();

        if data.len() > MAX_RECORD_SIZE {
            return Err(Error::TooLarge {
                size: data.len(),
                max: MAX_RECORD_SIZE,
            });
        }

        let mut reader = BytesReader::from_bytes(data);
        let entry = ipns_pb::IpnsEntry::from_reader(&mut reader, data).map_err(Error::Decode)?;
        entry.try_into()
    }

    /// Encodes the record as an `IpnsEntry` protobuf message.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let entry = self.to_entry();
        let mut buffer = Vec::with_capacity(entry.get_size());
        {
            let mut writer = Writer::new(&mut buffer);
            entry.write_message(&mut writer).map_err(Error::Encode)?;
        }
        Ok(buffer)
    }

    fn to_entry(&self) -> ipns_pb::IpnsEntry<'_> {
        ipns_pb::IpnsEntry {
            value: Some(Cow::Borrowed(self.value.as_slice())),
            signatureV1: optional(&self.signature_v1),
            validityType: Some(self.validity_type.into()),
            validity: Some(Cow::Borrowed(self.validity.as_slice())),
            sequence: Some(self.sequence),
            ttl: Some(self.ttl),
            pubKey: optional(&self.public_key),
            signatureV2: optional(&self.signature_v2),
            data: optional(&self.data),
        }
    }
}

impl Record {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Time-to-live hint in nanoseconds.
    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    pub fn validity_type(&self) -> ValidityType {
        self.validity_type
    }

    pub fn validity(&self) -> Result<DateTime<Utc>, Error> {
        let validity = String::from_utf8_lossy(&self.validity);
        let eol = DateTime::parse_from_rfc3339(&validity)?;
        Ok(eol.with_timezone(&Utc))
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the root [`Cid`] of an `/ipfs/<cid>[/path]` value.
    pub fn cid(&self) -> Result<Cid, Error> {
        let value = String::from_utf8_lossy(&self.value);
        let cid_str = value
            .strip_prefix("/ipfs/")
            .and_then(|path| path.split('/').next())
            .ok_or_else(|| Error::Value(value.to_string()))?;
        Cid::try_from(cid_str).map_err(|e| Error::Value(e.to_string()))
    }

    pub fn data(&self) -> Result<Document, Error> {
        let document = Document::decode(&self.data)?;

        if document.value != self.value
            || document.validity != self.validity
            || document.validity_type != self.validity_type
            || document.sequence != self.sequence
            || document.ttl != self.ttl
        {
            return Err(Error::DocumentMismatch);
        }

        Ok(document)
    }

    /// Returns true if the record carries a V1 signature.
    pub fn signature_v1(&self) -> bool {
        !self.signature_v1.is_empty()
    }

    /// Returns true if the record carries a V2 signature.
    pub fn signature_v2(&self) -> bool {
        !self.signature_v2.is_empty()
    }

    /// Returns the embedded public key, if any.
    pub fn public_key(&self) -> Result<Option<PublicKey>, Error> {
        if self.public_key.is_empty() {
            return Ok(None);
        }
        let public_key = PublicKey::try_decode_protobuf(&self.public_key)?;
        Ok(Some(public_key))
    }

    /// Embeds `public_key` so the record can be verified without deriving the key from the
    /// name. The key is not covered by the signatures.
    pub fn embed_public_key(&mut self, public_key: &PublicKey) {
        self.public_key = public_key.encode_protobuf();
    }

    /// Verifies the record against the IPNS name `peer_id`.
    ///
    /// An embedded key must hash to `peer_id`. Without one, the key is extracted from
    /// `peer_id`, which only works for identity-hashed (eg ed25519) peer ids.
    pub fn verify(&self, peer_id: PeerId) -> Result<(), Error> {
        let public_key = match self.public_key()? {
            Some(public_key) => {
                if public_key.to_peer_id() != peer_id {
                    return Err(Error::KeyMismatch);
                }
                public_key
            }
            None => {
                let multihash = peer_id.as_ref();
                if multihash.code() != IDENTITY_HASH_CODE {
                    return Err(Error::MissingPublicKey);
                }
                PublicKey::try_decode_protobuf(multihash.digest())?
            }
        };

        self.verify_signature(&public_key)
    }

    /// Verifies the record against a known public key.
    pub fn verify_with_key(&self, public_key: &PublicKey) -> Result<(), Error> {
        if let Some(embedded) = self.public_key()? {
            if &embedded != public_key {
                return Err(Error::KeyMismatch);
            }
        }

        self.verify_signature(public_key)
    }

    fn verify_signature(&self, public_key: &PublicKey) -> Result<(), Error> {
        if self.signature_v2.is_empty() {
            return Err(Error::EmptySignature);
        }

        if self.data.is_empty() {
            return Err(Error::EmptyData);
        }

        self.data()?;

        if !public_key.verify(&signature_v2_payload(&self.data), &self.signature_v2) {
            return Err(Error::InvalidSignature);
        }

        match self.validity_type {
            ValidityType::EOL => {
                let eol = self.validity()?;
                if eol < Utc::now() {
                    return Err(Error::Expired(eol));
                }
            }
        }

        Ok(())
    }
}

/// RFC 3339 with nanoseconds and trailing zeros trimmed from the fraction, the layout
/// go-ipns writes.
fn format_validity(eol: &DateTime<Utc>) -> String {
    let formatted = eol.to_rfc3339_opts(SecondsFormat::Nanos, true);
    match formatted.rsplit_once('.') {
        Some((seconds, fraction)) => {
            let fraction = fraction.trim_end_matches('Z').trim_end_matches('0');
            match fraction.is_empty() {
                true => format!("{seconds}Z"),
                false => format!("{seconds}.{fraction}Z"),
            }
        }
        None => formatted,
    }
}

fn optional(bytes: &[u8]) -> Option<Cow<'_, [u8]>> {
    (!bytes.is_empty()).then_some(Cow::Borrowed(bytes))
}

fn signature_v1_payload(value: &[u8], validity: &[u8], validity_type: ValidityType) -> Vec<u8> {
    let mut payload = Vec::with_capacity(value.len() + validity.len() + 3);
    payload.extend_from_slice(value);
    payload.extend_from_slice(validity);
    payload.extend_from_slice(validity_type.to_string().as_bytes());
    payload
}

fn signature_v2_payload(data: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(SIGNATURE_V2_PREFIX.len() + data.len());
    payload.extend_from_slice(SIGNATURE_V2_PREFIX);
    payload.extend_from_slice(data);
    payload
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use chrono::{Duration, TimeZone, Utc};
    use libipld::cbor::DagCborCodec;
    use libipld::prelude::Codec;
    use libipld::Ipld;
    use libp2p::identity::Keypair;
    use quick_protobuf::{MessageWrite, Writer};

    use crate::{format_validity, Error, Record, ValidityType, MAX_RECORD_SIZE};

    const VALUE: &[u8] = b"/ipfs/QmUfV4m2PUM559LSvDsJkoz1KofTVq25RDXwW5uMdjNb4u";

    fn record(keypair: &Keypair) -> Record {
        Record::new(keypair, VALUE, Duration::hours(24), 0, Duration::seconds(60)).unwrap()
    }

    #[test]
    fn fresh_record_validates() {
        let keypair = Keypair::generate_ed25519();
        let record = record(&keypair);

        assert!(record.signature_v1());
        assert!(record.signature_v2());
        record.verify_with_key(&keypair.public()).unwrap();
        record.verify(keypair.public().to_peer_id()).unwrap();
    }

    #[test]
    fn record_fields() {
        let keypair = Keypair::generate_ed25519();
        let record = record(&keypair);

        assert_eq!(record.value(), VALUE);
        assert_eq!(record.sequence(), 0);
        assert_eq!(record.ttl(), 60_000_000_000);
        assert_eq!(record.validity_type(), ValidityType::EOL);

        let remaining = record.validity().unwrap() - Utc::now();
        assert!(remaining > Duration::hours(23) && remaining <= Duration::hours(24));

        assert_eq!(
            record.cid().unwrap().to_string(),
            "QmUfV4m2PUM559LSvDsJkoz1KofTVq25RDXwW5uMdjNb4u"
        );

        let document = record.data().unwrap();
        assert_eq!(document.value(), VALUE);
        assert_eq!(document.ttl(), record.ttl());
    }

    #[test]
    fn embedded_key() {
        let keypair = Keypair::generate_ed25519();
        let mut record = record(&keypair);
        assert!(record.public_key().unwrap().is_none());

        record.embed_public_key(&keypair.public());
        assert_eq!(record.public_key().unwrap(), Some(keypair.public()));
        record.verify(keypair.public().to_peer_id()).unwrap();
    }

    #[test]
    fn encode_decode_preserves_fields() {
        let keypair = Keypair::generate_ed25519();
        let mut record = Record::new(
            &keypair,
            VALUE,
            Duration::hours(1),
            42,
            Duration::minutes(5),
        )
        .unwrap();
        record.embed_public_key(&keypair.public());

        let bytes = record.encode().unwrap();
        let decoded = Record::decode(&bytes).unwrap();

        assert_eq!(decoded, record);
        assert_eq!(decoded.sequence(), 42);
        assert_eq!(decoded.ttl(), 300_000_000_000);
        assert_eq!(decoded.validity().unwrap(), record.validity().unwrap());
        decoded.verify_with_key(&keypair.public()).unwrap();
    }

    #[test]
    fn tampered_fields_are_rejected() {
        let keypair = Keypair::generate_ed25519();
        let public_key = keypair.public();
        let record = record(&keypair);

        let mut tampered = record.clone();
        tampered.value = b"/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_vec();
        assert!(matches!(
            tampered.verify_with_key(&public_key),
            Err(Error::DocumentMismatch)
        ));

        let mut tampered = record.clone();
        tampered.sequence = 1;
        assert!(tampered.verify_with_key(&public_key).is_err());

        let mut tampered = record.clone();
        tampered.ttl = 1;
        assert!(tampered.verify_with_key(&public_key).is_err());

        let mut tampered = record.clone();
        tampered.validity = b"2999-01-01T00:00:00Z".to_vec();
        assert!(tampered.verify_with_key(&public_key).is_err());
    }

    #[test]
    fn tampered_data_is_rejected() {
        let keypair = Keypair::generate_ed25519();
        let record = record(&keypair);

        // Re-sign a different document with another key and graft it onto the record
        let other = Keypair::generate_ed25519();
        let forged = Record::with_expiration(
            &other,
            VALUE,
            record.validity().unwrap(),
            7,
            Duration::seconds(60),
        )
        .unwrap();

        let mut tampered = record.clone();
        tampered.data = forged.data.clone();
        tampered.sequence = 7;

        assert!(matches!(
            tampered.verify_with_key(&keypair.public()),
            Err(Error::InvalidSignature)
        ));
    }

    #[test]
    fn wrong_key_is_rejected() {
        let keypair = Keypair::generate_ed25519();
        let other = Keypair::generate_ed25519();
        let mut record = record(&keypair);

        assert!(matches!(
            record.verify_with_key(&other.public()),
            Err(Error::InvalidSignature)
        ));

        record.embed_public_key(&keypair.public());
        assert!(matches!(
            record.verify_with_key(&other.public()),
            Err(Error::KeyMismatch)
        ));
        assert!(matches!(
            record.verify(other.public().to_peer_id()),
            Err(Error::KeyMismatch)
        ));
    }

    #[test]
    fn expired_record_is_rejected() {
        let keypair = Keypair::generate_ed25519();
        let record = Record::with_expiration(
            &keypair,
            VALUE,
            Utc::now() - Duration::seconds(1),
            0,
            Duration::seconds(60),
        )
        .unwrap();

        assert!(matches!(
            record.verify_with_key(&keypair.public()),
            Err(Error::Expired(_))
        ));
    }

    #[test]
    fn missing_signature_is_rejected() {
        let keypair = Keypair::generate_ed25519();
        let mut record = record(&keypair);
        record.signature_v2.clear();

        assert!(matches!(
            record.verify_with_key(&keypair.public()),
            Err(Error::EmptySignature)
        ));
    }

    #[test]
    fn negative_ttl_is_rejected() {
        let keypair = Keypair::generate_ed25519();
        let result = Record::new(&keypair, VALUE, Duration::hours(1), 0, Duration::seconds(-1));
        assert!(matches!(result, Err(Error::InvalidTtl)));
    }

    #[test]
    fn oversized_record_is_rejected() {
        let bytes = vec![0u8; MAX_RECORD_SIZE + 1];
        assert!(matches!(
            Record::decode(bytes),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn ed25519_name() {
        let keypair = Keypair::generate_ed25519();
        let name = crate::name(&keypair.public().to_peer_id());
        assert!(name.starts_with("k51"));
    }

    #[test]
    fn out_of_range_expiration_is_rejected() {
        let keypair = Keypair::generate_ed25519();

        let result = Record::new(
            &keypair,
            VALUE,
            Duration::days(365 * 300_000),
            0,
            Duration::seconds(60),
        );
        assert!(matches!(result, Err(Error::Expiration)));

        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let result = Record::with_expiration(
            &keypair,
            VALUE,
            last + Duration::seconds(1),
            0,
            Duration::seconds(60),
        );
        assert!(matches!(result, Err(Error::Expiration)));

        let record =
            Record::with_expiration(&keypair, VALUE, last, 0, Duration::seconds(60)).unwrap();
        assert_eq!(record.validity().unwrap(), last);
        record.verify_with_key(&keypair.public()).unwrap();
    }

    #[test]
    fn unknown_validity_type_is_rejected() {
        let keypair = Keypair::generate_ed25519();
        let record = record(&keypair);

        let mut entry = record.to_entry();
        entry.validityType = Some(1);

        let mut bytes = Vec::new();
        {
            let mut writer = Writer::new(&mut bytes);
            entry.write_message(&mut writer).unwrap();
        }

        assert!(matches!(
            Record::decode(&bytes),
            Err(Error::ValidityType(1))
        ));
    }

    #[test]
    fn unknown_validity_type_in_data_is_rejected() {
        let keypair = Keypair::generate_ed25519();
        let mut record = record(&keypair);

        let mut map = BTreeMap::new();
        map.insert("Value".to_string(), Ipld::Bytes(record.value.clone()));
        map.insert("ValidityType".to_string(), Ipld::Integer(1));
        map.insert("Validity".to_string(), Ipld::Bytes(record.validity.clone()));
        map.insert("Sequence".to_string(), Ipld::Integer(record.sequence.into()));
        map.insert("TTL".to_string(), Ipld::Integer(record.ttl.into()));
        record.data = DagCborCodec.encode(&Ipld::Map(map)).unwrap();

        assert!(matches!(
            record.verify_with_key(&keypair.public()),
            Err(Error::Document(_))
        ));
    }

    #[test]
    fn validity_trims_trailing_zeros() {
        let eol = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(format_validity(&eol), "2030-01-02T03:04:05Z");
        assert_eq!(
            format_validity(&(eol + Duration::milliseconds(500))),
            "2030-01-02T03:04:05.5Z"
        );
        assert_eq!(
            format_validity(&(eol + Duration::nanoseconds(1_230))),
            "2030-01-02T03:04:05.00000123Z"
        );
    }
}
