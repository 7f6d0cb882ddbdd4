// Automatically generated rust module for 'ipns_pb.proto' file

#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(unused_imports)]
#![allow(unknown_lints)]
#![allow(clippy::all)]
#![cfg_attr(rustfmt, rustfmt_skip)]


use std::borrow::Cow;
use quick_protobuf::{MessageInfo, MessageRead, MessageWrite, BytesReader, Writer, WriterBackend, Result};
use quick_protobuf::sizeofs::*;
use super::*;

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Default, PartialEq, Clone)]
pub struct IpnsEntry<'a> {
    pub value: Option<Cow<'a, [u8]>>,
    pub signatureV1: Option<Cow<'a, [u8]>>,
    pub validityType: Option<i32>,
    pub validity: Option<Cow<'a, [u8]>>,
    pub sequence: Option<u64>,
    pub ttl: Option<u64>,
    pub pubKey: Option<Cow<'a, [u8]>>,
    pub signatureV2: Option<Cow<'a, [u8]>>,
    pub data: Option<Cow<'a, [u8]>>,
}

impl<'a> MessageRead<'a> for IpnsEntry<'a> {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(10) => msg.value = Some(r.read_bytes(bytes).map(Cow::Borrowed)?),
                Ok(18) => msg.signatureV1 = Some(r.read_bytes(bytes).map(Cow::Borrowed)?),
                Ok(24) => msg.validityType = Some(r.read_int32(bytes)?),
                Ok(34) => msg.validity = Some(r.read_bytes(bytes).map(Cow::Borrowed)?),
                Ok(40) => msg.sequence = Some(r.read_uint64(bytes)?),
                Ok(48) => msg.ttl = Some(r.read_uint64(bytes)?),
                Ok(58) => msg.pubKey = Some(r.read_bytes(bytes).map(Cow::Borrowed)?),
                Ok(66) => msg.signatureV2 = Some(r.read_bytes(bytes).map(Cow::Borrowed)?),
                Ok(74) => msg.data = Some(r.read_bytes(bytes).map(Cow::Borrowed)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl<'a> MessageWrite for IpnsEntry<'a> {
    fn get_size(&self) -> usize {
        0
        + self.value.as_ref().map_or(0, |m| 1 + sizeof_len((m).len()))
        + self.signatureV1.as_ref().map_or(0, |m| 1 + sizeof_len((m).len()))
        + self.validityType.as_ref().map_or(0, |m| 1 + sizeof_varint(*(m) as u64))
        + self.validity.as_ref().map_or(0, |m| 1 + sizeof_len((m).len()))
        + self.sequence.as_ref().map_or(0, |m| 1 + sizeof_varint(*(m) as u64))
        + self.ttl.as_ref().map_or(0, |m| 1 + sizeof_varint(*(m) as u64))
        + self.pubKey.as_ref().map_or(0, |m| 1 + sizeof_len((m).len()))
        + self.signatureV2.as_ref().map_or(0, |m| 1 + sizeof_len((m).len()))
        + self.data.as_ref().map_or(0, |m| 1 + sizeof_len((m).len()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if let Some(ref s) = self.value { w.write_with_tag(10, |w| w.write_bytes(&**s))?; }
        if let Some(ref s) = self.signatureV1 { w.write_with_tag(18, |w| w.write_bytes(&**s))?; }
        if let Some(ref s) = self.validityType { w.write_with_tag(24, |w| w.write_int32(*s))?; }
        if let Some(ref s) = self.validity { w.write_with_tag(34, |w| w.write_bytes(&**s))?; }
        if let Some(ref s) = self.sequence { w.write_with_tag(40, |w| w.write_uint64(*s))?; }
        if let Some(ref s) = self.ttl { w.write_with_tag(48, |w| w.write_uint64(*s))?; }
        if let Some(ref s) = self.pubKey { w.write_with_tag(58, |w| w.write_bytes(&**s))?; }
        if let Some(ref s) = self.signatureV2 { w.write_with_tag(66, |w| w.write_bytes(&**s))?; }
        if let Some(ref s) = self.data { w.write_with_tag(74, |w| w.write_bytes(&**s))?; }
        Ok(())
    }
}
