// Automatically generated mod.rs
pub mod ipns_pb;
