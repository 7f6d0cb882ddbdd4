// Automatically generated mod.rs
pub mod keys_pb;
