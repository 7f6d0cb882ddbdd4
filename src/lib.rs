//! Mint signed IPNS records.
//!
//! [`Minter`] runs the whole flow: generate an [`Identity`], sign a [`Record`] pointing at a
//! value, embed the public key, check the record validates, then write the encoded record
//! and the marshaled private key to disk. Every parameter lives in [`MintConfig`]; the
//! defaults mint an RSA-2048 record for a fixed `/ipfs` path that expires in 24 hours with a
//! 60 second ttl.
//!
//! ```no_run
//! use ipns_mint::{MintConfig, Minter};
//!
//! let output = Minter::new(MintConfig::default()).run()?;
//! println!("published under {}", output.name());
//! # Ok::<_, ipns_mint::Error>(())
//! ```

pub mod config;
pub mod error;
mod generate;
pub mod identity;
pub mod mint;
pub mod output;

#[macro_use]
extern crate tracing;

pub use self::{
    config::MintConfig,
    error::Error,
    identity::Identity,
    mint::{mint_record, validate_record, MintOutput, Minter},
};

pub use rust_ipns::{KeyType, Record, ValidityType};
