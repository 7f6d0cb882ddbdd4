use std::path::PathBuf;

use chrono::Duration;
use clap::{Args, Parser, Subcommand};
use ipns_mint::config::{DEFAULT_KEY_PATH, DEFAULT_RECORD_PATH, DEFAULT_VALUE};
use ipns_mint::identity::DEFAULT_RSA_BITS;
use ipns_mint::{KeyType, MintConfig, Minter, Record};
use libp2p::PeerId;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(name = "ipns-mint", version, about)]
#[command(args_conflicts_with_subcommands = true)]
struct Opt {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    mint: MintArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a key pair and mint a signed record (the default)
    Mint(MintArgs),
    /// Decode a record file and print its contents
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
struct MintArgs {
    /// Key algorithm: rsa, ed25519, secp256k1 or ecdsa
    #[clap(long, default_value_t = KeyType::RSA)]
    key_type: KeyType,
    /// RSA modulus size in bits
    #[clap(long, default_value_t = DEFAULT_RSA_BITS)]
    bits: usize,
    /// Path the record resolves to
    #[clap(long, default_value = DEFAULT_VALUE)]
    value: String,
    #[clap(long, default_value_t = 0)]
    sequence: u64,
    /// Seconds until the record expires
    #[clap(long, default_value = "86400", value_parser = parse_seconds)]
    lifetime: Duration,
    /// Seconds caches may hold the record before resolving again
    #[clap(long, default_value = "60", value_parser = parse_seconds)]
    ttl: Duration,
    #[clap(long, default_value = DEFAULT_RECORD_PATH)]
    record: PathBuf,
    #[clap(long, default_value = DEFAULT_KEY_PATH)]
    key: PathBuf,
}

impl From<MintArgs> for MintConfig {
    fn from(args: MintArgs) -> Self {
        MintConfig {
            key_type: args.key_type,
            key_bits: args.bits,
            value: args.value,
            sequence: args.sequence,
            lifetime: args.lifetime,
            ttl: args.ttl,
            record_path: args.record,
            key_path: args.key,
        }
    }
}

fn parse_seconds(arg: &str) -> Result<Duration, String> {
    let seconds: i64 = arg.parse().map_err(|e| format!("{e}"))?;
    Duration::try_seconds(seconds).ok_or_else(|| format!("{seconds} seconds is out of range"))
}

#[derive(Debug, Args)]
struct InspectArgs {
    file: PathBuf,
    /// Verify the record against this name
    #[clap(long)]
    key: Option<PeerId>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let opt = Opt::parse();

    match opt.command {
        Some(Command::Mint(args)) => mint(args.into()),
        Some(Command::Inspect(args)) => inspect(args),
        None => mint(opt.mint.into()),
    }
}

fn mint(config: MintConfig) -> anyhow::Result<()> {
    let minter = Minter::new(config);
    let output = minter.run()?;
    let record = &output.record;

    println!("Name: {}", output.name());
    println!("Value: {}", String::from_utf8_lossy(record.value()));
    println!("Validity: {}", record.validity()?);
    println!("Sequence: {}", record.sequence());
    println!("Record: {}", minter.config().record_path.display());
    println!("Private Key: {}", minter.config().key_path.display());

    Ok(())
}

fn inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.file)?;

    let record = Record::decode(bytes)?;

    let value = String::from_utf8_lossy(record.value());
    let validity_type = record.validity_type();
    let validity = record.validity()?;
    let seq = record.sequence();
    let ttl = std::time::Duration::from_nanos(record.ttl());
    let public_key = record.public_key()?;

    println!("Value: {value}");
    println!("Validity Type: {validity_type}");
    println!("Validity: {validity}");
    println!("Sequence: {seq}");
    println!("TTL: {ttl:?}");

    print!("Signature Type: ");

    match (record.signature_v1(), record.signature_v2()) {
        (true, true) => println!("V1+V2"),
        (true, false) => println!("V1"),
        (false, true) => println!("V2"),
        (false, false) => println!("N/A"),
    };

    match &public_key {
        Some(public_key) => println!(
            "Public Key: {} ({})",
            KeyType::from(public_key.key_type()),
            public_key.to_peer_id()
        ),
        None => println!("Public Key: not embedded"),
    }

    let result = match (args.key, public_key) {
        (Some(peer_id), _) => {
            println!("Name: /ipns/{}", rust_ipns::name(&peer_id));
            record.verify(peer_id)
        }
        (None, Some(public_key)) => record.verify_with_key(&public_key),
        (None, None) => {
            println!("Record has not been validated");
            return Ok(());
        }
    };

    match result {
        Ok(()) => println!("Signature Verified"),
        Err(e) => println!("Record is Invalid: {e}"),
    }

    Ok(())
}
