use chrono::Duration;

use libp2p::identity::Keypair;
use rust_ipns::Record;

fn main() -> Result<(), rust_ipns::Error> {
    let keypair = Keypair::generate_ed25519();

    let record = Record::new(
        &keypair,
        b"/ipfs/QmUfV4m2PUM559LSvDsJkoz1KofTVq25RDXwW5uMdjNb4u",
        Duration::hours(24),
        0,
        Duration::seconds(60),
    )?;

    let peer_id = keypair.public().to_peer_id();
    record.verify(peer_id)?;

    let bytes = record.encode()?;
    println!("/ipns/{} ({} bytes)", rust_ipns::name(&peer_id), bytes.len());

    Ok(())
}
