use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kestrel_uci::UciEngine;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    info!("kestrel starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    UciEngine::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
