#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls,
    rustdoc::invalid_html_tags
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    clippy::dbg_macro
)]

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use args::{Command, PacketDumpArgs};
use clap::Parser;
use classic_protocol::PacketEncoder;
use script::{PacketSpec, Script};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod hex;
mod script;

fn main() -> anyhow::Result<()> {
    let args = PacketDumpArgs::parse();

    init_logging(args.verbose);

    let packets = match args.command {
        Command::Script { path } => Script::load(&path)?.packets,
        command => command.into_packet().into_iter().collect(),
    };

    if packets.is_empty() {
        warn!("nothing to encode");
    }

    let bytes = encode_all(&packets);

    match args.out {
        Some(path) => {
            fs::write(&path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), len = bytes.len(), "wrote packets");
        }
        None => io::stdout()
            .lock()
            .write_all(hex::hex_dump(&bytes).as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn encode_all(packets: &[PacketSpec]) -> Vec<u8> {
    let mut enc = PacketEncoder::new();

    for (i, spec) in packets.iter().enumerate() {
        let bytes = spec.to_bytes();
        info!(index = i, packet = spec.name(), len = bytes.len(), "encoded packet");
        enc.append_bytes(&bytes);
    }

    enc.take().to_vec()
}
