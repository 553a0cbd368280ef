use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use classic_protocol::SetBlockMode;

use crate::script::PacketSpec;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct PacketDumpArgs {
    /// Write the raw packet bytes to this file instead of printing a hex dump.
    #[arg(short, long, global = true)]
    pub(crate) out: Option<PathBuf>,

    /// Log more. Can be repeated. Ignored when `RUST_LOG` is set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Encode every packet listed in a TOML script.
    Script { path: PathBuf },
    /// Encode a player identification packet.
    Login {
        username: String,
        #[arg(default_value = "")]
        verification_key: String,
    },
    /// Encode a set block packet.
    SetBlock {
        #[arg(allow_negative_numbers = true)]
        x: i16,
        #[arg(allow_negative_numbers = true)]
        y: i16,
        #[arg(allow_negative_numbers = true)]
        z: i16,
        /// Remove the block instead of placing it.
        #[arg(long)]
        delete: bool,
        #[arg(short, long, default_value = "1")]
        block_type: u8,
    },
    /// Encode a position and orientation packet. Coordinates are in blocks.
    Position {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
        #[arg(long, default_value = "0")]
        yaw: u8,
        #[arg(long, default_value = "0")]
        pitch: u8,
    },
    /// Encode a chat message packet.
    Message { text: String },
}

impl Command {
    /// Returns the packet described on the command line, or `None` for
    /// [`Command::Script`].
    pub(crate) fn into_packet(self) -> Option<PacketSpec> {
        Some(match self {
            Command::Script { .. } => return None,
            Command::Login {
                username,
                verification_key,
            } => PacketSpec::Login {
                username,
                verification_key,
            },
            Command::SetBlock {
                x,
                y,
                z,
                delete,
                block_type,
            } => PacketSpec::SetBlock {
                x,
                y,
                z,
                mode: SetBlockMode::from(!delete),
                block_type,
            },
            Command::Position {
                x,
                y,
                z,
                yaw,
                pitch,
            } => PacketSpec::Position {
                x,
                y,
                z,
                yaw,
                pitch,
            },
            Command::Message { text } => PacketSpec::Message { text },
        })
    }
}
