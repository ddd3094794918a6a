//! QC-ID: Quantum-Chain account identifier tool
//!
//! Converts account identifiers between their string, JSON and wire forms
//! and answers maturity queries.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`, falling back to
//! `QC_LOG_LEVEL` (default: warn).

use std::env;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use qc_18_account_identity::{
    AccountIdentityApi, AccountIdentityService, InMemoryAccountLookup, MaturityConfig, UserId,
};
use shared_types::BlockHeight;

/// QC-ID: Quantum-Chain account identifier tool
#[derive(Parser, Debug)]
#[command(name = "qc-id")]
#[command(about = "Parse, encode and decode Quantum-Chain account identifiers")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an identifier string and show all of its forms
    Parse {
        /// "Null", "<height>-<index>", 0x key hash, public key hex or nickname
        input: String,
    },

    /// Print the wire encoding of an identifier as hex
    Encode { input: String },

    /// Decode hex wire bytes holding exactly one identifier
    Decode { hex: String },

    /// Check whether an identifier may be referenced at a height
    Mature {
        input: String,

        /// Current block height
        #[arg(long)]
        height: BlockHeight,

        /// Override QC_REG_ID_MATURITY_BLOCKS
        #[arg(long)]
        reg_id_maturity_blocks: Option<u32>,

        /// Override QC_NICK_ID_ACTIVATION_HEIGHT
        #[arg(long)]
        nick_id_activation_height: Option<BlockHeight>,
    },
}

#[derive(Serialize)]
struct Report {
    id_type: &'static str,
    id: String,
    wire: String,
    wire_size: usize,
}

impl Report {
    fn new(id: &UserId, wire: &[u8]) -> Self {
        Self {
            id_type: id.id_name(),
            id: id.to_string(),
            wire: hex::encode(wire),
            wire_size: wire.len(),
        }
    }
}

fn init_logging() -> Result<()> {
    let level = env::var("QC_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut maturity = MaturityConfig::from_env();
    if let Command::Mature {
        reg_id_maturity_blocks,
        nick_id_activation_height,
        ..
    } = &args.command
    {
        if let Some(blocks) = reg_id_maturity_blocks {
            maturity.reg_id_maturity_blocks = *blocks;
        }
        if let Some(height) = nick_id_activation_height {
            maturity.nick_id_activation_height = *height;
        }
    }
    debug!(?maturity, "Loaded maturity thresholds");

    let service = AccountIdentityService::new(InMemoryAccountLookup::new(), maturity);

    match args.command {
        Command::Parse { input } => {
            let id = service.parse_user_id(&input)?;
            let wire = service.encode_user_id(&id);
            print_json(&Report::new(&id, &wire))
        }
        Command::Encode { input } => {
            let id = service.parse_user_id(&input)?;
            println!("{}", hex::encode(service.encode_user_id(&id)));
            Ok(())
        }
        Command::Decode { hex: input } => {
            let bytes = hex::decode(input.trim()).context("input is not hex")?;
            let id = service.decode_user_id(&bytes)?;
            info!(id = %id.to_debug_string(), "Decoded identifier");
            print_json(&id)
        }
        Command::Mature { input, height, .. } => {
            let id = service.parse_user_id(&input)?;
            let mature = service.is_mature(&id, height);
            print_json(&serde_json::json!({
                "id": id,
                "height": height,
                "mature": mature,
            }))
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;
    run(Args::parse())
}
