//! # Storefront Quote CLI
//!
//! Prices a cart document with storefront-core and prints the result as JSON.
//!
//! ## Usage
//! ```text
//! storefront-quote demos/cart.json
//! cat cart.json | storefront-quote --pretty
//! STOREFRONT_VAT_RATE_BPS=500 storefront-quote --vat-rate-bps 0 cart.json
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, `RUST_LOG`)
//! 2. Load configuration from `STOREFRONT_*` variables
//! 3. Apply command-line overrides
//! 4. Read and price the cart
//! 5. Print the quote to stdout

mod config;
mod quote;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::quote::QuoteRequest;

#[derive(Debug, Parser)]
#[command(name = "storefront-quote", version, about = "Price a storefront cart")]
struct Args {
    /// Cart JSON file; reads stdin when omitted or `-`
    cart: Option<PathBuf>,

    /// Override the VAT rate (basis points, 2000 = 20%)
    #[arg(long)]
    vat_rate_bps: Option<u32>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = config::load()?;
    if let Some(bps) = args.vat_rate_bps {
        config.vat_rate_bps = bps;
    }
    config.validate()?;
    info!(
        vat_rate_bps = config.vat_rate_bps,
        currency = %config.currency_code,
        "Configuration loaded"
    );

    let raw = read_cart(args.cart.as_ref())?;
    let request: QuoteRequest = serde_json::from_str(&raw).context("cart is not valid JSON")?;
    debug!(items = request.items.len(), "Cart parsed");

    let response = quote::price(request, &config)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");

    Ok(())
}

fn read_cart(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read cart from {}", path.display())),
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read cart from stdin")?;
            Ok(raw)
        }
    }
}
