//! Scan command - log a scanner-decoded part number directly.
//!
//! A barcode/QR scan yields the part number itself, so text extraction is
//! bypassed entirely and the remaining fields take their defaults.

use std::path::PathBuf;

use clap::Args;
use console::style;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Decoded barcode/QR content (the part number)
    #[arg(required = true)]
    code: String,

    /// Store code to set on the new record
    #[arg(long)]
    store_code: Option<String>,

    /// Notes to set on the new record
    #[arg(long)]
    notes: Option<String>,

    /// Record store file (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let mut store = super::open_store(args.store.as_ref(), &config)?;

    let id = store.add_scanned(&args.code)?;

    if let Some(store_code) = &args.store_code {
        store.set_store_code(id, store_code)?;
    }
    if let Some(notes) = &args.notes {
        store.set_notes(id, notes)?;
    }

    println!(
        "{} Logged scanned part {} as record {}",
        style("✓").green(),
        style(&args.code).bold(),
        id
    );

    Ok(())
}
