//! Records command - browse and edit the part log.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use partlog_core::PartRecord;

/// Arguments for the records command.
#[derive(Args)]
pub struct RecordsArgs {
    #[command(subcommand)]
    command: RecordsCommand,

    /// Record store file (overrides config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum RecordsCommand {
    /// List records, optionally filtered by a search query
    List {
        /// Case-insensitive substring matched against every field
        query: Option<String>,

        /// Maximum number of records to show (0 = all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Edit the user fields of a record (store code and notes only)
    Edit {
        /// Record id
        id: u64,

        /// New store code
        #[arg(long)]
        store_code: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete all records
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(args: RecordsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let mut store = super::open_store(args.store.as_ref(), &config)?;

    match args.command {
        RecordsCommand::List { query, limit } => {
            let matches = store.search(query.as_deref().unwrap_or(""));

            if matches.is_empty() {
                println!("{} No matching records.", style("ℹ").blue());
                return Ok(());
            }

            let shown = if limit == 0 { matches.len() } else { limit };
            for record in matches.iter().take(shown) {
                print_record(record);
            }

            if matches.len() > shown {
                println!(
                    "{} ... and {} more (use --limit 0 to show all)",
                    style("ℹ").blue(),
                    matches.len() - shown
                );
            }

            Ok(())
        }
        RecordsCommand::Edit {
            id,
            store_code,
            notes,
        } => {
            if store_code.is_none() && notes.is_none() {
                anyhow::bail!("Nothing to edit: pass --store-code and/or --notes");
            }

            if let Some(value) = store_code {
                store.set_store_code(id, &value)?;
            }
            if let Some(value) = notes {
                store.set_notes(id, &value)?;
            }

            println!("{} Updated record {}", style("✓").green(), id);
            Ok(())
        }
        RecordsCommand::Clear { yes } => {
            if !yes {
                anyhow::bail!(
                    "This deletes all {} logged records. Re-run with --yes to confirm.",
                    store.len()
                );
            }

            let count = store.len();
            store.clear()?;
            println!("{} Cleared {} records", style("✓").green(), count);
            Ok(())
        }
    }
}

fn print_record(record: &PartRecord) {
    println!(
        "{} {} [{}]",
        style(format!("#{}", record.id)).dim(),
        style(&record.part_no).bold(),
        record.category
    );
    println!(
        "    {}  mfr: {}  ser: {}  specs: {}",
        record.date, record.manufacturer, record.serial_number, record.specs
    );
    if !record.store_code.is_empty() || !record.notes.is_empty() {
        println!("    store: {}  notes: {}", record.store_code, record.notes);
    }
}
