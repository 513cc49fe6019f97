//! Export command - write the part log to CSV.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use console::style;

use partlog_core::PartRecord;

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: spare_parts_log_<date>.csv in the configured
    /// export directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Record store file (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,
}

/// Legacy column layout of the spare parts log.
const HEADERS: [&str; 9] = [
    "Date",
    "Part No",
    "Manufacturer",
    "Serial Nr.",
    "Specs",
    "Category",
    "Store Code",
    "Notes",
    "Raw Extracted Data",
];

pub async fn run(args: ExportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(args.store.as_ref(), &config)?;

    if store.is_empty() {
        anyhow::bail!("No records to export");
    }

    let output_path = args.output.unwrap_or_else(|| {
        config.export.output_dir.join(format!(
            "spare_parts_log_{}.csv",
            Local::now().format("%Y-%m-%d")
        ))
    });

    let csv = render_csv(store.records())?;
    std::fs::write(&output_path, csv)?;

    println!(
        "{} Exported {} records to {}",
        style("✓").green(),
        store.len(),
        output_path.display()
    );

    Ok(())
}

/// Render records as CSV. Multi-line raw OCR text is flattened to a single
/// line so each record stays on one row in spreadsheet tools.
fn render_csv(records: &[PartRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(vec![]);

    wtr.write_record(HEADERS)?;

    for record in records {
        wtr.write_record([
            &record.date.to_string(),
            &record.part_no,
            &record.manufacturer,
            &record.serial_number,
            &record.specs,
            &record.category,
            &record.store_code,
            &record.notes,
            &flatten(&record.raw_data),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
