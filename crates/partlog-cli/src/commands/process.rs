//! Process command - extract part details from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use partlog_core::{extract, PartDetails};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Append the result to the record store
    #[arg(long)]
    save: bool,

    /// Record store file (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let text = read_input(args.input.as_ref())?;

    info!("extracting from {} characters of OCR text", text.len());
    let details = extract(&text);

    if args.save {
        let config = super::load_config(config_path)?;
        let mut store = super::open_store(args.store.as_ref(), &config)?;
        let id = store.add_details(&details, &text)?;
        eprintln!(
            "{} Logged part {} as record {}",
            style("✓").green(),
            details.part_no_label(),
            id
        );
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&details)?,
        OutputFormat::Text => format_details(&details),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Plain text summary of an extraction result.
pub fn format_details(details: &PartDetails) -> String {
    let mut output = String::new();

    output.push_str(&format!("Part No:      {}\n", details.part_no_label()));
    output.push_str(&format!("Manufacturer: {}\n", details.manufacturer_label()));
    output.push_str(&format!("Serial Nr.:   {}\n", details.serial_label()));
    output.push_str(&format!("Category:     {}\n", details.category));
    output.push_str(&format!("Specs:        {}\n", details.specs_label()));

    output
}
