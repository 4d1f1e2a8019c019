use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use docukit::render::html::{render_delivery_schedule_html, render_purchase_order_html};
use docukit::render::pdf::{render_delivery_schedule, render_purchase_order};
use docukit::sample::sample_delivery_schedule;
use docukit::{tally_groups, Attachment, DeliverySchedule, PurchaseOrder};

#[derive(Parser)]
#[command(
    name = "docukit",
    about = "Render purchase orders and delivery schedules as PDF or HTML",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Pdf,
    Html,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a delivery schedule from a JSON document
    Schedule {
        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Company logo (JPEG)
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Signature image (JPEG)
        #[arg(long)]
        signature: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pdf)]
        format: OutputFormat,
    },

    /// Render a purchase-order invoice from a JSON document
    Invoice {
        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Company logo (JPEG)
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Signature image (JPEG)
        #[arg(long)]
        signature: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pdf)]
        format: OutputFormat,
    },

    /// Check that per-date delivery quantities reconcile with declared totals
    Validate {
        /// Input JSON file (delivery schedule document)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Render the built-in sample delivery schedule
    Sample {
        /// Output file path
        #[arg(short, long, default_value = "delivery-schedule-sample.pdf")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pdf)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            input,
            output,
            logo,
            signature,
            format,
        } => {
            let mut schedule: DeliverySchedule = read_document(&input)?;
            schedule.logo = read_attachment(logo.as_deref())?;
            schedule.signature = read_attachment(signature.as_deref())?;

            let bytes = match format {
                OutputFormat::Pdf => render_delivery_schedule(&schedule)?,
                OutputFormat::Html => render_delivery_schedule_html(&schedule)?.into_bytes(),
            };
            fs::write(&output, bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Wrote {}", output.display());
        }

        Commands::Invoice {
            input,
            output,
            logo,
            signature,
            format,
        } => {
            let mut order: PurchaseOrder = read_document(&input)?;
            order.logo = read_attachment(logo.as_deref())?;
            order.signature = read_attachment(signature.as_deref())?;

            let bytes = match format {
                OutputFormat::Pdf => render_purchase_order(&order)?,
                OutputFormat::Html => render_purchase_order_html(&order)?.into_bytes(),
            };
            fs::write(&output, bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Wrote {}", output.display());
        }

        Commands::Validate { input } => {
            let schedule: DeliverySchedule = read_document(&input)?;
            let tallies = tally_groups(&schedule.items);

            if tallies.is_empty() {
                println!("No items to check.");
                return Ok(());
            }

            let mut mismatched = 0;
            for tally in &tallies {
                let verdict = if tally.balanced() { "ok" } else { "MISMATCH" };
                println!(
                    "article {:>4}  declared {:>8}  scheduled {:>8}  {}",
                    tally.id, tally.declared, tally.delivered, verdict
                );
                if !tally.balanced() {
                    mismatched += 1;
                }
            }

            if mismatched > 0 {
                bail!("{mismatched} article(s) do not reconcile");
            }
            println!("All delivery quantities reconcile.");
        }

        Commands::Sample { output, format } => {
            let schedule = sample_delivery_schedule();
            let bytes = match format {
                OutputFormat::Pdf => render_delivery_schedule(&schedule)?,
                OutputFormat::Html => render_delivery_schedule_html(&schedule)?.into_bytes(),
            };
            fs::write(&output, bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
    }

    Ok(())
}

fn read_document<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_attachment(path: Option<&Path>) -> Result<Option<Attachment>> {
    match path {
        Some(path) => {
            let data = fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Some(Attachment::new(data)))
        }
        None => Ok(None),
    }
}
