mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;
use veritext_core::{Comparison, CoreError, DesignTextElement, MatchStatus, SpecificationRecord};
use veritext_sync::{ApiError, FigmaClient, extract_file_key};

#[derive(Parser)]
#[command(name = "veritext", version, about = "Checks design-tool text against a specification")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a local design JSON export against a specification file.
    Check {
        /// Design document JSON (e.g. a Figma file export).
        #[arg(long)]
        design: PathBuf,
        /// Specification JSON with the required-text records.
        #[arg(long)]
        spec: PathBuf,
        /// Write an HTML report to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Fetch a design from the Figma API, then check it.
    Fetch {
        /// Figma share URL (figma.com/file/<KEY>/...).
        #[arg(long)]
        url: String,
        /// Figma personal access token.
        #[arg(long, env = "FIGMA_TOKEN")]
        token: String,
        /// Specification JSON with the required-text records.
        #[arg(long)]
        spec: PathBuf,
        /// Also save the fetched design document to this path.
        #[arg(long)]
        save_design: Option<PathBuf>,
        /// Write an HTML report to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            design,
            spec,
            report,
        } => {
            let raw = fs::read_to_string(&design)
                .with_context(|| format!("reading design document {}", design.display()))?;
            let elements = veritext_core::parse_and_flatten(&raw)?;
            run_check(elements, &spec, report.as_deref())?;
        }
        Command::Fetch {
            url,
            token,
            spec,
            save_design,
            report,
        } => {
            let file_key = extract_file_key(&url).ok_or_else(|| ApiError::BadUrl(url.clone()))?;
            let client = FigmaClient::new(token);
            let tree = client.get_file(&file_key).await?;

            if let Some(path) = save_design {
                fs::write(&path, serde_json::to_string_pretty(&tree)?)
                    .with_context(|| format!("saving design document {}", path.display()))?;
            }

            let elements = veritext_core::flatten(&tree);
            run_check(elements, &spec, report.as_deref())?;
        }
    }

    Ok(())
}

fn run_check(
    elements: Vec<DesignTextElement>,
    spec_path: &Path,
    report_path: Option<&Path>,
) -> anyhow::Result<()> {
    println!("Extracted {} text elements from the design.", elements.len());

    let records = load_specs(spec_path)?;
    println!("Loaded {} specification records.", records.len());

    let comparison = veritext_core::compare(&records, &elements);
    print_summary(&comparison);

    if let Some(path) = report_path {
        let html = report::render(&comparison);
        fs::write(path, html)
            .with_context(|| format!("writing report {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// A missing specification source degrades to zero records; a malformed one
/// is fatal.
fn load_specs(path: &Path) -> anyhow::Result<Vec<SpecificationRecord>> {
    match veritext_core::load_from_file(path) {
        Ok(records) => Ok(records),
        Err(err @ CoreError::SourceUnavailable { .. }) => {
            warn!(%err, "proceeding with zero specification records");
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_summary(comparison: &Comparison) {
    let summary = comparison.summary();
    println!();
    println!("=== Comparison summary ===");
    println!("  {:<24} {}", "records", summary.total);
    println!("  {:<24} {}", "fully implemented", summary.complete);
    println!("  {:<24} {}", "partially implemented", summary.partial);
    println!("  {:<24} {}", "not implemented", summary.missing);

    for result in &comparison.matched {
        let marker = match result.status {
            MatchStatus::Complete => "ok ",
            _ => "~  ",
        };
        println!(
            "{marker} {:<30} {:.0}%",
            result.spec_name,
            result.implementation_rate * 100.0
        );
        for missing in &result.missing {
            println!("      missing: {missing}");
        }
    }
    for result in &comparison.issues {
        println!("x   {:<30} 0%", result.spec_name);
        for missing in &result.missing {
            println!("      missing: {missing}");
        }
    }
}
