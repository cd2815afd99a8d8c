use std::path::Path;

use clap::Args;

use crate::cli::{ChecklistArgs, OutputFormat};
use crate::matching::engine::ChecklistReport;

/// Number of problems listed per category in text output
const TEXT_LIMIT: usize = 20;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub checklist: ChecklistArgs,

    /// Exit with an error if any integrity problem is found
    #[arg(long)]
    pub fail_on_issues: bool,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if the checklist cannot be loaded, or with
/// `--fail-on-issues` when problems are found.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: CheckArgs,
    format: OutputFormat,
    verbose: bool,
    config_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let engine = args.checklist.load_engine(config_dir, verbose)?;
    let report = engine.check();

    match format {
        OutputFormat::Text => print_text_report(&report, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    if args.fail_on_issues && !report.is_clean() {
        anyhow::bail!(
            "Checklist has {} duplicate ids, {} ambiguous names and {} broken parent chains",
            report.duplicate_ids.len(),
            report.ambiguous_names.len(),
            report.broken_chains.len()
        );
    }

    Ok(())
}

fn print_text_report(report: &ChecklistReport, verbose: bool) {
    println!("Checklist Report");
    println!("{}", "=".repeat(60));

    if let Some(source) = &report.source {
        println!("Source: {}", source.display());
    }
    println!("Records: {}", report.records);
    println!("Accepted names: {}", report.accepted_names);
    println!("Comment rows: {}", report.comment_rows);
    println!("Skipped rows: {}", report.skipped_rows);

    let limit = if verbose { usize::MAX } else { TEXT_LIMIT };

    println!("\nDuplicate ids: {}", report.duplicate_ids.len());
    for id in report.duplicate_ids.iter().take(limit) {
        println!("  {id}");
    }

    println!("\nNames with several accepted records: {}", report.ambiguous_names.len());
    for ambiguous in report.ambiguous_names.iter().take(limit) {
        println!("  {}: {}", ambiguous.name, ambiguous.ids.join(", "));
    }

    println!("\nBroken parent chains: {}", report.broken_chains.len());
    for chain in report.broken_chains.iter().take(limit) {
        println!(
            "  {} ({}): {}",
            chain.scientific_name, chain.taxon_id, chain.error
        );
    }

    if report.is_clean() {
        println!("\nNo integrity problems found.");
    }
}

fn print_tsv_report(report: &ChecklistReport) {
    println!("kind\ttaxon_id\tscientific_name\tdetail");
    for id in &report.duplicate_ids {
        println!("duplicate_id\t{id}\t\t");
    }
    for ambiguous in &report.ambiguous_names {
        println!(
            "ambiguous_name\t{}\t{}\t",
            ambiguous.ids.join(","),
            ambiguous.name
        );
    }
    for chain in &report.broken_chains {
        println!(
            "broken_chain\t{}\t{}\t{}",
            chain.taxon_id, chain.scientific_name, chain.error
        );
    }
}
