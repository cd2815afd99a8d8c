use std::path::Path;

use clap::Args;

use crate::cli::{ChecklistArgs, OutputFormat};
use crate::core::types::RecordFilter;
use crate::matching::engine::TaxonInfo;

#[derive(Args)]
pub struct InfoArgs {
    /// Filters as COLUMN=VALUE; columns are checklist headers or id, id_tag,
    /// accepted_id, accepted_tag, parent_id, parent_tag
    #[arg(required = true, num_args = 1.., value_parser = RecordFilter::parse_condition)]
    pub filters: Vec<(String, String)>,

    #[command(flatten)]
    pub checklist: ChecklistArgs,
}

#[derive(Args)]
pub struct HierarchyArgs {
    /// Scientific name of an accepted taxon
    #[arg(required = true)]
    pub name: String,

    #[command(flatten)]
    pub checklist: ChecklistArgs,
}

/// Execute info subcommand
///
/// # Errors
///
/// Returns an error if the checklist cannot be loaded or a matching record
/// has a broken parent chain.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: InfoArgs,
    format: OutputFormat,
    verbose: bool,
    config_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let engine = args.checklist.load_engine(config_dir, verbose)?;
    let filter = RecordFilter {
        conditions: args.filters,
    };

    let info = engine.get_info(&filter)?;
    if info.is_empty() {
        eprintln!("No matching records found.");
    }

    match format {
        OutputFormat::Text => print_text_info(&info),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Tsv => print_tsv_info(&info),
    }

    Ok(())
}

/// Execute hierarchy subcommand
///
/// # Errors
///
/// Returns an error if the checklist cannot be loaded or the parent chain is
/// broken.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_hierarchy(
    args: HierarchyArgs,
    format: OutputFormat,
    verbose: bool,
    config_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let engine = args.checklist.load_engine(config_dir, verbose)?;

    let Some(hierarchy) = engine.hierarchy_for(&args.name)? else {
        eprintln!("No accepted record named '{}'.", args.name);
        return Ok(());
    };

    match format {
        OutputFormat::Text => {
            println!("{}", hierarchy.rendered());
            for (rank, name) in &hierarchy.ranks {
                println!("  {rank}: {name}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "name": args.name,
                "taxon_hierarchy": hierarchy.rendered(),
                "ancestors": hierarchy.ancestors,
                "ranks": hierarchy.ranks,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("rank\tscientific_name");
            for (rank, name) in &hierarchy.ranks {
                println!("{rank}\t{name}");
            }
        }
    }

    Ok(())
}

fn print_text_info(info: &[TaxonInfo]) {
    for (i, taxon) in info.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }
        println!("{} ({})", taxon.record.scientific_name, taxon.record.id);
        for (key, value) in taxon.entries() {
            if !value.is_empty() {
                println!("   {key}: {value}");
            }
        }
    }
}

fn print_tsv_info(info: &[TaxonInfo]) {
    // Column set differs per record when ancestor ranks differ
    let mut columns: Vec<String> = Vec::new();
    let rows: Vec<Vec<(String, String)>> = info.iter().map(TaxonInfo::entries).collect();
    for row in &rows {
        for (key, _) in row {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    println!("{}", columns.join("\t"));
    for row in &rows {
        let values: Vec<&str> = columns
            .iter()
            .map(|c| {
                row.iter()
                    .find(|(k, _)| k == c)
                    .map_or("", |(_, v)| v.as_str())
            })
            .collect();
        println!("{}", values.join("\t"));
    }
}
