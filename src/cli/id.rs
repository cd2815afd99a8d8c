use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::cli::{resolve_path, ChecklistArgs, OutputFormat};
use crate::config::ConfigFile;
use crate::core::record::TaxonRecord;
use crate::lookup::{Translation, DEFAULT_TABLE_ENCODING};
use crate::matching::engine::TaxonEngine;

#[derive(Args)]
pub struct IdArgs {
    /// Scientific names to resolve
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub checklist: ChecklistArgs,

    /// Redirect synonyms to their accepted record
    #[arg(long)]
    pub follow_synonyms: bool,

    /// Fail when several accepted records share a name instead of using the first
    #[arg(long)]
    pub strict: bool,

    /// Consult the translation table for names the checklist does not resolve
    #[arg(long)]
    pub translate: bool,

    /// Path to the translation table used with --translate
    #[arg(long)]
    pub translation: Option<PathBuf>,
}

/// How a name was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Accepted,
    Synonym,
    Translated,
    TranslationId,
    NotFound,
}

impl Resolution {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Synonym => "synonym",
            Self::Translated => "translated",
            Self::TranslationId => "translation_id",
            Self::NotFound => "not_found",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IdResult {
    pub name: String,
    pub resolved_name: Option<String>,
    pub id: Option<String>,
    pub resolution: Resolution,
}

/// Execute id subcommand
///
/// # Errors
///
/// Returns an error if a file cannot be loaded, or with `--strict` when a
/// name has several accepted records.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: IdArgs,
    format: OutputFormat,
    verbose: bool,
    config_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let engine = args.checklist.load_engine(config_dir, verbose)?;

    let translation = if args.translate {
        let path = resolve_path(args.translation.as_deref(), config_dir, ConfigFile::Translation)?;
        Some(Translation::load(&path, DEFAULT_TABLE_ENCODING)?)
    } else {
        None
    };

    let results = args
        .names
        .iter()
        .map(|name| resolve_name(&engine, translation.as_ref(), name, &args))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn resolve_name(
    engine: &TaxonEngine,
    translation: Option<&Translation>,
    name: &str,
    args: &IdArgs,
) -> anyhow::Result<IdResult> {
    if let Some((record, resolution)) = lookup(engine, name, args)? {
        return Ok(found(name, record, resolution));
    }

    if let Some(translation) = translation {
        if let Some(translated) = translation.get(name) {
            if let Some((record, _)) = lookup(engine, translated, args)? {
                return Ok(found(name, record, Resolution::Translated));
            }
        }
        if let Some(id) = translation.get_taxon_id(name) {
            return Ok(IdResult {
                name: name.to_string(),
                resolved_name: translation.get(name).map(str::to_string),
                id: Some(id.to_string()),
                resolution: Resolution::TranslationId,
            });
        }
    }

    Ok(IdResult {
        name: name.to_string(),
        resolved_name: None,
        id: None,
        resolution: Resolution::NotFound,
    })
}

fn lookup<'a>(
    engine: &'a TaxonEngine,
    name: &str,
    args: &IdArgs,
) -> anyhow::Result<Option<(&'a TaxonRecord, Resolution)>> {
    let accepted = if args.strict {
        engine.resolve_strict(name)?
    } else {
        engine.resolve(name)
    };
    if let Some(record) = accepted {
        return Ok(Some((record, Resolution::Accepted)));
    }

    if args.follow_synonyms {
        return Ok(engine
            .resolve_with_synonyms(name)
            .map(|record| (record, Resolution::Synonym)));
    }
    Ok(None)
}

fn found(name: &str, record: &TaxonRecord, resolution: Resolution) -> IdResult {
    IdResult {
        name: name.to_string(),
        resolved_name: Some(record.scientific_name.clone()),
        id: Some(record.id.clone()),
        resolution,
    }
}

fn print_text_results(results: &[IdResult]) {
    for result in results {
        match (&result.id, result.resolution) {
            (Some(id), Resolution::Accepted) => println!("{}: {id}", result.name),
            (Some(id), _) => println!(
                "{}: {id} (via {})",
                result.name,
                result.resolved_name.as_deref().unwrap_or("translation id")
            ),
            (None, _) => println!("{}: not found", result.name),
        }
    }
}

fn print_tsv_results(results: &[IdResult]) {
    println!("name\tresolved_name\tid\tresolution");
    for result in results {
        println!(
            "{}\t{}\t{}\t{}",
            result.name,
            result.resolved_name.as_deref().unwrap_or(""),
            result.id.as_deref().unwrap_or(""),
            result.resolution.as_str()
        );
    }
}
