//! Command-line interface for taxon-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **id**: Resolve scientific names to checklist ids
//! - **info**: Show records matching column filters, with their hierarchy
//! - **hierarchy**: Show the ranked ancestry of a name
//! - **check**: Audit a checklist for broken reference data
//! - **whitelist**, **red-list**, **translate**: Query the lookup tables
//!
//! ## Usage
//!
//! ```text
//! # Resolve names using the checklist in the config directory
//! taxon-solver id "Gadus morhua" "Abra alba"
//!
//! # Use an explicit checklist and follow synonyms
//! taxon-solver id "Syndosmya alba" --checklist Taxon.csv --follow-synonyms
//!
//! # Full records with hierarchy, as JSON
//! taxon-solver info id=206199 --format json
//!
//! # Report duplicate ids, ambiguous names and broken parent chains
//! taxon-solver check --checklist Taxon.csv
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::index::NameFilter;
use crate::config::{ConfigDirectory, ConfigFile};
use crate::lookup::{Whitelist, DEFAULT_TABLE_ENCODING};
use crate::matching::engine::TaxonEngine;
use crate::parsing::checklist::LoadOptions;

pub mod check;
pub mod id;
pub mod info;
pub mod lookup;

#[derive(Parser)]
#[command(name = "taxon-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve scientific names against a taxonomic checklist")]
#[command(
    long_about = "taxon-solver normalizes free-text species names against a Darwin Core taxon checklist.\n\nFor every name it provides:\n- The stable checklist id of the accepted record\n- Redirection from synonyms to accepted names\n- The full ranked hierarchy from the root down to the taxon"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config directory holding the checklist and lookup tables
    /// (defaults to discovery via config_directory.txt, TAXON_SOLVER_CONFIG or the home directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve scientific names to checklist ids
    Id(id::IdArgs),

    /// Show records matching COLUMN=VALUE filters, with their hierarchy
    Info(info::InfoArgs),

    /// Show the ranked ancestry of a scientific name
    Hierarchy(info::HierarchyArgs),

    /// Audit a checklist for integrity problems
    Check(check::CheckArgs),

    /// Look up names in the species whitelist
    Whitelist(lookup::WhitelistArgs),

    /// Look up conservation status in the red list
    RedList(lookup::RedListArgs),

    /// Translate external taxon names to checklist names
    Translate(lookup::TranslateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Options shared by every command that loads the checklist
#[derive(clap::Args, Debug, Clone)]
pub struct ChecklistArgs {
    /// Path to the checklist (defaults to dyntaxa_dwca/Taxon.csv in the config directory)
    #[arg(long)]
    pub checklist: Option<PathBuf>,

    /// Text encoding of the checklist
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,

    /// Restrict name lookups to names in the whitelist
    #[arg(long)]
    pub filter_whitelist: bool,

    /// Path to the whitelist used with --filter-whitelist
    #[arg(long)]
    pub whitelist: Option<PathBuf>,
}

impl ChecklistArgs {
    /// Load and index the checklist these options point at
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be located or loaded.
    pub fn load_engine(&self, config_dir: Option<&Path>, verbose: bool) -> anyhow::Result<TaxonEngine> {
        let path = resolve_path(self.checklist.as_deref(), config_dir, ConfigFile::Checklist)?;

        let filter: Option<NameFilter> = if self.filter_whitelist {
            let whitelist_path =
                resolve_path(self.whitelist.as_deref(), config_dir, ConfigFile::Whitelist)?;
            let whitelist = Whitelist::load(&whitelist_path, DEFAULT_TABLE_ENCODING)?;
            if verbose {
                eprintln!("Restricting names to {} whitelisted species", whitelist.len());
            }
            Some(whitelist.name_filter())
        } else {
            None
        };

        let options = LoadOptions {
            encoding: self.encoding.clone(),
            ..LoadOptions::default()
        };
        let engine = TaxonEngine::load(&path, &options, filter.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load checklist {}: {e}", path.display()))?;

        if verbose {
            eprintln!("Loaded {} records from {}", engine.len(), path.display());
        }
        if engine.is_empty() {
            eprintln!("Warning: Checklist is empty, no names can be resolved.");
        }

        Ok(engine)
    }
}

/// Use an explicit path, or look `file` up in the config directory
///
/// # Errors
///
/// Returns an error if no config directory can be found or the file is
/// missing from it.
pub fn resolve_path(
    explicit: Option<&Path>,
    config_dir: Option<&Path>,
    file: ConfigFile,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let dir = match config_dir {
        Some(dir) => ConfigDirectory::new(dir)?,
        None => ConfigDirectory::discover()?,
    };
    Ok(dir.path(file)?)
}
