use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{resolve_path, OutputFormat};
use crate::config::ConfigFile;
use crate::lookup::{RedList, Translation, Whitelist, DEFAULT_TABLE_ENCODING};

#[derive(Args)]
pub struct WhitelistArgs {
    /// Names to look up
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Path to the whitelist (defaults to the config directory)
    #[arg(long)]
    pub whitelist: Option<PathBuf>,

    /// Text encoding of the whitelist
    #[arg(long, default_value = DEFAULT_TABLE_ENCODING)]
    pub encoding: String,
}

#[derive(Args)]
pub struct RedListArgs {
    /// Taxon ids, Swedish names or scientific names to look up
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Path to the red list (defaults to the config directory)
    #[arg(long)]
    pub red_list: Option<PathBuf>,

    /// Text encoding of the red list
    #[arg(long, default_value = DEFAULT_TABLE_ENCODING)]
    pub encoding: String,
}

#[derive(Args)]
pub struct TranslateArgs {
    /// External taxon names to translate
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Path to the translation table (defaults to the config directory)
    #[arg(long)]
    pub translation: Option<PathBuf>,

    /// Text encoding of the translation table
    #[arg(long, default_value = DEFAULT_TABLE_ENCODING)]
    pub encoding: String,
}

/// Execute whitelist subcommand
///
/// # Errors
///
/// Returns an error if the whitelist cannot be located or read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_whitelist(
    args: WhitelistArgs,
    format: OutputFormat,
    config_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let path = resolve_path(args.whitelist.as_deref(), config_dir, ConfigFile::Whitelist)?;
    let whitelist = Whitelist::load(&path, &args.encoding)?;

    let results: Vec<(&str, Option<&str>)> = args
        .names
        .iter()
        .map(|name| (name.as_str(), whitelist.get(name)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (name, found) in &results {
                match found {
                    Some(listed) => println!("{name}: {listed}"),
                    None => println!("{name}: not whitelisted"),
                }
            }
        }
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = results
                .iter()
                .map(|(name, found)| serde_json::json!({ "name": name, "whitelisted": found }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("name\twhitelisted");
            for (name, found) in &results {
                println!("{name}\t{}", found.unwrap_or(""));
            }
        }
    }

    Ok(())
}

/// Execute red-list subcommand
///
/// # Errors
///
/// Returns an error if the red list cannot be located or read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_red_list(
    args: RedListArgs,
    format: OutputFormat,
    config_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let path = resolve_path(args.red_list.as_deref(), config_dir, ConfigFile::RedList)?;
    let red_list = RedList::load(&path, &args.encoding)?;

    match format {
        OutputFormat::Text => {
            for key in &args.keys {
                let Some(row) = red_list.get_info(key) else {
                    println!("{key}: not red-listed");
                    continue;
                };
                println!("{key}");
                for column in red_list.header() {
                    if let Some(value) = row.get(column).filter(|v| !v.is_empty()) {
                        println!("   {column}: {value}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = args
                .keys
                .iter()
                .map(|key| serde_json::json!({ "key": key, "info": red_list.get_info(key) }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("key\t{}", red_list.header().join("\t"));
            for key in &args.keys {
                let values: Vec<&str> = red_list
                    .header()
                    .iter()
                    .map(|column| {
                        red_list
                            .get_info(key)
                            .and_then(|row| row.get(column))
                            .map_or("", String::as_str)
                    })
                    .collect();
                println!("{key}\t{}", values.join("\t"));
            }
        }
    }

    Ok(())
}

/// Execute translate subcommand
///
/// # Errors
///
/// Returns an error if the translation table cannot be located or read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_translate(
    args: TranslateArgs,
    format: OutputFormat,
    config_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let path = resolve_path(args.translation.as_deref(), config_dir, ConfigFile::Translation)?;
    let translation = Translation::load(&path, &args.encoding)?;

    match format {
        OutputFormat::Text => {
            for name in &args.names {
                match (translation.get(name), translation.get_taxon_id(name)) {
                    (Some(to), Some(id)) => println!("{name}: {to} (id {id})"),
                    (Some(to), None) => println!("{name}: {to}"),
                    (None, Some(id)) => println!("{name}: id {id}"),
                    (None, None) => println!("{name}: no translation"),
                }
            }
        }
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = args
                .names
                .iter()
                .map(|name| {
                    serde_json::json!({
                        "name": name,
                        "translated": translation.get(name),
                        "taxon_id": translation.get_taxon_id(name),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("name\ttranslated\ttaxon_id");
            for name in &args.names {
                println!(
                    "{name}\t{}\t{}",
                    translation.get(name).unwrap_or(""),
                    translation.get_taxon_id(name).unwrap_or("")
                );
            }
        }
    }

    Ok(())
}
