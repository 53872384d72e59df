//! Snippet commands
//!
//! Usage: wps snippet put <NAME> (--html <HTML> | --file <PATH>)
//!        wps snippet delete <NAME>
//!        wps snippet list
//!        wps snippet show <NAME>

use clap::{Args, Subcommand};
use std::path::PathBuf;
use wps_core::errors::{ExError, ExErrorKind, WpsError};
use wps_core::model::snippet::PREVIEW_WORDS;
use wps_core::sanitize::slugify;
use wps_core::SnippetStore;

use crate::config::Config;

#[derive(Debug, Args)]
pub struct SnippetArgs {
    #[command(subcommand)]
    pub command: SnippetCommand,
}

#[derive(Debug, Subcommand)]
pub enum SnippetCommand {
    /// Create or overwrite a snippet
    Put(PutArgs),
    /// Delete a snippet
    Delete {
        /// Snippet name
        name: String,
    },
    /// List snippets with their shortcode tag and a preview
    List,
    /// Print a snippet's stored markup
    Show {
        /// Snippet name
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct PutArgs {
    /// Snippet name (normalized to a slug)
    pub name: String,

    /// Markup given inline
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub html: Option<String>,

    /// Read the markup from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Execute snippet command
pub fn execute(args: SnippetArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SnippetCommand::Put(put_args) => execute_put(put_args, config),
        SnippetCommand::Delete { name } => execute_delete(&name, config),
        SnippetCommand::List => execute_list(config),
        SnippetCommand::Show { name } => execute_show(&name, config),
    }
}

fn execute_put(args: PutArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let html = match (args.html, args.file) {
        (Some(html), _) => html,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err("either --html or --file is required".into()),
    };

    let store = config.open_store()?;
    match SnippetStore::new(&store).put(&args.name, &html)? {
        Some(snippet) => {
            println!("Shortcode {} is now active!", snippet.tag());
            Ok(())
        }
        None => Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("put_snippet")
            .with_entity_id(args.name)
            .with_message("name and markup must not be empty after sanitizing")
            .into()),
    }
}

fn execute_delete(name: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_store()?;
    if !SnippetStore::new(&store).delete(name)? {
        return Err(WpsError::SnippetNotFound {
            name: slugify(name),
        }
        .into());
    }

    println!("Shortcode removed.");
    Ok(())
}

fn execute_list(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_store()?;
    let snippets = SnippetStore::new(&store).snippets()?;

    if snippets.is_empty() {
        println!("No shortcodes stored.");
        return Ok(());
    }

    for snippet in snippets {
        println!("{}\t{}", snippet.tag(), snippet.preview(PREVIEW_WORDS));
    }
    Ok(())
}

fn execute_show(name: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_store()?;
    let snippet = SnippetStore::new(&store).require(name)?;
    println!("{}", snippet.html);
    Ok(())
}
