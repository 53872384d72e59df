//! Rule commands
//!
//! Usage: wps rules save <JSON_FILE>
//!        wps rules list
//!        wps rules remove <ID>

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use wps_core::errors::WpsError;
use wps_core::{RawRule, RuleSet};

use crate::config::Config;

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// Replace all rules with the records in a JSON array file
    Save {
        /// JSON file holding an array of rule records
        file: PathBuf,
    },
    /// List rules in evaluation order
    List,
    /// Remove the rule(s) with this id
    Remove {
        /// Rule id
        id: String,
    },
}

/// Execute rules command
pub fn execute(args: RulesArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RulesCommand::Save { file } => execute_save(&file, config),
        RulesCommand::List => execute_list(config),
        RulesCommand::Remove { id } => execute_remove(&id, config),
    }
}

fn execute_save(file: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(file)?;
    let raw_rules: Vec<RawRule> = serde_json::from_str(&text)?;

    let store = config.open_store()?;
    let saved = RuleSet::new(&store).sanitize_and_replace(&raw_rules)?;

    println!("Saved {} rule(s).", saved.len());
    Ok(())
}

fn execute_list(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_store()?;
    let rules = RuleSet::new(&store).get_all()?;

    if rules.is_empty() {
        println!("No rules stored.");
        return Ok(());
    }

    for rule in rules {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            rule.id,
            rule.snippet_ref,
            rule.category_filter,
            rule.position_key,
            if rule.enabled { "enabled" } else { "disabled" }
        );
    }
    Ok(())
}

fn execute_remove(id: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_store()?;
    if !RuleSet::new(&store).remove(id)? {
        return Err(WpsError::RuleNotFound {
            rule_id: id.to_string(),
        }
        .into());
    }

    println!("Rule removed.");
    Ok(())
}
