//! module `loader::help`

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

const BUILTIN_HELP: &str = include_str!("../../data/help.toml");

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    /// Heading the command is listed under ("Movement", "Items", ...)
    pub section: String,
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Parse help commands from TOML text.
/// # Errors
/// - on TOML parsing error
pub fn parse_help_commands(text: &str) -> Result<Vec<HelpCommand>> {
    let wrapper: HelpCommandFile = toml::from_str(text)?;
    Ok(wrapper.commands)
}

/// Loads help commands from a TOML file
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_commands(toml_path: &Path) -> Result<Vec<HelpCommand>> {
    let help_file = fs::read_to_string(toml_path)
        .with_context(|| format!("reading help commands from '{}'", toml_path.display()))?;
    let commands = parse_help_commands(&help_file)
        .with_context(|| format!("parsing help commands from '{}'", toml_path.display()))?;

    info!("{} help commands loaded from '{}'", commands.len(), toml_path.display());

    Ok(commands)
}

/// Help commands bundled into the binary.
/// # Errors
/// - if the bundled help file doesn't parse
pub fn builtin_help() -> Result<Vec<HelpCommand>> {
    parse_help_commands(BUILTIN_HELP).context("while parsing built-in help commands")
}
