//! Command implementations.
//!
//! Handler functions for each CLI command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::{output, Command};
use crate::core::envfile::EnvFile;
use crate::error::Result;

/// Execute a command.
///
/// # Arguments
///
/// * `command` - Parsed command from CLI
/// * `env_file` - Path of the encrypted env file
/// * `key_path` - Path of the encryption key file
///
/// # Errors
///
/// Returns error if the command execution fails.
pub fn execute(command: Command, env_file: PathBuf, key_path: PathBuf) -> Result<()> {
    let file = EnvFile::new(env_file, key_path);

    match command {
        Command::Init => cmd_init(&file),
        Command::Set { name, value } => cmd_set(&file, &name, &value),
        Command::Del { name } => cmd_del(&file, &name),
        Command::Clear => cmd_clear(&file),
    }
}

/// Create an empty encrypted env file and its key.
///
/// An existing env file is never overwritten; a notice is printed and the
/// command still succeeds.
fn cmd_init(file: &EnvFile) -> Result<()> {
    if file.env_path().is_file() {
        output::warn("already initialized, no changes made");
        output::kv("env file:", file.env_path().display());
        return Ok(());
    }

    file.save(&BTreeMap::new())?;

    output::success("initialized");
    output::kv("env file:", file.env_path().display());
    output::kv("key file:", file.key_path().display());
    Ok(())
}

/// Set a variable value, creating the env file if needed.
fn cmd_set(file: &EnvFile, name: &str, value: &str) -> Result<()> {
    file.set_var(name, value)?;
    output::success(&format!("set {}", output::key(name)));
    Ok(())
}

/// Delete a variable.
fn cmd_del(file: &EnvFile, name: &str) -> Result<()> {
    file.del_var(name)?;
    output::success(&format!("deleted {}", output::key(name)));
    Ok(())
}

/// Delete the env file and its key file.
fn cmd_clear(file: &EnvFile) -> Result<()> {
    file.clear()?;
    output::success(&format!(
        "cleared {} and {}",
        output::path(&file.env_path().display().to_string()),
        output::path(&file.key_path().display().to_string())
    ));
    Ok(())
}
