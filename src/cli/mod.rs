//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{DEFAULT_ENV_FILE, DEFAULT_KEY_FILE};

pub use commands::execute;

/// envault - encrypted env files for process bootstrap.
#[derive(Parser)]
#[command(
    name = "envault",
    about = "Manage an encrypted environment variable file",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path of the encrypted env file
    #[arg(
        long = "env_file",
        alias = "env-file",
        env = "ENVAULT_ENV_FILE",
        global = true,
        value_name = "PATH",
        default_value = DEFAULT_ENV_FILE
    )]
    pub env_file: PathBuf,

    /// Path of the encryption key file
    #[arg(
        long = "key_path",
        alias = "key-path",
        env = "ENVAULT_KEY_PATH",
        global = true,
        value_name = "PATH",
        default_value = DEFAULT_KEY_FILE
    )]
    pub key_path: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create an empty encrypted env file and its key
    Init,

    /// Set a variable
    Set {
        /// Variable name (e.g., DATABASE_URL)
        name: String,
        /// Variable value
        value: String,
    },

    /// Delete a variable
    Del {
        /// Variable name
        name: String,
    },

    /// Delete the env file and its key
    Clear,
}
