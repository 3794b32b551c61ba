//! Error types for envault operations.
//!
//! Failures are grouped by kind so callers can react to what actually went
//! wrong: a missing file, a key that does not authenticate, bad input, or a
//! filesystem error. The CLI maps all of them to stderr and a non-zero exit.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all envault operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file the operation requires is missing.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("env file not found: {0}")]
    EnvFile(PathBuf),

    #[error("key file not found: {0}")]
    KeyFile(PathBuf),
}

/// Cryptographic failure.
///
/// Decryption with a wrong or damaged key never yields garbage; it yields one
/// of these.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("decryption failed: wrong key or corrupted env file")]
    Decrypt,

    #[error("encryption failed")]
    Encrypt,

    #[error("truncated env file: {len} bytes is too short to hold a nonce")]
    Truncated { len: usize },

    #[error("malformed key file: expected {expected} bytes, found {found}")]
    MalformedKey { expected: usize, found: usize },

    #[error("corrupted payload: {0}")]
    Payload(String),
}

/// Input that cannot become an environment variable.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("variable name cannot be empty")]
    EmptyName,

    #[error("invalid variable name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid value for '{name}': contains a NUL byte")]
    NulByte { name: String },

    #[error("no binding declared for '{0}'")]
    UnboundName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
