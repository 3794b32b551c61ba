//! Test support utilities for envault integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Each test gets its own temporary project dir. No process-global state is
/// mutated -- child processes use `.current_dir()` so tests can safely run
/// in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with the env file initialized.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize env file: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with variables already set.
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (k, v) in vars {
            let output = t.set(k, v);
            assert!(
                output.status.success(),
                "Failed to set variable {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Default env file path inside the test directory.
    pub fn env_path(&self) -> PathBuf {
        self.dir.path().join(".env")
    }

    /// Default key file path inside the test directory.
    pub fn key_path(&self) -> PathBuf {
        self.dir.path().join(".env_key")
    }
}
