//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envault command running inside the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envault").expect("failed to find envault binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envault init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run envault init")
    }

    /// Shortcut for `envault set`.
    pub fn set(&self, name: &str, value: &str) -> Output {
        self.cmd()
            .args(["set", name, value])
            .output()
            .expect("failed to run envault set")
    }

    /// Set multiple variables at once.
    pub fn set_multiple(&self, pairs: &[(&str, &str)]) -> Vec<Output> {
        pairs.iter().map(|(k, v)| self.set(k, v)).collect()
    }

    /// Shortcut for `envault del`.
    pub fn del(&self, name: &str) -> Output {
        self.cmd()
            .args(["del", name])
            .output()
            .expect("failed to run envault del")
    }

    /// Shortcut for `envault clear`.
    pub fn clear(&self) -> Output {
        self.cmd()
            .arg("clear")
            .output()
            .expect("failed to run envault clear")
    }

    /// Shortcut for `envault init` with explicit file paths.
    pub fn init_at(&self, env_file: &str, key_path: &str) -> Output {
        self.cmd()
            .args(["init", "--env_file", env_file, "--key_path", key_path])
            .output()
            .expect("failed to run envault init")
    }

    /// Shortcut for `envault set` with explicit file paths.
    pub fn set_at(&self, env_file: &str, key_path: &str, name: &str, value: &str) -> Output {
        self.cmd()
            .args(["set", name, value, "--env_file", env_file, "--key_path", key_path])
            .output()
            .expect("failed to run envault set")
    }
}
