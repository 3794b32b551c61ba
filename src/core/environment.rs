//! Process environment abstraction.
//!
//! Loading decrypted variables mutates global process state, which makes
//! direct `std::env` calls hostile to tests. All environment mutation goes
//! through this trait instead: production code uses [`ProcessEnv`], tests
//! use [`MemoryEnv`] and assert on its contents.

use std::collections::BTreeMap;

/// A mutable view of environment variables.
pub trait Environment {
    /// Returns the value of `name`, if it is set.
    fn get(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value`.
    ///
    /// Callers must validate the pair first; the process-backed
    /// implementation panics on names containing `=` or NUL bytes.
    fn set(&mut self, name: &str, value: &str);

    /// Removes `name`. Removing an absent name is a no-op.
    fn remove(&mut self, name: &str);
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) {
        std::env::set_var(name, value);
    }

    fn remove(&mut self, name: &str) {
        std::env::remove_var(name);
    }
}

/// An in-memory environment for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion for seeding pre-existing variables.
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Number of variables currently set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}
