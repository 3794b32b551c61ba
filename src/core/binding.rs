//! Logical name bindings.
//!
//! A [`Bindings`] maps logical attribute names (what the application calls a
//! setting, like `database_url`) to concrete environment variable keys (like
//! `APP_DATABASE_URL`). Declarations are explicit and validated up front;
//! naming an undeclared logical name in any operation is an error rather
//! than a silent miss.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::environment::Environment;
use crate::core::envfile::EnvFile;
use crate::core::validation::{validate_name, validate_value};
use crate::error::{Result, ValidationError};

/// Declared logical-name bindings over an env file and an environment.
///
/// Values pass through the environment on `set`/`get`; the encrypted file is
/// only touched by [`Bindings::load`] and [`Bindings::save`]. `save` writes
/// exactly the values that were set or hydrated through this object, so a
/// bound key that was never touched does not end up in the file.
#[derive(Debug)]
pub struct Bindings<E: Environment> {
    file: EnvFile,
    env: E,
    /// logical name -> environment variable key
    names: BTreeMap<String, String>,
    /// environment variable key -> last value set or loaded
    values: BTreeMap<String, String>,
}

impl<E: Environment> Bindings<E> {
    pub fn new(file: EnvFile, env: E) -> Self {
        Self {
            file,
            env,
            names: BTreeMap::new(),
            values: BTreeMap::new(),
        }
    }

    /// Declares that logical `name` is stored under the variable `key`.
    ///
    /// The key must be a valid variable name. Re-binding a logical name
    /// replaces its key.
    pub fn bind(mut self, name: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_name(&key)?;
        self.names.insert(name.into(), key);
        Ok(self)
    }

    /// The environment backing this binding set.
    pub fn env(&self) -> &E {
        &self.env
    }

    fn key_for(&self, name: &str) -> Result<&str> {
        self.names
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ValidationError::UnboundName(name.to_string()).into())
    }

    /// Returns the environment value bound to `name`, if set.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        let key = self.key_for(name)?;
        Ok(self.env.get(key))
    }

    /// Like [`Bindings::get`], falling back to `default` when unset.
    pub fn get_or(&self, name: &str, default: &str) -> Result<String> {
        Ok(self.get(name)?.unwrap_or_else(|| default.to_string()))
    }

    /// Sets the variable bound to `name` in the environment and records the
    /// value for the next [`Bindings::save`].
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let key = self.key_for(name)?.to_string();
        validate_value(&key, value)?;
        self.env.set(&key, value);
        self.values.insert(key, value.to_string());
        Ok(())
    }

    /// Removes the variable bound to `name` from the environment and from
    /// the recorded values.
    pub fn unset(&mut self, name: &str) -> Result<()> {
        let key = self.key_for(name)?.to_string();
        self.env.remove(&key);
        self.values.remove(&key);
        Ok(())
    }

    /// Loads the env file into the environment and hydrates recorded values
    /// for every bound key present in the file.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the env file or key file is missing.
    pub fn load(&mut self) -> Result<()> {
        let resolved = self.file.load(&mut self.env, &BTreeMap::new())?;

        let mut hydrated = 0;
        for key in self.names.values() {
            if let Some(value) = resolved.get(key) {
                self.values.insert(key.clone(), value.clone());
                hydrated += 1;
            }
        }

        debug!(bound = self.names.len(), hydrated, "loaded bindings");
        Ok(())
    }

    /// Persists the recorded values to the env file.
    pub fn save(&self) -> Result<()> {
        self.file.save(&self.values)
    }
}
