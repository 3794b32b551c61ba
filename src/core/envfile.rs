//! Encrypted env file operations.
//!
//! An [`EnvFile`] names an encrypted variable file and its key file and
//! carries every operation on the pair: create, read, merge, delete, and
//! loading the stored variables into a process environment. Every mutation
//! rewrites the whole file through an atomic temp-and-rename, so readers
//! never observe a partial write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::atomic;
use crate::core::codec;
use crate::core::constants::{DEFAULT_ENV_FILE, DEFAULT_KEY_FILE};
use crate::core::environment::Environment;
use crate::core::keystore::KeyStore;
use crate::core::validation::{validate_name, validate_value};
use crate::error::{NotFoundError, Result};

/// An encrypted env file and its key file.
///
/// Both paths are fixed at construction; [`EnvFile::default`] uses `.env`
/// and `.env_key` in the current directory.
#[derive(Debug, Clone)]
pub struct EnvFile {
    env_path: PathBuf,
    key_path: PathBuf,
}

impl Default for EnvFile {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_FILE, DEFAULT_KEY_FILE)
    }
}

impl EnvFile {
    pub fn new(env_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        Self {
            env_path: env_path.into(),
            key_path: key_path.into(),
        }
    }

    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Returns true when both the env file and the key file exist.
    pub fn exists(&self) -> bool {
        self.env_path.is_file() && KeyStore::has_key(&self.key_path)
    }

    /// Encrypts and writes the full variable mapping.
    ///
    /// Creates the key file on first use. Validates every entry before
    /// touching disk, so a failed save leaves both files unchanged.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed name or a NUL byte in a
    /// value, and passes through key store, encryption, and I/O failures.
    pub fn save(&self, vars: &BTreeMap<String, String>) -> Result<()> {
        for (name, value) in vars {
            validate_name(name)?;
            validate_value(name, value)?;
        }

        let key = KeyStore::ensure_key(&self.key_path)?;
        let blob = codec::encode(vars, &key)?;
        atomic::write_atomic(&self.env_path, &blob)?;
        atomic::set_owner_only(&self.env_path)?;

        debug!(
            path = %self.env_path.display(),
            count = vars.len(),
            "saved env file"
        );
        Ok(())
    }

    /// Decrypts and returns the stored mapping without touching any
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns a not-found error naming whichever of the two files is
    /// missing, and an authentication error when the key does not match the
    /// file contents.
    pub fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.env_path.is_file() {
            return Err(NotFoundError::EnvFile(self.env_path.clone()).into());
        }
        let key = KeyStore::load_key(&self.key_path)?;
        let blob = fs::read(&self.env_path)?;
        let vars = codec::decode(&blob, &key)?;

        debug!(
            path = %self.env_path.display(),
            count = vars.len(),
            "read env file"
        );
        Ok(vars)
    }

    /// Loads the stored variables into `env`, with optional defaults.
    ///
    /// Resolution order: an existing environment value always wins, then the
    /// stored file value, then the supplied default. Only names absent from
    /// `env` are set. The whole resolved mapping is validated before any
    /// entry is applied, so a failing load leaves `env` untouched and a
    /// crafted file cannot crash the process environment setter.
    ///
    /// # Returns
    ///
    /// The resolved mapping (stored variables over defaults), including
    /// entries that were shadowed by pre-existing environment values.
    pub fn load<E: Environment>(
        &self,
        env: &mut E,
        defaults: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>> {
        let stored = self.read()?;

        let mut resolved = defaults.clone();
        resolved.extend(stored);

        for (name, value) in &resolved {
            validate_name(name)?;
            validate_value(name, value)?;
        }

        let mut applied = 0;
        for (name, value) in &resolved {
            if env.get(name).is_none() {
                env.set(name, value);
                applied += 1;
            }
        }

        debug!(
            resolved = resolved.len(),
            applied,
            "loaded env file into environment"
        );
        Ok(resolved)
    }

    /// Merges `partial` on top of the stored mapping and rewrites the file.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the env file does not exist yet; use
    /// [`EnvFile::save`] or [`EnvFile::set_var`] to create it.
    pub fn update(&self, partial: &BTreeMap<String, String>) -> Result<()> {
        let mut vars = self.read()?;
        vars.extend(partial.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.save(&vars)
    }

    /// Sets a single variable, creating the env file if needed.
    pub fn set_var(&self, name: &str, value: &str) -> Result<()> {
        validate_name(name)?;
        validate_value(name, value)?;

        let mut pair = BTreeMap::new();
        pair.insert(name.to_string(), value.to_string());

        if self.env_path.is_file() {
            self.update(&pair)
        } else {
            self.save(&pair)
        }
    }

    /// Removes a single variable. Removing an absent name is a no-op.
    pub fn del_var(&self, name: &str) -> Result<()> {
        let mut vars = self.read()?;
        if vars.remove(name).is_none() {
            debug!(name, "variable not present, nothing to delete");
            return Ok(());
        }
        self.save(&vars)
    }

    /// Deletes the env file and the key file. Either may already be absent.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.env_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        KeyStore::clear_key(&self.key_path)?;

        debug!(path = %self.env_path.display(), "cleared env file and key");
        Ok(())
    }
}
