//! Key generation and storage.
//!
//! Manages the master key: a 32-byte symmetric secret generated once, stored
//! in the key file, and reused for every encrypt/decrypt of the env file.

use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::core::atomic;
use crate::core::constants::KEY_LEN;
use crate::error::{AuthError, NotFoundError, Result};

/// The symmetric key protecting the env file.
///
/// Key bytes are wiped from memory when the value is dropped.
pub struct MasterKey {
    bytes: Zeroizing<[u8; KEY_LEN]>,
}

impl MasterKey {
    /// Generate a fresh key from the operating system RNG.
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        OsRng.fill_bytes(&mut bytes[..]);
        Self { bytes }
    }

    /// Wrap existing key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MasterKey(****)")
    }
}

/// Key storage manager for the env file's master key.
pub struct KeyStore;

impl KeyStore {
    /// Return the key at `key_path`, generating and persisting one if absent.
    ///
    /// A new key is written through a uniquely named temporary file and an
    /// atomic rename, so a reader never observes a partial key and concurrent
    /// writers leave a complete key behind (last writer wins). The key file is
    /// restricted to owner read/write on Unix. Parent directories are created
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedKey` if an existing key file has the wrong
    /// length, or an I/O error if the path cannot be read or written.
    pub fn ensure_key(key_path: &Path) -> Result<MasterKey> {
        if key_path.exists() {
            return Self::load_key(key_path);
        }

        let key = MasterKey::generate();
        atomic::write_atomic(key_path, key.as_bytes())?;
        atomic::set_owner_only(key_path)?;

        Ok(key)
    }

    /// Load the key at `key_path` without creating one.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::KeyFile` if the file doesn't exist, or
    /// `AuthError::MalformedKey` if it has the wrong length.
    pub fn load_key(key_path: &Path) -> Result<MasterKey> {
        if !key_path.exists() {
            return Err(NotFoundError::KeyFile(key_path.to_path_buf()).into());
        }

        let raw = Zeroizing::new(fs::read(key_path)?);
        let bytes: [u8; KEY_LEN] =
            raw.as_slice()
                .try_into()
                .map_err(|_| AuthError::MalformedKey {
                    expected: KEY_LEN,
                    found: raw.len(),
                })?;

        Ok(MasterKey::from_bytes(bytes))
    }

    /// Delete the key file if present. Absence is not an error.
    pub fn clear_key(key_path: &Path) -> Result<()> {
        match fs::remove_file(key_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a key file exists at `key_path`.
    pub fn has_key(key_path: &Path) -> bool {
        key_path.is_file()
    }
}
