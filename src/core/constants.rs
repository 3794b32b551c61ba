//! Constants used throughout envault.
//!
//! Centralizes magic strings and size values.

/// Default encrypted env file name (.env).
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Default key file name (.env_key).
pub const DEFAULT_KEY_FILE: &str = ".env_key";

/// Length of the symmetric key in bytes (XChaCha20-Poly1305).
pub const KEY_LEN: usize = 32;

/// Length of the nonce prefixed to every encrypted blob.
pub const NONCE_LEN: usize = 24;
