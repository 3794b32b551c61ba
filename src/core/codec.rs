//! Mapping encryption and decryption.
//!
//! The variable mapping is serialized to JSON (the `BTreeMap` keeps the
//! serialization deterministic) and sealed with XChaCha20-Poly1305. The
//! resulting blob is self-contained: a fresh 24-byte random nonce followed
//! by the ciphertext and authentication tag. Any tampering, truncation, or
//! wrong key is detected at decode time; decoding never yields garbage.

use std::collections::BTreeMap;

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::core::constants::NONCE_LEN;
use crate::core::keystore::MasterKey;
use crate::error::{AuthError, Result};

/// Serializes and encrypts a variable mapping.
///
/// Every call draws a fresh nonce, so encrypting the same mapping twice
/// produces different blobs that decode to the same mapping.
///
/// # Arguments
///
/// * `vars` - The variable mapping to seal
/// * `key` - The master key to seal it with
///
/// # Returns
///
/// The encrypted blob: `nonce || ciphertext || tag`.
pub fn encode(vars: &BTreeMap<String, String>, key: &MasterKey) -> Result<Vec<u8>> {
    let payload = Zeroizing::new(
        serde_json::to_vec(vars).map_err(|e| AuthError::Payload(e.to_string()))?,
    );

    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(XNonce::from_slice(&nonce), payload.as_slice())
        .map_err(|_| AuthError::Encrypt)?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypts and deserializes a variable mapping.
///
/// # Errors
///
/// Returns [`AuthError::Truncated`] if the blob is too short to carry a
/// nonce, [`AuthError::Decrypt`] if the key is wrong or the ciphertext was
/// modified, and [`AuthError::Payload`] if an authentic plaintext is not a
/// valid mapping.
pub fn decode(blob: &[u8], key: &MasterKey) -> Result<BTreeMap<String, String>> {
    if blob.len() < NONCE_LEN {
        return Err(AuthError::Truncated { len: blob.len() }.into());
    }
    let (nonce, ciphertext) = blob.split_at(NONCE_LEN);

    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let payload = Zeroizing::new(
        cipher
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|_| AuthError::Decrypt)?,
    );

    let vars = serde_json::from_slice(&payload).map_err(|e| AuthError::Payload(e.to_string()))?;
    Ok(vars)
}
