//! Append-only credential store.
//! Records are written one per line as `name<TAB>base64(salt || key)` so the
//! file stays greppable with ordinary tools. The last record for a name wins,
//! which makes a password change a plain append.

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use thiserror::Error;

use crate::credential::kdf::{hash_password, verify_password};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store file unreadable: {0}")]
    Io(String),
    #[error("credential name may not contain tabs or line breaks")]
    InvalidName,
    #[error("record for {0} is not valid base64: {1}")]
    CorruptRecord(String, String),
    #[error("key derivation failed: {0}")]
    Kdf(String),
}

/// Line-oriented credential file. Only hashed values ever reach disk.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Wraps the store file path. The file itself is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Hashes `plaintext` and appends a record for `name`.
    pub fn append(&self, name: &str, plaintext: &str) -> Result<(), StoreError> {
        if name.contains(['\t', '\n', '\r']) {
            return Err(StoreError::InvalidName);
        }
        let stored = hash_password(plaintext).map_err(|e| StoreError::Kdf(format!("{e}")))?;
        let encoded = STANDARD_NO_PAD.encode(stored);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::Io(format!("{e}")))?;
        writeln!(file, "{name}\t{encoded}").map_err(|e| StoreError::Io(format!("{e}")))?;
        Ok(())
    }

    /// Verifies `plaintext` against the most recent record for `name`.
    /// A name with no record, or a store file that does not exist yet,
    /// verifies as `Ok(false)`.
    pub fn check(&self, name: &str, plaintext: &str) -> Result<bool, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(StoreError::Io(format!("{e}"))),
        };

        let mut latest = None;
        for line in content.lines() {
            if let Some((record_name, encoded)) = line.split_once('\t') {
                if record_name == name {
                    latest = Some(encoded);
                }
            }
        }
        let encoded = match latest {
            Some(encoded) => encoded,
            None => return Ok(false),
        };

        let stored = STANDARD_NO_PAD
            .decode(encoded.as_bytes())
            .map_err(|e| StoreError::CorruptRecord(name.to_string(), format!("{e}")))?;
        Ok(verify_password(plaintext, &stored))
    }
}
