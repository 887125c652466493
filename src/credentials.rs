//! Credential persistence and acquisition.
//!
//! The API key is an opaque string persisted in a small JSON file under the
//! fixed `gemini_api_key` key. It is read once at startup and written back
//! whenever the user supplies a new credential. The key is never validated
//! locally; an invalid value only surfaces through the remote endpoint's
//! own error payload.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};

use crate::error::{Error, Result};

/// The fixed key the credential is stored under.
pub const CREDENTIAL_KEY: &str = "gemini_api_key";

#[derive(Serialize, Deserialize, Default)]
struct CredentialFile {
    gemini_api_key: Option<String>,
}

/// File-backed storage for the API credential.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Opens the store at its default location in the user configuration
    /// directory.
    pub fn open_default() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::unknown("could not determine the user config directory"))?;
        Ok(Self {
            path: base.join("geminius").join("credentials.json"),
        })
    }

    /// Opens a store backed by a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored credential.
    ///
    /// A store that has never been written reads as `Ok(None)`.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)
            .map_err(|err| Error::io("failed to open credentials file", err))?;
        let reader = BufReader::new(file);
        let parsed: CredentialFile = from_reader(reader).map_err(|err| {
            Error::serialization("failed to parse credentials file", Some(Box::new(err)))
        })?;
        Ok(parsed.gemini_api_key.filter(|key| !key.is_empty()))
    }

    /// Persists a credential, replacing any previous value.
    pub fn store(&self, key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| Error::io("failed to create credentials directory", err))?;
        }
        let file = File::create(&self.path)
            .map_err(|err| Error::io("failed to create credentials file", err))?;
        let writer = BufWriter::new(file);
        to_writer_pretty(
            writer,
            &CredentialFile {
                gemini_api_key: Some(key.to_string()),
            },
        )
        .map_err(|err| {
            Error::serialization("failed to serialize credentials file", Some(Box::new(err)))
        })
    }
}

/// Source of a credential when none is stored.
///
/// This replaces a synchronous blocking prompt: the turn's logical flow
/// suspends on `request_credential` until the user resolves it one way or
/// the other. Returning `Ok(None)` means the user declined, which aborts
/// the turn.
#[async_trait::async_trait]
pub trait CredentialPrompt: Send {
    /// Ask the user for an API key.
    async fn request_credential(&mut self) -> Result<Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("credentials.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn store_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("credentials.json"));
        store.store("AIza-test-key").unwrap();
        assert_eq!(store.load().unwrap(), Some("AIza-test-key".to_string()));
    }

    #[test]
    fn store_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("credentials.json"));
        store.store("first").unwrap();
        store.store("second").unwrap();
        assert_eq!(store.load().unwrap(), Some("second".to_string()));
    }

    #[test]
    fn file_uses_the_fixed_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("credentials.json"));
        store.store("value").unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains(&format!("\"{}\"", CREDENTIAL_KEY)));
    }

    #[test]
    fn empty_stored_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, r#"{"gemini_api_key": ""}"#).unwrap();
        let store = CredentialStore::with_path(path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn nested_store_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("a").join("b").join("creds.json"));
        store.store("key").unwrap();
        assert_eq!(store.load().unwrap(), Some("key".to_string()));
    }
}
