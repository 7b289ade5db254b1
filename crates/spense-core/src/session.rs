//! Session token storage and retrieval.
//!
//! Stores the session token in `<home>/session.json` with restricted
//! permissions (0600). Tokens are never logged or displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Persisted session state.
///
/// Holds at most one opaque token issued by the server at login or
/// registration. There is no expiry tracking; the server decides when a
/// token stops being accepted.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SessionStore {
    /// The session token, if logged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionStore {
    /// Returns the default path to the session file.
    pub fn session_path() -> PathBuf {
        paths::session_path()
    }

    /// Loads the session from the default path.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::session_path())
    }

    /// Loads the session from a specific path.
    /// Returns an empty session if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))
    }

    /// Saves the session to the default path.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::session_path())
    }

    /// Saves the session to a specific path with restricted permissions (0600).
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize session")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Returns the stored token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replaces the stored token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Removes the stored token, returning whether one was present.
    pub fn clear(&mut self) -> bool {
        self.token.take().is_some()
    }
}

/// Returns a masked version of a token for display (first 8 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.len() <= 12 {
        return "***".to_string();
    }
    // Tokens are opaque; cut on a char boundary in case one isn't ASCII.
    match token.char_indices().nth(8) {
        Some((idx, _)) => format!("{}...", &token[..idx]),
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::load_from(&dir.path().join("session.json")).unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = SessionStore::default();
        session.set_token("tok-abcdef0123456789");
        session.save_to(&path).unwrap();

        let loaded = SessionStore::load_from(&path).unwrap();
        assert_eq!(loaded.token(), Some("tok-abcdef0123456789"));
    }

    #[test]
    fn set_token_replaces_previous() {
        let mut session = SessionStore::default();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token(), Some("second"));
    }

    #[test]
    fn clear_removes_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = SessionStore::default();
        session.set_token("tok-abcdef0123456789");
        session.save_to(&path).unwrap();

        assert!(session.clear());
        assert!(!session.clear());
        session.save_to(&path).unwrap();

        let loaded = SessionStore::load_from(&path).unwrap();
        assert!(loaded.token().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_has_restricted_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = SessionStore::default();
        session.set_token("tok-abcdef0123456789");
        session.save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn mask_token_hides_short_tokens() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token("tok-abcdef0123456789"), "tok-abcd...");
    }

    #[test]
    fn mask_token_handles_non_ascii_tokens() {
        // Multibyte chars: byte 8 is not a char boundary here.
        assert_eq!(mask_token("€€€€€"), "***");
        assert_eq!(mask_token("token-émis-0123456789"), "token-ém...");
    }
}
