//! Session token storage
//!
//! The CLI-side stand-in for the browser session: a single stored access
//! token plus the profile fields returned at login time. The orchestrators
//! only ever read the current token; storing and clearing it happens here,
//! at the auth boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{PlannerError, Result};

/// Stored session information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user_id: String,
    pub email: Option<String>,
    pub stored_at: DateTime<Utc>,
}

/// File-backed session store
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    session: Option<StoredSession>,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let mut store = Self { path, session: None };
        store.load()?;
        Ok(store)
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access_token.clone())
    }

    pub fn session(&self) -> Option<&StoredSession> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn store(&mut self, session: StoredSession) -> Result<()> {
        self.session = Some(session);
        self.save()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.session = None;
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| PlannerError::io_from_error("Removing session file", e))?;
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| PlannerError::io_from_error("Reading session file", e))?;

        if content.trim().is_empty() {
            return Ok(());
        }

        self.session = serde_json::from_str(&content)
            .map_err(|e| PlannerError::internal(format!("Failed to parse session file: {}", e)))?;
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PlannerError::io_from_error("Creating storage directory", e))?;
        }

        let content = serde_json::to_string_pretty(&self.session)?;
        fs::write(&self.path, content)
            .map_err(|e| PlannerError::io_from_error("Writing session file", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session(token: &str) -> StoredSession {
        StoredSession {
            access_token: token.to_string(),
            user_id: "user-1".to_string(),
            email: Some("user@example.com".to_string()),
            stored_at: Utc::now(),
        }
    }

    #[test]
    fn stored_session_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::new(path.clone()).unwrap();
        assert!(!store.is_authenticated());
        store.store(session("token-abc")).unwrap();

        let reloaded = SessionStore::new(path).unwrap();
        assert_eq!(reloaded.access_token().as_deref(), Some("token-abc"));
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::new(path.clone()).unwrap();
        store.store(session("token-abc")).unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert!(SessionStore::new(path).unwrap().access_token().is_none());
    }
}
