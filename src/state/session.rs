// Explicit auth/session context with file-backed persistence.
// Constructed once at startup and injected through AppState; there is no
// ambient global session.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::models::result_model::UserProfile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    token: Option<String>,
    user_info: Option<UserProfile>,
    saved_at: Option<DateTime<Utc>>,
}

pub struct SessionStore {
    path: PathBuf,
    data: RwLock<SessionData>,
}

impl SessionStore {
    /// Load the persisted session if the file exists, otherwise start empty.
    /// An unreadable session file is treated as empty rather than fatal.
    pub fn load(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            SessionData::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.data.read().unwrap().token.clone()
    }

    pub fn user_info(&self) -> Option<UserProfile> {
        self.data.read().unwrap().user_info.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.read().unwrap().token.is_some()
    }

    pub fn set_token(&self, token: String) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.token = Some(token);
        guard.saved_at = Some(Utc::now());
        self.persist(&guard)
    }

    pub fn set_user_info(&self, user_info: UserProfile) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.user_info = Some(user_info);
        guard.saved_at = Some(Utc::now());
        self.persist(&guard)
    }

    /// Drop token and profile and remove the persisted file.
    pub fn clear(&self) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        *guard = SessionData::default();
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session at {}", self.path.display()))?;
        }
        Ok(())
    }

    fn persist(&self, data: &SessionData) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write session to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path() -> PathBuf {
        std::env::temp_dir().join(format!("preplens-session-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_session_lifecycle() {
        let path = temp_session_path();

        let store = SessionStore::load(path.clone()).unwrap();
        assert!(!store.is_authenticated());

        store.set_token("tok-123".to_owned()).unwrap();
        store
            .set_user_info(UserProfile {
                sub: None,
                name: Some("Ada".to_owned()),
                email: Some("ada@example.com".to_owned()),
                picture: None,
            })
            .unwrap();

        // A fresh store sees what the first one persisted
        let reloaded = SessionStore::load(path.clone()).unwrap();
        assert_eq!(reloaded.token().as_deref(), Some("tok-123"));
        assert_eq!(
            reloaded.user_info().and_then(|u| u.email).as_deref(),
            Some("ada@example.com")
        );

        reloaded.clear().unwrap();
        assert!(!reloaded.is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_session_file_starts_empty() {
        let path = temp_session_path();
        fs::write(&path, "not json").unwrap();

        let store = SessionStore::load(path.clone()).unwrap();
        assert!(!store.is_authenticated());

        fs::remove_file(&path).ok();
    }
}
