//! Profile store backed by a single JSON file.
//!
//! The file holds one object mapping user id to profile. It is read once at
//! startup and rewritten wholesale on `persist`, via a temp file and rename.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{Mutex, RwLock};

use crate::assessment::model::LearnerProfile;
use crate::error::StoreError;

use super::traits::ProfileStore;

/// JSON-file-backed profile store.
pub struct JsonFileStore {
    path: PathBuf,
    profiles: RwLock<HashMap<String, LearnerProfile>>,
    /// Serializes whole-file rewrites.
    write_lock: Mutex<()>,
}

/// `<path><suffix>`, e.g. `profiles.json.tmp`.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

impl JsonFileStore {
    /// Load profiles from `path`.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file
    /// also starts empty: the problem is logged and the malformed content is
    /// copied to `<path>.corrupt` before the next persist can overwrite it.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let profiles = match Self::read_profiles(&path).await {
            Ok(Some(profiles)) => {
                tracing::info!(path = %path.display(), count = profiles.len(), "Loaded user profiles");
                profiles
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "Profiles file not found, starting empty");
                HashMap::new()
            }
            Err(StoreError::Serialization(e)) => {
                let backup = sibling(&path, ".corrupt");
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    backup = %backup.display(),
                    "Profiles file is malformed, starting with an empty store"
                );
                if let Err(copy_err) = fs::copy(&path, &backup).await {
                    tracing::warn!(error = %copy_err, "Failed to back up malformed profiles file");
                }
                HashMap::new()
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read profiles file, starting with an empty store"
                );
                HashMap::new()
            }
        };

        Self {
            path,
            profiles: RwLock::new(profiles),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_profiles(
        path: &Path,
    ) -> Result<Option<HashMap<String, LearnerProfile>>, StoreError> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Some(HashMap::new()));
        }
        Ok(Some(serde_json::from_str(&content)?))
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn get(&self, user_id: &str) -> Result<LearnerProfile, StoreError> {
        self.profiles
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                user_id: user_id.to_string(),
            })
    }

    async fn get_or_create(&self, user_id: &str) -> Result<LearnerProfile, StoreError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.entry(user_id.to_string()).or_insert_with(|| {
            tracing::info!(user_id = user_id, "Created new learner profile");
            LearnerProfile::new_intake()
        });
        Ok(profile.clone())
    }

    async fn put(&self, user_id: &str, profile: LearnerProfile) -> Result<(), StoreError> {
        self.profiles
            .write()
            .await
            .insert(user_id.to_string(), profile);
        Ok(())
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        // Snapshot under the write lock so a later persist never loses to an
        // earlier one.
        let json = {
            let profiles = self.profiles.read().await;
            let sorted: BTreeMap<&String, &LearnerProfile> = profiles.iter().collect();
            serde_json::to_string_pretty(&sorted)?
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let tmp = sibling(&self.path, ".tmp");
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), "Persisted user profiles");
        Ok(())
    }

    async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::state::DialogueState;
    use tempfile::TempDir;

    fn profiles_path(dir: &TempDir) -> PathBuf {
        dir.path().join("user_profiles.json")
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::load(profiles_path(&dir)).await;
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn persist_then_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = profiles_path(&dir);

        let store = JsonFileStore::load(&path).await;
        let mut profile = store.get_or_create("alice").await.unwrap();
        profile.age = 27;
        profile.passion = "painting".into();
        profile.dialogue_state = Some(DialogueState::PersonalityQuestions {
            question_index: 2,
            responses: vec!["User: a".into(), "User: b".into()],
        });
        store.put("alice", profile.clone()).await.unwrap();
        store.get_or_create("bob").await.unwrap();
        store.persist().await.unwrap();

        let reloaded = JsonFileStore::load(&path).await;
        assert_eq!(reloaded.count().await, 2);
        assert_eq!(reloaded.get("alice").await.unwrap(), profile);
        assert!(!sibling(&path, ".tmp").exists());
    }

    #[tokio::test]
    async fn malformed_file_starts_empty_and_is_preserved() {
        let dir = TempDir::new().unwrap();
        let path = profiles_path(&dir);
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::load(&path).await;
        assert_eq!(store.count().await, 0);

        let backup = sibling(&path, ".corrupt");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn empty_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = profiles_path(&dir);
        std::fs::write(&path, "").unwrap();

        let store = JsonFileStore::load(&path).await;
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn persist_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("profiles.json");

        let store = JsonFileStore::load(&path).await;
        store.get_or_create("carol").await.unwrap();
        store.persist().await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn loads_legacy_file_format() {
        let dir = TempDir::new().unwrap();
        let path = profiles_path(&dir);
        std::fs::write(
            &path,
            r#"{
                "dana_profile": {
                    "age": 0,
                    "passion": "",
                    "chatbot_state": {"step": "initial", "responses": []},
                    "location": null,
                    "location_asked": false
                }
            }"#,
        )
        .unwrap();

        let store = JsonFileStore::load(&path).await;
        let profile = store.get("dana_profile").await.unwrap();
        assert_eq!(profile.dialogue_state, Some(DialogueState::Initial));
    }

    #[tokio::test]
    async fn get_or_create_twice_inserts_once() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::load(profiles_path(&dir)).await;
        let a = store.get_or_create("erin").await.unwrap();
        let b = store.get_or_create("erin").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(store.count().await, 1);
    }
}
