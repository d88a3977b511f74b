//! In-memory profile store with no backing file.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::assessment::model::LearnerProfile;
use crate::error::StoreError;

use super::traits::ProfileStore;

/// Keeps profiles for the life of the process only. `persist` is a no-op.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, LearnerProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
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
        Ok(profiles
            .entry(user_id.to_string())
            .or_insert_with(LearnerProfile::new_intake)
            .clone())
    }

    async fn put(&self, user_id: &str, profile: LearnerProfile) -> Result<(), StoreError> {
        self.profiles
            .write()
            .await
            .insert(user_id.to_string(), profile);
        Ok(())
    }

    async fn persist(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}
