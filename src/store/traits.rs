//! `ProfileStore` trait: the single async interface for learner profiles.

use async_trait::async_trait;

use crate::assessment::model::LearnerProfile;
use crate::error::StoreError;

/// Backend-agnostic storage for learner profiles keyed by user id.
///
/// The store owns the mapping. Callers work on owned copies and write them
/// back with `put`; `persist` makes the current mapping durable.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile. `StoreError::NotFound` if the user is unknown.
    async fn get(&self, user_id: &str) -> Result<LearnerProfile, StoreError>;

    /// Fetch a profile, inserting a fresh intake profile for unknown users.
    async fn get_or_create(&self, user_id: &str) -> Result<LearnerProfile, StoreError>;

    /// Replace the in-memory profile for a user.
    async fn put(&self, user_id: &str, profile: LearnerProfile) -> Result<(), StoreError>;

    /// Write the whole mapping to durable storage.
    async fn persist(&self) -> Result<(), StoreError>;

    /// Number of profiles held.
    async fn count(&self) -> usize;
}
