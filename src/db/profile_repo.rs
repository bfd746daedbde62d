use async_trait::async_trait;
use uuid::Uuid;

use super::StoreResult;
use crate::models::Profile;

/// Profiles are keyed by their owning user id; the store can hold at most
/// one profile per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_user(&self, user: Uuid) -> StoreResult<Option<Profile>>;

    async fn list(&self) -> StoreResult<Vec<Profile>>;

    /// Insert or replace the whole aggregate for `profile.user`.
    async fn upsert(&self, profile: Profile) -> StoreResult<()>;

    /// Returns whether a record was removed.
    async fn delete_by_user(&self, user: Uuid) -> StoreResult<bool>;
}
