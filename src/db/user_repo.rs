use async_trait::async_trait;
use uuid::Uuid;

use super::StoreResult;
use crate::models::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn insert(&self, user: User) -> StoreResult<()>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
